//! Formatting configuration loaded from environment variables.
//!
//! # Example
//!
//! ```ignore
//! use formkit_validate::ErrorFormatConfig;
//!
//! // VALIDATION_OPEN_SINGLE_ERROR="<li>" VALIDATION_QUOTE_LABELS=true
//! let config = ErrorFormatConfig::from_env().expect("invalid validation config");
//! ```

use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by [`ErrorFormatConfig::from_env`].
pub const ENV_PREFIX: &str = "VALIDATION_";

/// Error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable deserialization failed.
    #[error("Configuration error: {0}")]
    Env(#[from] envy::Error),
}

/// How single error messages are wrapped and labels are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorFormatConfig {
    /// Prefix put before every message; overrides the caller's marker.
    pub open_single_error: Option<String>,
    /// Suffix put after every message; overrides the caller's marker.
    pub close_single_error: Option<String>,
    /// Quote labels containing a space when substituting `:label`.
    pub quote_labels: bool,
}

impl ErrorFormatConfig {
    /// Create the default configuration: no markers, no quoting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `VALIDATION_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env()?)
    }

    /// Load from an explicit set of `VALIDATION_*` variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    pub fn open_single_error(mut self, open: impl Into<String>) -> Self {
        self.open_single_error = Some(open.into());
        self
    }

    pub fn close_single_error(mut self, close: impl Into<String>) -> Self {
        self.close_single_error = Some(close.into());
        self
    }

    pub fn quote_labels(mut self, enabled: bool) -> Self {
        self.quote_labels = enabled;
        self
    }

    /// Markers to wrap a message in, preferring configured ones.
    pub(crate) fn markers<'a>(&'a self, open: &'a str, close: &'a str) -> (&'a str, &'a str) {
        (
            self.open_single_error.as_deref().unwrap_or(open),
            self.close_single_error.as_deref().unwrap_or(close),
        )
    }
}

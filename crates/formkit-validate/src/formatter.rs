//! Message resolution for validation errors.
//!
//! ## Example
//!
//! ```rust,ignore
//! use formkit_validate::prelude::*;
//!
//! let formatter = ErrorFormatter::builder()
//!     .config(ErrorFormatConfig::new().quote_labels(true))
//!     .localizer(Catalog::english())
//!     .build();
//!
//! println!("{}", formatter.message(&error));
//! ```

use crate::config::ErrorFormatConfig;
use crate::error::ValidationError;
use crate::i18n::{Localizer, NAMESPACE};
use crate::tags::replace_tags;
use std::sync::Arc;

/// Turns [`ValidationError`]s into human-readable messages.
///
/// Messages are looked up in this order: an explicit message, the field
/// context's custom message for the rule, the localizer under
/// `validation.<rule>`, then the localizer under `validation.<rule base>`.
/// When nothing is found a default message naming the rule and label is
/// used.
#[derive(Default, Clone)]
pub struct ErrorFormatter {
    config: ErrorFormatConfig,
    localizer: Option<Arc<dyn Localizer>>,
}

impl ErrorFormatter {
    /// Create a formatter with default config and no localizer.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ErrorFormatterBuilder {
        ErrorFormatterBuilder::new()
    }

    pub fn config(&self) -> &ErrorFormatConfig {
        &self.config
    }

    pub fn localizer(&self) -> Option<&Arc<dyn Localizer>> {
        self.localizer.as_ref()
    }

    /// The error's message with no explicit message and no markers.
    pub fn message(&self, error: &ValidationError) -> String {
        self.format(error, None, "", "")
    }

    /// The error's message, wrapped in `open` and `close`.
    ///
    /// `message` replaces the looked-up message; tags in it are still
    /// substituted. Configured markers take precedence over `open` and
    /// `close`.
    pub fn format(
        &self,
        error: &ValidationError,
        message: Option<&str>,
        open: &str,
        close: &str,
    ) -> String {
        let (open, close) = self.config.markers(open, close);

        let message = match message {
            Some(message) => Some(message.to_string()),
            None => self.resolve(error),
        };

        match message.filter(|m| !m.is_empty()) {
            None => {
                tracing::debug!(
                    rule = error.rule(),
                    field = error.field().name(),
                    "no message found for rule, using default"
                );
                format!(
                    "{open}Validation rule {} failed for {}{close}",
                    error.rule(),
                    error.field().label().text()
                )
            }
            Some(message) if !message.contains(':') => format!("{open}{message}{close}"),
            Some(message) => format!(
                "{open}{}{close}",
                replace_tags(&message, error, self.config.quote_labels)
            ),
        }
    }

    /// Look up the message template for an error.
    ///
    /// A custom message registered on the field's context ends the lookup,
    /// even when it is empty.
    pub fn resolve(&self, error: &ValidationError) -> Option<String> {
        let custom = error.field().context().and_then(|ctx| ctx.message(error.rule()));
        if custom.is_some() {
            return custom;
        }

        let rule = error.rule();
        if let Some(message) = self.translate(&format!("{NAMESPACE}.{rule}")) {
            return Some(message);
        }

        let base = error.rule_base();
        if base == rule {
            return None;
        }
        tracing::debug!(rule, base, "no message for full rule name, trying rule base");
        self.translate(&format!("{NAMESPACE}.{base}"))
    }

    fn translate(&self, key: &str) -> Option<String> {
        self.localizer
            .as_ref()
            .and_then(|l| l.translate(key))
            .filter(|m| !m.is_empty())
    }
}

impl std::fmt::Debug for ErrorFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorFormatter")
            .field("config", &self.config)
            .field("has_localizer", &self.localizer.is_some())
            .finish()
    }
}

/// Builder for constructing an `ErrorFormatter`.
#[derive(Default)]
pub struct ErrorFormatterBuilder {
    config: ErrorFormatConfig,
    localizer: Option<Arc<dyn Localizer>>,
}

impl ErrorFormatterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Some(Arc::new(localizer));
        self
    }

    /// Set the localizer from an Arc.
    pub fn localizer_arc(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    pub fn build(self) -> ErrorFormatter {
        ErrorFormatter {
            config: self.config,
            localizer: self.localizer,
        }
    }
}

//! Validation failure records and the JSON error report.

use crate::field::Field;
use crate::formatter::ErrorFormatter;
use crate::value::Param;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Errors raised while building a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The rule callback mapping had no entries to take a rule name from.
    #[error("rule callback mapping is empty")]
    EmptyCallback,
}

/// A failed validation rule: the field, the value, the rule and its params.
///
/// This is plain data. Turning it into text is the job of an
/// [`ErrorFormatter`].
#[derive(Clone)]
pub struct ValidationError {
    field: Arc<dyn Field>,
    value: Value,
    rule: String,
    params: Vec<Param>,
}

impl ValidationError {
    /// Create an error for a rule known by name.
    pub fn new(
        field: Arc<dyn Field>,
        value: impl Into<Value>,
        rule: impl Into<String>,
        params: Vec<Param>,
    ) -> Self {
        Self {
            field,
            value: value.into(),
            rule: rule.into(),
            params,
        }
    }

    /// Create an error from a `rule name => callback` mapping.
    ///
    /// The first key names the rule. Any further entries are ignored.
    pub fn from_callback<I, K, C>(
        field: Arc<dyn Field>,
        value: impl Into<Value>,
        callback: I,
        params: Vec<Param>,
    ) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
    {
        let mut keys = callback.into_iter().map(|(key, _)| key.into());
        let rule = keys.next().ok_or(BuildError::EmptyCallback)?;

        let ignored: Vec<String> = keys.collect();
        if !ignored.is_empty() {
            tracing::warn!(
                rule = %rule,
                ignored = ?ignored,
                "rule callback mapping has more than one entry, using the first"
            );
        }

        Ok(Self::new(field, value, rule, params))
    }

    pub fn field(&self) -> &dyn Field {
        self.field.as_ref()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Rule name, possibly with a `:`-delimited argument suffix.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Rule name without its argument suffix.
    pub fn rule_base(&self) -> &str {
        self.rule.split(':').next().unwrap_or(&self.rule)
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Display adapter formatting through the given formatter.
    pub fn display_with<'a>(&'a self, formatter: &'a ErrorFormatter) -> FormattedError<'a> {
        FormattedError {
            error: self,
            formatter,
        }
    }
}

impl fmt::Debug for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationError")
            .field("field", &self.field.name())
            .field("value", &self.value)
            .field("rule", &self.rule)
            .field("params", &self.params)
            .finish()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ErrorFormatter::default().message(self))
    }
}

/// A [`ValidationError`] paired with the formatter that renders it.
pub struct FormattedError<'a> {
    error: &'a ValidationError,
    formatter: &'a ErrorFormatter,
}

impl fmt::Display for FormattedError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatter.message(self.error))
    }
}

/// Validation errors collected for later reporting, in the order added.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Append all errors of another collection.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Errors recorded for the field with the given machine name.
    pub fn get<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.errors.iter().filter(move |e| e.field().name() == field)
    }

    /// Convert to Result - Ok if no errors, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Formatted messages grouped by field name, fields in first-seen order.
    pub fn messages(&self, formatter: &ErrorFormatter) -> Vec<(String, Vec<String>)> {
        let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for error in &self.errors {
            let message = formatter.message(error);
            let name = error.field().name();
            let index = *positions.entry(name).or_insert_with(|| {
                grouped.push((name.to_string(), Vec::new()));
                grouped.len() - 1
            });
            grouped[index].1.push(message);
        }
        grouped
    }

    /// Build the JSON error body reported to API clients.
    pub fn to_api_error(&self, formatter: &ErrorFormatter) -> ApiValidationError {
        let fields = self
            .errors
            .iter()
            .map(|e| FieldErrorResponse {
                field: e.field().name().to_string(),
                code: e.rule().to_string(),
                message: formatter.message(e),
                params: if e.params().is_empty() {
                    None
                } else {
                    Some(e.params().iter().map(Param::render).collect())
                },
            })
            .collect();

        ApiValidationError {
            error: ErrorBody {
                error_type: "validation_error".to_string(),
                message: "Validation failed".to_string(),
                fields,
            },
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<T: IntoIterator<Item = ValidationError>>(&mut self, iter: T) {
        self.errors.extend(iter);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {} error(s)", self.len())
    }
}

/// API response format for validation errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiValidationError {
    pub error: ErrorBody,
}

/// Error body in API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub fields: Vec<FieldErrorResponse>,
}

/// Single field error in API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorResponse {
    pub field: String,
    /// Rule name, including any argument suffix.
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
}

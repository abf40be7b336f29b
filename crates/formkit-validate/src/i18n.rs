//! Localized message lookup.

use serde_json::Value;
use std::collections::HashMap;

/// Namespace holding validation messages in a catalog.
pub const NAMESPACE: &str = "validation";

/// Default English messages, keyed by rule name.
const ENGLISH: &[(&str, &str)] = &[
    ("required", "The field :label is required and must contain a value."),
    ("min_length", "The field :label has to contain at least :param:1 characters."),
    ("max_length", "The field :label may not contain more than :param:1 characters."),
    ("exact_length", "The field :label must contain exactly :param:1 characters."),
    ("match_value", "The field :label must contain the value :param:1."),
    ("match_pattern", "The field :label must match the pattern :param:1."),
    ("match_field", "The field :label must match the field :param:1."),
    ("valid_email", "The field :label must contain a valid email address."),
    ("valid_emails", "The field :label must contain a list of valid email addresses."),
    ("valid_url", "The field :label must contain a valid URL."),
    ("valid_ip", "The field :label must contain a valid IP address."),
    ("numeric_min", "The minimum numeric value of :label must be :param:1"),
    ("numeric_max", "The maximum numeric value of :label must be :param:1"),
    ("valid_string", "The valid string rule :rule(:param:1) failed for field :label"),
];

/// Trait for translating message keys.
pub trait Localizer: Send + Sync {
    /// Look up the message for a dotted key such as `validation.required`.
    fn translate(&self, key: &str) -> Option<String>;
}

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog root must be an object")]
    NotAnObject,

    #[error("catalog entry `{key}` must be a string or an object")]
    InvalidEntry { key: String },
}

/// In-memory message catalog keyed by dotted strings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the default English validation messages.
    pub fn english() -> Self {
        let mut catalog = Self::new();
        for (rule, message) in ENGLISH {
            catalog.insert(format!("{NAMESPACE}.{rule}"), *message);
        }
        catalog
    }

    /// Parse a catalog from nested JSON objects.
    ///
    /// `{"validation": {"required": "..."}}` yields the key
    /// `validation.required`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.merge_json_str(json)?;
        Ok(catalog)
    }

    /// Merge entries from nested JSON, overriding existing keys.
    pub fn merge_json_str(&mut self, json: &str) -> Result<(), CatalogError> {
        match serde_json::from_str(json)? {
            Value::Object(root) => {
                for (key, value) in root {
                    self.flatten(key, value)?;
                }
                Ok(())
            }
            _ => Err(CatalogError::NotAnObject),
        }
    }

    fn flatten(&mut self, key: String, value: Value) -> Result<(), CatalogError> {
        match value {
            Value::String(message) => {
                self.messages.insert(key, message);
                Ok(())
            }
            Value::Object(children) => {
                for (child, value) in children {
                    self.flatten(format!("{key}.{child}"), value)?;
                }
                Ok(())
            }
            _ => Err(CatalogError::InvalidEntry { key }),
        }
    }

    /// Set a message.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(key, message);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Localizer for Catalog {
    fn translate(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

//! Field accessor and validation context traits.
//!
//! Fields and the validation context that owns them are modeled elsewhere;
//! this crate only reads them. [`FormField`] and [`RuleMessages`] are minimal
//! implementations for callers that have nothing richer at hand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Human-readable label of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    /// A plain label.
    Text(String),
    /// A label with extra attributes; the text lives under `"label"`.
    Structured(Map<String, Value>),
}

impl Label {
    /// The label's display text.
    ///
    /// A structured label without a string `"label"` member yields `""`.
    pub fn text(&self) -> &str {
        match self {
            Label::Text(text) => text.as_str(),
            Label::Structured(map) => map.get("label").and_then(Value::as_str).unwrap_or(""),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Text(text)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Per-rule custom messages registered on a validation context.
pub trait CustomMessages: Send + Sync {
    /// Look up the custom message for a rule, keyed by its full name.
    fn message(&self, rule: &str) -> Option<String>;
}

/// Read access to the field that failed validation.
pub trait Field: Send + Sync {
    /// Machine name, used for `:field`.
    fn name(&self) -> &str;

    /// Display label, used for `:label` and the default message.
    fn label(&self) -> &Label;

    /// The validation context owning this field, if any.
    fn context(&self) -> Option<&dyn CustomMessages> {
        None
    }
}

/// Custom rule messages backed by a map.
#[derive(Debug, Clone, Default)]
pub struct RuleMessages {
    messages: HashMap<String, String>,
}

impl RuleMessages {
    /// Create an empty message set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for a rule.
    pub fn set(&mut self, rule: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(rule.into(), message.into());
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, rule: impl Into<String>, message: impl Into<String>) -> Self {
        self.set(rule, message);
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl CustomMessages for RuleMessages {
    fn message(&self, rule: &str) -> Option<String> {
        self.messages.get(rule).cloned()
    }
}

/// A plain field: name, label and an optional owning context.
#[derive(Clone)]
pub struct FormField {
    name: String,
    label: Label,
    context: Option<Arc<dyn CustomMessages>>,
}

impl FormField {
    /// Create a field with no owning context.
    pub fn new(name: impl Into<String>, label: impl Into<Label>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            context: None,
        }
    }

    /// Attach the validation context the field belongs to.
    pub fn with_context(mut self, context: impl CustomMessages + 'static) -> Self {
        self.context = Some(Arc::new(context));
        self
    }

    /// Attach a shared validation context.
    pub fn with_context_arc(mut self, context: Arc<dyn CustomMessages>) -> Self {
        self.context = Some(context);
        self
    }
}

impl Field for FormField {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self) -> &Label {
        &self.label
    }

    fn context(&self) -> Option<&dyn CustomMessages> {
        self.context.as_deref()
    }
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("has_context", &self.context.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_label_uses_label_member() {
        let label: Label = serde_json::from_value(json!({"label": "E-mail", "class": "wide"})).unwrap();
        assert_eq!(label.text(), "E-mail");

        let plain: Label = serde_json::from_value(json!("Name")).unwrap();
        assert_eq!(plain, Label::Text("Name".to_string()));
    }

    #[test]
    fn structured_label_without_text() {
        let label = Label::Structured(Map::new());
        assert_eq!(label.text(), "");
    }

    #[test]
    fn field_context_lookup() {
        let field = FormField::new("email", "E-mail")
            .with_context(RuleMessages::new().with("required", "Tell us your :label"));

        let ctx = field.context().unwrap();
        assert_eq!(ctx.message("required").as_deref(), Some("Tell us your :label"));
        assert!(ctx.message("valid_email").is_none());
    }

    #[test]
    fn field_without_context() {
        let field = FormField::new("email", "E-mail");
        assert!(field.context().is_none());
        assert_eq!(field.name(), "email");
        assert_eq!(field.label().text(), "E-mail");
    }
}

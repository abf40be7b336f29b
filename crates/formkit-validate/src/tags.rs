//! Tag substitution in message templates.
//!
//! Recognized tags, replaced in this order:
//!
//! - `:field` - the field's machine name
//! - `:label` - the field's label, quoted if it has a space and quoting is on
//! - `:value` - the failing value, sequences joined with `", "`
//! - `:rule` - the rule name
//! - `:param:1`, `:param:2`, ... - the rule's extra parameters
//!
//! Each tag is replaced throughout the whole message before the next one,
//! so text inserted for an earlier tag can be filled in by a later one.

use crate::error::ValidationError;
use crate::value::render_value;

/// Replace tags in `template` with the values of `error`.
pub fn replace_tags(template: &str, error: &ValidationError, quote_labels: bool) -> String {
    tag_table(error, quote_labels)
        .iter()
        .fold(template.to_string(), |message, (tag, replacement)| {
            message.replace(tag.as_str(), replacement)
        })
}

fn tag_table(error: &ValidationError, quote_labels: bool) -> Vec<(String, String)> {
    let field = error.field();
    let mut label = field.label().text().to_string();
    if quote_labels && label.contains(' ') {
        label = format!("\"{label}\"");
    }

    let mut tags = vec![
        (":field".to_string(), field.name().to_string()),
        (":label".to_string(), label),
        (":value".to_string(), render_value(error.value())),
        (":rule".to_string(), error.rule().to_string()),
    ];
    tags.extend(
        error
            .params()
            .iter()
            .enumerate()
            .map(|(i, param)| (format!(":param:{}", i + 1), param.render())),
    );
    tags
}

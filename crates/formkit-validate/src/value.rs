//! Failing values and rule parameters, and their textual rendering.

use serde_json::{Number, Value};
use std::fmt;

/// Text used for sequence or structured parameters.
pub const ARRAY_PLACEHOLDER: &str = "(array)";

/// An extra parameter passed to a validation rule besides the value.
///
/// Parameters are positional: the first one fills `:param:1`, the second
/// `:param:2` and so on.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Scalar, sequence or structured data.
    Value(Value),
    /// An object-like parameter.
    Object {
        /// Type name used when the object has no string conversion.
        type_name: String,
        /// The object's own string conversion, if it has one.
        text: Option<String>,
    },
}

impl Param {
    /// Create a parameter from anything convertible to a JSON value.
    pub fn value(value: impl Into<Value>) -> Self {
        Param::Value(value.into())
    }

    /// Create an object parameter rendered through its `Display` impl.
    pub fn display<T: fmt::Display + ?Sized>(object: &T) -> Self {
        Param::Object {
            type_name: short_type_name::<T>().to_string(),
            text: Some(object.to_string()),
        }
    }

    /// Create an object parameter that only exposes its type name.
    pub fn opaque<T: ?Sized>() -> Self {
        Param::Object {
            type_name: short_type_name::<T>().to_string(),
            text: None,
        }
    }

    /// Render the parameter for `:param:N` substitution.
    pub fn render(&self) -> String {
        match self {
            Param::Value(Value::Array(_)) | Param::Value(Value::Object(_)) => {
                ARRAY_PLACEHOLDER.to_string()
            }
            Param::Value(scalar) => render_scalar(scalar),
            Param::Object { type_name, text } => {
                text.clone().unwrap_or_else(|| type_name.clone())
            }
        }
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Param::Value(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Value(Value::String(value.to_string()))
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Value(Value::String(value))
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Value(Value::from(value))
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Value(Value::from(value))
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Value(Value::Bool(value))
    }
}

/// Render a failing value for `:value` substitution.
///
/// Sequences are joined with `", "`; maps join their member values.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Array(items) => join(items.iter()),
        Value::Object(map) => join(map.values()),
        scalar => render_scalar(scalar),
    }
}

fn join<'a>(items: impl Iterator<Item = &'a Value>) -> String {
    items
        .map(|item| match item {
            Value::Array(_) | Value::Object(_) => ARRAY_PLACEHOLDER.to_string(),
            scalar => render_scalar(scalar),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        other => other.to_string(),
    }
}

// Whole-valued floats render without a fraction, `1.0` as `1`.
fn render_number(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

// `std::any::type_name` is fully qualified; keep the last path segment.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Money(u32);

    impl fmt::Display for Money {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "${}", self.0)
        }
    }

    struct Secret;

    #[test]
    fn sequence_value_is_joined() {
        assert_eq!(render_value(&json!(["a", "b"])), "a, b");
        assert_eq!(render_value(&json!([1, 2.5, true])), "1, 2.5, true");
    }

    #[test]
    fn map_value_joins_members() {
        assert_eq!(render_value(&json!({"first": "x", "second": "y"})), "x, y");
    }

    #[test]
    fn nested_sequence_element_is_placeholder() {
        assert_eq!(render_value(&json!(["a", ["b"]])), "a, (array)");
    }

    #[test]
    fn scalar_values() {
        assert_eq!(render_value(&json!("plain")), "plain");
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&Value::Null), "");
    }

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(render_value(&json!(1.0)), "1");
        assert_eq!(render_value(&json!([2.0, 2.5, -3.0])), "2, 2.5, -3");
        assert_eq!(Param::value(json!(2.0)).render(), "2");
        assert_eq!(Param::from(0.25).render(), "0.25");
        assert_eq!(Param::from(1e300).render(), "1e300");
    }

    #[test]
    fn structured_params_render_as_placeholder() {
        assert_eq!(Param::value(json!([1, 2])).render(), "(array)");
        assert_eq!(Param::value(json!({"min": 1})).render(), "(array)");
    }

    #[test]
    fn object_params() {
        assert_eq!(Param::display(&Money(5)).render(), "$5");
        assert_eq!(Param::opaque::<Secret>().render(), "Secret");
    }

    #[test]
    fn scalar_params() {
        assert_eq!(Param::from(5_i64).render(), "5");
        assert_eq!(Param::from("abc").render(), "abc");
        assert_eq!(Param::from(false).render(), "false");
    }
}

//! Attribute values.
//!
//! First-class fields only ever hold [`AttributeValue::String`] (condition type) or
//! [`AttributeValue::Number`] (package measurements). Attributes added through the open
//! extension point may carry any JSON-serializable value, kept as [`AttributeValue::Other`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single stored attribute value.
///
/// Serialization is untagged: strings become JSON strings, numbers become JSON numbers
/// (a float such as `2.5` stays `2.5`), and `Other` values are emitted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum AttributeValue {
    String(String),
    Number(f64),
    Other(Value),
}

impl AttributeValue {
    /// Returns the string slice for string values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            Self::Other(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the numeric value for numbers, including integers kept as `Other`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Other(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Converts the value into its JSON representation.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Number(n) => Value::from(*n),
            Self::Other(v) => v.clone(),
        }
    }
}

impl From<Value> for AttributeValue {
    /// Maps JSON onto the narrowest variant. Integers stay in `Other` so they are
    /// written back without a fractional part.
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::String(s),
            Value::Number(n) if n.is_f64() => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Other(Value::Number(n)),
            },
            other => Self::Other(other),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Other(Value::Bool(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    Self::Other(Value::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_maps_onto_narrowest_variant() {
        assert_eq!(AttributeValue::from(json!("New")), AttributeValue::String("New".to_owned()));
        assert_eq!(AttributeValue::from(json!(2.5)), AttributeValue::Number(2.5));
        assert_eq!(AttributeValue::from(json!(3)), AttributeValue::Other(json!(3)));
        assert_eq!(AttributeValue::from(json!([1, 2])), AttributeValue::Other(json!([1, 2])));
    }

    #[test]
    fn numbers_keep_their_shape_on_the_wire() {
        let float = serde_json::to_string(&AttributeValue::from(2.5)).expect("serialize");
        assert_eq!(float, "2.5");
        let int = serde_json::to_string(&AttributeValue::from(7)).expect("serialize");
        assert_eq!(int, "7");
        let text = serde_json::to_string(&AttributeValue::from("Used")).expect("serialize");
        assert_eq!(text, "\"Used\"");
    }

    #[test]
    fn deserialize_goes_through_json_mapping() {
        let value: AttributeValue = serde_json::from_str("12").expect("deserialize");
        assert_eq!(value, AttributeValue::Other(json!(12)));
        assert_eq!(value.as_f64(), Some(12.0));

        let value: AttributeValue = serde_json::from_str("{\"a\":true}").expect("deserialize");
        assert_eq!(value.to_json(), json!({ "a": true }));
    }

    #[test]
    fn accessors_respect_variant() {
        let text = AttributeValue::from("Refurbished");
        assert_eq!(text.as_str(), Some("Refurbished"));
        assert_eq!(text.as_f64(), None);
        assert!(text.is_string());

        let number = AttributeValue::from(0.75_f64);
        assert_eq!(number.as_f64(), Some(0.75));
        assert_eq!(number.as_str(), None);
        assert!(number.is_number());

        assert_eq!(AttributeValue::from(true).as_f64(), None);
    }
}

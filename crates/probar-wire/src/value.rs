//! Capability values.
//!
//! A capability value is any JSON value except `null`. The translator needs
//! to tell lists, objects and scalars apart when merging vendor option
//! fragments, so the shape is an explicit enum rather than a raw
//! `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

use crate::result::{WireError, WireResult};

/// Object form of a capability value
pub type CapabilityMap = BTreeMap<String, CapabilityValue>;

/// Any legal capability value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapabilityValue {
    /// String value
    String(String),
    /// Boolean value
    Bool(bool),
    /// Integer or floating point number
    Number(Number),
    /// Ordered list
    List(Vec<CapabilityValue>),
    /// Nested key/value object
    Object(CapabilityMap),
}

impl CapabilityValue {
    /// Build an object value from key/value pairs
    #[must_use]
    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a float value. Returns `None` for NaN and infinities, which JSON
    /// cannot carry.
    #[must_use]
    pub fn float(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::Number)
    }

    /// Name of the variant, for diagnostics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }

    /// Whether this is a string, bool or number
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::String(_) | Self::Bool(_) | Self::Number(_))
    }

    /// Borrow as a string slice
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a bool
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow as a number
    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow as a list
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as an object
    #[must_use]
    pub const fn as_object(&self) -> Option<&CapabilityMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow as an object
    pub fn as_object_mut(&mut self) -> Option<&mut CapabilityMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Convert into a plain JSON value
    #[must_use]
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Self::String(s) => serde_json::Value::String(s),
            Self::Bool(b) => serde_json::Value::Bool(b),
            Self::Number(n) => serde_json::Value::Number(n),
            Self::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Self::into_json).collect())
            }
            Self::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into_json())).collect(),
            ),
        }
    }
}

impl fmt::Display for CapabilityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl TryFrom<serde_json::Value> for CapabilityValue {
    type Error = WireError;

    fn try_from(value: serde_json::Value) -> WireResult<Self> {
        match value {
            serde_json::Value::Null => Err(WireError::unsupported_value(
                "null is not a capability value",
            )),
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => Ok(Self::Number(n)),
            serde_json::Value::String(s) => Ok(Self::String(s)),
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<WireResult<Vec<_>>>()
                .map(Self::List),
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| Self::try_from(v).map(|v| (k, v)))
                .collect::<WireResult<CapabilityMap>>()
                .map(Self::Object),
        }
    }
}

impl From<CapabilityValue> for serde_json::Value {
    fn from(value: CapabilityValue) -> Self {
        value.into_json()
    }
}

impl From<&str> for CapabilityValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for CapabilityValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for CapabilityValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CapabilityValue {
                fn from(value: $ty) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64, usize);

impl From<Number> for CapabilityValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<CapabilityValue>> From<Vec<T>> for CapabilityValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<CapabilityMap> for CapabilityValue {
    fn from(map: CapabilityMap) -> Self {
        Self::Object(map)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_from_json_nested() {
            let value = CapabilityValue::try_from(json!({
                "args": ["--headless", "--no-sandbox"],
                "prefs": {"download.prompt": false},
                "port": 9515
            }))
            .unwrap();

            let map = value.as_object().unwrap();
            assert_eq!(map["args"].as_list().unwrap().len(), 2);
            assert_eq!(
                map["prefs"].as_object().unwrap()["download.prompt"].as_bool(),
                Some(false)
            );
            assert_eq!(map["port"].as_number().unwrap().as_u64(), Some(9515));
        }

        #[test]
        fn test_null_rejected() {
            let err = CapabilityValue::try_from(json!(null)).unwrap_err();
            assert!(matches!(err, WireError::UnsupportedValue { .. }));
        }

        #[test]
        fn test_nested_null_rejected() {
            let result = CapabilityValue::try_from(json!({"args": ["ok", null]}));
            assert!(result.is_err());
        }

        #[test]
        fn test_into_json_preserves_shape() {
            let source = json!({"a": [1, 2.5, "x", true], "b": {"c": "d"}});
            let value = CapabilityValue::try_from(source.clone()).unwrap();
            assert_eq!(value.into_json(), source);
        }

        #[test]
        fn test_from_primitives() {
            assert_eq!(CapabilityValue::from("x").as_str(), Some("x"));
            assert_eq!(CapabilityValue::from(true).as_bool(), Some(true));
            assert_eq!(
                CapabilityValue::from(333_i64).as_number().unwrap().as_i64(),
                Some(333)
            );
            assert_eq!(CapabilityValue::from(vec!["a", "b"]).kind(), "list");
        }

        #[test]
        fn test_float_rejects_nan() {
            assert!(CapabilityValue::float(f64::NAN).is_none());
            assert!(CapabilityValue::float(1.5).is_some());
        }

        #[test]
        fn test_object_builder() {
            let value = CapabilityValue::object([("profile", "abc")]);
            assert_eq!(value.as_object().unwrap()["profile"].as_str(), Some("abc"));
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_deserialize_untagged() {
            let value: CapabilityValue =
                serde_json::from_str(r#"{"args":["-headless"],"log":{"level":"trace"}}"#)
                    .unwrap();
            assert_eq!(value.kind(), "object");
        }

        #[test]
        fn test_deserialize_null_fails() {
            assert!(serde_json::from_str::<CapabilityValue>("null").is_err());
        }

        #[test]
        fn test_display_is_json() {
            let value = CapabilityValue::from(vec!["a"]);
            assert_eq!(value.to_string(), r#"["a"]"#);
        }

        #[test]
        fn test_integer_fidelity() {
            let value: CapabilityValue = serde_json::from_str("333").unwrap();
            assert_eq!(serde_json::to_string(&value).unwrap(), "333");
        }
    }

    mod accessor_tests {
        use super::*;

        #[test]
        fn test_is_scalar() {
            assert!(CapabilityValue::from("x").is_scalar());
            assert!(CapabilityValue::from(false).is_scalar());
            assert!(CapabilityValue::from(1_u32).is_scalar());
            assert!(!CapabilityValue::from(vec![1_u32]).is_scalar());
            assert!(!CapabilityValue::object([("a", 1_u32)]).is_scalar());
        }

        #[test]
        fn test_wrong_accessor_returns_none() {
            let value = CapabilityValue::from("x");
            assert!(value.as_bool().is_none());
            assert!(value.as_list().is_none());
            assert!(value.as_object().is_none());
            assert!(value.as_number().is_none());
        }

        #[test]
        fn test_as_object_mut() {
            let mut value = CapabilityValue::object([("a", 1_u32)]);
            value
                .as_object_mut()
                .unwrap()
                .insert("b".to_string(), CapabilityValue::from(2_u32));
            assert_eq!(value.as_object().unwrap().len(), 2);
        }
    }
}

//! Typed views over stored values
//!
//! `FromValue` backs the typed lookups on an environment: a stored `Value`
//! either converts cleanly to the requested Rust type or the caller gets a
//! type mismatch naming both sides.

use crate::error::{CoreError, Result};
use crate::types::Value;
use std::collections::HashMap;

/// A Rust type that can be read out of a `Value`
pub trait FromValue: Sized {
    /// Human-readable name of the requested type
    const EXPECTED: &'static str;

    /// View the value as `Self`, or `None` if the shapes don't match
    fn from_value(value: &Value) -> Option<Self>;

    /// Like `from_value`, but reports the mismatch as an error
    fn try_from_value(value: &Value) -> Result<Self> {
        Self::from_value(value).ok_or_else(|| CoreError::TypeMismatch {
            expected: Self::EXPECTED,
            found: value.type_name(),
        })
    }
}

impl FromValue for Value {
    const EXPECTED: &'static str = "value";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_number()
    }
}

impl FromValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_value(value: &Value) -> Option<Self> {
        let n = value.as_number()?;
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            Some(n as i64)
        } else {
            None
        }
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().map(<[Value]>::to_vec)
    }
}

impl FromValue for HashMap<String, Value> {
    const EXPECTED: &'static str = "object";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_view() {
        assert_eq!(i64::from_value(&Value::Number(3.0)), Some(3));
        assert_eq!(i64::from_value(&Value::Number(-7.0)), Some(-7));
        assert_eq!(i64::from_value(&Value::Number(2.5)), None);
        assert_eq!(i64::from_value(&Value::Number(f64::NAN)), None);
        assert_eq!(i64::from_value(&Value::Number(1e300)), None);
    }

    #[test]
    fn test_string_view() {
        assert_eq!(
            String::from_value(&Value::from("abc")),
            Some("abc".to_string())
        );
        assert_eq!(String::from_value(&Value::Number(1.0)), None);
    }

    #[test]
    fn test_try_from_value_mismatch() {
        let err = bool::try_from_value(&Value::from("yes")).unwrap_err();
        match err {
            CoreError::TypeMismatch { expected, found } => {
                assert_eq!(expected, "bool");
                assert_eq!(found, "string");
            }
        }
    }

    #[test]
    fn test_value_view_accepts_anything() {
        assert_eq!(Value::from_value(&Value::Null), Some(Value::Null));
    }
}

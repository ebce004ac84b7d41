//! Unit tests for bindenv-core value types

use bindenv_core::{CoreError, FromValue, Value};
use std::collections::HashMap;

// =============================================================================
// Value Tests
// =============================================================================

#[test]
fn test_type_names() {
    let cases = vec![
        (Value::Null, "null"),
        (Value::Bool(true), "bool"),
        (Value::Number(1.0), "number"),
        (Value::String(String::new()), "string"),
        (Value::Array(Vec::new()), "array"),
        (Value::Object(HashMap::new()), "object"),
    ];

    for (value, name) in cases {
        assert_eq!(value.type_name(), name);
    }
}

#[test]
fn test_deserialize_untagged_json() {
    let value: Value = serde_json::from_str(r#"{"a": [1, "two", null, false]}"#).unwrap();
    let items = value.as_object().unwrap().get("a").unwrap().as_array().unwrap();

    assert_eq!(items[0], Value::Number(1.0));
    assert_eq!(items[1], Value::String("two".to_string()));
    assert!(items[2].is_null());
    assert_eq!(items[3], Value::Bool(false));
}

// =============================================================================
// FromValue Tests
// =============================================================================

#[test]
fn test_typed_views() {
    assert_eq!(f64::from_value(&Value::from(9)), Some(9.0));
    assert_eq!(i64::from_value(&Value::from(9)), Some(9));
    assert_eq!(bool::from_value(&Value::from(true)), Some(true));
    assert_eq!(
        Vec::<Value>::from_value(&Value::Array(vec![Value::Null])),
        Some(vec![Value::Null])
    );
    assert_eq!(
        HashMap::<String, Value>::from_value(&Value::Object(HashMap::new())),
        Some(HashMap::new())
    );
}

#[test]
fn test_try_from_value_reports_both_types() {
    let err = String::try_from_value(&Value::Number(3.0)).unwrap_err();
    assert_eq!(
        err,
        CoreError::TypeMismatch {
            expected: "string",
            found: "number",
        }
    );
    assert_eq!(err.to_string(), "Type mismatch: expected string, found number");
}

//! Environment Variables Loader
//!
//! Seeds variables from process environment variables carrying a prefix,
//! e.g. `BINDENV_VAR_MAX_RETRIES=3` binds `max_retries` to `3`.

use bindenv_core::Value;
use std::collections::HashMap;

/// Load every `<prefix><NAME>` process variable as a binding named `name`
pub(crate) fn load_prefixed_vars(prefix: &str) -> HashMap<String, Value> {
    collect_prefixed(std::env::vars(), prefix)
}

/// Keep the pairs whose key carries `prefix`, keyed by the lowercased rest.
///
/// Keys differing only in case map to the same name; the one seen last wins
/// and a warning is logged.
pub(crate) fn collect_prefixed<I>(vars: I, prefix: &str) -> HashMap<String, Value>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut bindings = HashMap::new();

    for (key, value) in vars {
        let Some(name) = key.strip_prefix(prefix) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }

        let name = name.to_lowercase();
        tracing::debug!("Loaded variable '{}' from {}", name, key);
        if bindings.insert(name.clone(), parse_env_value(&value)).is_some() {
            tracing::warn!(
                "Variable '{}' set by more than one {}* key, using {}",
                name,
                prefix,
                key
            );
        }
    }

    bindings
}

/// Parse environment variable value to appropriate type
pub(crate) fn parse_env_value(value: &str) -> Value {
    // Try to parse as number; "nan" and "inf" stay strings
    if let Ok(num) = value.parse::<f64>() {
        if num.is_finite() {
            return Value::Number(num);
        }
    }

    // Try to parse as boolean
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" => return Value::Bool(true),
        "false" | "no" | "off" => return Value::Bool(false),
        _ => {}
    }

    // Try to parse as JSON (for objects/arrays)
    if let Ok(json_value) = serde_json::from_str(value) {
        return json_value;
    }

    // Default to string
    Value::String(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_parse_env_value() {
        assert_eq!(parse_env_value("42"), Value::Number(42.0));
        assert_eq!(parse_env_value("1.5"), Value::Number(1.5));
        assert_eq!(parse_env_value("Yes"), Value::Bool(true));
        assert_eq!(parse_env_value("off"), Value::Bool(false));
        assert_eq!(
            parse_env_value("[1, 2]"),
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)])
        );
        assert_eq!(parse_env_value("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_parse_env_value_non_finite_words_stay_strings() {
        assert_eq!(parse_env_value("Nan"), Value::String("Nan".into()));
        assert_eq!(parse_env_value("inf"), Value::String("inf".into()));
        assert_eq!(parse_env_value("infinity"), Value::String("infinity".into()));
        assert_eq!(parse_env_value("-1e3"), Value::Number(-1000.0));
    }

    #[test]
    fn test_collect_prefixed() {
        let vars = vec![
            pair("BINDENV_VAR_RATE", "0.25"),
            pair("BINDENV_VAR_REGION", "eu"),
            pair("BINDENV_VAR_", "ignored"),
            pair("PATH", "/usr/bin"),
        ];

        let bindings = collect_prefixed(vars, "BINDENV_VAR_");
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings.get("rate"), Some(&Value::Number(0.25)));
        assert_eq!(bindings.get("region"), Some(&Value::String("eu".to_string())));
    }

    #[test]
    fn test_collect_prefixed_case_collision_last_wins() {
        let vars = vec![pair("BINDENV_VAR_X", "1"), pair("BINDENV_VAR_x", "2")];

        let bindings = collect_prefixed(vars, "BINDENV_VAR_");
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.get("x"), Some(&Value::Number(2.0)));
    }
}

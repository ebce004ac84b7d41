//! Configuration types for seeding an Environment

use crate::error::{Result, RuntimeError};
use bindenv_core::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default prefix for process variables picked up by `load_env`
pub const DEFAULT_ENV_PREFIX: &str = "BINDENV_VAR_";

/// Environment configuration
///
/// ```yaml
/// label: pricing
/// load_env: true
/// variables:
///   base_price: 100
///   region: eu
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Label used in log output
    pub label: Option<String>,

    /// Variables bound before anything else is registered
    pub variables: HashMap<String, Value>,

    /// Also seed variables from prefixed process environment variables
    pub load_env: bool,

    /// Prefix selecting process environment variables
    pub env_prefix: String,
}

impl EnvironmentConfig {
    /// Create a new, empty configuration
    pub fn new() -> Self {
        Self {
            label: None,
            variables: HashMap::new(),
            load_env: false,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a seed variable, replacing any earlier one of the same name
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Enable loading from process environment variables
    pub fn load_env(mut self, enable: bool) -> Self {
        self.load_env = enable;
        self
    }

    /// Set the process environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Parse YAML configuration
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| RuntimeError::Config(format!("invalid YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse JSON configuration
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| RuntimeError::Config(format!("invalid JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a `.yaml`, `.yml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading environment configuration from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(RuntimeError::Config(format!(
                "unsupported configuration file: {}",
                path.display()
            ))),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.load_env && self.env_prefix.is_empty() {
            return Err(RuntimeError::Config(
                "env_prefix must not be empty when load_env is set".to_string(),
            ));
        }
        if let Some(name) = self.variables.keys().find(|name| name.is_empty()) {
            return Err(RuntimeError::Config(format!(
                "variable names must not be empty (got {:?})",
                name
            )));
        }
        Ok(())
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = EnvironmentConfig::new()
            .with_label("pricing")
            .with_variable("rate", 0.2)
            .load_env(true);

        assert_eq!(config.label.as_deref(), Some("pricing"));
        assert_eq!(config.variables.get("rate"), Some(&Value::Number(0.2)));
        assert!(config.load_env);
        assert_eq!(config.env_prefix, DEFAULT_ENV_PREFIX);
    }

    #[test]
    fn test_from_yaml_defaults() {
        let config = EnvironmentConfig::from_yaml_str("variables:\n  num1: 1\n  name: x\n").unwrap();

        assert_eq!(config.label, None);
        assert!(!config.load_env);
        assert_eq!(config.env_prefix, DEFAULT_ENV_PREFIX);
        assert_eq!(config.variables.get("num1"), Some(&Value::Number(1.0)));
        assert_eq!(
            config.variables.get("name"),
            Some(&Value::String("x".to_string()))
        );
    }

    #[test]
    fn test_from_json() {
        let config =
            EnvironmentConfig::from_json_str(r#"{"label": "j", "variables": {"flag": true}}"#)
                .unwrap();

        assert_eq!(config.label.as_deref(), Some("j"));
        assert_eq!(config.variables.get("flag"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_rejects_empty_prefix() {
        let result = EnvironmentConfig::from_yaml_str("load_env: true\nenv_prefix: \"\"\n");
        assert!(matches!(result, Err(RuntimeError::Config(_))));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let result = EnvironmentConfig::from_yaml_str("variables: [unclosed");
        assert!(matches!(result, Err(RuntimeError::Config(_))));
    }
}

//! Builder pattern for Environment

use crate::config::EnvironmentConfig;
use crate::environment::{Environment, Scope};
use crate::error::{Result, RuntimeError};
use bindenv_core::Value;

/// Builder for Environment
///
/// Registrations are applied as they are made; the first failure is kept
/// and returned from [`build`](Self::build), later calls become no-ops.
///
/// # Example
///
/// ```rust
/// use bindenv_runtime::EnvironmentBuilder;
///
/// let builder = EnvironmentBuilder::new().label("demo").variable("price", 20);
/// let scope = builder.scope();
///
/// let mut env = builder
///     .function("with_tax", move || Ok(Some((scope.number("price")? * 1.5).into())))
///     .build()?;
///
/// assert_eq!(env.invoke()?, Some(30.into()));
/// # Ok::<(), bindenv_runtime::RuntimeError>(())
/// ```
pub struct EnvironmentBuilder {
    env: Environment,
    error: Option<RuntimeError>,
}

impl EnvironmentBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
            error: None,
        }
    }

    /// Start from a configuration instead of an empty environment
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        match Environment::from_config(config) {
            Ok(env) => Self { env, error: None },
            Err(e) => Self {
                env: Environment::new(),
                error: Some(e),
            },
        }
    }

    /// Handle onto the variables of the environment being built
    pub fn scope(&self) -> Scope {
        self.env.scope()
    }

    /// Set the label used in log output
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.env.set_label(label);
        self
    }

    /// Add a variable
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if self.error.is_none() {
            self.error = self.env.register_variable(name, value).err();
        }
        self
    }

    /// Add several variables at once (all or nothing)
    pub fn variables<I, K, V>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        if self.error.is_none() {
            self.error = self.env.register_variables(variables).err();
        }
        self
    }

    /// Add a function
    pub fn function<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: FnMut() -> Result<Option<Value>> + 'static,
    {
        if self.error.is_none() {
            self.error = self.env.register_function(name, f).err();
        }
        self
    }

    /// Add a nested environment
    pub fn block(mut self, name: impl Into<String>, block: Environment) -> Self {
        if self.error.is_none() {
            self.error = self.env.register_block(name, block).err();
        }
        self
    }

    /// Finish, returning the first registration error if there was one
    pub fn build(self) -> Result<Environment> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.env),
        }
    }
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Namespace;

    #[test]
    fn test_builder_defers_first_error() {
        let result = EnvironmentBuilder::new()
            .variable("a", 1)
            .variable("a", 2)
            .function("a", || Ok(None))
            .function("a", || Ok(None))
            .build();

        match result {
            Err(RuntimeError::DuplicateName { name, namespace }) => {
                assert_eq!(name, "a");
                assert_eq!(namespace, Namespace::Variable);
            }
            other => panic!("Expected DuplicateName, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_label_keeps_bindings() {
        let env = EnvironmentBuilder::new()
            .variable("x", 1)
            .label("named")
            .build()
            .unwrap();

        assert_eq!(env.label(), Some("named"));
        assert_eq!(env.lookup_as::<i64>("x").unwrap(), 1);
    }

    #[test]
    fn test_builder_from_config() {
        let config = EnvironmentConfig::new()
            .with_label("cfg")
            .with_variable("seed", 5);

        let builder = EnvironmentBuilder::from_config(&config);
        let scope = builder.scope();
        let mut env = builder
            .function("next", move || Ok(Some((scope.number("seed")? + 1.0).into())))
            .build()
            .unwrap();

        assert_eq!(env.label(), Some("cfg"));
        assert_eq!(env.invoke().unwrap(), Some(Value::Number(6.0)));
    }
}

//! Binding environment implementation
//!
//! Holds the variable namespace, the registered computations and the order
//! they run in.

use super::computation::Computation;
use super::env_vars;
use super::scope::Scope;
use crate::config::EnvironmentConfig;
use crate::error::{Namespace, Result, RuntimeError};
use bindenv_core::{FromValue, Value};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, info, warn};

/// A computation together with the name it publishes under
struct Registration {
    name: String,
    computation: Computation,
}

/// Named values plus named deferred computations.
///
/// Computations run in registration order when the environment is invoked;
/// each one that produces a value has it published into the variables under
/// its own name, where later computations can read it through the
/// environment's [`Scope`].
///
/// # Example
///
/// ```rust
/// use bindenv_runtime::Environment;
///
/// let mut env = Environment::new();
/// env.register_variable("num1", 1)?;
/// env.register_variable("num2", 2)?;
///
/// let scope = env.scope();
/// env.register_function("add", move || {
///     Ok(Some((scope.number("num1")? + scope.number("num2")?).into()))
/// })?;
///
/// assert_eq!(env.invoke()?, Some(3.into()));
/// assert_eq!(env.lookup_as::<i64>("add")?, 3);
/// # Ok::<(), bindenv_runtime::RuntimeError>(())
/// ```
pub struct Environment {
    label: Option<String>,

    scope: Scope,

    /// Kept in registration order; this is the invocation order
    computations: Vec<Registration>,

    /// Names in `computations`, for duplicate checks
    computation_names: HashSet<String>,
}

impl Environment {
    /// Create an empty environment
    pub fn new() -> Self {
        Self {
            label: None,
            scope: Scope::new(),
            computations: Vec::new(),
            computation_names: HashSet::new(),
        }
    }

    /// Create an empty environment with a label used in log output
    pub fn with_label(label: impl Into<String>) -> Self {
        let mut env = Self::new();
        env.set_label(label);
        env
    }

    /// Create an environment pre-populated with variables and at most one
    /// initial computation.
    ///
    /// The variables go through the same atomic check as
    /// [`register_variables`](Self::register_variables).
    pub fn seeded<I, K, V>(variables: I, initial: Option<(String, Computation)>) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut env = Self::new();
        env.register_variables(variables)?;
        if let Some((name, computation)) = initial {
            env.register_computation(name, computation)?;
        }
        Ok(env)
    }

    /// Build an environment from configuration.
    ///
    /// Configured variables take precedence over ones loaded from process
    /// environment variables.
    pub fn from_config(config: &EnvironmentConfig) -> Result<Self> {
        let mut seed = if config.load_env {
            env_vars::load_prefixed_vars(&config.env_prefix)
        } else {
            HashMap::new()
        };
        for (name, value) in &config.variables {
            seed.insert(name.clone(), value.clone());
        }

        let mut env = match &config.label {
            Some(label) => Self::with_label(label.clone()),
            None => Self::new(),
        };
        env.register_variables(seed)?;

        info!(
            "Seeded {} with {} variables from configuration",
            env.display_label(),
            env.variable_count()
        );
        Ok(env)
    }

    // ========== Registration ==========

    /// Bind a new variable; fails if `name` is already bound
    pub fn register_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let name = name.into();
        self.scope.insert_new(name.clone(), value.into())?;
        debug!("Registered variable '{}' in {}", name, self.display_label());
        Ok(())
    }

    /// Bind several variables at once.
    ///
    /// All or nothing: if any name is already bound, or appears twice in
    /// `variables`, no binding is made.
    pub fn register_variables<I, K, V>(&mut self, variables: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let pairs: Vec<(String, Value)> = variables
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        let count = pairs.len();

        self.scope.insert_all_new(pairs)?;
        debug!("Registered {} variables in {}", count, self.display_label());
        Ok(())
    }

    /// Register a closure to run on [`invoke`](Self::invoke).
    ///
    /// The closure is stored, not called. Returning `Ok(Some(value))`
    /// publishes `value` under `name`; `Ok(None)` publishes nothing.
    pub fn register_function<F>(&mut self, name: impl Into<String>, f: F) -> Result<()>
    where
        F: FnMut() -> Result<Option<Value>> + 'static,
    {
        self.register_computation(name, Computation::native(f))
    }

    /// Register a nested environment as a named sub-procedure.
    ///
    /// When the parent is invoked the block runs its own pass at this
    /// position and its final result is published under `name` here.
    pub fn register_block(&mut self, name: impl Into<String>, block: Environment) -> Result<()> {
        self.register_computation(name, Computation::block(block))
    }

    /// Register any computation; functions and blocks share one namespace
    pub fn register_computation(&mut self, name: impl Into<String>, computation: Computation) -> Result<()> {
        let name = name.into();
        if !self.computation_names.insert(name.clone()) {
            return Err(RuntimeError::duplicate(name, Namespace::Computation));
        }

        debug!(
            "Registered {} '{}' at position {} in {}",
            computation.kind(),
            name,
            self.computations.len(),
            self.display_label()
        );
        self.computations.push(Registration { name, computation });
        Ok(())
    }

    // ========== Invocation ==========

    /// Run every computation in registration order.
    ///
    /// Each produced value is published under the computation's name before
    /// the next one runs. Returns the last value published during this pass,
    /// or `None` if nothing was published.
    ///
    /// An error from a computation ends the pass and is returned as is:
    /// values published before it stay bound and later computations don't run.
    pub fn invoke(&mut self) -> Result<Option<Value>> {
        let label = self.display_label();
        info!("Invoking {} ({} computations)", label, self.computations.len());

        let mut last = None;

        for registration in &mut self.computations {
            let produced = match registration.computation.run() {
                Ok(produced) => produced,
                Err(e) => {
                    warn!(
                        "Computation '{}' failed in {}, aborting pass: {}",
                        registration.name, label, e
                    );
                    return Err(e);
                }
            };

            match produced {
                Some(value) => {
                    debug!("Published '{}' = {}", registration.name, value);
                    self.scope.bind(registration.name.clone(), value.clone());
                    last = Some(value);
                }
                None => {
                    debug!("'{}' produced no value", registration.name);
                }
            }
        }

        info!("Finished invoking {}", label);
        Ok(last)
    }

    // ========== Lookup and binding ==========

    /// Current value bound to `name`
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.scope.get(name)
    }

    /// Current value bound to `name`, viewed as `T`
    pub fn lookup_as<T: FromValue>(&self, name: &str) -> Result<T> {
        self.scope.get_as(name)
    }

    /// Bind `name` unconditionally, returning the value it replaced.
    ///
    /// Unlike [`register_variable`](Self::register_variable) this never
    /// fails on an existing name.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.scope.bind(name, value)
    }

    /// Names of registered functions and blocks, in the order they run.
    ///
    /// The iterator is cloneable, so the sequence can be walked again.
    pub fn invocation_order(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.computations.iter().map(|r| r.name.as_str())
    }

    // ========== Utility Methods ==========

    /// Handle onto this environment's variables, for closures to capture
    pub fn scope(&self) -> Scope {
        self.scope.clone()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn contains_variable(&self, name: &str) -> bool {
        self.scope.contains(name)
    }

    pub fn contains_computation(&self, name: &str) -> bool {
        self.computation_names.contains(name)
    }

    pub fn variable_count(&self) -> usize {
        self.scope.len()
    }

    pub fn computation_count(&self) -> usize {
        self.computations.len()
    }

    /// Copy of every variable binding
    pub fn variables(&self) -> HashMap<String, Value> {
        self.scope.snapshot()
    }

    fn display_label(&self) -> String {
        match &self.label {
            Some(label) => format!("environment '{}'", label),
            None => "environment".to_string(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("label", &self.label)
            .field("variables", &self.scope.names())
            .field("invocation_order", &self.invocation_order().collect::<Vec<_>>())
            .finish()
    }
}

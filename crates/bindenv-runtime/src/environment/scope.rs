//! Shared handle onto an environment's variables

use crate::error::{Namespace, Result, RuntimeError};
use bindenv_core::{CoreError, FromValue, Value};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Variable namespace of an environment.
///
/// Cloning a `Scope` yields another handle onto the same bindings, so a
/// closure registered as a function can capture one and read values that
/// were bound, or published by earlier functions, by the time it runs.
/// Borrows are released before every method returns.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    vars: Rc<RefCell<HashMap<String, Value>>>,
}

impl Scope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value bound to `name`
    pub fn get(&self, name: &str) -> Result<Value> {
        self.vars
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::NotFound(name.to_string()))
    }

    /// Current value bound to `name`, viewed as `T`
    pub fn get_as<T: FromValue>(&self, name: &str) -> Result<T> {
        let vars = self.vars.borrow();
        let value = vars
            .get(name)
            .ok_or_else(|| RuntimeError::NotFound(name.to_string()))?;

        T::try_from_value(value).map_err(|e| match e {
            CoreError::TypeMismatch { expected, found } => RuntimeError::TypeMismatch {
                name: name.to_string(),
                expected,
                found,
            },
        })
    }

    /// Shorthand for `get_as::<f64>`
    pub fn number(&self, name: &str) -> Result<f64> {
        self.get_as(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.borrow().contains_key(name)
    }

    /// Bind `name` unconditionally, returning the value it replaced
    pub fn bind(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.borrow_mut().insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.borrow().is_empty()
    }

    /// Names currently bound, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vars.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    /// Copy of every binding
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.vars.borrow().clone()
    }

    /// Insert a new binding, refusing names that are already bound
    pub(crate) fn insert_new(&self, name: String, value: Value) -> Result<()> {
        let mut vars = self.vars.borrow_mut();
        if vars.contains_key(&name) {
            return Err(RuntimeError::duplicate(name, Namespace::Variable));
        }
        vars.insert(name, value);
        Ok(())
    }

    /// Insert every pair or none of them.
    ///
    /// A name colliding with an existing binding, or repeated within
    /// `pairs`, fails the whole batch with the first offending name in
    /// input order.
    pub(crate) fn insert_all_new(&self, pairs: Vec<(String, Value)>) -> Result<()> {
        let mut vars = self.vars.borrow_mut();
        {
            let mut seen = HashSet::with_capacity(pairs.len());
            for (name, _) in &pairs {
                if vars.contains_key(name) || !seen.insert(name.as_str()) {
                    return Err(RuntimeError::duplicate(name.clone(), Namespace::Variable));
                }
            }
        }
        vars.extend(pairs);
        Ok(())
    }
}

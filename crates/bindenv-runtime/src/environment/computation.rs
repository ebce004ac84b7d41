//! Registered computations

use crate::environment::Environment;
use crate::error::Result;
use bindenv_core::Value;
use std::fmt;

/// Boxed zero-argument closure producing an optional result
pub type NativeFn = Box<dyn FnMut() -> Result<Option<Value>>>;

/// Something an environment runs during `invoke`.
///
/// Both variants occupy one namespace and one invocation order; a block's
/// own final result is published under its registered name just like a
/// closure's.
pub enum Computation {
    /// Caller-supplied closure
    Native(NativeFn),
    /// Nested environment invoked as a sub-procedure
    Block(Environment),
}

impl Computation {
    /// Wrap a closure
    pub fn native<F>(f: F) -> Self
    where
        F: FnMut() -> Result<Option<Value>> + 'static,
    {
        Computation::Native(Box::new(f))
    }

    /// Wrap a nested environment
    pub fn block(environment: Environment) -> Self {
        Computation::Block(environment)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Computation::Native(_) => "function",
            Computation::Block(_) => "block",
        }
    }

    /// Run once, returning the value to publish, if any
    pub(crate) fn run(&mut self) -> Result<Option<Value>> {
        match self {
            Computation::Native(f) => f(),
            Computation::Block(environment) => environment.invoke(),
        }
    }
}

impl fmt::Debug for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Computation::Native(_) => f.write_str("Native(..)"),
            Computation::Block(environment) => f.debug_tuple("Block").field(environment).finish(),
        }
    }
}

impl From<Environment> for Computation {
    fn from(environment: Environment) -> Self {
        Computation::Block(environment)
    }
}

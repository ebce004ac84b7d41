//! Binding environment module
//!
//! Named variables, named computations, and the pass that runs the
//! computations and publishes their results.

mod computation;
mod environment;
mod env_vars;
mod scope;

// Re-export public types
pub use computation::{Computation, NativeFn};
pub use environment::Environment;
pub use scope::Scope;

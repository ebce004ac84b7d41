//! bindenv runtime - the named binding environment
//!
//! An [`Environment`] holds named variables and named deferred computations,
//! runs the computations in registration order and publishes each produced
//! value back into the variables under the computation's name.

pub mod builder;
pub mod config;
pub mod environment;
pub mod error;

// Re-export main types
pub use builder::EnvironmentBuilder;
pub use config::{EnvironmentConfig, DEFAULT_ENV_PREFIX};
pub use environment::{Computation, Environment, NativeFn, Scope};
pub use error::{Namespace, Result, RuntimeError};

// Re-export commonly used types from dependencies
pub use bindenv_core::{FromValue, Value};

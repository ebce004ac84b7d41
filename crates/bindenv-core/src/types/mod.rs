//! Type system for bindenv
//!
//! - Value types
//! - Typed views (`FromValue`)

pub mod convert;
pub mod value;

pub use convert::FromValue;
pub use value::Value;

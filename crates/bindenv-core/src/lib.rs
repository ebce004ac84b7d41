//! bindenv core - shared types for the binding environment
//!
//! This crate provides the fundamental types used across the bindenv crates:
//! - Value types for bound data
//! - Typed views over values
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use types::{FromValue, Value};

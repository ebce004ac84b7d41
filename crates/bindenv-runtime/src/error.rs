//! Runtime error types

use std::fmt;
use thiserror::Error;

/// Which namespace a name collided in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Plain variables
    Variable,
    /// Functions and sub-environments, which share one namespace
    Computation,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Variable => write!(f, "variable"),
            Namespace::Computation => write!(f, "computation"),
        }
    }
}

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A registration targeted a name that is already taken
    #[error("Duplicate {namespace} name: {name}")]
    DuplicateName { name: String, namespace: Namespace },

    /// Lookup of an unbound name
    #[error("Binding not found: {0}")]
    NotFound(String),

    /// Typed lookup found a value of another type
    #[error("Type mismatch for '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure raised by a registered computation
    #[error(transparent)]
    Computation(#[from] anyhow::Error),
}

impl RuntimeError {
    pub(crate) fn duplicate(name: impl Into<String>, namespace: Namespace) -> Self {
        RuntimeError::DuplicateName {
            name: name.into(),
            namespace,
        }
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_message() {
        let error = RuntimeError::duplicate("num1", Namespace::Variable);
        assert_eq!(error.to_string(), "Duplicate variable name: num1");

        let error = RuntimeError::duplicate("add", Namespace::Computation);
        assert_eq!(error.to_string(), "Duplicate computation name: add");
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = RuntimeError::TypeMismatch {
            name: "count".to_string(),
            expected: "number",
            found: "string",
        };
        assert!(error.to_string().contains("count"));
        assert!(error.to_string().contains("expected number, found string"));
    }

    #[test]
    fn test_computation_error_is_transparent() {
        let error: RuntimeError = anyhow::anyhow!("division by zero").into();
        assert_eq!(error.to_string(), "division by zero");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: RuntimeError = io_error.into();
        assert!(error.to_string().contains("I/O error"));
        assert!(error.to_string().contains("File not found"));
    }
}

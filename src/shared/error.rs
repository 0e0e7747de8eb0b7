//! Shared Error Types
//!
//! This module defines error types that are shared between the backend and
//! API clients. They describe failures that can be detected from a request
//! body alone, before any database or authentication work happens.
//!
//! # Usage
//!
//! ```rust
//! use craneshell::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "must be alphanumeric");
//! assert_eq!(error.field(), "username");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both clients and backend
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}

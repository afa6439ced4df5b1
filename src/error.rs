//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::advice::AdviceError;

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Input rejected before it reached the ledger or the budget
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Rejected budget changes
    #[error("Budget error: {0}")]
    Budget(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// AI advice provider failures
    #[error("Advice error: {0}")]
    Advice(#[from] AdviceError),
}

impl TrackerError {
    /// Create a "duplicate" error for transactions
    pub fn duplicate_transaction(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

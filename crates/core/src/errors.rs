//! Core error types for the debt dashboard.
//!
//! Every command either succeeds with a new snapshot or fails with one of
//! these errors, leaving the previous snapshot untouched.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Debt '{0}' not found")]
    DebtNotFound(String),

    #[error("Snapshot document error: {0}")]
    Snapshot(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
///
/// Field names use the camelCase names of the snapshot document so the
/// presentation layer can map them back onto its form inputs.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Field '{field}' is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Field '{0}' must not be negative")]
    NegativeAmount(String),

    #[error("Field '{0}' exceeds the supported numeric range")]
    AmountOverflow(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

impl ValidationError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidNumber { field, .. } => Some(field),
            ValidationError::NegativeAmount(field)
            | ValidationError::AmountOverflow(field)
            | ValidationError::MissingField(field) => Some(field),
            ValidationError::InvalidInput(_) | ValidationError::DateParse(_) => None,
        }
    }
}

// === From implementations for common error types ===

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Snapshot(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation, ranges). File and
/// console IO errors belong to the loader and the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. not an integer).
    #[error("{0}")]
    Validation(String),

    /// A number was parsed but lies outside the accepted bounds.
    #[error("Enter a number between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },

    /// A calendar date could not be formed from its parts.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(min: i64, max: i64) -> Self {
        Self::OutOfRange { min, max }
    }

    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }
}

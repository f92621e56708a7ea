//! Error types for sqlstmt

use thiserror::Error;

/// Result type alias for statement-building operations
pub type StmtResult<T> = Result<T, StmtError>;

/// Error types for building and rendering statements
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StmtError {
    /// Table name does not match the identifier-token grammar
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// A value-requiring operator reached render time without a usable value
    #[error("operator on column '{0}' requires a bound value")]
    MissingValue(String),

    /// UPDATE rendered with an empty assignment list
    #[error("UPDATE requires at least one assignment")]
    EmptyAssignment,

    /// A rendering knob was given an empty token
    #[error("empty {0} token")]
    EmptyToken(&'static str),
}

impl StmtError {
    /// Check if this is an invalid-identifier error
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier(_))
    }

    /// Check if this is a missing-value error
    pub fn is_missing_value(&self) -> bool {
        matches!(self, Self::MissingValue(_))
    }
}

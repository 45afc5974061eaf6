//! Calculator error types

use thiserror::Error;

/// Calculation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A profile field is outside its valid domain
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// A calculation argument is malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

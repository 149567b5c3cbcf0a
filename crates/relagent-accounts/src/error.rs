//! Error types for the account directory

use thiserror::Error;

/// Result type for account operations
pub type AccountResult<T> = Result<T, AccountError>;

/// Errors that can occur in account operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username taken: {0}")]
    UsernameTaken(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Password policy violation: {0}")]
    PasswordPolicy(String),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },
}

//! Error types for the audit trail crate

use thiserror::Error;

/// Result type for audit trail operations
pub type ActivityLogResult<T> = Result<T, ActivityLogError>;

/// Errors that can occur in audit trail operations
#[derive(Error, Debug)]
pub enum ActivityLogError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

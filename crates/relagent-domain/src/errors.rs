//! Error types shared across the Relagent domain

use thiserror::Error;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors produced by domain entities and the batch registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Invalid transition for batch {batch}: {from} -> {to} ({reason})")]
    InvalidTransition {
        batch: String,
        from: String,
        to: String,
        reason: String,
    },

    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },
}

impl DomainError {
    /// Convenience constructor for a missing batch
    pub fn batch_not_found(id: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: "batch".to_string(),
            id: id.into(),
        }
    }

    /// Convenience constructor for a field validation failure
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

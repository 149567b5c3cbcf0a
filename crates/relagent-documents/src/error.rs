//! Error types for document tracking

use thiserror::Error;
use uuid::Uuid;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors that can occur in document operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Document not found: {0}")]
    NotFound(Uuid),

    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },
}

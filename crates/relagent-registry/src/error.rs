//! Error types for registry operations

use relagent_domain::DomainError;
use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur in registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Duplicate batch number: {0}")]
    DuplicateBatchNumber(String),
}

impl RegistryError {
    /// Whether this error is the not-found case
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::Domain(DomainError::NotFound { .. }))
    }
}

//! Relagent Domain Model
//!
//! Core entities and business rules for the batch release readiness demo:
//! manufacturing batches, their test results, the release state machine,
//! and the shared error taxonomy used by the registry and its callers.

pub mod entities;
pub mod errors;

pub use entities::{
    Batch, BatchDraft, BatchStatus, ReleaseDecision, TestResult, TestStatus,
};
pub use errors::{DomainError, DomainResult};

//! Relagent Audit Trail
//!
//! Append-only, time-ordered log of state-changing actions in the batch
//! release workflow. Entries carry monotonically increasing ids and are
//! stored in insertion order; listing is newest-first because that is the
//! display order for the audit screen and printed reports.

pub mod audit;
pub mod error;

pub use audit::{AuditEntry, AuditFilter, AuditTrail};
pub use error::{ActivityLogError, ActivityLogResult};

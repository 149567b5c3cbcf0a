//! Relagent Batch Registry
//!
//! The authoritative owner of the batch collection and the audit trail.
//! Every state-changing operation goes through [`BatchRegistry`], which
//! applies the release state machine from `relagent-domain` and records
//! who did what, when, and why in an append-only audit trail.
//!
//! The registry is single-threaded and synchronous: each operation runs to
//! completion and either fully applies or makes no change. It holds no
//! reference to any rendering layer; the view adapter calls in and renders
//! the returned values.

pub mod error;
pub mod registry;
pub mod seed;

pub use error::{RegistryError, RegistryResult};
pub use registry::BatchRegistry;
pub use seed::seed_demo_data;

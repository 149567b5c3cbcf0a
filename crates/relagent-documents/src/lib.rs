//! Relagent Document Tracker
//!
//! Records uploaded batch documents and their mock analysis state. The
//! original demo "analyzed" an upload behind an artificial delay; here the
//! analysis completes through an explicit event with identical effects,
//! so there is no timer and no background task.

pub mod error;
pub mod models;
pub mod tracker;

pub use error::{DocumentError, DocumentResult};
pub use models::{AnalysisStatus, UploadedDocument};
pub use tracker::DocumentTracker;

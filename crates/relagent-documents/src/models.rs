//! Document models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mock analysis state of an uploaded document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnalysisStatus {
    /// Upload recorded, analysis "running"
    Analyzing,
    /// Analysis complete with an extracted summary
    Analyzed { summary: String },
}

/// An uploaded batch document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub id: Uuid,
    pub file_name: String,
    pub size_bytes: u64,
    /// Batch this document belongs to, when known at upload time
    pub batch_id: Option<Uuid>,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
    pub status: AnalysisStatus,
}

impl UploadedDocument {
    /// Size formatted the way the upload list shows it
    pub fn display_size(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }
}

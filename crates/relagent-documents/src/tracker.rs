//! In-memory document tracker

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DocumentError, DocumentResult};
use crate::models::{AnalysisStatus, UploadedDocument};

/// Summary text produced by the mock analysis
const ANALYSIS_SUMMARY: &str = "Batch parameters extracted";

/// Tracks uploaded documents and their mock analysis state
#[derive(Debug, Clone, Default)]
pub struct DocumentTracker {
    documents: Vec<UploadedDocument>,
}

impl DocumentTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an upload; the document starts in `Analyzing`
    pub fn register_upload(
        &mut self,
        file_name: &str,
        size_bytes: u64,
        batch_id: Option<Uuid>,
        uploaded_by: &str,
    ) -> DocumentResult<UploadedDocument> {
        if file_name.trim().is_empty() {
            return Err(DocumentError::ValidationError {
                field: "file_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let document = UploadedDocument {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            size_bytes,
            batch_id,
            uploaded_by: uploaded_by.to_string(),
            uploaded_at: Utc::now(),
            status: AnalysisStatus::Analyzing,
        };
        debug!(file = file_name, size_bytes, "upload registered");

        self.documents.push(document.clone());
        Ok(document)
    }

    /// Complete the mock analysis for a document
    ///
    /// Explicit event replacing the original's artificial delay; idempotent
    /// on already-analyzed documents.
    pub fn complete_analysis(&mut self, document_id: Uuid) -> DocumentResult<UploadedDocument> {
        let document = self
            .documents
            .iter_mut()
            .find(|d| d.id == document_id)
            .ok_or(DocumentError::NotFound(document_id))?;

        if document.status == AnalysisStatus::Analyzing {
            document.status = AnalysisStatus::Analyzed {
                summary: ANALYSIS_SUMMARY.to_string(),
            };
            info!(file = %document.file_name, "analysis complete");
        }

        Ok(document.clone())
    }

    /// Get a document by id
    pub fn get(&self, document_id: Uuid) -> DocumentResult<UploadedDocument> {
        self.documents
            .iter()
            .find(|d| d.id == document_id)
            .cloned()
            .ok_or(DocumentError::NotFound(document_id))
    }

    /// All documents in upload order
    pub fn documents(&self) -> &[UploadedDocument] {
        &self.documents
    }

    /// Documents attached to a given batch
    pub fn for_batch(&self, batch_id: Uuid) -> Vec<UploadedDocument> {
        self.documents
            .iter()
            .filter(|d| d.batch_id == Some(batch_id))
            .cloned()
            .collect()
    }
}

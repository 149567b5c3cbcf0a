//! Batch registry owning the batch collection and the audit trail

use relagent_activity_log::{AuditEntry, AuditTrail};
use relagent_domain::{
    Batch, BatchDraft, BatchStatus, DomainError, ReleaseDecision, TestStatus,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{RegistryError, RegistryResult};

/// Measured value recorded when the simulated lab completes a pending test
const SIMULATED_LAB_RESULT: &str = "Complete - Within Specification";

/// Owns the batch list and the audit trail for one demo session
///
/// Batches are kept in creation order, which is also the order `search`
/// preserves. Constructed once per process and passed by reference to the
/// view layer; there are no ambient globals.
#[derive(Debug, Clone, Default)]
pub struct BatchRegistry {
    batches: Vec<Batch>,
    audit: AuditTrail,
}

impl BatchRegistry {
    /// Create an empty registry with an uncapped audit trail
    pub fn new() -> Self {
        Self {
            batches: Vec::new(),
            audit: AuditTrail::new(),
        }
    }

    /// Create a registry whose audit trail retains at most `max` entries
    pub fn with_audit_cap(max: usize) -> Self {
        Self {
            batches: Vec::new(),
            audit: AuditTrail::with_max_entries(max),
        }
    }

    /// Register a new batch
    ///
    /// Validates the draft, enforces batch-number uniqueness, and records
    /// a creation audit entry. The initial status is derived from any
    /// seeded test results.
    pub fn create_batch(&mut self, draft: BatchDraft, actor: &str) -> RegistryResult<Batch> {
        if self
            .batches
            .iter()
            .any(|b| b.batch_number == draft.batch_number)
        {
            return Err(RegistryError::DuplicateBatchNumber(draft.batch_number));
        }

        let batch = Batch::new(draft)?;
        info!(batch = %batch.batch_number, status = %batch.status, "batch created");

        self.audit.append(
            "Batch Created",
            actor,
            format!(
                "Batch {} ({}) created with status {}",
                batch.batch_number, batch.product_name, batch.status
            ),
            Some(batch.id),
        );

        self.batches.push(batch.clone());
        Ok(batch)
    }

    /// Record or update a test result on a batch
    ///
    /// Appends one audit entry for the result update and a second one if
    /// the automatic status transition fires in the same call. Fails
    /// without any change on an unknown batch or a terminal batch.
    pub fn record_test_result(
        &mut self,
        batch_id: Uuid,
        test_name: &str,
        result: &str,
        status: TestStatus,
        actor: &str,
    ) -> RegistryResult<()> {
        let batch = Self::find_mut(&mut self.batches, batch_id)?;
        let change = batch.record_result(test_name, result.to_string(), status)?;

        let batch_number = batch.batch_number.clone();
        debug!(batch = %batch_number, test = test_name, status = %status, "test result recorded");

        self.audit.append(
            "Test Result Updated",
            actor,
            format!("{batch_number}: {test_name} = {result} ({status})"),
            Some(batch_id),
        );

        if let Some(change) = change {
            info!(batch = %batch_number, from = %change.from, to = %change.to, "batch status changed");
            self.audit.append(
                "Batch Status Changed",
                actor,
                format!("{batch_number}: {} -> {}", change.from, change.to),
                Some(batch_id),
            );
        }

        Ok(())
    }

    /// Apply a signed Qualified Person decision to a batch
    ///
    /// The credential is a demo electronic signature: any non-empty value
    /// is accepted, an empty one is a validation error. On success the
    /// signature audit entry is appended first, then the decision entry.
    /// A failed decision changes nothing and appends nothing.
    pub fn decide(
        &mut self,
        batch_id: Uuid,
        decision: ReleaseDecision,
        actor: &str,
        credential: &str,
        comments: Option<&str>,
    ) -> RegistryResult<()> {
        if credential.trim().is_empty() {
            return Err(DomainError::validation(
                "credential",
                "electronic signature requires a non-empty credential",
            )
            .into());
        }

        let batch = Self::find_mut(&mut self.batches, batch_id)?;
        let change = batch.decide(decision, comments.map(str::to_string))?;
        let batch_number = batch.batch_number.clone();

        info!(batch = %batch_number, decision = %decision, actor, "batch decision signed");

        self.audit.append(
            "Electronic Signature",
            actor,
            format!("Signature captured for {decision} of {batch_number}"),
            Some(batch_id),
        );
        self.audit.append(
            match decision {
                ReleaseDecision::Release => "Batch Released",
                ReleaseDecision::Reject => "Batch Rejected",
            },
            actor,
            format!("{batch_number}: {} -> {}", change.from, change.to),
            Some(batch_id),
        );

        Ok(())
    }

    /// Simulate the arrival of lab results for every pending test
    ///
    /// Stand-in for the original's periodic lab timer: an explicit event
    /// that marks each pending result as passed, with the same audit side
    /// effects as recording each result individually. Returns the number
    /// of results completed.
    pub fn complete_pending_tests(&mut self, batch_id: Uuid, actor: &str) -> RegistryResult<usize> {
        let batch = Self::find_mut(&mut self.batches, batch_id)?;
        let pending: Vec<String> = batch
            .test_results
            .iter()
            .filter(|r| r.status == TestStatus::Pending)
            .map(|r| r.test_name.clone())
            .collect();

        for test_name in &pending {
            self.record_test_result(
                batch_id,
                test_name,
                SIMULATED_LAB_RESULT,
                TestStatus::Pass,
                actor,
            )?;
        }

        Ok(pending.len())
    }

    /// Search batches by term and optional status
    ///
    /// Case-insensitive substring match on batch number or product name;
    /// an empty term matches all. When a status filter is given the batch
    /// status must equal it. Pure read: no mutation, no audit entry;
    /// registry order is preserved.
    pub fn search(&self, term: &str, status_filter: Option<BatchStatus>) -> Vec<Batch> {
        let needle = term.to_lowercase();
        self.batches
            .iter()
            .filter(|b| {
                (needle.is_empty()
                    || b.batch_number.to_lowercase().contains(&needle)
                    || b.product_name.to_lowercase().contains(&needle))
                    && status_filter.map_or(true, |s| b.status == s)
            })
            .cloned()
            .collect()
    }

    /// Get a batch by id
    pub fn get_batch(&self, batch_id: Uuid) -> RegistryResult<Batch> {
        self.batches
            .iter()
            .find(|b| b.id == batch_id)
            .cloned()
            .ok_or_else(|| DomainError::batch_not_found(batch_id.to_string()).into())
    }

    /// All batches in registry order
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Append a batch-independent or batch-scoped audit entry directly
    ///
    /// Used by the view adapter for events the registry does not itself
    /// originate, such as logins or report generation.
    pub fn append_audit(
        &mut self,
        action: &str,
        actor: &str,
        details: &str,
        batch_id: Option<Uuid>,
    ) -> AuditEntry {
        self.audit.append(action, actor, details, batch_id)
    }

    /// List audit entries newest-first, up to `limit` when given
    pub fn list_audit(&self, limit: Option<usize>) -> Vec<AuditEntry> {
        self.audit.list(limit)
    }

    /// Read access to the underlying audit trail
    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }

    fn find_mut(batches: &mut [Batch], batch_id: Uuid) -> RegistryResult<&mut Batch> {
        batches
            .iter_mut()
            .find(|b| b.id == batch_id)
            .ok_or_else(|| DomainError::batch_not_found(batch_id.to_string()).into())
    }
}

//! Manufacturing batch entity and its release state machine

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

use super::{ReleaseDecision, TestResult, TestStatus};

/// Lifecycle state of a manufacturing batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BatchStatus {
    /// Manufacturing in progress, no test results yet
    InProcess,
    /// Quality-control testing underway
    Testing,
    /// All tests passed, awaiting Qualified Person decision
    ReadyForRelease,
    /// Released to market (terminal)
    Released,
    /// Rejected (terminal)
    Rejected,
}

impl BatchStatus {
    /// Whether no further transitions are allowed from this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, BatchStatus::Released | BatchStatus::Rejected)
    }

    /// Human-readable label used in audit details
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::InProcess => "In Process",
            BatchStatus::Testing => "Testing",
            BatchStatus::ReadyForRelease => "Ready for Release",
            BatchStatus::Released => "Released",
            BatchStatus::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status transition that fired on a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: BatchStatus,
    pub to: BatchStatus,
}

/// Input for creating a new batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDraft {
    pub batch_number: String,
    pub product_name: String,
    pub batch_size: u32,
    pub manufacturing_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub qualified_person: String,
    pub manufacturing_site: String,
    pub compliance_score: u8,
    /// Seed results; a draft with partial results starts in `Testing`
    pub test_results: Vec<TestResult>,
}

/// Manufacturing batch under release review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    pub id: Uuid,
    pub batch_number: String,
    pub product_name: String,
    pub batch_size: u32,
    pub manufacturing_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: BatchStatus,
    pub qualified_person: String,
    pub manufacturing_site: String,
    pub compliance_score: u8,
    pub test_results: Vec<TestResult>,
    /// Set only on a signed terminal decision
    pub qp_comments: Option<String>,
    /// Set only when the batch is released
    pub release_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Batch {
    /// Create a batch from a validated draft
    ///
    /// The initial status is derived from the seeded results: no results
    /// means `InProcess`, all-passing results mean `ReadyForRelease`,
    /// anything else means `Testing`.
    pub fn new(draft: BatchDraft) -> DomainResult<Self> {
        if draft.batch_number.trim().is_empty() {
            return Err(DomainError::validation("batch_number", "must not be empty"));
        }
        if draft.product_name.trim().is_empty() {
            return Err(DomainError::validation("product_name", "must not be empty"));
        }
        if draft.batch_size == 0 {
            return Err(DomainError::validation("batch_size", "must be positive"));
        }
        if draft.compliance_score > 100 {
            return Err(DomainError::validation(
                "compliance_score",
                "must be between 0 and 100",
            ));
        }
        if draft.expiry_date <= draft.manufacturing_date {
            return Err(DomainError::validation(
                "expiry_date",
                "must be after manufacturing date",
            ));
        }

        let status = Self::derive_status(BatchStatus::InProcess, &draft.test_results);

        Ok(Self {
            id: Uuid::new_v4(),
            batch_number: draft.batch_number,
            product_name: draft.product_name,
            batch_size: draft.batch_size,
            manufacturing_date: draft.manufacturing_date,
            expiry_date: draft.expiry_date,
            status,
            qualified_person: draft.qualified_person,
            manufacturing_site: draft.manufacturing_site,
            compliance_score: draft.compliance_score,
            test_results: draft.test_results,
            qp_comments: None,
            release_date: None,
            created_at: Utc::now(),
        })
    }

    /// Whether every recorded test result passed (vacuously false when empty)
    pub fn all_tests_pass(&self) -> bool {
        !self.test_results.is_empty()
            && self
                .test_results
                .iter()
                .all(|r| r.status == TestStatus::Pass)
    }

    /// Whether any test result is still awaiting a lab value
    pub fn has_pending_tests(&self) -> bool {
        self.test_results
            .iter()
            .any(|r| r.status == TestStatus::Pending)
    }

    /// Record or update a test result, identified by exact test name
    ///
    /// Re-evaluates the automatic transition rule afterwards and returns
    /// the status change if one fired. Fails on terminal batches.
    pub fn record_result(
        &mut self,
        test_name: &str,
        result: String,
        status: TestStatus,
    ) -> DomainResult<Option<StatusChange>> {
        if self.status.is_terminal() {
            return Err(DomainError::InvalidTransition {
                batch: self.batch_number.clone(),
                from: self.status.as_str().to_string(),
                to: BatchStatus::Testing.as_str().to_string(),
                reason: "batch already has a signed decision".to_string(),
            });
        }

        match self
            .test_results
            .iter_mut()
            .find(|r| r.test_name == test_name)
        {
            Some(existing) => {
                existing.result = result;
                existing.status = status;
            }
            None => self.test_results.push(TestResult {
                test_name: test_name.to_string(),
                specification: String::new(),
                result,
                status,
            }),
        }

        let from = self.status;
        let to = Self::derive_status(from, &self.test_results);
        if to != from {
            self.status = to;
            Ok(Some(StatusChange { from, to }))
        } else {
            Ok(None)
        }
    }

    /// Apply a signed Qualified Person decision
    ///
    /// Only valid from `ReadyForRelease`. Sets comments for both outcomes
    /// and the release date for a release.
    pub fn decide(
        &mut self,
        decision: ReleaseDecision,
        comments: Option<String>,
    ) -> DomainResult<StatusChange> {
        let to = match decision {
            ReleaseDecision::Release => BatchStatus::Released,
            ReleaseDecision::Reject => BatchStatus::Rejected,
        };

        if self.status != BatchStatus::ReadyForRelease {
            return Err(DomainError::InvalidTransition {
                batch: self.batch_number.clone(),
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
                reason: "decision requires Ready for Release status".to_string(),
            });
        }

        let from = self.status;
        self.status = to;
        self.qp_comments = comments;
        if decision == ReleaseDecision::Release {
            self.release_date = Some(Utc::now());
        }

        Ok(StatusChange { from, to })
    }

    /// Non-terminal status implied by the current result set
    ///
    /// Keeps the `ReadyForRelease` state consistent with the invariant that
    /// no pending result may remain: a pending or failing result recorded
    /// after readiness moves the batch back to `Testing`.
    fn derive_status(current: BatchStatus, results: &[TestResult]) -> BatchStatus {
        if results.is_empty() {
            return current;
        }
        if results.iter().all(|r| r.status == TestStatus::Pass) {
            BatchStatus::ReadyForRelease
        } else {
            BatchStatus::Testing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(results: Vec<TestResult>) -> BatchDraft {
        BatchDraft {
            batch_number: "B-2024-001".to_string(),
            product_name: "Amoxicillin 500mg".to_string(),
            batch_size: 10_000,
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            qualified_person: "Dr. Sarah Chen".to_string(),
            manufacturing_site: "Site A".to_string(),
            compliance_score: 95,
            test_results: results,
        }
    }

    #[test]
    fn new_batch_without_results_starts_in_process() {
        let batch = Batch::new(draft(vec![])).unwrap();
        assert_eq!(batch.status, BatchStatus::InProcess);
    }

    #[test]
    fn new_batch_with_partial_results_starts_testing() {
        let batch = Batch::new(draft(vec![
            TestResult::completed("Assay", "98.0-102.0%", "99.1%", TestStatus::Pass),
            TestResult::pending("Microbial Limits", "< 100 CFU/g"),
        ]))
        .unwrap();
        assert_eq!(batch.status, BatchStatus::Testing);
        assert!(batch.has_pending_tests());
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let mut d = draft(vec![]);
        d.batch_size = 0;
        assert!(matches!(
            Batch::new(d),
            Err(DomainError::ValidationError { .. })
        ));
    }

    #[test]
    fn last_pass_triggers_ready_for_release() {
        let mut batch = Batch::new(draft(vec![
            TestResult::completed("Assay", "98.0-102.0%", "99.1%", TestStatus::Pass),
            TestResult::pending("Microbial Limits", "< 100 CFU/g"),
        ]))
        .unwrap();

        let change = batch
            .record_result("Microbial Limits", "12 CFU/g".to_string(), TestStatus::Pass)
            .unwrap();

        assert_eq!(batch.status, BatchStatus::ReadyForRelease);
        assert_eq!(
            change,
            Some(StatusChange {
                from: BatchStatus::Testing,
                to: BatchStatus::ReadyForRelease,
            })
        );
    }

    #[test]
    fn pending_result_moves_ready_batch_back_to_testing() {
        let mut batch = Batch::new(draft(vec![TestResult::completed(
            "Assay",
            "98.0-102.0%",
            "99.1%",
            TestStatus::Pass,
        )]))
        .unwrap();
        assert_eq!(batch.status, BatchStatus::ReadyForRelease);

        let change = batch
            .record_result("Sterility", String::new(), TestStatus::Pending)
            .unwrap();

        assert_eq!(batch.status, BatchStatus::Testing);
        assert!(change.is_some());
    }

    #[test]
    fn decide_requires_ready_for_release() {
        let mut batch = Batch::new(draft(vec![])).unwrap();
        let err = batch
            .decide(ReleaseDecision::Release, Some("ok".to_string()))
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        assert_eq!(batch.status, BatchStatus::InProcess);
    }

    #[test]
    fn release_sets_date_and_comments() {
        let mut batch = Batch::new(draft(vec![TestResult::completed(
            "Assay",
            "98.0-102.0%",
            "99.1%",
            TestStatus::Pass,
        )]))
        .unwrap();

        batch
            .decide(ReleaseDecision::Release, Some("All specs met".to_string()))
            .unwrap();

        assert_eq!(batch.status, BatchStatus::Released);
        assert!(batch.release_date.is_some());
        assert_eq!(batch.qp_comments.as_deref(), Some("All specs met"));
    }

    #[test]
    fn reject_records_comments_without_release_date() {
        let mut batch = Batch::new(draft(vec![TestResult::completed(
            "Assay",
            "98.0-102.0%",
            "99.1%",
            TestStatus::Pass,
        )]))
        .unwrap();

        batch
            .decide(ReleaseDecision::Reject, Some("OOS result".to_string()))
            .unwrap();

        assert_eq!(batch.status, BatchStatus::Rejected);
        assert!(batch.release_date.is_none());
        assert_eq!(batch.qp_comments.as_deref(), Some("OOS result"));
    }

    #[test]
    fn terminal_batch_rejects_further_results_and_decisions() {
        let mut batch = Batch::new(draft(vec![TestResult::completed(
            "Assay",
            "98.0-102.0%",
            "99.1%",
            TestStatus::Pass,
        )]))
        .unwrap();
        batch.decide(ReleaseDecision::Release, None).unwrap();

        assert!(batch
            .record_result("Assay", "98.8%".to_string(), TestStatus::Pass)
            .is_err());
        assert!(batch.decide(ReleaseDecision::Reject, None).is_err());
        assert_eq!(batch.status, BatchStatus::Released);
    }
}

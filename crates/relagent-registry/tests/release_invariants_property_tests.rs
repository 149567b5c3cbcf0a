//! Property-based tests for registry invariants
//!
//! Covers the audit trail ordering guarantees and the release-readiness
//! invariant under arbitrary sequences of test-result updates.

use chrono::NaiveDate;
use proptest::prelude::*;
use relagent_domain::{BatchDraft, BatchStatus, TestResult, TestStatus};
use relagent_registry::BatchRegistry;

fn status_strategy() -> impl Strategy<Value = TestStatus> {
    prop_oneof![
        Just(TestStatus::Pass),
        Just(TestStatus::Pending),
        Just(TestStatus::Fail),
    ]
}

/// A small pool of test names so updates hit both the upsert and append paths
fn test_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Assay".to_string()),
        Just("Sterility".to_string()),
        Just("Dissolution".to_string()),
        Just("Endotoxin".to_string()),
    ]
}

fn draft(batch_number: String) -> BatchDraft {
    BatchDraft {
        batch_number,
        product_name: "Demo Product".to_string(),
        batch_size: 1_000,
        manufacturing_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        expiry_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        qualified_person: "Dr. Sarah Chen".to_string(),
        manufacturing_site: "Site A".to_string(),
        compliance_score: 90,
        test_results: vec![TestResult::pending("Assay", "98.0-102.0%")],
    }
}

/// Property: ready-for-release implies no pending result, for any sequence
/// of result updates.
#[test]
fn prop_ready_for_release_implies_no_pending() {
    proptest!(|(updates in prop::collection::vec((test_name_strategy(), status_strategy()), 1..40))| {
        let mut registry = BatchRegistry::new();
        let id = registry
            .create_batch(draft("B-PROP-001".to_string()), "system")
            .unwrap()
            .id;

        for (test_name, status) in updates {
            registry
                .record_test_result(id, &test_name, "measured", status, "lab.system")
                .unwrap();

            let batch = registry.get_batch(id).unwrap();
            if batch.status == BatchStatus::ReadyForRelease {
                prop_assert!(
                    batch.test_results.iter().all(|r| r.status != TestStatus::Pending),
                    "ReadyForRelease batch must have no pending results"
                );
            }
        }
    });
}

/// Property: audit entry ids strictly increase in insertion order, and
/// `list_audit` returns exactly the reverse of insertion order.
#[test]
fn prop_audit_ids_monotonic_and_listing_reversed() {
    proptest!(|(updates in prop::collection::vec((test_name_strategy(), status_strategy()), 1..40))| {
        let mut registry = BatchRegistry::new();
        let id = registry
            .create_batch(draft("B-PROP-002".to_string()), "system")
            .unwrap()
            .id;

        for (test_name, status) in updates {
            registry
                .record_test_result(id, &test_name, "measured", status, "lab.system")
                .unwrap();
        }

        let stored = registry.audit().entries();
        for pair in stored.windows(2) {
            prop_assert!(pair[0].id < pair[1].id, "ids must strictly increase");
        }

        let listed = registry.list_audit(None);
        prop_assert_eq!(listed.len(), stored.len());
        for (i, entry) in listed.iter().enumerate() {
            prop_assert_eq!(entry.id, stored[stored.len() - 1 - i].id);
        }
    });
}

/// Property: an empty search with no status filter returns every batch in
/// registry order.
#[test]
fn prop_empty_search_is_identity() {
    proptest!(|(count in 1usize..12)| {
        let mut registry = BatchRegistry::new();
        for i in 0..count {
            registry
                .create_batch(draft(format!("B-PROP-{i:03}")), "system")
                .unwrap();
        }

        let found = registry.search("", None);
        prop_assert_eq!(found.len(), count);
        for (found, stored) in found.iter().zip(registry.batches()) {
            prop_assert_eq!(found.id, stored.id);
        }
    });
}

/// Property: search results always satisfy both the term and the status
/// filter.
#[test]
fn prop_search_results_match_criteria() {
    proptest!(|(term in "[a-z0-9]{0,6}", filter in prop::option::of(prop_oneof![
        Just(BatchStatus::InProcess),
        Just(BatchStatus::Testing),
        Just(BatchStatus::ReadyForRelease),
    ]))| {
        let mut registry = BatchRegistry::new();
        registry.create_batch(draft("B-PROP-010".to_string()), "system").unwrap();
        let mut d = draft("B-PROP-011".to_string());
        d.product_name = "Insulin Glargine".to_string();
        d.test_results = vec![];
        registry.create_batch(d, "system").unwrap();

        for batch in registry.search(&term, filter) {
            let needle = term.to_lowercase();
            prop_assert!(
                needle.is_empty()
                    || batch.batch_number.to_lowercase().contains(&needle)
                    || batch.product_name.to_lowercase().contains(&needle)
            );
            if let Some(status) = filter {
                prop_assert_eq!(batch.status, status);
            }
        }
    });
}

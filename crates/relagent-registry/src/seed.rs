//! Demo seed data for the batch registry
//!
//! Mirrors the mock dataset of the original demo: one batch awaiting the
//! Qualified Person decision, one still in testing with a pending result,
//! and one already released, so every screen has something to show.

use chrono::NaiveDate;
use relagent_domain::{BatchDraft, ReleaseDecision, TestResult, TestStatus};

use crate::error::RegistryResult;
use crate::registry::BatchRegistry;

/// Actor recorded on seed-time audit entries
const SEED_ACTOR: &str = "system";

/// Populate a registry with the demo dataset
///
/// Every reload of the demo reconstructs the registry and re-seeds it;
/// nothing persists across restarts.
pub fn seed_demo_data(registry: &mut BatchRegistry) -> RegistryResult<()> {
    // Awaiting QP decision: all results passed.
    registry.create_batch(
        BatchDraft {
            batch_number: "B-2024-001".to_string(),
            product_name: "Amoxicillin 500mg Capsules".to_string(),
            batch_size: 50_000,
            manufacturing_date: date(2024, 1, 15),
            expiry_date: date(2026, 1, 15),
            qualified_person: "Dr. Sarah Chen".to_string(),
            manufacturing_site: "Manchester Site A".to_string(),
            compliance_score: 98,
            test_results: vec![
                TestResult::completed("Assay", "98.0-102.0%", "99.4%", TestStatus::Pass),
                TestResult::completed("Dissolution", "Q >= 80% in 30 min", "92%", TestStatus::Pass),
                TestResult::completed("Microbial Limits", "< 100 CFU/g", "12 CFU/g", TestStatus::Pass),
            ],
        },
        SEED_ACTOR,
    )?;

    // Still in testing: sterility result outstanding.
    registry.create_batch(
        BatchDraft {
            batch_number: "B-2024-002".to_string(),
            product_name: "Insulin Glargine 100U/mL".to_string(),
            batch_size: 12_000,
            manufacturing_date: date(2024, 2, 3),
            expiry_date: date(2025, 8, 3),
            qualified_person: "Dr. Sarah Chen".to_string(),
            manufacturing_site: "Dublin Site B".to_string(),
            compliance_score: 91,
            test_results: vec![
                TestResult::completed("Potency", "95.0-105.0%", "101.2%", TestStatus::Pass),
                TestResult::pending("Sterility", "No growth in 14 days"),
            ],
        },
        SEED_ACTOR,
    )?;

    // Already released: created ready, then decided through the normal path
    // so the audit trail shows the signature and decision events.
    let released = registry.create_batch(
        BatchDraft {
            batch_number: "B-2023-118".to_string(),
            product_name: "Paracetamol 500mg Tablets".to_string(),
            batch_size: 200_000,
            manufacturing_date: date(2023, 11, 20),
            expiry_date: date(2026, 11, 20),
            qualified_person: "Dr. Miguel Torres".to_string(),
            manufacturing_site: "Manchester Site A".to_string(),
            compliance_score: 100,
            test_results: vec![
                TestResult::completed("Assay", "95.0-105.0%", "100.1%", TestStatus::Pass),
                TestResult::completed("Hardness", "4-10 kp", "6.2 kp", TestStatus::Pass),
            ],
        },
        SEED_ACTOR,
    )?;
    registry.decide(
        released.id,
        ReleaseDecision::Release,
        "Dr. Miguel Torres",
        "seed-signature",
        Some("All release criteria met"),
    )?;

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use relagent_domain::BatchStatus;

    #[test]
    fn seed_covers_the_demo_states() {
        let mut registry = BatchRegistry::new();
        seed_demo_data(&mut registry).unwrap();

        let statuses: Vec<_> = registry.batches().iter().map(|b| b.status).collect();
        assert!(statuses.contains(&BatchStatus::ReadyForRelease));
        assert!(statuses.contains(&BatchStatus::Testing));
        assert!(statuses.contains(&BatchStatus::Released));
        assert!(!registry.audit().is_empty());
    }

    #[test]
    fn seeding_twice_rejects_duplicate_batch_numbers() {
        let mut registry = BatchRegistry::new();
        seed_demo_data(&mut registry).unwrap();
        assert!(seed_demo_data(&mut registry).is_err());
    }
}

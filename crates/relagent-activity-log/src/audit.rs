//! Append-only audit trail store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::ActivityLogResult;

/// A single audit trail entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEntry {
    /// Sequential entry id, strictly increasing per trail
    pub id: u64,
    /// Batch the action applied to; `None` for batch-independent events
    /// such as logins
    pub batch_id: Option<Uuid>,
    /// Action performed, e.g. "Test Result Updated"
    pub action: String,
    /// User or system component that performed the action
    pub actor: String,
    /// Time the entry was appended
    pub timestamp: DateTime<Utc>,
    /// Free-text description shown on the audit screen
    pub details: String,
}

/// Optional criteria for narrowing an audit listing
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Substring match on the actor
    pub actor: Option<String>,
    /// Substring match on the action
    pub action: Option<String>,
    /// Exact match on the batch id
    pub batch_id: Option<Uuid>,
}

/// Append-only audit trail with monotonic ids
///
/// Storage order is insertion order; all listing methods return entries
/// newest-first. An optional retention cap drops the oldest entries once
/// exceeded; by default the trail is uncapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
    next_id: u64,
    max_entries: Option<usize>,
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditTrail {
    /// Create an empty, uncapped trail
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            max_entries: None,
        }
    }

    /// Create a trail that retains at most `max_entries` entries
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            max_entries: Some(max_entries),
        }
    }

    /// Append an entry; always succeeds
    ///
    /// Assigns the next sequential id and the current timestamp. Returns a
    /// copy of the stored entry.
    pub fn append(
        &mut self,
        action: impl Into<String>,
        actor: impl Into<String>,
        details: impl Into<String>,
        batch_id: Option<Uuid>,
    ) -> AuditEntry {
        let entry = AuditEntry {
            id: self.next_id,
            batch_id,
            action: action.into(),
            actor: actor.into(),
            timestamp: Utc::now(),
            details: details.into(),
        };
        self.next_id += 1;

        debug!(
            id = entry.id,
            action = %entry.action,
            actor = %entry.actor,
            "audit entry appended"
        );

        self.entries.push(entry.clone());

        if let Some(max) = self.max_entries {
            if self.entries.len() > max {
                let excess = self.entries.len() - max;
                self.entries.drain(0..excess);
            }
        }

        entry
    }

    /// List entries newest-first, up to `limit` when given
    pub fn list(&self, limit: Option<usize>) -> Vec<AuditEntry> {
        let iter = self.entries.iter().rev().cloned();
        match limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }

    /// List entries newest-first, narrowed by the given filter
    pub fn list_filtered(&self, filter: &AuditFilter, limit: Option<usize>) -> Vec<AuditEntry> {
        let iter = self
            .entries
            .iter()
            .rev()
            .filter(|entry| {
                filter
                    .actor
                    .as_deref()
                    .map_or(true, |a| entry.actor.contains(a))
                    && filter
                        .action
                        .as_deref()
                        .map_or(true, |a| entry.action.contains(a))
                    && filter.batch_id.map_or(true, |id| entry.batch_id == Some(id))
            })
            .cloned();
        match limit {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }

    /// All entries in storage (insertion) order
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the trail has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the full trail for report generation
    pub fn export_json(&self) -> ActivityLogResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_monotonic() {
        let mut trail = AuditTrail::new();
        let a = trail.append("Login", "admin", "User logged in", None);
        let b = trail.append("Batch Created", "admin", "B-2024-001", None);
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn list_is_newest_first() {
        let mut trail = AuditTrail::new();
        trail.append("First", "a", "", None);
        trail.append("Second", "a", "", None);
        trail.append("Third", "a", "", None);

        let listed = trail.list(None);
        let actions: Vec<_> = listed.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["Third", "Second", "First"]);
    }

    #[test]
    fn list_respects_limit() {
        let mut trail = AuditTrail::new();
        for i in 0..5 {
            trail.append(format!("Action {i}"), "a", "", None);
        }
        let listed = trail.list(Some(2));
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].action, "Action 4");
    }

    #[test]
    fn retention_cap_drops_oldest_but_ids_keep_increasing() {
        let mut trail = AuditTrail::with_max_entries(2);
        trail.append("A", "a", "", None);
        trail.append("B", "a", "", None);
        let c = trail.append("C", "a", "", None);

        assert_eq!(trail.len(), 2);
        assert_eq!(c.id, 3);
        assert_eq!(trail.entries()[0].action, "B");
    }

    #[test]
    fn filter_by_batch_and_actor() {
        let mut trail = AuditTrail::new();
        let batch = Uuid::new_v4();
        trail.append("Login", "qp.chen", "User logged in", None);
        trail.append("Test Result Updated", "qp.chen", "Assay", Some(batch));
        trail.append("Test Result Updated", "lab.system", "Sterility", Some(Uuid::new_v4()));

        let by_batch = trail.list_filtered(
            &AuditFilter {
                batch_id: Some(batch),
                ..Default::default()
            },
            None,
        );
        assert_eq!(by_batch.len(), 1);

        let by_actor = trail.list_filtered(
            &AuditFilter {
                actor: Some("qp.".to_string()),
                ..Default::default()
            },
            None,
        );
        assert_eq!(by_actor.len(), 2);
    }
}

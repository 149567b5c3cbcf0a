//! Qualified Person release decisions

use serde::{Deserialize, Serialize};

/// Terminal decision a Qualified Person can sign for a batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// Release the batch to market
    Release,
    /// Reject the batch
    Reject,
}

impl ReleaseDecision {
    /// Label used in audit details
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseDecision::Release => "Release",
            ReleaseDecision::Reject => "Reject",
        }
    }
}

impl std::fmt::Display for ReleaseDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

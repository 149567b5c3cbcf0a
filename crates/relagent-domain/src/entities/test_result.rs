//! Quality-control test results attached to a batch

use serde::{Deserialize, Serialize};

/// Outcome of a single quality-control test
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TestStatus {
    /// Result within specification
    Pass,
    /// Result not yet available
    Pending,
    /// Result outside specification
    Fail,
}

impl TestStatus {
    /// Human-readable label used in audit details
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pass => "Pass",
            TestStatus::Pending => "Pending",
            TestStatus::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single quality-control test recorded against a batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestResult {
    /// Test identifier, e.g. "Assay" or "Microbial Limits" (case-sensitive)
    pub test_name: String,
    /// Acceptance criterion, e.g. "98.0-102.0%"
    pub specification: String,
    /// Measured value as reported by the lab
    pub result: String,
    /// Pass / Pending / Fail
    pub status: TestStatus,
}

impl TestResult {
    /// Create a result that is still awaiting a lab value
    pub fn pending(test_name: impl Into<String>, specification: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            specification: specification.into(),
            result: String::new(),
            status: TestStatus::Pending,
        }
    }

    /// Create a completed result
    pub fn completed(
        test_name: impl Into<String>,
        specification: impl Into<String>,
        result: impl Into<String>,
        status: TestStatus,
    ) -> Self {
        Self {
            test_name: test_name.into(),
            specification: specification.into(),
            result: result.into(),
            status,
        }
    }
}

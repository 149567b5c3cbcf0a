//! Core configuration types and data structures

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Audit trail configuration
    pub audit: AuditConfig,
    /// Account directory configuration
    pub accounts: AccountsConfig,
    /// Demo seeding configuration
    pub demo: DemoConfig,
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Retention cap on audit entries; `None` keeps everything
    pub max_entries: Option<usize>,
}

/// Account directory configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AccountsConfig {
    /// Minimum password length enforced on signup and change
    pub min_password_length: usize,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
        }
    }
}

/// Demo seeding configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Whether to seed the demo batches and admin account on startup
    pub seed_data: bool,
    /// Company name shown in the application header
    pub site_name: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed_data: true,
            site_name: "Batch Release Readiness Agent".to_string(),
        }
    }
}

/// Loading, saving, and validation of the application configuration
pub trait ConfigStore {
    /// Load configuration from all sources
    fn load_config(&mut self) -> crate::error::Result<AppConfig>;

    /// Persist configuration to the config file
    fn save_config(&self, config: &AppConfig) -> crate::error::Result<()>;

    /// Validate a configuration
    fn validate_config(&self, config: &AppConfig) -> crate::error::Result<()>;
}

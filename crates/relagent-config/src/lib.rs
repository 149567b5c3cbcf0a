//! Relagent Configuration Management
//!
//! Loads demo settings from an optional TOML file plus environment
//! overrides: audit retention, the password policy, and whether to seed
//! the demo dataset on startup.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{AccountsConfig, AppConfig, AuditConfig, ConfigStore, DemoConfig};

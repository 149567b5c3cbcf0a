//! Configuration manager implementation

use std::path::PathBuf;

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::{AppConfig, ConfigStore},
};

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "RELAGENT".to_string(),
        }
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: "RELAGENT".to_string(),
        }
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("relagent")
            .join("config.toml")
    }
}

impl ConfigStore for ConfigManager {
    fn load_config(&mut self) -> Result<AppConfig> {
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix).separator("__"));

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        debug!(path = %self.config_path.display(), "configuration loaded");

        self.validate_config(&app_config)?;
        Ok(app_config)
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if config.accounts.min_password_length == 0 {
            return Err(ConfigError::Validation(
                "Minimum password length must be greater than 0".to_string(),
            ));
        }
        if config.audit.max_entries == Some(0) {
            return Err(ConfigError::Validation(
                "Audit retention cap must be greater than 0 when set".to_string(),
            ));
        }
        if config.demo.site_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Site name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

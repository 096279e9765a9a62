// Rust guideline compliant 2026-10-13

//! Configuration management for Stacks.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for Stacks behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Calendar days between issue and due date.
    #[serde(default = "default_loan_period")]
    pub loan_period_days: u32,

    /// Number of entries in the dashboard activity feed.
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether `init` loads the sample catalogue.
    #[serde(default)]
    pub seed_on_init: bool,
}

fn default_loan_period() -> u32 {
    crate::fsm::LOAN_PERIOD_DAYS
}

fn default_recent_activity_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loan_period_days: default_loan_period(),
            recent_activity_limit: default_recent_activity_limit(),
            output_format: OutputFormat::default(),
            seed_on_init: false,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.stacks/config.toml`
    /// 3. Environment variables with `STACKS_` prefix
    ///
    /// # Arguments
    ///
    /// * `stacks_dir` - Path to the `.stacks` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(stacks_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = stacks_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `STACKS_LOAN_PERIOD_DAYS` - Loan period in days
    /// - `STACKS_RECENT_ACTIVITY_LIMIT` - Activity feed length
    /// - `STACKS_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `STACKS_SEED_ON_INIT` - Seed sample data on init (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("STACKS_LOAN_PERIOD_DAYS") {
            self.loan_period_days = val.parse().map_err(|_| {
                Error::InvalidConfig("STACKS_LOAN_PERIOD_DAYS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("STACKS_RECENT_ACTIVITY_LIMIT") {
            self.recent_activity_limit = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "STACKS_RECENT_ACTIVITY_LIMIT must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("STACKS_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "STACKS_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("STACKS_SEED_ON_INIT") {
            self.seed_on_init = val.parse().map_err(|_| {
                Error::InvalidConfig("STACKS_SEED_ON_INIT must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `loan_period_days` or `recent_activity_limit` is
    /// zero.
    fn validate(&self) -> Result<()> {
        if self.loan_period_days == 0 {
            return Err(Error::InvalidConfig(
                "loan_period_days must be greater than 0".to_string(),
            ));
        }

        if self.recent_activity_limit == 0 {
            return Err(Error::InvalidConfig(
                "recent_activity_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Saves the configuration to `config.toml` in `stacks_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, stacks_dir: &Path) -> Result<()> {
        let config_path = stacks_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process-wide; serialize the tests that touch them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("STACKS_LOAN_PERIOD_DAYS");
        std::env::remove_var("STACKS_RECENT_ACTIVITY_LIMIT");
        std::env::remove_var("STACKS_OUTPUT_FORMAT");
        std::env::remove_var("STACKS_SEED_ON_INIT");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.loan_period_days, 14);
        assert_eq!(config.recent_activity_limit, 5);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(!config.seed_on_init);
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.loan_period_days, 14);
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
loan_period_days = 21
recent_activity_limit = 10
output_format = "json"
seed_on_init = true
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.loan_period_days, 21);
        assert_eq!(config.recent_activity_limit, 10);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.seed_on_init);
    }

    #[test]
    fn test_config_validation_zero_period() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "loan_period_days = 0").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_env_override_period() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "loan_period_days = 7").unwrap();

        std::env::set_var("STACKS_LOAN_PERIOD_DAYS", "30");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.loan_period_days, 30);

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_invalid_format() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("STACKS_OUTPUT_FORMAT", "yaml");
        assert!(Config::load(temp_dir.path()).is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            loan_period_days: 10,
            recent_activity_limit: 3,
            output_format: OutputFormat::Plain,
            seed_on_init: true,
        };
        original.save(temp_dir.path()).unwrap();

        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.loan_period_days, 10);
        assert_eq!(loaded.recent_activity_limit, 3);
        assert_eq!(loaded.output_format, OutputFormat::Plain);
        assert!(loaded.seed_on_init);
    }
}

//! Configuration loading and validation.

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Report filename cannot be empty")]
    EmptyReportFilename,

    #[error("Invalid report filename: {0}. Must be a bare file name")]
    InvalidReportFilename(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. proctor.yaml in the working directory (optional)
    /// 3. Environment variables (`PROCTOR_*` prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("proctor.yaml"))
            .merge(Env::prefixed("PROCTOR_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Unlike the conventional lookup, an explicitly named file must
    /// exist.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .extract()
            .context(format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }

        if config.report_filename.is_empty() {
            return Err(ConfigError::EmptyReportFilename);
        }

        if config.report_filename.chars().any(std::path::is_separator) {
            return Err(ConfigError::InvalidReportFilename(
                config.report_filename.clone(),
            ));
        }

        for entry in &config.suite {
            if entry.name.is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "Suite entry name cannot be empty".to_string(),
                ));
            }
            if entry.name.chars().any(std::path::is_separator) {
                return Err(ConfigError::ValidationFailed(format!(
                    "Suite entry '{}' must be a bare file name",
                    entry.name
                )));
            }
        }

        Ok(())
    }
}

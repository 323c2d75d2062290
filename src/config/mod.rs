//! Configuration management
//!
//! This module handles loading, validation, and management of the permission checker configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PermissionError, Result};
use crate::utils::logging::LogLevel;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable prefix
const ENV_PREFIX: &str = "PERMCHECK_";

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;

        let app: AppConfig = serde_yaml::from_str(&content)
            .map_err(|e| PermissionError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from `PERMCHECK_*` environment variables
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        let _ = dotenvy::dotenv();

        let mut app = AppConfig::default();

        if let Some(value) = env_var("SKIP_UNKNOWN_MANAGERS") {
            app.permissions.skip_unknown_managers = parse_bool(&value)?;
        }
        if let Some(value) = env_var("LANGUAGE") {
            app.locale.language = value;
        }
        if let Some(value) = env_var("CATALOG") {
            app.locale.catalog_path = Some(PathBuf::from(value));
        }
        if let Some(value) = env_var("LOG_LEVEL") {
            app.logging.level = value.parse::<LogLevel>()?;
        }
        if let Some(value) = env_var("LOG_JSON") {
            app.logging.json = parse_bool(&value)?;
        }

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Get permission checker configuration
    pub fn permissions(&self) -> &PermissionsConfig {
        &self.app.permissions
    }

    /// Get locale configuration
    pub fn locale(&self) -> &LocaleConfig {
        &self.app.locale
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.app.validate().map_err(PermissionError::validation)
    }

    /// Merge with another configuration.
    ///
    /// Non-default values in `other` take precedence. Defaults never override, so a
    /// merge cannot switch a flag back off.
    pub fn merge(mut self, other: Self) -> Self {
        self.app.permissions = self.app.permissions.merge(other.app.permissions);
        self.app.locale = self.app.locale.merge(other.app.locale);
        self.app.logging = self.app.logging.merge(other.app.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app).map_err(|e| {
            PermissionError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(format!("{}{}", ENV_PREFIX, name))
        .ok()
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PermissionError::Config(format!(
            "Invalid boolean value: {}",
            value
        ))),
    }
}

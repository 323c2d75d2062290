//! Configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        self.permissions
            .validate()
            .map_err(|e| format!("Permissions config error: {}", e))?;
        self.locale
            .validate()
            .map_err(|e| format!("Locale config error: {}", e))?;
        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;
        Ok(())
    }
}

impl Validate for PermissionsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.skip_unknown_managers {
            debug!("Unknown permission managers will be skipped");
        }
        Ok(())
    }
}

impl Validate for LocaleConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating locale configuration");

        if self.language.is_empty() {
            return Err("Language cannot be empty".to_string());
        }

        if !self
            .language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!("Invalid language code: {}", self.language));
        }

        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err("Catalog path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

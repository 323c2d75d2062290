//! Configuration data models
//!
//! This module defines all configuration structures used throughout the crate.

#![allow(missing_docs)]

pub mod locale;
pub mod logging;
pub mod permissions;

// Re-export all configuration types
pub use locale::*;
pub use logging::*;
pub use permissions::*;

use serde::{Deserialize, Serialize};

/// Top-level configuration as it appears in the YAML file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Permission evaluation settings
    #[serde(default)]
    pub permissions: PermissionsConfig,
    /// Role translation settings
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default language code
pub fn default_language() -> String {
    "en".to_string()
}

//! Locale configuration for role translations

use super::default_language;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Message catalog selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Language code of the catalog
    #[serde(default = "default_language")]
    pub language: String,
    /// Optional YAML catalog; the bundled English messages are used when absent
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            catalog_path: None,
        }
    }
}

impl LocaleConfig {
    /// Merge locale configurations; the default language in `other` is ignored
    pub fn merge(mut self, other: Self) -> Self {
        if other.language != default_language() {
            self.language = other.language;
        }
        if other.catalog_path.is_some() {
            self.catalog_path = other.catalog_path;
        }
        self
    }
}

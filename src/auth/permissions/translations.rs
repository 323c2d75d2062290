//! Message lookup for role labels

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::config::LocaleConfig;
use crate::utils::error::{PermissionError, Result};

/// Resolves a message key to display text
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

const ENGLISH_MESSAGES: &[(&str, &str)] = &[
    ("permission.admin", "Admin"),
    (
        "permission.adminDescription",
        "Can fully configure and edit workspaces and applications.",
    ),
    ("permission.member", "Member"),
    (
        "permission.memberDescription",
        "Can fully configure and edit applications.",
    ),
];

/// Flat key to message map for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    language: String,
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(language: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            language: language.into(),
            messages,
        }
    }

    /// Bundled English messages
    pub fn english() -> Self {
        let messages = ENGLISH_MESSAGES
            .iter()
            .map(|(key, message)| (key.to_string(), message.to_string()))
            .collect();
        Self::new("en", messages)
    }

    /// Parse a nested YAML document; nested keys are joined with `.`
    pub fn from_yaml_str(language: impl Into<String>, content: &str) -> Result<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(content)?;
        let mut messages = HashMap::new();
        flatten_messages("", &document, &mut messages)?;
        Ok(Self::new(language, messages))
    }

    /// Load a YAML catalog from disk
    pub async fn from_yaml_file<P: AsRef<Path>>(language: impl Into<String>, path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading message catalog from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            PermissionError::Config(format!("Failed to read message catalog: {}", e))
        })?;
        Self::from_yaml_str(language, &content)
    }

    /// Catalog selected by the locale configuration.
    ///
    /// Messages missing from a configured file fall back to the bundled English text.
    pub async fn from_config(config: &LocaleConfig) -> Result<Self> {
        let Some(path) = &config.catalog_path else {
            return Ok(Self::english());
        };

        let loaded = Self::from_yaml_file(config.language.clone(), path).await?;
        Ok(Self::english().overlay(loaded))
    }

    /// Entries of `other` replace ours; the language becomes `other`'s
    pub fn overlay(mut self, other: Self) -> Self {
        self.messages.extend(other.messages);
        self.language = other.language;
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(message) => message.to_string(),
            None => {
                debug!(language = %self.language, "Missing translation for '{}'", key);
                key.to_string()
            }
        }
    }
}

fn flatten_messages(
    prefix: &str,
    value: &serde_yaml::Value,
    out: &mut HashMap<String, String>,
) -> Result<()> {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, nested) in map {
                let key = key.as_str().ok_or_else(|| {
                    PermissionError::parsing(format!("Non-string message key under '{}'", prefix))
                })?;
                let full_key = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_messages(&full_key, nested, out)?;
            }
            Ok(())
        }
        serde_yaml::Value::String(message) => {
            out.insert(prefix.to_string(), message.clone());
            Ok(())
        }
        serde_yaml::Value::Null if prefix.is_empty() => Ok(()),
        _ => Err(PermissionError::parsing(format!(
            "Message '{}' must be a string",
            prefix
        ))),
    }
}

//! Registry of permission managers keyed by type

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::debug;

use super::managers::{PermissionManager, manager_for};
use super::translations::Translator;
use super::types::{PermissionManagerKind, RoleTranslation};
use crate::utils::error::{PermissionError, Result};

static DEFAULT_REGISTRY: Lazy<PermissionRegistry> = Lazy::new(PermissionRegistry::with_defaults);

/// Process-wide registry, built on first use and never modified
pub fn default_registry() -> &'static PermissionRegistry {
    &DEFAULT_REGISTRY
}

/// Lookup table from type key to manager
#[derive(Debug)]
pub struct PermissionRegistry {
    managers: BTreeMap<&'static str, Box<dyn PermissionManager>>,
}

impl PermissionRegistry {
    /// Registry holding one manager per [`PermissionManagerKind`]
    pub fn with_defaults() -> Self {
        Self::with_kinds(&PermissionManagerKind::ALL)
    }

    /// Registry restricted to the given kinds
    pub fn with_kinds(kinds: &[PermissionManagerKind]) -> Self {
        let managers: BTreeMap<_, _> = kinds
            .iter()
            .map(|kind| (kind.as_str(), manager_for(*kind)))
            .collect();

        debug!("Initialized permission registry with {} managers", managers.len());
        Self { managers }
    }

    /// Get a manager by type key
    pub fn get(&self, key: &str) -> Result<&dyn PermissionManager> {
        self.managers
            .get(key)
            .map(|manager| manager.as_ref())
            .ok_or_else(|| PermissionError::unknown_manager(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.managers.contains_key(key)
    }

    /// Registered type keys in lexical order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.managers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.managers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.managers.is_empty()
    }

    /// Managers sorted by their declared order; equal orders keep key order
    pub fn ordered(&self) -> Vec<&dyn PermissionManager> {
        let mut managers: Vec<&dyn PermissionManager> =
            self.managers.values().map(|m| m.as_ref()).collect();
        managers.sort_by_key(|m| m.order());
        managers
    }

    /// Role translations of every registered manager merged into one map
    pub fn roles_translations(&self, translator: &dyn Translator) -> BTreeMap<String, RoleTranslation> {
        self.ordered()
            .into_iter()
            .flat_map(|manager| manager.roles_translations(translator))
            .collect()
    }
}

impl Default for PermissionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

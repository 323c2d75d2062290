//! Permission checking across all managers of a workspace

use serde_json::Value;
use tracing::{debug, warn};

use super::managers::PermissionManager;
use super::registry::{PermissionRegistry, default_registry};
use super::types::{ActorState, PermissionObject, PermissionOutcome};
use crate::config::PermissionsConfig;
use crate::utils::error::{PermissionError, Result};

/// Consults the managers named by a workspace's permission objects
#[derive(Debug, Clone)]
pub struct PermissionChecker<'r> {
    registry: &'r PermissionRegistry,
    config: PermissionsConfig,
}

impl PermissionChecker<'static> {
    /// Checker backed by the process-wide registry
    pub fn new(config: PermissionsConfig) -> Self {
        Self::with_registry(default_registry(), config)
    }
}

impl<'r> PermissionChecker<'r> {
    pub fn with_registry(registry: &'r PermissionRegistry, config: PermissionsConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'r PermissionRegistry {
        self.registry
    }

    /// Evaluate `operation` against every permission object.
    ///
    /// Objects are consulted in manager order (ties keep the backend's order). The
    /// first `Allow` or `Deny` wins; when every manager abstains the result is a deny.
    pub fn evaluate(
        &self,
        objects: &[PermissionObject],
        operation: &str,
        context: Option<&Value>,
        actor: &ActorState,
    ) -> Result<PermissionOutcome> {
        let mut resolved = self.resolve(objects)?;
        resolved.sort_by_key(|(manager, _)| manager.order());

        for (manager, object) in resolved {
            let decision = manager.has_permission(&object.permissions, operation, context, actor)?;
            debug!(
                manager = manager.type_key(),
                operation,
                %decision,
                "Permission manager consulted"
            );

            if decision.is_definite() {
                return Ok(PermissionOutcome {
                    decision,
                    decided_by: Some(manager.kind()),
                });
            }
        }

        debug!(operation, "All permission managers abstained, denying");
        Ok(PermissionOutcome::default_deny())
    }

    /// `true` only when a manager explicitly allows the operation
    pub fn has_permission(
        &self,
        objects: &[PermissionObject],
        operation: &str,
        context: Option<&Value>,
        actor: &ActorState,
    ) -> Result<bool> {
        Ok(self.evaluate(objects, operation, context, actor)?.is_allowed())
    }

    fn resolve<'o>(
        &self,
        objects: &'o [PermissionObject],
    ) -> Result<Vec<(&'r dyn PermissionManager, &'o PermissionObject)>> {
        let mut resolved = Vec::with_capacity(objects.len());

        for object in objects {
            match self.registry.get(&object.name) {
                Ok(manager) => resolved.push((manager, object)),
                Err(PermissionError::UnknownManager(key)) if self.config.skip_unknown_managers => {
                    warn!("Skipping permissions of unknown manager '{}'", key);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(resolved)
    }
}

/// Parse the backend's permission list from JSON
pub fn parse_permission_objects(json: &str) -> Result<Vec<PermissionObject>> {
    Ok(serde_json::from_str(json)?)
}

//! Permission evaluation configuration

use serde::{Deserialize, Serialize};

/// Permission checker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Skip permission objects whose manager is not registered instead of failing
    #[serde(default)]
    pub skip_unknown_managers: bool,
}

impl PermissionsConfig {
    /// Merge permission configurations. `skip_unknown_managers` can only be turned on.
    pub fn merge(mut self, other: Self) -> Self {
        if other.skip_unknown_managers {
            self.skip_unknown_managers = true;
        }
        self
    }
}

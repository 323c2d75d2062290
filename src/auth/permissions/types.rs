//! Permission type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::PermissionError;

/// Answer of a single permission manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionDecision {
    /// The operation is explicitly allowed
    Allow,
    /// The operation is explicitly denied
    Deny,
    /// The manager has no opinion; the next manager is consulted
    Abstain,
}

impl PermissionDecision {
    /// `Allow` for `true`, `Deny` for `false`
    pub fn from_flag(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Deny }
    }

    /// Whether this decision ends the evaluation
    pub fn is_definite(&self) -> bool {
        !matches!(self, Self::Abstain)
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl fmt::Display for PermissionDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Deny => write!(f, "deny"),
            Self::Abstain => write!(f, "abstain"),
        }
    }
}

/// The fixed set of permission manager kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PermissionManagerKind {
    #[serde(rename = "core")]
    Core,
    #[serde(rename = "staff")]
    Staff,
    #[serde(rename = "member")]
    GroupMember,
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "setting_operation")]
    StaffOnlySetting,
}

impl PermissionManagerKind {
    /// Every registered kind
    pub const ALL: [PermissionManagerKind; 5] = [
        Self::Core,
        Self::Staff,
        Self::GroupMember,
        Self::Basic,
        Self::StaffOnlySetting,
    ];

    /// Type key used by the backend in permission objects
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Staff => "staff",
            Self::GroupMember => "member",
            Self::Basic => "basic",
            Self::StaffOnlySetting => "setting_operation",
        }
    }
}

impl fmt::Display for PermissionManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionManagerKind {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PermissionError::unknown_manager(s))
    }
}

/// State of the acting user that is not part of the permission payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorState {
    /// Whether the actor is instance staff
    #[serde(default)]
    pub is_staff: bool,
}

impl ActorState {
    pub fn staff() -> Self {
        Self { is_staff: true }
    }
}

/// One entry of the backend's permission list for a workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionObject {
    /// Type key of the manager that understands `permissions`
    pub name: String,
    /// Manager specific payload
    pub permissions: serde_json::Value,
}

impl PermissionObject {
    pub fn new(name: impl Into<String>, permissions: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            permissions,
        }
    }
}

/// Localized label for a role introduced by a manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTranslation {
    pub name: String,
    pub description: String,
}

/// Final result of consulting every manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionOutcome {
    /// Either `Allow` or `Deny`
    pub decision: PermissionDecision,
    /// Manager that gave the definite answer, `None` when everyone abstained
    pub decided_by: Option<PermissionManagerKind>,
}

impl PermissionOutcome {
    /// Outcome when no manager had an opinion
    pub fn default_deny() -> Self {
        Self {
            decision: PermissionDecision::Deny,
            decided_by: None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.decision.is_allowed()
    }
}

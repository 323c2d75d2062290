//! Permission manager implementations

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Debug;

use super::payload::{
    BasicPayload, CorePayload, MemberPayload, SettingOperationPayload, StaffPayload,
    parse_payload,
};
use super::translations::Translator;
use super::types::{ActorState, PermissionDecision, PermissionManagerKind, RoleTranslation};
use crate::utils::error::Result;

/// Role key of workspace admins
pub const ROLE_ADMIN: &str = "ADMIN";
/// Role key of regular workspace members
pub const ROLE_MEMBER: &str = "MEMBER";

/// Evaluates one kind of permission payload
pub trait PermissionManager: Send + Sync + Debug {
    fn kind(&self) -> PermissionManagerKind;

    /// Type key the backend uses for this manager
    fn type_key(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Priority among managers, lower values are consulted first
    fn order(&self) -> i32 {
        0
    }

    /// Labels for the roles this manager introduces
    fn roles_translations(&self, _translator: &dyn Translator) -> BTreeMap<String, RoleTranslation> {
        BTreeMap::new()
    }

    /// Decide on `operation` given this manager's payload.
    ///
    /// `context` is the object the operation targets, if any. Fails only when
    /// `permissions` does not match the manager's payload schema.
    fn has_permission(
        &self,
        permissions: &Value,
        operation: &str,
        context: Option<&Value>,
        actor: &ActorState,
    ) -> Result<PermissionDecision>;
}

/// Grants every operation listed in the payload
#[derive(Debug, Clone, Copy, Default)]
pub struct CorePermissionManager;

impl PermissionManager for CorePermissionManager {
    fn kind(&self) -> PermissionManagerKind {
        PermissionManagerKind::Core
    }

    fn has_permission(
        &self,
        permissions: &Value,
        operation: &str,
        _context: Option<&Value>,
        _actor: &ActorState,
    ) -> Result<PermissionDecision> {
        let payload: CorePayload = parse_payload(self.type_key(), permissions)?;
        if payload.includes(operation) {
            Ok(PermissionDecision::Allow)
        } else {
            Ok(PermissionDecision::Abstain)
        }
    }
}

/// Restricts the listed operations to staff, abstains on everything else
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffPermissionManager;

impl PermissionManager for StaffPermissionManager {
    fn kind(&self) -> PermissionManagerKind {
        PermissionManagerKind::Staff
    }

    fn has_permission(
        &self,
        permissions: &Value,
        operation: &str,
        _context: Option<&Value>,
        _actor: &ActorState,
    ) -> Result<PermissionDecision> {
        let payload: StaffPayload = parse_payload(self.type_key(), permissions)?;
        if payload.is_staff_only(operation) {
            Ok(PermissionDecision::from_flag(payload.is_staff))
        } else {
            Ok(PermissionDecision::Abstain)
        }
    }
}

/// Answers with the payload's truthiness; `null` abstains
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupMemberPermissionManager;

impl PermissionManager for GroupMemberPermissionManager {
    fn kind(&self) -> PermissionManagerKind {
        PermissionManagerKind::GroupMember
    }

    fn has_permission(
        &self,
        permissions: &Value,
        _operation: &str,
        _context: Option<&Value>,
        _actor: &ActorState,
    ) -> Result<PermissionDecision> {
        let payload: MemberPayload = parse_payload(self.type_key(), permissions)?;
        Ok(payload
            .membership()
            .map_or(PermissionDecision::Abstain, PermissionDecision::from_flag))
    }
}

/// Admin/member distinction: admin-only operations need `is_admin`, the rest are allowed
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicPermissionManager;

impl PermissionManager for BasicPermissionManager {
    fn kind(&self) -> PermissionManagerKind {
        PermissionManagerKind::Basic
    }

    fn roles_translations(&self, translator: &dyn Translator) -> BTreeMap<String, RoleTranslation> {
        let mut roles = BTreeMap::new();
        roles.insert(
            ROLE_ADMIN.to_string(),
            RoleTranslation {
                name: translator.translate("permission.admin"),
                description: translator.translate("permission.adminDescription"),
            },
        );
        roles.insert(
            ROLE_MEMBER.to_string(),
            RoleTranslation {
                name: translator.translate("permission.member"),
                description: translator.translate("permission.memberDescription"),
            },
        );
        roles
    }

    fn has_permission(
        &self,
        permissions: &Value,
        operation: &str,
        _context: Option<&Value>,
        _actor: &ActorState,
    ) -> Result<PermissionDecision> {
        let payload: BasicPayload = parse_payload(self.type_key(), permissions)?;
        if payload.is_admin_only(operation) {
            Ok(PermissionDecision::from_flag(payload.is_admin))
        } else {
            Ok(PermissionDecision::Allow)
        }
    }
}

/// Operations whose availability depends on an instance setting.
///
/// The payload says which operations everyone may run and which are limited to
/// staff; the staff flag is read from the actor at evaluation time, so toggling
/// it takes effect without refetching permissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffOnlySettingPermissionManager;

impl PermissionManager for StaffOnlySettingPermissionManager {
    fn kind(&self) -> PermissionManagerKind {
        PermissionManagerKind::StaffOnlySetting
    }

    fn has_permission(
        &self,
        permissions: &Value,
        operation: &str,
        _context: Option<&Value>,
        actor: &ActorState,
    ) -> Result<PermissionDecision> {
        let payload: SettingOperationPayload = parse_payload(self.type_key(), permissions)?;
        let always_allowed = payload.is_always_allowed(operation);
        let staff_only = payload.is_staff_only(operation);

        if !always_allowed && !staff_only {
            return Ok(PermissionDecision::Abstain);
        }

        Ok(PermissionDecision::from_flag(
            always_allowed || (staff_only && actor.is_staff),
        ))
    }
}

/// Instantiate the manager for `kind`
pub fn manager_for(kind: PermissionManagerKind) -> Box<dyn PermissionManager> {
    match kind {
        PermissionManagerKind::Core => Box::new(CorePermissionManager),
        PermissionManagerKind::Staff => Box::new(StaffPermissionManager),
        PermissionManagerKind::GroupMember => Box::new(GroupMemberPermissionManager),
        PermissionManagerKind::Basic => Box::new(BasicPermissionManager),
        PermissionManagerKind::StaffOnlySetting => Box::new(StaffOnlySettingPermissionManager),
    }
}

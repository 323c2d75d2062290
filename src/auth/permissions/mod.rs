//! Workspace permission managers
//!
//! The backend sends, per workspace, a list of permission objects. Each object names a
//! manager and carries a payload only that manager understands. Managers answer
//! Allow, Deny or Abstain; the [`PermissionChecker`] asks them in order and the first
//! definite answer wins.

mod checker;
mod managers;
mod payload;
mod registry;
mod translations;
mod types;

// Re-export public types and structs
pub use checker::{PermissionChecker, parse_permission_objects};
pub use managers::{
    BasicPermissionManager, CorePermissionManager, GroupMemberPermissionManager,
    PermissionManager, ROLE_ADMIN, ROLE_MEMBER, StaffOnlySettingPermissionManager,
    StaffPermissionManager, manager_for,
};
pub use payload::{BasicPayload, CorePayload, MemberPayload, SettingOperationPayload, StaffPayload};
pub use registry::{PermissionRegistry, default_registry};
pub use translations::{MessageCatalog, Translator};
pub use types::{
    ActorState, PermissionDecision, PermissionManagerKind, PermissionObject, PermissionOutcome,
    RoleTranslation,
};

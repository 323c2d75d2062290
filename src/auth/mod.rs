//! Authorization
//!
//! This module decides whether an actor may perform an operation within a workspace.

pub mod permissions;

// Re-export commonly used types
pub use permissions::{
    ActorState, MessageCatalog, PermissionChecker, PermissionDecision, PermissionManager,
    PermissionManagerKind, PermissionObject, PermissionOutcome, PermissionRegistry,
    RoleTranslation, Translator, default_registry,
};

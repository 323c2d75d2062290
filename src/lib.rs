//! # workspace-permissions
//!
//! Permission evaluation and field sorting for the front end of a no-code database.
//!
//! ## Features
//!
//! - **Permission managers**: `core`, `staff`, `member`, `basic` and `setting_operation`
//!   evaluators, each reading its own typed payload
//! - **Tri-state decisions**: Allow / Deny / Abstain, first definite answer wins
//! - **Role translations**: localized labels for the roles managers introduce
//! - **Field sorting**: duration and number comparators composed into multi-key sorts
//!
//! ## Quick Start
//!
//! ```rust
//! use workspace_permissions::auth::{ActorState, PermissionChecker, PermissionObject};
//! use workspace_permissions::config::PermissionsConfig;
//! use serde_json::json;
//!
//! let objects = vec![
//!     PermissionObject::new("core", json!(["list_workspaces"])),
//!     PermissionObject::new(
//!         "basic",
//!         json!({"admin_only_operations": ["update_workspace"], "is_admin": false}),
//!     ),
//! ];
//!
//! let checker = PermissionChecker::new(PermissionsConfig::default());
//! let actor = ActorState::default();
//! assert!(checker.has_permission(&objects, "list_workspaces", None, &actor).unwrap());
//! assert!(!checker.has_permission(&objects, "update_workspace", None, &actor).unwrap());
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod fields;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{PermissionError, Result};

pub use auth::{
    ActorState, MessageCatalog, PermissionChecker, PermissionDecision, PermissionManagerKind,
    PermissionObject, PermissionOutcome, PermissionRegistry, RoleTranslation, Translator,
};
pub use fields::{CellValue, DurationFormat, Field, Row, SortChain, SortOrder, ViewSort};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

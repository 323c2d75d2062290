//! Typed permission payloads
//!
//! Each manager reads its payload through one of these schemas so a shape mismatch
//! surfaces as [`PermissionError::InvalidPayload`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils::error::{PermissionError, Result};

/// Deserialize a manager payload, naming the manager in the error
pub(super) fn parse_payload<T: DeserializeOwned>(manager: &'static str, payload: &Value) -> Result<T> {
    T::deserialize(payload).map_err(|e| PermissionError::invalid_payload(manager, e.to_string()))
}

fn contains(operations: &[String], operation: &str) -> bool {
    operations.iter().any(|op| op == operation)
}

/// `core`: operations granted unconditionally
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct CorePayload {
    pub operations: Vec<String>,
}

impl CorePayload {
    pub fn includes(&self, operation: &str) -> bool {
        contains(&self.operations, operation)
    }
}

/// `staff`: operations reserved for instance staff
#[derive(Debug, Clone, Deserialize)]
pub struct StaffPayload {
    pub staff_only_operations: Vec<String>,
    pub is_staff: bool,
}

impl StaffPayload {
    pub fn is_staff_only(&self, operation: &str) -> bool {
        contains(&self.staff_only_operations, operation)
    }
}

/// `member`: membership marker, read by truthiness.
///
/// Only a real boolean is a definite answer; `null` and other falsy values carry
/// no opinion, any other value counts as membership.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct MemberPayload {
    pub value: Value,
}

impl MemberPayload {
    /// `Some(flag)` for a definite answer, `None` when the payload is falsy but not `false`
    pub fn membership(&self) -> Option<bool> {
        match &self.value {
            Value::Bool(flag) => Some(*flag),
            Value::Null => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) if s.is_empty() => None,
            _ => Some(true),
        }
    }
}

/// `basic`: operations reserved for workspace admins
#[derive(Debug, Clone, Deserialize)]
pub struct BasicPayload {
    pub admin_only_operations: Vec<String>,
    pub is_admin: bool,
}

impl BasicPayload {
    pub fn is_admin_only(&self, operation: &str) -> bool {
        contains(&self.admin_only_operations, operation)
    }
}

/// `setting_operation`: operations governed by instance settings
#[derive(Debug, Clone, Deserialize)]
pub struct SettingOperationPayload {
    pub always_allowed_operations: Vec<String>,
    pub staff_only_operations: Vec<String>,
}

impl SettingOperationPayload {
    pub fn is_always_allowed(&self, operation: &str) -> bool {
        contains(&self.always_allowed_operations, operation)
    }

    pub fn is_staff_only(&self, operation: &str) -> bool {
        contains(&self.staff_only_operations, operation)
    }
}

//! Test fixtures
//!
//! Permission lists are written as the backend sends them, as JSON text, so the
//! tests also exercise parsing.

use std::io::Write;
use tempfile::NamedTempFile;
use workspace_permissions::auth::PermissionObject;
use workspace_permissions::auth::permissions::parse_permission_objects;
use workspace_permissions::fields::Row;

/// Workspace seen by a regular member who is not an admin
pub fn member_workspace() -> Vec<PermissionObject> {
    let json = r#"[
        {"name": "core", "permissions": ["list_workspaces", "create_workspace"]},
        {"name": "setting_operation", "permissions": {
            "always_allowed_operations": ["list_applications"],
            "staff_only_operations": ["create_workspace_from_template"]
        }},
        {"name": "staff", "permissions": {
            "staff_only_operations": ["list_all_users"],
            "is_staff": false
        }},
        {"name": "basic", "permissions": {
            "admin_only_operations": ["update_workspace", "delete_workspace"],
            "is_admin": false
        }}
    ]"#;
    parse_permission_objects(json).expect("fixture permissions are valid")
}

/// Workspace whose only opinions come from the instance setting manager
pub fn staff_setting_workspace() -> Vec<PermissionObject> {
    let json = r#"[
        {"name": "setting_operation", "permissions": {
            "always_allowed_operations": [],
            "staff_only_operations": ["create_workspace"]
        }}
    ]"#;
    parse_permission_objects(json).expect("fixture permissions are valid")
}

/// Rows with a mixed duration column, ids 1..=7 in insertion order
pub fn duration_rows(field: &str) -> Vec<Row> {
    let json = format!(
        r#"[
            {{"id": 1, "order": "1.00000000000000000000", "{f}": 120}},
            {{"id": 2, "order": "2.00000000000000000000", "{f}": "0:1:0"}},
            {{"id": 3, "order": "3.00000000000000000000", "{f}": 86400}},
            {{"id": 4, "order": "4.00000000000000000000", "{f}": null}},
            {{"id": 5, "order": "5.00000000000000000000", "{f}": "2:0:0.123"}},
            {{"id": 6, "order": "6.00000000000000000000", "{f}": 3600}},
            {{"id": 7, "order": "7.00000000000000000000", "{f}": "1.12"}}
        ]"#,
        f = field
    );
    serde_json::from_str(&json).expect("fixture rows are valid")
}

/// Write `content` to a temporary file that lives as long as the handle
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

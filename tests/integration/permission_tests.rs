//! Permission checker integration tests
//!
//! Permission lists are parsed from backend JSON and evaluated through the
//! process-wide registry.

#[cfg(test)]
mod tests {
    use crate::common::{member_workspace, staff_setting_workspace, write_temp_file};
    use serde_json::json;
    use workspace_permissions::PermissionError;
    use workspace_permissions::auth::permissions::{ROLE_ADMIN, ROLE_MEMBER};
    use workspace_permissions::auth::{
        ActorState, MessageCatalog, PermissionChecker, PermissionDecision, PermissionManagerKind,
        PermissionObject, PermissionRegistry, default_registry,
    };
    use workspace_permissions::config::{LocaleConfig, PermissionsConfig};

    fn checker() -> PermissionChecker<'static> {
        PermissionChecker::new(PermissionsConfig::default())
    }

    // ==================== Member workspace ====================

    #[test]
    fn test_core_operations_allowed() {
        let objects = member_workspace();
        let actor = ActorState::default();

        let outcome = crate::assert_ok!(checker().evaluate(&objects, "list_workspaces", None, &actor));
        assert_eq!(outcome.decision, PermissionDecision::Allow);
        assert_eq!(outcome.decided_by, Some(PermissionManagerKind::Core));
    }

    #[test]
    fn test_setting_operation_always_allowed() {
        let objects = member_workspace();
        let outcome = checker()
            .evaluate(&objects, "list_applications", None, &ActorState::default())
            .unwrap();

        assert!(outcome.is_allowed());
        assert_eq!(outcome.decided_by, Some(PermissionManagerKind::StaffOnlySetting));
    }

    #[test]
    fn test_staff_only_operation_denied_for_non_staff() {
        let objects = member_workspace();
        let outcome = checker()
            .evaluate(&objects, "list_all_users", None, &ActorState::default())
            .unwrap();

        assert_eq!(outcome.decision, PermissionDecision::Deny);
        assert_eq!(outcome.decided_by, Some(PermissionManagerKind::Staff));
    }

    #[test]
    fn test_admin_only_operation_denied_for_member() {
        let objects = member_workspace();
        let actor = ActorState::default();

        assert!(!checker().has_permission(&objects, "update_workspace", None, &actor).unwrap());
        assert!(!checker().has_permission(&objects, "delete_workspace", None, &actor).unwrap());
    }

    #[test]
    fn test_basic_allows_everything_else() {
        let objects = member_workspace();
        let outcome = checker()
            .evaluate(&objects, "read_application", None, &ActorState::default())
            .unwrap();

        assert!(outcome.is_allowed());
        assert_eq!(outcome.decided_by, Some(PermissionManagerKind::Basic));
    }

    #[test]
    fn test_context_is_accepted() {
        let objects = member_workspace();
        let context = json!({"id": 42, "name": "Sales"});

        assert!(
            checker()
                .has_permission(&objects, "read_application", Some(&context), &ActorState::default())
                .unwrap()
        );
    }

    // ==================== Instance setting ====================

    #[test]
    fn test_staff_flag_read_at_evaluation_time() {
        let objects = staff_setting_workspace();
        let checker = checker();

        let mut actor = ActorState::default();
        assert!(!checker.has_permission(&objects, "create_workspace", None, &actor).unwrap());

        actor.is_staff = true;
        assert!(checker.has_permission(&objects, "create_workspace", None, &actor).unwrap());
    }

    #[test]
    fn test_everyone_abstains_denies() {
        let objects = staff_setting_workspace();
        let outcome = checker()
            .evaluate(&objects, "delete_workspace", None, &ActorState::staff())
            .unwrap();

        assert_eq!(outcome.decision, PermissionDecision::Deny);
        assert_eq!(outcome.decided_by, None);
    }

    #[test]
    fn test_empty_permission_list_denies() {
        let outcome = checker()
            .evaluate(&[], "list_workspaces", None, &ActorState::staff())
            .unwrap();

        assert!(!outcome.is_allowed());
        assert_eq!(outcome.decided_by, None);
    }

    // ==================== Unknown managers and bad payloads ====================

    #[test]
    fn test_unknown_manager_rejected() {
        let mut objects = member_workspace();
        objects.insert(0, PermissionObject::new("enterprise_roles", json!({})));

        let err = crate::assert_err!(checker().evaluate(
            &objects,
            "list_workspaces",
            None,
            &ActorState::default()
        ));
        assert!(matches!(err, PermissionError::UnknownManager(ref key) if key == "enterprise_roles"));
    }

    #[test]
    fn test_unknown_manager_skipped_when_configured() {
        let mut objects = member_workspace();
        objects.insert(0, PermissionObject::new("enterprise_roles", json!({})));

        let checker = PermissionChecker::new(PermissionsConfig {
            skip_unknown_managers: true,
        });
        assert!(
            checker
                .has_permission(&objects, "list_workspaces", None, &ActorState::default())
                .unwrap()
        );
    }

    #[test]
    fn test_restricted_registry() {
        let registry = PermissionRegistry::with_kinds(&[PermissionManagerKind::Basic]);
        let checker = PermissionChecker::with_registry(&registry, PermissionsConfig::default());

        let result = checker.evaluate(&member_workspace(), "list_workspaces", None, &ActorState::default());
        assert!(matches!(result, Err(PermissionError::UnknownManager(_))));
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let objects = vec![PermissionObject::new("core", json!({"operations": []}))];

        let err = checker()
            .evaluate(&objects, "list_workspaces", None, &ActorState::default())
            .unwrap_err();
        assert!(matches!(err, PermissionError::InvalidPayload { manager: "core", .. }));
        assert!(err.is_input_error());
    }

    // ==================== Role translations ====================

    #[test]
    fn test_default_roles_in_english() {
        let roles = default_registry().roles_translations(&MessageCatalog::english());

        assert_eq!(roles.len(), 2);
        assert_eq!(roles[ROLE_ADMIN].name, "Admin");
        assert_eq!(roles[ROLE_MEMBER].name, "Member");
        assert_eq!(
            roles[ROLE_MEMBER].description,
            "Can fully configure and edit applications."
        );
    }

    #[tokio::test]
    async fn test_roles_from_catalog_file() {
        let file = write_temp_file("permission:\n  admin: Beheerder\n  member: Lid\n");
        let locale = LocaleConfig {
            language: "nl".to_string(),
            catalog_path: Some(file.path().to_path_buf()),
        };

        let catalog = MessageCatalog::from_config(&locale).await.unwrap();
        assert_eq!(catalog.language(), "nl");

        let roles = default_registry().roles_translations(&catalog);
        assert_eq!(roles[ROLE_ADMIN].name, "Beheerder");
        assert_eq!(roles[ROLE_MEMBER].name, "Lid");
        // Missing keys fall back to English
        assert_eq!(
            roles[ROLE_ADMIN].description,
            "Can fully configure and edit workspaces and applications."
        );
    }

    #[tokio::test]
    async fn test_missing_catalog_file() {
        let locale = LocaleConfig {
            language: "nl".to_string(),
            catalog_path: Some("/nonexistent/catalog.yaml".into()),
        };

        let result = MessageCatalog::from_config(&locale).await;
        assert!(matches!(result, Err(PermissionError::Config(_))));
    }
}

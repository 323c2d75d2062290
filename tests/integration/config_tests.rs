//! Configuration integration tests
//!
//! A config file drives both the checker and the role labels.

#[cfg(test)]
mod tests {
    use crate::common::{member_workspace, write_temp_file};
    use serde_json::json;
    use workspace_permissions::auth::permissions::ROLE_ADMIN;
    use workspace_permissions::auth::{
        ActorState, MessageCatalog, PermissionChecker, PermissionObject, default_registry,
    };
    use workspace_permissions::config::{Config, Validate};
    use workspace_permissions::utils::LogLevel;
    use workspace_permissions::utils::logging::build_filter;

    #[tokio::test]
    async fn test_config_file_drives_checker_and_catalog() {
        let catalog = write_temp_file("permission:\n  admin: Administrateur\n");
        let config_file = write_temp_file(&format!(
            "permissions:\n  skip_unknown_managers: true\nlocale:\n  language: fr\n  catalog_path: {:?}\nlogging:\n  level: warn\n",
            catalog.path().display().to_string()
        ));

        let config = crate::assert_ok!(Config::from_file(config_file.path()).await);
        assert_eq!(config.logging().level, LogLevel::Warn);

        let mut objects = member_workspace();
        objects.push(PermissionObject::new("future_manager", json!(null)));
        let checker = PermissionChecker::new(config.permissions().clone());
        assert!(
            checker
                .has_permission(&objects, "create_workspace", None, &ActorState::default())
                .unwrap()
        );

        let catalog = MessageCatalog::from_config(config.locale()).await.unwrap();
        let roles = default_registry().roles_translations(&catalog);
        assert_eq!(roles[ROLE_ADMIN].name, "Administrateur");
    }

    #[tokio::test]
    async fn test_invalid_language_rejected() {
        let config_file = write_temp_file("locale:\n  language: \"en us\"\n");

        let err = crate::assert_err!(Config::from_file(config_file.path()).await);
        assert!(err.to_string().contains("Invalid language code"));
    }

    #[test]
    fn test_yaml_round_trip_validates() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        let app: workspace_permissions::config::AppConfig = serde_yaml::from_str(&yaml).unwrap();

        assert!(app.validate().is_ok());
        assert_eq!(app.locale.language, "en");
    }

    #[test]
    fn test_log_filter_follows_config() {
        let config = Config::default();
        let filter = build_filter(config.logging());

        // RUST_LOG may override the configured level in CI
        if std::env::var("RUST_LOG").is_err() {
            assert_eq!(filter.to_string(), "info");
        }
    }
}

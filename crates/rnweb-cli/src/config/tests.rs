#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::{CliError, SettingsError};
    use rnweb_config::Mode;
    use serial_test::serial;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_settings(dir: &Path, json: &str) {
        fs::write(dir.join(SETTINGS_FILE), json).unwrap();
    }

    fn clear_env() {
        unsafe {
            for key in ["MODE", "PUBLIC_URL", "OUTPUT_DIR", "SERVICE_WORKER", "ANALYZER"] {
                std::env::remove_var(format!("{ENV_PREFIX}{key}"));
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_without_sources() {
        clear_env();
        let dir = TempDir::new().unwrap();
        let settings = RnwebSettings::load(dir.path(), &SettingsOverrides::default()).unwrap();
        assert_eq!(settings, RnwebSettings::default());
        assert_eq!(settings.mode, Mode::Development);
        assert_eq!(settings.output_dir, PathBuf::from("web-build"));
        assert!(settings.service_worker);
    }

    #[test]
    #[serial]
    fn file_overrides_defaults() {
        clear_env();
        let dir = TempDir::new().unwrap();
        write_settings(
            dir.path(),
            r#"{
                "mode": "production",
                "publicUrl": "/app",
                "aliases": { "@assets": "./assets" },
                "analyzer": false
            }"#,
        );

        let settings = RnwebSettings::load(dir.path(), &SettingsOverrides::default()).unwrap();
        assert_eq!(settings.mode, Mode::Production);
        assert_eq!(settings.public_url, "/app");
        assert_eq!(settings.aliases["@assets"], "./assets");
        assert!(!settings.analyzer);
        assert!(settings.service_worker);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        clear_env();
        let dir = TempDir::new().unwrap();
        write_settings(dir.path(), r#"{ "publicUrl": "/from-file", "outputDir": "dist" }"#);

        unsafe {
            std::env::set_var("RNWEB_PUBLIC_URL", "/from-env");
            std::env::set_var("RNWEB_SERVICE_WORKER", "false");
        }
        let settings = RnwebSettings::load(dir.path(), &SettingsOverrides::default());
        clear_env();

        let settings = settings.unwrap();
        assert_eq!(settings.public_url, "/from-env");
        assert_eq!(settings.output_dir, PathBuf::from("dist"));
        assert!(!settings.service_worker);
    }

    #[test]
    #[serial]
    fn unrelated_prefixed_env_vars_are_ignored() {
        clear_env();
        let dir = TempDir::new().unwrap();
        unsafe {
            std::env::set_var("RNWEB_ALIASES", "nope");
            std::env::set_var("RNWEB_output_dir", "lower-case");
        }
        let settings = RnwebSettings::load(dir.path(), &SettingsOverrides::default());
        unsafe {
            std::env::remove_var("RNWEB_ALIASES");
            std::env::remove_var("RNWEB_output_dir");
        }

        let settings = settings.unwrap();
        assert!(settings.aliases.is_empty());
        assert_eq!(settings.output_dir, PathBuf::from("lower-case"));
    }

    #[test]
    #[serial]
    fn cli_overrides_env() {
        clear_env();
        let dir = TempDir::new().unwrap();
        unsafe {
            std::env::set_var("RNWEB_MODE", "production");
            std::env::set_var("RNWEB_PUBLIC_URL", "/from-env");
        }
        let overrides = SettingsOverrides {
            mode: Some(Mode::Development),
            ..Default::default()
        };
        let settings = RnwebSettings::load(dir.path(), &overrides);
        clear_env();

        let settings = settings.unwrap();
        assert_eq!(settings.mode, Mode::Development);
        assert_eq!(settings.public_url, "/from-env");
    }

    #[test]
    #[serial]
    fn unknown_file_keys_are_rejected() {
        clear_env();
        let dir = TempDir::new().unwrap();
        write_settings(dir.path(), r#"{ "entry": "index.js" }"#);
        let err = RnwebSettings::load(dir.path(), &SettingsOverrides::default()).unwrap_err();
        assert!(matches!(err, CliError::Settings(SettingsError::Invalid { .. })));
    }

    #[test]
    fn missing_project_root() {
        let err = RnwebSettings::load(Path::new("/definitely/not/here"), &SettingsOverrides::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Settings(SettingsError::ProjectRootNotFound(_))
        ));
    }

    #[test]
    fn overrides_serialize_only_set_fields() {
        let overrides = SettingsOverrides {
            public_url: Some("/x".into()),
            service_worker: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(&overrides).unwrap();
        assert_eq!(value, serde_json::json!({ "publicUrl": "/x", "serviceWorker": false }));
    }

    #[test]
    fn settings_feed_build_options() {
        let settings = RnwebSettings {
            output_dir: PathBuf::from("dist"),
            ..RnwebSettings::default()
        };
        let locations = settings.build_options("/project").locations();
        assert_eq!(locations.production.folder, PathBuf::from("/project/dist"));
    }
}

//! Tests for reading the project descriptor from disk.

use rnweb_config::{ConfigError, DescriptorReader, Locations, read_descriptor};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn write_app_json(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("app.json"), content).unwrap();
}

#[test]
fn reads_expo_section() {
    let dir = TempDir::new().unwrap();
    write_app_json(
        &dir,
        r##"{
  "expo": {
    "name": "Demo",
    "description": "A demo app",
    "slug": "demo",
    "sdkVersion": "31.0.0",
    "version": "1.0.0",
    "orientation": "portrait",
    "primaryColor": "#cccccc",
    "icon": "./assets/icon.png",
    "splash": { "image": "./assets/splash.png", "resizeMode": "contain" }
  }
}"##,
    );

    let descriptor = read_descriptor(dir.path()).unwrap();
    assert_eq!(descriptor.name().as_deref(), Some("Demo"));
    assert_eq!(descriptor.orientation, Some(json!("portrait")));
    assert_eq!(descriptor.icon, Some(json!("./assets/icon.png")));
    assert_eq!(
        descriptor.splash,
        Some(json!({ "image": "./assets/splash.png", "resizeMode": "contain" }))
    );
    assert!(descriptor.web.is_empty());
}

#[test]
fn missing_file_is_missing_descriptor() {
    let dir = TempDir::new().unwrap();
    match read_descriptor(dir.path()).unwrap_err() {
        ConfigError::MissingDescriptor { path } => assert!(path.ends_with("app.json")),
        other => panic!("expected MissingDescriptor, got {other:?}"),
    }
}

#[test]
fn invalid_json_is_malformed() {
    let dir = TempDir::new().unwrap();
    write_app_json(&dir, "{ \"expo\": { \"name\": ");
    let err = read_descriptor(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedDescriptor { .. }));
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn missing_section_is_malformed() {
    let dir = TempDir::new().unwrap();
    write_app_json(&dir, r#"{ "name": "Demo" }"#);
    let err = read_descriptor(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedDescriptor { .. }));
}

#[test]
fn inline_web_section_is_used() {
    let dir = TempDir::new().unwrap();
    write_app_json(&dir, r#"{ "expo": { "name": "Demo", "web": { "lang": "en" } } }"#);
    let descriptor = read_descriptor(dir.path()).unwrap();
    assert_eq!(descriptor.web.get("lang"), Some(&json!("en")));
}

#[test]
fn numeric_versions_and_null_web_are_accepted() {
    let dir = TempDir::new().unwrap();
    write_app_json(
        &dir,
        r#"{ "expo": { "name": "Demo", "version": 1, "sdkVersion": 31, "web": null } }"#,
    );
    fs::create_dir(dir.path().join("web")).unwrap();
    fs::write(dir.path().join("web/manifest.json"), r#"{ "display": "standalone" }"#).unwrap();

    let descriptor = read_descriptor(dir.path()).unwrap();
    assert_eq!(descriptor.version, Some(json!(1)));
    assert_eq!(descriptor.sdk_version, Some(json!(31)));
    assert_eq!(descriptor.web.get("display"), Some(&json!("standalone")));
}

#[test]
fn template_manifest_fills_missing_web_section() {
    let dir = TempDir::new().unwrap();
    write_app_json(&dir, r#"{ "expo": { "name": "Demo" } }"#);
    fs::create_dir(dir.path().join("web")).unwrap();
    fs::write(
        dir.path().join("web/manifest.json"),
        r#"{ "short_name": "Demo", "display": "standalone" }"#,
    )
    .unwrap();

    let descriptor = DescriptorReader::new(Locations::new(dir.path()))
        .read()
        .unwrap();
    assert_eq!(descriptor.web.get("display"), Some(&json!("standalone")));
}

#[test]
fn inline_web_section_wins_over_template_manifest() {
    let dir = TempDir::new().unwrap();
    write_app_json(&dir, r#"{ "expo": { "web": { "display": "fullscreen" } } }"#);
    fs::create_dir(dir.path().join("web")).unwrap();
    fs::write(
        dir.path().join("web/manifest.json"),
        r#"{ "display": "standalone" }"#,
    )
    .unwrap();

    let descriptor = read_descriptor(dir.path()).unwrap();
    assert_eq!(descriptor.web.get("display"), Some(&json!("fullscreen")));
}

#[test]
fn malformed_template_manifest_is_malformed_descriptor() {
    let dir = TempDir::new().unwrap();
    write_app_json(&dir, r#"{ "expo": { "name": "Demo" } }"#);
    fs::create_dir(dir.path().join("web")).unwrap();
    fs::write(dir.path().join("web/manifest.json"), "[1, 2").unwrap();

    match read_descriptor(dir.path()).unwrap_err() {
        ConfigError::MalformedDescriptor { path, .. } => {
            assert!(path.ends_with("web/manifest.json"))
        }
        other => panic!("expected MalformedDescriptor, got {other:?}"),
    }
}

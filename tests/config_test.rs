//! Integration tests for Settings loading from an explicit config file.
//!
//! An explicit file replaces the global XDG file, so these tests do not
//! depend on the machine's configuration.

use std::fs;

use tempfile::TempDir;

use sidefav::application::ApplicationError;
use sidefav::config::{Settings, SIDEBAR_PREFERENCES_DOMAIN};

#[test]
fn given_config_with_schemes_when_load_then_schemes_replace_defaults() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sidefav.toml");
    fs::write(
        &path,
        r#"
schemes = ["file:///", "nwnode://", "smb://"]
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.schemes, vec!["file:///", "nwnode://", "smb://"]);
    assert_eq!(settings.preferences_domain, SIDEBAR_PREFERENCES_DOMAIN);
}

#[test]
fn given_config_with_domain_when_load_then_domain_overridden() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sidefav.toml");
    fs::write(&path, "preferences_domain = \"com.example.sidebar\"\n").unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.preferences_domain, "com.example.sidebar");
    assert_eq!(settings.schemes, vec!["file:///", "nwnode://"]);
}

#[test]
fn given_malformed_toml_when_load_then_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sidefav.toml");
    fs::write(&path, "schemes = [unterminated\n").unwrap();

    // Act
    let result = Settings::load(Some(&path));

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_explicit_file_when_load_then_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("absent.toml");

    // Act
    let result = Settings::load(Some(&path));

    // Assert
    assert!(matches!(result, Err(ApplicationError::Config { ref message }) if message.contains("not found")));
}

#[test]
fn given_empty_schemes_when_load_then_config_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sidefav.toml");
    fs::write(&path, "schemes = []\n").unwrap();

    // Act
    let result = Settings::load(Some(&path));

    // Assert
    assert!(result.is_err());
}

#[test]
fn given_settings_when_rendering_toml_then_contains_fields() {
    // Arrange
    let settings = Settings::default();

    // Act
    let rendered = settings.to_toml().unwrap();

    // Assert
    assert!(rendered.contains("preferences_domain = \"com.apple.sidebarlists\""));
    assert!(rendered.contains("nwnode://"));
}

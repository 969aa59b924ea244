//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use lattice_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let err = load_from_path(Path::new("/tmp/nonexistent_lattice_config.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[workspace]
new_pane_url = "https://start.test"

[workspace.floating_pane]
toggle_keys = ["ctrl+space"]
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.workspace.new_pane_url, "https://start.test");
    assert_eq!(
        config.workspace.floating_pane.toggle_keys,
        vec!["ctrl+space".to_string()]
    );
    // Defaults preserved
    assert!((config.workspace.floating_pane.width_pct - 0.82).abs() < f64::EPSILON);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_with_invalid_values_returns_validation_error() {
    let err = load_from_str(
        r#"
[workspace.floating_pane.profiles.ftp]
url = "ftp://files.test"
keys = ["alt+t"]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lattice").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, crate::schema::LatticeConfig::default());
}

#[test]
fn default_config_path_ends_with_lattice() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("lattice/config.toml"));
    }
}

//! Tests for config

use super::*;
use std::io::Write;
use tempfile::TempDir;

/// Helper to write a config file into a fresh temp dir
fn create_temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("config.toml");
    let mut file = fs::File::create(&file_path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    (temp_dir, file_path)
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from(&temp_dir.path().join("absent.toml"));

    assert!(result.warning.is_none());
    assert_eq!(result.config.search, SearchSection::default());
}

#[test]
fn test_valid_file_is_loaded() {
    let (_temp_dir, path) = create_temp_config("[search]\nquiet_interval_ms = 300\n");
    let result = load_config_from(&path);

    assert!(result.warning.is_none());
    assert_eq!(result.config.search.quiet_interval_ms, 300);
}

#[test]
fn test_malformed_toml_returns_defaults_with_warning() {
    let (_temp_dir, path) = create_temp_config("[search\nquiet_interval_ms = 300");
    let result = load_config_from(&path);

    let warning = result.warning.expect("malformed config should warn");
    assert!(warning.starts_with("Invalid config"));
    assert_eq!(result.config.search, SearchSection::default());
}

#[test]
fn test_wrong_type_returns_defaults_with_warning() {
    let (_temp_dir, path) = create_temp_config("[search]\nquiet_interval_ms = \"fast\"\n");
    let result = load_config_from(&path);

    assert!(result.warning.is_some());
    assert_eq!(result.config.search.quiet_interval_ms, 500);
}

#[test]
fn test_unreadable_path_returns_defaults_with_warning() {
    // A directory exists but cannot be read as a file
    let temp_dir = TempDir::new().unwrap();
    let result = load_config_from(temp_dir.path());

    let warning = result.warning.expect("unreadable config should warn");
    assert!(warning.starts_with("Failed to read config"));
}

#[test]
fn test_config_path_consistency() {
    let path = get_config_path();
    assert_eq!(path, get_config_path());

    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("bkrs/config.toml") || path_str.ends_with("bkrs\\config.toml"),
        "Config path should end with bkrs/config.toml, got: {}",
        path_str
    );
}

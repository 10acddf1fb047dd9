//! Configuration tests

use super::*;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config.version, parsed.version);
    assert_eq!(config.registry.paths, parsed.registry.paths);
}

#[test]
fn test_config_from_file() {
    let mut config = Config::default();
    config.registry.paths = vec![PathBuf::from("/srv/descriptors")];
    config.output.chart_dir = PathBuf::from("/srv/charts");

    let temp_file = NamedTempFile::new().unwrap();
    config.save_to_file(temp_file.path()).unwrap();

    let loaded = Config::from_file(temp_file.path()).unwrap();
    assert_eq!(loaded.registry.paths, vec![PathBuf::from("/srv/descriptors")]);
    assert_eq!(loaded.output.chart_dir, PathBuf::from("/srv/charts"));
}

#[test]
fn test_missing_sections_use_defaults() {
    let config: Config = serde_yaml::from_str("version: \"1.0\"\n").unwrap();
    assert_eq!(config.output.chart_dir, PathBuf::from("./charts"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();
    assert!(config.validate().is_ok());

    config.registry.paths.clear();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.version = "2.0".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_expand_home_directory() {
    let mut config = Config::default();
    config.registry.paths = vec![PathBuf::from("~/descriptors")];
    config.expand_paths().unwrap();

    assert!(!config.registry.paths[0].starts_with("~"));
    assert!(config.registry.paths[0].ends_with("descriptors"));
}

#[test]
fn test_expand_environment_variables() {
    std::env::set_var("EDITOR_CHART_GEN_TEST_ROOT", "/opt/editor");

    let mut config = Config::default();
    config.registry.paths = vec![PathBuf::from("$EDITOR_CHART_GEN_TEST_ROOT/descriptors")];
    config.output.chart_dir = PathBuf::from("${EDITOR_CHART_GEN_TEST_ROOT}/charts");
    config.expand_paths().unwrap();

    assert_eq!(config.registry.paths, vec![PathBuf::from("/opt/editor/descriptors")]);
    assert_eq!(config.output.chart_dir, PathBuf::from("/opt/editor/charts"));
}

#[test]
fn test_expand_undefined_variable_fails() {
    let mut config = Config::default();
    config.registry.paths = vec![PathBuf::from("$EDITOR_CHART_GEN_UNDEFINED_VAR/descriptors")];
    assert!(config.expand_paths().is_err());
}

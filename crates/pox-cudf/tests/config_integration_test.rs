/// Integration tests for the configuration system
///
/// These tests verify that configuration is loaded correctly from files
/// and environment variables.

use pox_cudf::config::{Config, ConfigLoader, ConfigSource, DEFAULT_CRITERIA};
use pox_cudf::CudfError;
use std::env;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

// Tests that touch CUDF_* variables hold this lock
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cudf.json");
    fs::write(&path, r#"{"criteria": "-removed,-new", "verbosity": 3}"#).unwrap();

    let config = Config::build(Some(&path), false).unwrap();

    assert_eq!(config.criteria.as_str(), "-removed,-new");
    assert_eq!(config.criteria.bracketed(), "[-removed,-new]");
    assert_eq!(config.verbosity, 3);
    assert!(config.reduce);
    assert_eq!(config.source_of("criteria"), ConfigSource::File);
    assert_eq!(config.source_of("reduce"), ConfigSource::Default);
}

#[test]
fn test_config_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::build(Some(&dir.path().join("absent.json")), false).unwrap();

    assert_eq!(config.criteria.as_str(), DEFAULT_CRITERIA);
    assert_eq!(config.log_level(), log::LevelFilter::Warn);
}

#[test]
fn test_config_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cudf.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Config::build(Some(&path), false).unwrap_err();
    assert!(matches!(err, CudfError::Config(_)));
}

#[test]
fn test_config_environment_overrides_file() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cudf.json");
    fs::write(&path, r#"{"criteria": "-changed", "reduce": true}"#).unwrap();

    env::set_var("CUDF_CRITERIA", "-notuptodate");
    env::set_var("CUDF_REDUCE", "false");

    let config = Config::build(Some(&path), true);

    env::remove_var("CUDF_CRITERIA");
    env::remove_var("CUDF_REDUCE");

    let config = config.unwrap();
    assert_eq!(config.criteria.as_str(), "-notuptodate");
    assert!(!config.reduce);
    assert_eq!(
        config.source_of("criteria"),
        ConfigSource::Environment("CUDF_CRITERIA".to_string())
    );

    let loader = ConfigLoader::new(true);
    assert_eq!(loader.get_env_config("criteria"), None);
}

#[test]
fn test_config_invalid_environment_values() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    env::set_var("CUDF_REDUCE", "garbage");
    let reduce = Config::build(None, true);
    env::remove_var("CUDF_REDUCE");
    assert!(matches!(reduce, Err(CudfError::Config(_))));

    env::set_var("CUDF_VERBOSITY", "9");
    let verbosity = Config::build(None, true);
    env::remove_var("CUDF_VERBOSITY");
    assert!(matches!(verbosity, Err(CudfError::Config(_))));

    env::set_var("CUDF_REDUCE", "Off");
    env::set_var("CUDF_VERBOSITY", "4");
    let config = Config::build(None, true);
    env::remove_var("CUDF_REDUCE");
    env::remove_var("CUDF_VERBOSITY");

    let config = config.unwrap();
    assert!(!config.reduce);
    assert_eq!(config.log_level(), log::LevelFilter::Trace);
}

#[test]
fn test_config_file_verbosity_out_of_range() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cudf.json");
    fs::write(&path, r#"{"verbosity": 7}"#).unwrap();

    let err = Config::build(Some(&path), false).unwrap_err();
    assert!(matches!(err, CudfError::Config(_)));
}

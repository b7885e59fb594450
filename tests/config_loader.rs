use std::fs;

use tempfile::TempDir;
use usekit::config::{Config, ConfigError, LoggingConfig, SimulationConfig};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.logging.filter, "info");
    assert!(config.logging.ansi);
    assert_eq!(config.simulation.default_delay_ms, 50);
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("usekit/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[logging]
filter = "usekit=debug"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.logging,
        LoggingConfig {
            filter: "usekit=debug".to_string(),
            ansi: true,
        }
    );
    assert_eq!(config.simulation, SimulationConfig::default());
}

#[test]
fn test_full_file_round_trips_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[logging]
filter = "warn"
ansi = false

[simulation]
default_delay_ms = 250
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(!config.logging.ansi);
    assert_eq!(config.logging.filter, "warn");
    assert_eq!(config.simulation.default_delay_ms, 250);
}

#[test]
fn test_validation_fails_for_blank_filter() {
    let mut config = Config::default();
    config.logging.filter = "   ".to_string();

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("logging.filter"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_zero_delay_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[simulation]\ndefault_delay_ms = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_malformed_file_reports_parse_error_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[logging\nfilter = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

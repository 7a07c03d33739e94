//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use landview_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const ENV_VARS: [&str; 3] =
    ["LANDVIEW_FALLBACK_SPACING", "LANDVIEW_UNKNOWN_CLASS_COLOR", "LANDVIEW_FILL_OPACITY"];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", contents).unwrap();
    file
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = config_file("fallback_spacing = 0.0005\nfill_opacity = 0.6");
    env::set_var("LANDVIEW_FALLBACK_SPACING", "0.002");

    let config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();

    assert_eq!(config.fallback_spacing.value, 0.002);
    assert_eq!(config.fallback_spacing.source, ConfigSource::Environment);
    // Not set in the environment, so the file value stands
    assert_eq!(config.fill_opacity.value, 0.6);
    assert_eq!(config.fill_opacity.source, ConfigSource::File);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_values_are_ignored() {
    clear_env();
    env::set_var("LANDVIEW_FALLBACK_SPACING", "-1");
    env::set_var("LANDVIEW_UNKNOWN_CLASS_COLOR", "grey");
    env::set_var("LANDVIEW_FILL_OPACITY", "lots");

    let config = LayeredConfig::with_defaults().load_from_env();

    assert_eq!(config.fallback_spacing.value, 0.0001);
    assert_eq!(config.fallback_spacing.source, ConfigSource::Default);
    assert_eq!(config.unknown_class_color.value, "#666666");
    assert_eq!(config.fill_opacity.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_full_precedence_chain() {
    clear_env();
    let file = config_file("unknown_class_color = \"#111111\"");
    env::set_var("LANDVIEW_UNKNOWN_CLASS_COLOR", "#222222");

    let mut config =
        LayeredConfig::with_defaults().load_from_file(file.path()).unwrap().load_from_env();
    assert_eq!(config.unknown_class_color.value, "#222222");

    config.update_from_cli(CliConfigOverrides {
        unknown_class_color: Some("#333333".to_string()),
        ..Default::default()
    });

    assert_eq!(config.unknown_class_color.value, "#333333");
    assert_eq!(config.unknown_class_color.source, ConfigSource::Cli);

    clear_env();
}

#[test]
fn test_missing_file_is_config_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/landview.toml");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let file = config_file("fallback_spacing = [not toml");
    let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

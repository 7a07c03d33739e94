//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use landview_core::config::{parse_color, CliConfigOverrides, LayeredConfig};
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "landview.toml";

/// Resolve which config file to read, if any.
///
/// An explicit path is always used so a typo surfaces as an error; the
/// default file is only used when it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        }
    }
}

/// Load layered configuration from file and environment
pub fn load_config(config_path: Option<&Path>) -> Result<LayeredConfig> {
    let config = match config_path {
        Some(path) => LayeredConfig::with_defaults()
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?,
        None => LayeredConfig::with_defaults(),
    };

    Ok(config.load_from_env())
}

/// Load layered configuration with CLI overrides
pub fn load_config_with_overrides(
    config_path: Option<&Path>,
    overrides: CliConfigOverrides,
) -> Result<LayeredConfig> {
    let mut config = load_config(config_path)?;
    config.update_from_cli(overrides);
    Ok(config)
}

/// Collect the global configuration flags
pub fn overrides_from_cli(cli: &Cli) -> Result<CliConfigOverrides> {
    if let Some(spacing) = cli.fallback_spacing {
        anyhow::ensure!(
            spacing.is_finite() && spacing > 0.0,
            "--fallback-spacing must be positive, got {}",
            spacing
        );
    }

    if let Some(opacity) = cli.fill_opacity {
        anyhow::ensure!(
            (0.0..=1.0).contains(&opacity),
            "--fill-opacity must be between 0 and 1, got {}",
            opacity
        );
    }

    let unknown_class_color = cli
        .unknown_class_color
        .as_deref()
        .map(|color| parse_color("unknown_class_color", color))
        .transpose()?;

    Ok(CliConfigOverrides {
        fallback_spacing: cli.fallback_spacing,
        unknown_class_color,
        fill_opacity: cli.fill_opacity,
    })
}

/// Load the effective configuration for a parsed command line
pub fn load_for_cli(cli: &Cli) -> Result<LayeredConfig> {
    let path = resolve_config_path(cli.config.as_deref());
    load_config_with_overrides(path.as_deref(), overrides_from_cli(cli)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use landview_core::config::ConfigSource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_is_kept_even_if_missing() {
        let path = PathBuf::from("/nonexistent/landview.toml");
        assert_eq!(resolve_config_path(Some(&path)), Some(path));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/landview.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load configuration file"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("landview.toml");
        fs::write(&path, "fill_opacity = 0.5\nfallback_spacing = 0.001\n").unwrap();

        let cli = Cli::parse_from([
            "landview",
            "--config",
            path.to_str().unwrap(),
            "--fill-opacity",
            "0.25",
            "config",
        ]);
        let config = load_for_cli(&cli).unwrap();

        assert_eq!(config.fill_opacity.value, 0.25);
        assert_eq!(config.fill_opacity.source, ConfigSource::Cli);
        assert_eq!(config.fallback_spacing.source, ConfigSource::File);
    }

    #[test]
    fn test_invalid_cli_values_are_rejected() {
        let cli = Cli::parse_from(["landview", "--fill-opacity", "2", "config"]);
        assert!(overrides_from_cli(&cli).is_err());

        let cli = Cli::parse_from(["landview", "--unknown-class-color", "grey", "config"]);
        assert!(overrides_from_cli(&cli).is_err());

        let cli = Cli::parse_from(["landview", "--unknown-class-color", "#abc", "config"]);
        let overrides = overrides_from_cli(&cli).unwrap();
        assert_eq!(overrides.unknown_class_color.as_deref(), Some("#ABC"));
    }
}

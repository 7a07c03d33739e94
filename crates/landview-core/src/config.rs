use crate::error::{LandviewError, Result};
use crate::models::DEFAULT_GRID_SPACING;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::path::Path;

/// Colour for classes missing from the palette
pub const DEFAULT_UNKNOWN_CLASS_COLOR: &str = "#666666";

/// Opacity of the prediction fill layer
pub const DEFAULT_FILL_OPACITY: f64 = 0.8;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Landview
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub fallback_spacing: ConfigValue<f64>,
    pub unknown_class_color: ConfigValue<String>,
    pub fill_opacity: ConfigValue<f64>,
    /// Per-class colour overrides, file only
    pub class_colors: ConfigValue<BTreeMap<String, String>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            fallback_spacing: ConfigValue::new(DEFAULT_GRID_SPACING, ConfigSource::Default),
            unknown_class_color: ConfigValue::new(
                DEFAULT_UNKNOWN_CLASS_COLOR.to_string(),
                ConfigSource::Default,
            ),
            fill_opacity: ConfigValue::new(DEFAULT_FILL_OPACITY, ConfigSource::Default),
            class_colors: ConfigValue::new(BTreeMap::new(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| LandviewError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| LandviewError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(spacing) = file_config.fallback_spacing {
            let spacing = validate_spacing(spacing)?;
            self.fallback_spacing.update(spacing, ConfigSource::File);
        }

        if let Some(color) = file_config.unknown_class_color {
            let color = parse_color("unknown_class_color", &color)?;
            self.unknown_class_color.update(color, ConfigSource::File);
        }

        if let Some(opacity) = file_config.fill_opacity {
            let opacity = validate_opacity(opacity)?;
            self.fill_opacity.update(opacity, ConfigSource::File);
        }

        if let Some(colors) = file_config.class_colors {
            let mut validated = BTreeMap::new();
            for (class, color) in colors {
                let color = parse_color(&format!("class_colors.{}", class), &color)?;
                validated.insert(class, color);
            }
            self.class_colors.update(validated, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // LANDVIEW_FALLBACK_SPACING
        if let Ok(spacing_str) = env::var("LANDVIEW_FALLBACK_SPACING") {
            match parse_spacing(&spacing_str) {
                Ok(spacing) => self.fallback_spacing.update(spacing, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LANDVIEW_FALLBACK_SPACING value '{}': expected a positive number of degrees",
                    spacing_str
                ),
            }
        }

        // LANDVIEW_UNKNOWN_CLASS_COLOR
        if let Ok(color_str) = env::var("LANDVIEW_UNKNOWN_CLASS_COLOR") {
            match parse_color("unknown_class_color", &color_str) {
                Ok(color) => self.unknown_class_color.update(color, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LANDVIEW_UNKNOWN_CLASS_COLOR value '{}': expected #RGB or #RRGGBB",
                    color_str
                ),
            }
        }

        // LANDVIEW_FILL_OPACITY
        if let Ok(opacity_str) = env::var("LANDVIEW_FILL_OPACITY") {
            match parse_opacity(&opacity_str) {
                Ok(opacity) => self.fill_opacity.update(opacity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid LANDVIEW_FILL_OPACITY value '{}': expected a number between 0 and 1",
                    opacity_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(spacing) = overrides.fallback_spacing {
            self.fallback_spacing.update(spacing, ConfigSource::Cli);
        }

        if let Some(color) = overrides.unknown_class_color {
            self.unknown_class_color.update(color, ConfigSource::Cli);
        }

        if let Some(opacity) = overrides.fill_opacity {
            self.fill_opacity.update(opacity, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "fallback_spacing".to_string(),
            (self.fallback_spacing.value.to_string(), self.fallback_spacing.source),
        );

        map.insert(
            "unknown_class_color".to_string(),
            (self.unknown_class_color.value.clone(), self.unknown_class_color.source),
        );

        map.insert(
            "fill_opacity".to_string(),
            (self.fill_opacity.value.to_string(), self.fill_opacity.source),
        );

        let overrides = self
            .class_colors
            .value
            .iter()
            .map(|(class, color)| format!("{}={}", class, color))
            .collect::<Vec<_>>()
            .join(", ");
        map.insert("class_colors".to_string(), (overrides, self.class_colors.source));

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    fallback_spacing: Option<f64>,
    unknown_class_color: Option<String>,
    fill_opacity: Option<f64>,
    class_colors: Option<BTreeMap<String, String>>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub fallback_spacing: Option<f64>,
    pub unknown_class_color: Option<String>,
    pub fill_opacity: Option<f64>,
}

/// Parse a grid spacing in degrees from string
pub fn parse_spacing(s: &str) -> Result<f64> {
    let spacing = s.trim().parse::<f64>().map_err(|_| LandviewError::ConfigInvalid {
        key: "fallback_spacing".to_string(),
        reason: format!("Invalid spacing: {}. Use a number of degrees such as 0.0001", s),
    })?;
    validate_spacing(spacing)
}

fn validate_spacing(spacing: f64) -> Result<f64> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(spacing)
    } else {
        Err(LandviewError::ConfigInvalid {
            key: "fallback_spacing".to_string(),
            reason: format!("Spacing must be positive, got {}", spacing),
        })
    }
}

/// Parse a layer opacity from string
pub fn parse_opacity(s: &str) -> Result<f64> {
    let opacity = s.trim().parse::<f64>().map_err(|_| LandviewError::ConfigInvalid {
        key: "fill_opacity".to_string(),
        reason: format!("Invalid opacity: {}. Use a number between 0 and 1", s),
    })?;
    validate_opacity(opacity)
}

fn validate_opacity(opacity: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(LandviewError::ConfigInvalid {
            key: "fill_opacity".to_string(),
            reason: format!("Opacity must be between 0 and 1, got {}", opacity),
        })
    }
}

/// Parse a `#RGB` or `#RRGGBB` colour, normalised to upper case
pub fn parse_color(key: &str, s: &str) -> Result<String> {
    let trimmed = s.trim();
    let valid = trimmed
        .strip_prefix('#')
        .filter(|hex| matches!(hex.len(), 3 | 6))
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(LandviewError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("Invalid colour: {}. Use #RGB or #RRGGBB", s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.fallback_spacing.value, 0.0001);
        assert_eq!(config.fallback_spacing.source, ConfigSource::Default);
        assert_eq!(config.unknown_class_color.value, "#666666");
        assert_eq!(config.fill_opacity.value, 0.8);
        assert!(config.class_colors.value.is_empty());
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
fallback_spacing = 0.0005
unknown_class_color = "#123abc"
fill_opacity = 0.6

[class_colors]
Water = "#0000ff"
"##
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.fallback_spacing.value, 0.0005);
        assert_eq!(config.fallback_spacing.source, ConfigSource::File);
        assert_eq!(config.unknown_class_color.value, "#123ABC");
        assert_eq!(config.fill_opacity.value, 0.6);
        assert_eq!(config.class_colors.value["Water"], "#0000FF");
        assert_eq!(config.class_colors.source, ConfigSource::File);
    }

    #[test]
    fn test_file_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "fill_opacity = 1.5").unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LandviewError::ConfigInvalid { ref key, .. } if key == "fill_opacity"
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            fallback_spacing: Some(0.001),
            unknown_class_color: None,
            fill_opacity: Some(0.5),
        };

        config.update_from_cli(overrides);

        assert_eq!(config.fallback_spacing.value, 0.001);
        assert_eq!(config.fallback_spacing.source, ConfigSource::Cli);
        assert_eq!(config.fill_opacity.source, ConfigSource::Cli);
        // Still the default
        assert_eq!(config.unknown_class_color.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_spacing() {
        assert_eq!(parse_spacing("0.01").unwrap(), 0.01);
        assert_eq!(parse_spacing(" 1e-4 ").unwrap(), 0.0001);
        assert!(parse_spacing("0").is_err());
        assert!(parse_spacing("-0.1").is_err());
        assert!(parse_spacing("wide").is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("c", "#1a5bab").unwrap(), "#1A5BAB");
        assert_eq!(parse_color("c", "#fff").unwrap(), "#FFF");
        assert!(parse_color("c", "1A5BAB").is_err());
        assert!(parse_color("c", "#12345").is_err());
        assert!(parse_color("c", "#GGGGGG").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("fallback_spacing"));
        assert!(map.contains_key("unknown_class_color"));
        assert!(map.contains_key("fill_opacity"));
        assert!(map.contains_key("class_colors"));

        let (spacing_value, spacing_source) = &map["fallback_spacing"];
        assert_eq!(spacing_value, "0.0001");
        assert_eq!(*spacing_source, ConfigSource::Default);
    }
}

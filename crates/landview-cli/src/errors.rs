use console::style;
use landview_core::LandviewError;
use std::fmt;

/// Error with context and suggestions, printed at the top level
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Create error for an input file that does not exist
pub fn input_not_found(path: &str, command: &str) -> CliError {
    CliError::new("Input file not found")
        .with_context(format!("The specified input file does not exist.\n\nPath: {}", path))
        .with_suggestion("Check the file path and try again")
        .with_suggestion("Use absolute path or path relative to current directory")
        .with_help(format!("Run: landview {} --help", command))
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check landview.toml or the file passed with --config")
        .with_suggestion("Check LANDVIEW_* environment variables")
        .with_help("Run: landview config")
}

/// Create error for a drawing without a usable polygon
pub fn invalid_polygon(reason: &str) -> CliError {
    CliError::new("No usable polygon")
        .with_context(format!("Could not build a classification request.\n\nReason: {}", reason))
        .with_suggestion("Draw a polygon with at least three corners")
        .with_suggestion("Make sure the file holds a Polygon, not a Point or LineString")
        .with_help("Run: landview payload --help")
}

/// Create error for classifier output that is not a prediction list
pub fn invalid_predictions(reason: &str) -> CliError {
    CliError::new("Unreadable classifier output")
        .with_context(format!("Expected a prediction array or a response envelope.\n\n{}", reason))
        .with_suggestion("Pass the raw JSON returned by the classification service")
        .with_suggestion("Each point needs latitude, longitude, predicted_class and confidence")
        .with_help("Run: landview grid --help")
}

/// Create error for an input file that is not valid JSON
pub fn invalid_geojson(reason: &str) -> CliError {
    CliError::new("Unreadable GeoJSON")
        .with_context(format!("The input file is not valid JSON.\n\n{}", reason))
        .with_suggestion("Check the file for truncation or trailing commas")
        .with_suggestion("Export the drawing or boundary again as GeoJSON")
        .with_help("Run: landview --help")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    if let Some(cli_error) = error.downcast_ref::<CliError>() {
        return CliError {
            message: cli_error.message.clone(),
            context: cli_error.context.clone(),
            suggestions: cli_error.suggestions.clone(),
            help_command: cli_error.help_command.clone(),
        };
    }

    if let Some(domain) = error.chain().find_map(|e| e.downcast_ref::<LandviewError>()) {
        match domain {
            LandviewError::ConfigInvalid { key, reason } => return invalid_config(key, reason),
            LandviewError::InvalidPolygon { reason } => return invalid_polygon(reason),
            LandviewError::InvalidResponse { .. } => {
                return invalid_predictions(&domain.to_string())
            }
            LandviewError::Serialization(_) => return invalid_geojson(&domain.to_string()),
            _ => {}
        }
    }

    let message = format!("{:#}", error);
    if message.contains("No such file or directory") {
        CliError::new("File not found")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check the file path and try again")
    } else if message.to_lowercase().contains("permission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check file permissions")
    } else {
        CliError::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_domain_errors_get_suggestions() {
        let error = anyhow::Error::from(LandviewError::InvalidPolygon {
            reason: "Polygon must have at least 3 coordinates, got 2".to_string(),
        })
        .context("Failed to build request");

        let cli_error = from_anyhow(error);
        assert_eq!(cli_error.message, "No usable polygon");
        assert!(!cli_error.suggestions.is_empty());
    }

    #[test]
    fn test_json_syntax_errors_are_not_blamed_on_predictions() {
        let geojson = anyhow::Error::from(LandviewError::Serialization(
            "key must be a string at line 1 column 2".to_string(),
        ))
        .context("Failed to parse GeoJSON from area.geojson");
        assert_eq!(from_anyhow(geojson).message, "Unreadable GeoJSON");

        let predictions = anyhow::Error::from(LandviewError::InvalidResponse {
            reason: "expected a 'data' array".to_string(),
        });
        assert_eq!(from_anyhow(predictions).message, "Unreadable classifier output");
    }

    #[test]
    fn test_cli_error_passes_through() {
        let error = anyhow::Error::new(input_not_found("missing.json", "grid"));
        let cli_error = from_anyhow(error);
        assert_eq!(cli_error.message, "Input file not found");
        assert_eq!(cli_error.help_command.as_deref(), Some("Run: landview grid --help"));
    }

    #[test]
    fn test_missing_file_message() {
        let error = std::fs::read_to_string("/nonexistent/landview/input.json")
            .context("Failed to read input")
            .unwrap_err();
        assert_eq!(from_anyhow(error).message, "File not found");
    }
}

//! Error types for Landview

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LandviewError {
    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Classification payload errors
    #[error("Invalid polygon: {reason}")]
    InvalidPolygon { reason: String },

    #[error("Invalid API response: {reason}")]
    InvalidResponse { reason: String },

    // Map layer errors
    #[error("Layer '{layer}' references unknown source '{source_id}'")]
    LayerSourceMissing { layer: String, source_id: String },

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for LandviewError {
    fn from(err: serde_json::Error) -> Self {
        LandviewError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LandviewError>;

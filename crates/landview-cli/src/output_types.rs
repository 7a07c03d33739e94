use landview_geo::grid::GridSpacing;
use landview_geo::layers::Layer;
use serde::Serialize;
use std::collections::BTreeMap;

/// Output for bounds command
#[derive(Debug, Serialize)]
pub struct BoundsOutput {
    pub path: String,
    /// `[[west, south], [east, north]]`, or null when nothing was found
    pub bounds: Option<[[f64; 2]; 2]>,
    pub center: Option<[f64; 2]>,
    pub degenerate: bool,
}

/// Output for grid command
#[derive(Debug, Serialize)]
pub struct GridOutput {
    pub point_count: usize,
    pub spacing: f64,
    /// Inference diagnostics; absent when the spacing was given explicitly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inferred: Option<GridSpacing>,
    pub classes: Vec<ClassCount>,
    pub layers: Vec<Layer>,
    /// Where the FeatureCollection was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// The FeatureCollection itself when no output file was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<geojson::FeatureCollection>,
}

#[derive(Debug, Serialize)]
pub struct ClassCount {
    pub class: String,
    pub count: usize,
    pub color: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub config_file: Option<String>,
    pub values: BTreeMap<String, ConfigEntry>,
}

#[derive(Debug, Serialize)]
pub struct ConfigEntry {
    pub value: String,
    pub source: String,
}

//! Land-cover class colours and per-class summaries.

use std::collections::BTreeMap;

use landview_core::config::{LayeredConfig, DEFAULT_UNKNOWN_CLASS_COLOR};

use crate::models::PredictionPoint;

/// Legend colours for the land-cover classes
pub const LAND_COVER_COLORS: [(&str, &str); 9] = [
    ("Water", "#1A5BAB"),
    ("Trees", "#358221"),
    ("Flooded Vegetation", "#87D19E"),
    ("Crops", "#FFDB5C"),
    ("Built Area", "#ED022A"),
    ("Bare Ground", "#EDE9E4"),
    ("Snow/Ice", "#F2FAFF"),
    ("Clouds", "#C8C8C8"),
    ("Rangeland", "#C6AD8D"),
];

/// Maps class names to fill colours
#[derive(Debug, Clone, PartialEq)]
pub struct ClassPalette {
    colors: BTreeMap<String, String>,
    fallback: String,
}

impl Default for ClassPalette {
    fn default() -> Self {
        Self::land_cover()
    }
}

impl ClassPalette {
    /// An empty palette: every class gets `fallback`
    pub fn new(fallback: impl Into<String>) -> Self {
        Self { colors: BTreeMap::new(), fallback: fallback.into() }
    }

    /// The land-cover legend palette
    pub fn land_cover() -> Self {
        let mut palette = Self::new(DEFAULT_UNKNOWN_CLASS_COLOR);
        for (class, color) in LAND_COVER_COLORS {
            palette.set(class, color);
        }
        palette
    }

    /// The land-cover palette with configured overrides applied
    pub fn from_config(config: &LayeredConfig) -> Self {
        let mut palette = Self::land_cover();
        palette.fallback = config.unknown_class_color.value.clone();
        for (class, color) in &config.class_colors.value {
            palette.set(class.clone(), color.clone());
        }
        palette
    }

    pub fn set(&mut self, class: impl Into<String>, color: impl Into<String>) {
        self.colors.insert(class.into(), color.into());
    }

    /// Colour for a class, or the fallback colour for unknown classes
    pub fn color_for(&self, class: &str) -> &str {
        self.colors.get(class).map(String::as_str).unwrap_or(&self.fallback)
    }
}

/// Number of points per predicted class
pub fn class_counts(points: &[PredictionPoint]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for point in points {
        *counts.entry(point.predicted_class.clone()).or_insert(0) += 1;
    }
    counts
}

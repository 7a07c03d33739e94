//! Map overlay bookkeeping.
//!
//! A [`LayerSet`] is the overlay state of one map: GeoJSON sources keyed by
//! id, and the layers drawing them in paint order. Adding replaces whatever
//! had the same id and removing something absent is a no-op, so callers
//! never need to check for existence first.

use std::collections::BTreeMap;

use geojson::FeatureCollection;
use landview_core::config::DEFAULT_FILL_OPACITY;
use landview_core::error::{LandviewError, Result};
use serde::Serialize;

/// How a layer paints its source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerKind {
    /// Polygon fill, coloured from a feature property
    Fill { color_property: String, opacity: f64 },
    /// Outline with a fixed colour
    Line { color: String, width: f64, opacity: f64 },
}

/// A map layer drawing one source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub id: String,
    pub source: String,
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl Layer {
    pub fn new(id: impl Into<String>, source: impl Into<String>, kind: LayerKind) -> Self {
        Self { id: id.into(), source: source.into(), kind }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayerSet {
    sources: BTreeMap<String, FeatureCollection>,
    layers: Vec<Layer>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a source. Returns true if a source was replaced.
    pub fn add_source(&mut self, id: impl Into<String>, data: FeatureCollection) -> bool {
        self.sources.insert(id.into(), data).is_some()
    }

    pub fn has_source(&self, id: &str) -> bool {
        self.sources.contains_key(id)
    }

    /// Add a layer on top, or replace a layer with the same id in place.
    ///
    /// The layer's source must already be present.
    pub fn add_layer(&mut self, layer: Layer) -> Result<()> {
        if !self.sources.contains_key(&layer.source) {
            return Err(LandviewError::LayerSourceMissing {
                layer: layer.id,
                source_id: layer.source,
            });
        }

        match self.layers.iter_mut().find(|existing| existing.id == layer.id) {
            Some(existing) => *existing = layer,
            None => self.layers.push(layer),
        }
        Ok(())
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Layers in paint order, bottom first
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Remove a layer. Returns true if it was present.
    pub fn remove_layer(&mut self, id: &str) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.id != id);
        self.layers.len() != before
    }

    /// Remove a source and every layer drawing it. Returns true if the
    /// source was present.
    pub fn remove_source(&mut self, id: &str) -> bool {
        self.layers.retain(|layer| layer.source != id);
        self.sources.remove(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty() && self.layers.is_empty()
    }
}

/// The classified-grid overlay: one source, a fill layer, and an optional
/// outline layer
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOverlay {
    pub fill_opacity: f64,
    pub stroke: bool,
}

impl Default for PredictionOverlay {
    fn default() -> Self {
        Self { fill_opacity: DEFAULT_FILL_OPACITY, stroke: false }
    }
}

impl PredictionOverlay {
    pub const SOURCE_ID: &'static str = "predictions";
    pub const FILL_LAYER_ID: &'static str = "prediction-grids";
    pub const STROKE_LAYER_ID: &'static str = "prediction-grid-stroke";

    pub fn new(fill_opacity: f64) -> Self {
        Self { fill_opacity, ..Default::default() }
    }

    pub fn with_stroke(mut self, stroke: bool) -> Self {
        self.stroke = stroke;
        self
    }

    /// Replace any previous prediction overlay with `data`
    pub fn apply(&self, layers: &mut LayerSet, data: FeatureCollection) -> Result<()> {
        self.clear(layers);
        layers.add_source(Self::SOURCE_ID, data);

        layers.add_layer(Layer::new(
            Self::FILL_LAYER_ID,
            Self::SOURCE_ID,
            LayerKind::Fill { color_property: "color".to_string(), opacity: self.fill_opacity },
        ))?;

        if self.stroke {
            layers.add_layer(Layer::new(
                Self::STROKE_LAYER_ID,
                Self::SOURCE_ID,
                LayerKind::Line { color: "#000000".to_string(), width: 0.5, opacity: 0.8 },
            ))?;
        }

        Ok(())
    }

    /// Remove the prediction overlay if present
    pub fn clear(&self, layers: &mut LayerSet) {
        layers.remove_layer(Self::FILL_LAYER_ID);
        layers.remove_layer(Self::STROKE_LAYER_ID);
        layers.remove_source(Self::SOURCE_ID);
    }
}

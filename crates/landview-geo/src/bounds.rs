//! Viewport bounds for arbitrary GeoJSON.
//!
//! Bounds are best effort: anything that carries no readable coordinates
//! contributes nothing, and `None` is returned only when no coordinate was
//! visited at all. Callers treat `None` as "leave the viewport alone".

use crate::models::{BoundingBox, Coordinate, GeoJsonValue, Geometry};

/// Running per-axis min/max over visited coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsAccumulator {
    bbox: Option<BoundingBox>,
    visited: usize,
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit one coordinate
    pub fn extend(&mut self, coord: Coordinate) {
        self.visited += 1;
        match &mut self.bbox {
            Some(bbox) => bbox.extend(coord),
            None => self.bbox = Some(BoundingBox::from_coordinate(coord)),
        }
    }

    /// Visit every coordinate of a sequence
    pub fn extend_all<'a>(&mut self, coords: impl IntoIterator<Item = &'a Coordinate>) {
        for coord in coords {
            self.extend(*coord);
        }
    }

    /// Visit every coordinate of a geometry, at its GeoJSON nesting depth
    pub fn extend_geometry(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::Point { coordinates } => self.extend(*coordinates),
            Geometry::LineString { coordinates } | Geometry::MultiPoint { coordinates } => {
                self.extend_all(coordinates)
            }
            Geometry::Polygon { coordinates } | Geometry::MultiLineString { coordinates } => {
                for ring in coordinates {
                    self.extend_all(ring);
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    for ring in polygon {
                        self.extend_all(ring);
                    }
                }
            }
        }
    }

    /// Visit every geometry reachable from a GeoJSON value
    pub fn extend_value(&mut self, value: &GeoJsonValue) {
        match value {
            GeoJsonValue::FeatureCollection(collection) => {
                for feature in &collection.features {
                    if let Some(geometry) = &feature.geometry {
                        self.extend_geometry(geometry);
                    }
                }
            }
            GeoJsonValue::Feature(feature) => {
                if let Some(geometry) = &feature.geometry {
                    self.extend_geometry(geometry);
                }
            }
            GeoJsonValue::Geometry(geometry) => self.extend_geometry(geometry),
            GeoJsonValue::Unsupported { .. } => {}
        }
    }

    /// Fold another accumulator into this one
    pub fn merge(&mut self, other: &BoundsAccumulator) {
        self.visited += other.visited;
        self.bbox = match (self.bbox, other.bbox) {
            (Some(a), Some(b)) => Some(a.union(&b)),
            (a, b) => a.or(b),
        };
    }

    /// Number of coordinates visited so far
    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn finish(self) -> Option<BoundingBox> {
        self.bbox
    }
}

/// Compute the minimal bounding box enclosing every coordinate of a GeoJSON
/// value. Returns `None` when the value has no readable coordinates.
pub fn compute_bounds(value: &GeoJsonValue) -> Option<BoundingBox> {
    let mut accumulator = BoundsAccumulator::new();
    accumulator.extend_value(value);

    tracing::debug!(visited = accumulator.visited(), "Computed GeoJSON bounds");
    accumulator.finish()
}

/// Compute the bounding box of a single geometry
pub fn compute_geometry_bounds(geometry: &Geometry) -> Option<BoundingBox> {
    let mut accumulator = BoundsAccumulator::new();
    accumulator.extend_geometry(geometry);
    accumulator.finish()
}

//! Prediction grid construction.
//!
//! Classifier output is a set of points sampled on a roughly regular grid.
//! Each point is drawn as an axis-aligned square cell so the overlay reads
//! as a continuous classified surface instead of scattered markers.
//!
//! Spacing inference only looks at the first gap between the two smallest
//! distinct values on each axis. It assumes the points form a regular grid
//! and does not check uniformity, so irregular point sets can produce
//! overlapping or gapped cells.

use serde::Serialize;

use crate::models::{Coordinate, PredictionPoint};
use landview_core::models::DEFAULT_GRID_SPACING;

/// Spacing diagnostics for a point set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSpacing {
    /// Spacing used for cells: the smaller of the two axis spacings
    pub spacing: f64,
    pub lon_spacing: f64,
    pub lat_spacing: f64,
    /// Distinct longitudes seen
    pub lon_count: usize,
    /// Distinct latitudes seen
    pub lat_count: usize,
}

/// One square overlay cell centred on a prediction point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell {
    /// Closed ring: four corners counter-clockwise from the southwest,
    /// then the southwest corner again
    pub ring: [Coordinate; 5],
    pub predicted_class: String,
    pub confidence: f64,
    pub source: Coordinate,
}

impl GridCell {
    /// Build the cell for `point` with the given half spacing
    pub fn around(point: &PredictionPoint, half_spacing: f64) -> Self {
        let lon = point.longitude;
        let lat = point.latitude;
        let southwest = Coordinate::new(lon - half_spacing, lat - half_spacing);

        Self {
            ring: [
                southwest,
                Coordinate::new(lon + half_spacing, lat - half_spacing),
                Coordinate::new(lon + half_spacing, lat + half_spacing),
                Coordinate::new(lon - half_spacing, lat + half_spacing),
                southwest,
            ],
            predicted_class: point.predicted_class.clone(),
            confidence: point.confidence,
            source: point.coordinate(),
        }
    }

    /// Mean of the four distinct corners
    pub fn center(&self) -> Coordinate {
        let (lon, lat) = self.ring[..4]
            .iter()
            .fold((0.0, 0.0), |(lon, lat), corner| (lon + corner.lon, lat + corner.lat));
        Coordinate::new(lon / 4.0, lat / 4.0)
    }

    /// Convert to a geo::Polygon with no holes
    pub fn to_polygon(&self) -> geo::Polygon {
        let exterior: Vec<geo::Coord> =
            self.ring.iter().map(|c| geo::Coord { x: c.lon, y: c.lat }).collect();
        geo::Polygon::new(geo::LineString::new(exterior), vec![])
    }
}

fn distinct_sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

fn first_gap(sorted: &[f64], fallback: f64) -> f64 {
    match sorted {
        [first, second, ..] => second - first,
        _ => fallback,
    }
}

/// Work out the grid spacing of a point set, with full diagnostics.
///
/// `fallback` is used when fewer than two points are given and for any axis
/// with a single distinct value.
pub fn analyze_spacing(points: &[PredictionPoint], fallback: f64) -> GridSpacing {
    let lons = distinct_sorted(points.iter().map(|p| p.longitude));
    let lats = distinct_sorted(points.iter().map(|p| p.latitude));

    if points.len() < 2 {
        return GridSpacing {
            spacing: fallback,
            lon_spacing: fallback,
            lat_spacing: fallback,
            lon_count: lons.len(),
            lat_count: lats.len(),
        };
    }

    let lon_spacing = first_gap(&lons, fallback);
    let lat_spacing = first_gap(&lats, fallback);
    let spacing = lon_spacing.min(lat_spacing);

    tracing::debug!(
        spacing,
        lon_spacing,
        lat_spacing,
        lon_count = lons.len(),
        lat_count = lats.len(),
        "Calculated grid spacing"
    );

    GridSpacing {
        spacing,
        lon_spacing,
        lat_spacing,
        lon_count: lons.len(),
        lat_count: lats.len(),
    }
}

/// Infer the grid spacing with a caller-supplied fallback
pub fn infer_spacing_with_fallback(points: &[PredictionPoint], fallback: f64) -> f64 {
    analyze_spacing(points, fallback).spacing
}

/// Infer the grid spacing in degrees, falling back to [`DEFAULT_GRID_SPACING`]
pub fn infer_spacing(points: &[PredictionPoint]) -> f64 {
    infer_spacing_with_fallback(points, DEFAULT_GRID_SPACING)
}

/// Build one cell per point using a known spacing. Output order matches
/// input order.
pub fn build_grid_with_spacing(points: &[PredictionPoint], spacing: f64) -> Vec<GridCell> {
    let half_spacing = spacing / 2.0;
    points.iter().map(|point| GridCell::around(point, half_spacing)).collect()
}

/// Build one cell per point with the inferred spacing
pub fn build_grid(points: &[PredictionPoint]) -> Vec<GridCell> {
    build_grid_with_spacing(points, infer_spacing(points))
}

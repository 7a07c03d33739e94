//! Geometry models for landview-geo.
//!
//! This module re-exports canonical types from `landview-core` and provides
//! conversions to the `geo` crate.

// Re-export canonical types from landview-core
pub use landview_core::models::{
    BoundingBox, Coordinate, Feature, FeatureCollection, GeoJsonValue, Geometry, GeometryType,
    PredictionPoint,
};

fn to_geo_coord(coord: Coordinate) -> geo::Coord {
    geo::Coord { x: coord.lon, y: coord.lat }
}

/// Extension trait for BoundingBox with geo-crate operations
pub trait BoundingBoxExt {
    /// Convert to geo::Rect
    fn to_rect(&self) -> geo::Rect;

    /// `[west, south, east, north]`, the GeoJSON `bbox` member
    fn to_geojson_bbox(&self) -> Vec<f64> {
        let rect = self.to_rect();
        vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]
    }
}

impl BoundingBoxExt for BoundingBox {
    fn to_rect(&self) -> geo::Rect {
        geo::Rect::new(to_geo_coord(self.southwest()), to_geo_coord(self.northeast()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_to_rect() {
        let bbox =
            BoundingBox::from_corners(Coordinate::new(69.0, 29.0), Coordinate::new(71.0, 31.0));
        let rect = bbox.to_rect();
        assert_eq!(rect.min(), geo::Coord { x: 69.0, y: 29.0 });
        assert_eq!(rect.max(), geo::Coord { x: 71.0, y: 31.0 });
        assert_eq!(bbox.to_geojson_bbox(), vec![69.0, 29.0, 71.0, 31.0]);
    }
}

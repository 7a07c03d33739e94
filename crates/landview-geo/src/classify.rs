//! Request and response handling for the polygon classification service.
//!
//! Nothing here talks to the network: requests are assembled from a drawn
//! polygon and responses are validated once the caller has fetched them.

use landview_core::error::{LandviewError, Result};
use landview_core::models::{ClassifyRequest, ClassifyResponse, PolygonCoordinate};
use serde_json::Value;

use crate::models::{Coordinate, GeoJsonValue, Geometry, PredictionPoint};

/// Minimum vertex count the classifier accepts
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Build a request from a polygon ring given as `[lon, lat]` coordinates.
///
/// A closed ring loses its repeated closing vertex; an open ring is used as
/// is.
pub fn request_from_ring(ring: &[Coordinate]) -> Result<ClassifyRequest> {
    let open = match ring {
        [first, .., last] if first == last => &ring[..ring.len() - 1],
        _ => ring,
    };

    if open.len() < MIN_POLYGON_VERTICES {
        return Err(LandviewError::InvalidPolygon {
            reason: format!(
                "Polygon must have at least {} coordinates, got {}",
                MIN_POLYGON_VERTICES,
                open.len()
            ),
        });
    }

    Ok(ClassifyRequest {
        polygon: open.iter().copied().map(PolygonCoordinate::from).collect(),
        year: None,
        scale: None,
        max_pixels: None,
    })
}

/// Build a request from the outer ring of the first Polygon in a GeoJSON value
pub fn request_from_geojson(value: &GeoJsonValue) -> Result<ClassifyRequest> {
    let exterior = value
        .geometries()
        .into_iter()
        .find_map(|geometry| match geometry {
            Geometry::Polygon { coordinates } => coordinates.first(),
            _ => None,
        })
        .ok_or_else(|| LandviewError::InvalidPolygon {
            reason: "No Polygon geometry found".to_string(),
        })?;

    request_from_ring(exterior)
}

/// Validate a classification response envelope
pub fn parse_response(value: &Value) -> Result<ClassifyResponse> {
    if !value.get("data").is_some_and(Value::is_array) {
        return Err(LandviewError::InvalidResponse {
            reason: "expected a 'data' array".to_string(),
        });
    }

    serde_json::from_value(value.clone())
        .map_err(|e| LandviewError::InvalidResponse { reason: e.to_string() })
}

/// Read prediction points from either a bare JSON array or a response
/// envelope
pub fn parse_predictions(text: &str) -> Result<Vec<PredictionPoint>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| LandviewError::InvalidResponse { reason: e.to_string() })?;

    if value.is_array() {
        return serde_json::from_value(value)
            .map_err(|e| LandviewError::InvalidResponse { reason: e.to_string() });
    }

    let response = parse_response(&value)?;
    if !response.success && !response.message.is_empty() {
        tracing::warn!(message = %response.message, "Classification service reported a failure");
    }
    Ok(response.data)
}

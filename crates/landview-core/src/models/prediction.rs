//! Land-cover classifier wire types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::geometry::Coordinate;

/// Grid spacing in degrees used when a point set is too small to infer one
pub const DEFAULT_GRID_SPACING: f64 = 0.0001;

/// One classified location returned by the classification service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub predicted_class: String,
    /// Classifier confidence in `[0, 1]`
    pub confidence: f64,
}

impl PredictionPoint {
    pub fn new(
        latitude: f64,
        longitude: f64,
        predicted_class: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self { latitude, longitude, predicted_class: predicted_class.into(), confidence }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.longitude, self.latitude)
    }
}

/// A polygon vertex in the classification request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl From<Coordinate> for PolygonCoordinate {
    fn from(coord: Coordinate) -> Self {
        Self { lat: coord.lat, lon: coord.lon }
    }
}

/// Body of a polygon classification request.
///
/// The polygon is an open ring: the closing vertex is not repeated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub polygon: Vec<PolygonCoordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Meters per pixel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pixels: Option<u64>,
}

/// Envelope returned by the classification service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Vec<PredictionPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_point_wire_format() {
        let point: PredictionPoint = serde_json::from_str(
            r#"{"latitude": 30.0, "longitude": 70.0, "predicted_class": "Water", "confidence": 0.9}"#,
        )
        .unwrap();

        assert_eq!(point, PredictionPoint::new(30.0, 70.0, "Water", 0.9));
        assert_eq!(point.coordinate(), Coordinate::new(70.0, 30.0));
    }

    #[test]
    fn test_request_omits_unset_options() {
        let request = ClassifyRequest {
            polygon: vec![PolygonCoordinate { lat: 31.5, lon: 74.3 }],
            year: None,
            scale: Some(10),
            max_pixels: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["polygon"][0]["lat"], 31.5);
        assert_eq!(json["scale"], 10);
        assert!(json.get("year").is_none());
    }
}

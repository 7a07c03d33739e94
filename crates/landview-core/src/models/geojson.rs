//! GeoJSON root values: bare geometries, features and feature collections.

use serde_json::{Map, Value};

use super::geometry::{Geometry, GeometryType};
use crate::error::Result;

/// A GeoJSON feature. The geometry is optional: features without a
/// readable geometry are kept so that collection order is preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub id: Option<Value>,
    pub geometry: Option<Geometry>,
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Create a feature with a geometry and no properties
    pub fn new(geometry: Geometry) -> Self {
        Self { id: None, geometry: Some(geometry), properties: Map::new() }
    }

    /// Leniently read a feature object. Never fails.
    pub fn from_json(value: &Value) -> Self {
        let geometry = value.get("geometry").and_then(Geometry::from_json);
        let properties =
            value.get("properties").and_then(Value::as_object).cloned().unwrap_or_default();
        let id = value.get("id").cloned();

        Self { id, geometry, properties }
    }
}

/// An ordered sequence of features
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

/// Any GeoJSON root value
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJsonValue {
    Feature(Feature),
    FeatureCollection(FeatureCollection),
    Geometry(Geometry),
    /// A value with nothing drawable in it: a missing or unknown `type`
    /// tag, or a geometry tag whose coordinates could not be read.
    Unsupported { type_tag: Option<String> },
}

impl GeoJsonValue {
    /// Leniently read any JSON value as GeoJSON.
    ///
    /// Structurally odd input degrades to empty collections, empty
    /// geometries or [`GeoJsonValue::Unsupported`]; it is never an error.
    pub fn from_json(value: &Value) -> Self {
        let type_tag = value.get("type").and_then(Value::as_str);

        match type_tag {
            Some("FeatureCollection") => {
                let features = value
                    .get("features")
                    .and_then(Value::as_array)
                    .map(|items| items.iter().map(Feature::from_json).collect())
                    .unwrap_or_default();
                GeoJsonValue::FeatureCollection(FeatureCollection { features })
            }
            Some("Feature") => GeoJsonValue::Feature(Feature::from_json(value)),
            Some(tag) if GeometryType::from_tag(tag).is_some() => match Geometry::from_json(value) {
                Some(geometry) => GeoJsonValue::Geometry(geometry),
                None => GeoJsonValue::Unsupported { type_tag: Some(tag.to_string()) },
            },
            other => {
                tracing::debug!(type_tag = ?other, "Ignoring unsupported GeoJSON value");
                GeoJsonValue::Unsupported { type_tag: other.map(str::to_string) }
            }
        }
    }

    /// Parse JSON text and read it leniently as GeoJSON.
    ///
    /// Only invalid JSON is an error.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_json(&value))
    }

    /// Geometries in document order, skipping features without one
    pub fn geometries(&self) -> Vec<&Geometry> {
        match self {
            GeoJsonValue::Feature(feature) => feature.geometry.iter().collect(),
            GeoJsonValue::FeatureCollection(collection) => {
                collection.features.iter().filter_map(|f| f.geometry.as_ref()).collect()
            }
            GeoJsonValue::Geometry(geometry) => vec![geometry],
            GeoJsonValue::Unsupported { .. } => Vec::new(),
        }
    }
}

impl From<Geometry> for GeoJsonValue {
    fn from(geometry: Geometry) -> Self {
        GeoJsonValue::Geometry(geometry)
    }
}

impl From<Feature> for GeoJsonValue {
    fn from(feature: Feature) -> Self {
        GeoJsonValue::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJsonValue {
    fn from(collection: FeatureCollection) -> Self {
        GeoJsonValue::FeatureCollection(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use serde_json::json;

    #[test]
    fn test_feature_collection_keeps_geometryless_features() {
        let value = GeoJsonValue::from_json(&json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null, "properties": {"name": "empty"}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [74.3, 31.5]}}
            ]
        }));

        let GeoJsonValue::FeatureCollection(collection) = &value else {
            panic!("Expected FeatureCollection");
        };
        assert_eq!(collection.features.len(), 2);
        assert!(collection.features[0].geometry.is_none());
        assert_eq!(collection.features[0].properties["name"], "empty");
        assert_eq!(value.geometries().len(), 1);
    }

    #[test]
    fn test_feature_id_and_properties() {
        let feature = Feature::from_json(&json!({
            "type": "Feature",
            "id": 7,
            "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
            "properties": {"district": "Lahore"}
        }));

        assert_eq!(feature.id, Some(json!(7)));
        assert_eq!(
            feature.geometry,
            Some(Geometry::line_string(vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)]))
        );
        assert_eq!(feature.properties["district"], "Lahore");
    }

    #[test]
    fn test_unknown_and_missing_tags() {
        assert_eq!(
            GeoJsonValue::from_json(&json!({"type": "Topology"})),
            GeoJsonValue::Unsupported { type_tag: Some("Topology".to_string()) }
        );
        assert_eq!(
            GeoJsonValue::from_json(&json!([1, 2, 3])),
            GeoJsonValue::Unsupported { type_tag: None }
        );
        assert_eq!(
            GeoJsonValue::from_json(&json!({"type": "Point"})),
            GeoJsonValue::Unsupported { type_tag: Some("Point".to_string()) }
        );
    }

    #[test]
    fn test_collection_without_features_is_empty() {
        let value = GeoJsonValue::from_json(&json!({"type": "FeatureCollection"}));
        assert_eq!(value, GeoJsonValue::FeatureCollection(FeatureCollection::default()));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(GeoJsonValue::parse("{not json").is_err());
        assert!(GeoJsonValue::parse(r#"{"type": "Point", "coordinates": [1, 2]}"#).is_ok());
    }
}

//! Canonical geometry types used across all landview crates.
//!
//! These types mirror the six GeoJSON geometry kinds. Besides the strict
//! serde mapping, [`Geometry::from_json`] reads arbitrary JSON leniently:
//! unreadable positions are skipped instead of failing the whole value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `(longitude, latitude)` pair in degrees. Altitude is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Read a GeoJSON position. Extra members (altitude) are ignored.
    ///
    /// Returns `None` for anything that is not an array starting with two
    /// finite numbers.
    pub fn from_position(value: &Value) -> Option<Self> {
        let members = value.as_array()?;
        let lon = members.first()?.as_f64()?;
        let lat = members.get(1)?.as_f64()?;
        if lon.is_finite() && lat.is_finite() {
            Some(Self::new(lon, lat))
        } else {
            None
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lon, coord.lat]
    }
}

/// Geometry type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    MultiPoint,
    Polygon,
    MultiLineString,
    MultiPolygon,
}

impl GeometryType {
    /// Match a GeoJSON `type` tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Point" => Some(GeometryType::Point),
            "LineString" => Some(GeometryType::LineString),
            "MultiPoint" => Some(GeometryType::MultiPoint),
            "Polygon" => Some(GeometryType::Polygon),
            "MultiLineString" => Some(GeometryType::MultiLineString),
            "MultiPolygon" => Some(GeometryType::MultiPolygon),
            _ => None,
        }
    }
}

/// GeoJSON-compatible geometry representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Coordinate,
    },
    LineString {
        coordinates: Vec<Coordinate>,
    },
    MultiPoint {
        coordinates: Vec<Coordinate>,
    },
    Polygon {
        coordinates: Vec<Vec<Coordinate>>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Coordinate>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Coordinate>>>,
    },
}

impl Geometry {
    /// Create a Point geometry
    pub fn point(lon: f64, lat: f64) -> Self {
        Geometry::Point { coordinates: Coordinate::new(lon, lat) }
    }

    /// Create a LineString geometry
    pub fn line_string(coords: Vec<Coordinate>) -> Self {
        Geometry::LineString { coordinates: coords }
    }

    /// Create a Polygon geometry
    pub fn polygon(rings: Vec<Vec<Coordinate>>) -> Self {
        Geometry::Polygon { coordinates: rings }
    }

    /// Get the geometry type
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point { .. } => GeometryType::Point,
            Geometry::LineString { .. } => GeometryType::LineString,
            Geometry::MultiPoint { .. } => GeometryType::MultiPoint,
            Geometry::Polygon { .. } => GeometryType::Polygon,
            Geometry::MultiLineString { .. } => GeometryType::MultiLineString,
            Geometry::MultiPolygon { .. } => GeometryType::MultiPolygon,
        }
    }

    /// Leniently read a GeoJSON geometry object.
    ///
    /// Missing or non-array `coordinates` yield an empty geometry of the
    /// tagged kind. A `Point` without a readable position and any unknown
    /// `type` tag yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let geometry_type = GeometryType::from_tag(value.get("type")?.as_str()?)?;
        let coordinates = value.get("coordinates");

        let geometry = match geometry_type {
            GeometryType::Point => Geometry::Point {
                coordinates: coordinates.and_then(Coordinate::from_position)?,
            },
            GeometryType::LineString => {
                Geometry::LineString { coordinates: read_positions(coordinates) }
            }
            GeometryType::MultiPoint => {
                Geometry::MultiPoint { coordinates: read_positions(coordinates) }
            }
            GeometryType::Polygon => Geometry::Polygon { coordinates: read_rings(coordinates) },
            GeometryType::MultiLineString => {
                Geometry::MultiLineString { coordinates: read_rings(coordinates) }
            }
            GeometryType::MultiPolygon => {
                Geometry::MultiPolygon { coordinates: read_polygons(coordinates) }
            }
        };

        Some(geometry)
    }
}

fn read_list(value: Option<&Value>) -> &[Value] {
    value.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

fn read_positions(value: Option<&Value>) -> Vec<Coordinate> {
    read_list(value).iter().filter_map(Coordinate::from_position).collect()
}

fn read_rings(value: Option<&Value>) -> Vec<Vec<Coordinate>> {
    read_list(value).iter().map(|ring| read_positions(Some(ring))).collect()
}

fn read_polygons(value: Option<&Value>) -> Vec<Vec<Vec<Coordinate>>> {
    read_list(value).iter().map(|polygon| read_rings(Some(polygon))).collect()
}

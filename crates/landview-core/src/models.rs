pub mod bounds;
pub mod geojson;
pub mod geometry;
pub mod prediction;

pub use bounds::BoundingBox;
pub use geojson::{Feature, FeatureCollection, GeoJsonValue};
pub use geometry::{Coordinate, Geometry, GeometryType};
pub use prediction::{
    ClassifyRequest, ClassifyResponse, PolygonCoordinate, PredictionPoint, DEFAULT_GRID_SPACING,
};

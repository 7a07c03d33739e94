//! GeoJSON output for prediction grids

use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, Value};

use crate::bounds::BoundsAccumulator;
use crate::grid::GridCell;
use crate::models::BoundingBoxExt;
use crate::palette::ClassPalette;

/// Render one cell as a Polygon feature with its display properties
pub fn cell_to_feature(index: usize, cell: &GridCell, palette: &ClassPalette) -> Feature {
    let ring: Vec<Vec<f64>> = cell.ring.iter().map(|c| vec![c.lon, c.lat]).collect();

    let mut properties = JsonObject::new();
    properties.insert("class".to_string(), cell.predicted_class.clone().into());
    properties.insert("confidence".to_string(), cell.confidence.into());
    properties.insert("color".to_string(), palette.color_for(&cell.predicted_class).into());
    properties.insert("longitude".to_string(), cell.source.lon.into());
    properties.insert("latitude".to_string(), cell.source.lat.into());

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: Some(Id::Number(index.into())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Hover text for a cell: class, confidence as a percentage, and the source
/// point as `lon, lat`
pub fn cell_summary(cell: &GridCell) -> String {
    format!(
        "Class: {}\nConfidence: {:.1}%\nCoordinates: {:.6}, {:.6}",
        cell.predicted_class,
        cell.confidence * 100.0,
        cell.source.lon,
        cell.source.lat
    )
}

/// Render a grid as a FeatureCollection. Feature ids are the cell indices
/// and the collection carries the bbox of all cells when there are any.
pub fn cells_to_feature_collection(
    cells: &[GridCell],
    palette: &ClassPalette,
) -> FeatureCollection {
    let mut bounds = BoundsAccumulator::new();
    for cell in cells {
        bounds.extend_all(&cell.ring);
    }

    FeatureCollection {
        bbox: bounds.finish().map(|bbox| bbox.to_geojson_bbox()),
        features: cells
            .iter()
            .enumerate()
            .map(|(index, cell)| cell_to_feature(index, cell, palette))
            .collect(),
        foreign_members: None,
    }
}

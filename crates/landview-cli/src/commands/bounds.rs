//! Bounds command implementation

use crate::cli::BoundsArgs;
use crate::output::OutputWriter;
use crate::output_types::BoundsOutput;
use anyhow::{Context, Result};
use landview_geo::bounds::compute_bounds;
use landview_geo::models::{BoundingBox, GeoJsonValue};

pub fn execute(args: BoundsArgs, output: &OutputWriter) -> Result<()> {
    let content = super::read_input(&args.path, "bounds")?;
    let value = GeoJsonValue::parse(&content)
        .with_context(|| format!("Failed to parse GeoJSON from {}", args.path.display()))?;

    if let GeoJsonValue::Unsupported { type_tag } = &value {
        output.warning(format!(
            "Unsupported GeoJSON type: {}",
            type_tag.as_deref().unwrap_or("(missing)")
        ));
    }

    let bbox = compute_bounds(&value);

    if output.is_json() {
        output.result(bounds_output(&args.path.display().to_string(), bbox.as_ref()))?;
        return Ok(());
    }

    match bbox {
        Some(bbox) => {
            let [southwest, northeast] = bbox.as_lng_lat_pairs();
            let center = bbox.center();

            output.section("Bounds");
            output.kv("Southwest", format!("{:.6}, {:.6}", southwest[0], southwest[1]));
            output.kv("Northeast", format!("{:.6}, {:.6}", northeast[0], northeast[1]));
            output.kv("Center", format!("{:.6}, {:.6}", center.lon, center.lat));
            output.kv("Size", format!("{:.6} x {:.6} degrees", bbox.width(), bbox.height()));

            if bbox.is_degenerate() {
                output.info("Bounds collapse to a single point or line");
            }
        }
        None => output.info("No coordinates found; viewport left unchanged"),
    }

    Ok(())
}

fn bounds_output(path: &str, bbox: Option<&BoundingBox>) -> BoundsOutput {
    BoundsOutput {
        path: path.to_string(),
        bounds: bbox.map(BoundingBox::as_lng_lat_pairs),
        center: bbox.map(|b| {
            let center = b.center();
            [center.lon, center.lat]
        }),
        degenerate: bbox.is_some_and(BoundingBox::is_degenerate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landview_geo::models::Coordinate;

    #[test]
    fn test_bounds_output() {
        let bbox = BoundingBox::from_corners(Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 4.0));
        let out = bounds_output("area.geojson", Some(&bbox));
        assert_eq!(out.bounds, Some([[0.0, 0.0], [2.0, 4.0]]));
        assert_eq!(out.center, Some([1.0, 2.0]));
        assert!(!out.degenerate);

        let empty = bounds_output("empty.geojson", None);
        let json = serde_json::to_value(&empty).unwrap();
        assert!(json["bounds"].is_null());
        assert_eq!(json["degenerate"], false);
    }
}

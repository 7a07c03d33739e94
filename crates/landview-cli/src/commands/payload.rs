//! Payload command implementation

use crate::cli::PayloadArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use landview_geo::classify::request_from_geojson;
use landview_geo::models::GeoJsonValue;

pub fn execute(args: PayloadArgs, output: &OutputWriter) -> Result<()> {
    let content = super::read_input(&args.path, "payload")?;
    let value = GeoJsonValue::parse(&content)
        .with_context(|| format!("Failed to parse GeoJSON from {}", args.path.display()))?;

    let mut request = request_from_geojson(&value)
        .with_context(|| format!("Failed to build request from {}", args.path.display()))?;
    request.year = args.year;
    request.scale = args.scale;
    request.max_pixels = args.max_pixels;

    tracing::debug!(vertices = request.polygon.len(), "Built classification request");

    output.result(request)
}

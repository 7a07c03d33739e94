//! Grid command implementation

use crate::cli::GridArgs;
use crate::output::OutputWriter;
use crate::output_types::{ClassCount, GridOutput};
use anyhow::{Context, Result};
use landview_core::config::LayeredConfig;
use landview_geo::classify::parse_predictions;
use landview_geo::grid::{analyze_spacing, build_grid_with_spacing};
use landview_geo::layers::{LayerSet, PredictionOverlay};
use landview_geo::palette::{class_counts, ClassPalette};
use landview_geo::render::cells_to_feature_collection;
use std::fs;
use tabled::Tabled;

#[derive(Tabled)]
struct ClassRow {
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Points")]
    count: usize,
    #[tabled(rename = "Color")]
    color: String,
}

pub fn execute(args: GridArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    if let Some(spacing) = args.spacing {
        anyhow::ensure!(
            spacing.is_finite() && spacing > 0.0,
            "--spacing must be positive, got {}",
            spacing
        );
    }

    let content = super::read_input(&args.path, "grid")?;
    let points = parse_predictions(&content)
        .with_context(|| format!("Failed to read predictions from {}", args.path.display()))?;

    if points.is_empty() {
        output.warning("No prediction points; the grid will be empty");
    }

    let (spacing, inferred) = match args.spacing {
        Some(spacing) => (spacing, None),
        None => {
            let analysis = analyze_spacing(&points, config.fallback_spacing.value);
            (analysis.spacing, Some(analysis))
        }
    };

    let cells = build_grid_with_spacing(&points, spacing);
    tracing::info!(spacing, cells = cells.len(), "Built prediction grid");
    let palette = ClassPalette::from_config(config);
    let collection = cells_to_feature_collection(&cells, &palette);

    let mut layers = LayerSet::new();
    PredictionOverlay::new(config.fill_opacity.value)
        .with_stroke(args.stroke)
        .apply(&mut layers, collection.clone())?;

    let classes: Vec<ClassCount> = class_counts(&points)
        .into_iter()
        .map(|(class, count)| ClassCount {
            color: palette.color_for(&class).to_string(),
            class,
            count,
        })
        .collect();

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&collection)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write grid to {}", path.display()))?;
    }

    if output.is_json() {
        output.result(GridOutput {
            point_count: points.len(),
            spacing,
            inferred,
            classes,
            layers: layers.layers().to_vec(),
            output: args.output.as_ref().map(|p| p.display().to_string()),
            features: args.output.is_none().then_some(collection),
        })?;
        return Ok(());
    }

    // Without an output file, stdout carries the GeoJSON alone
    let Some(path) = &args.output else {
        return output.data(&collection);
    };

    output.section("Prediction Grid");
    output.kv("Points", points.len());
    match inferred {
        Some(analysis) => {
            output.kv("Spacing", format!("{} degrees (inferred)", spacing));
            output.kv(
                "Distinct positions",
                format!("{} longitudes, {} latitudes", analysis.lon_count, analysis.lat_count),
            );
        }
        None => output.kv("Spacing", format!("{} degrees", spacing)),
    }
    output.kv("Fill opacity", config.fill_opacity.value);

    output.section("Classes");
    output.table(
        classes
            .into_iter()
            .map(|c| ClassRow { class: c.class, count: c.count, color: c.color })
            .collect(),
    );

    output.success(format!("Wrote {} cells to {}", cells.len(), path.display()));
    Ok(())
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Landview - Land-cover map overlays from classifier output
#[derive(Parser, Debug)]
#[command(name = "landview")]
#[command(about = "Land-cover map overlays from classifier output", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./landview.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Grid spacing in degrees used when it cannot be inferred
    #[arg(long, global = true, value_name = "DEG")]
    pub fallback_spacing: Option<f64>,

    /// Fill colour for classes missing from the palette (#RGB or #RRGGBB)
    #[arg(long, global = true, value_name = "COLOR")]
    pub unknown_class_color: Option<String>,

    /// Opacity of the prediction fill layer, between 0 and 1
    #[arg(long, global = true, value_name = "OPACITY")]
    pub fill_opacity: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the bounding box of a GeoJSON file
    Bounds(BoundsArgs),

    /// Build the prediction grid overlay from classifier output
    Grid(GridArgs),

    /// Build a classification request from the first polygon in a GeoJSON file
    Payload(PayloadArgs),

    /// Show effective configuration values and where they came from
    Config,
}

#[derive(Parser, Debug)]
pub struct BoundsArgs {
    /// GeoJSON file: FeatureCollection, Feature, or bare geometry
    pub path: PathBuf,
}

#[derive(Parser, Debug)]
pub struct GridArgs {
    /// Prediction points: a JSON array or a classifier response envelope
    pub path: PathBuf,

    /// Write the grid FeatureCollection here instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Use this cell spacing in degrees instead of inferring it
    #[arg(long, value_name = "DEG")]
    pub spacing: Option<f64>,

    /// Include the cell outline layer in the overlay description
    #[arg(long)]
    pub stroke: bool,
}

#[derive(Parser, Debug)]
pub struct PayloadArgs {
    /// GeoJSON file containing the drawn polygon
    pub path: PathBuf,

    /// Imagery year
    #[arg(long)]
    pub year: Option<u16>,

    /// Sampling scale in meters per pixel
    #[arg(long)]
    pub scale: Option<u32>,

    /// Upper bound on sampled pixels
    #[arg(long)]
    pub max_pixels: Option<u64>,
}

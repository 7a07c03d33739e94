//! Landview Geo - Viewport bounds, prediction grids, and map overlays
//!
//! This crate holds the geometric bookkeeping between the remote services
//! and the map: fitting the viewport to arbitrary GeoJSON, turning
//! classifier points into grid cells, and describing the overlay layers.

pub mod bounds;
pub mod classify;
pub mod grid;
pub mod layers;
pub mod models;
pub mod palette;
pub mod render;

pub use bounds::{compute_bounds, compute_geometry_bounds, BoundsAccumulator};
pub use grid::{analyze_spacing, build_grid, build_grid_with_spacing, infer_spacing, GridCell};

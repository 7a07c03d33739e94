//! Landview Core - Domain models, errors, and configuration
//!
//! This crate holds the GeoJSON and prediction models shared by the
//! geometry helpers and the command-line front end.

pub mod config;
pub mod error;
pub mod models;

pub use error::{LandviewError, Result};

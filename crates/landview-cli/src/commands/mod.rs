//! Command implementations

mod bounds;
mod config;
mod grid;
mod payload;

use crate::cli::{Cli, Commands};
use crate::config_loader;
use crate::errors;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = config_loader::load_for_cli(&cli)?;

    match cli.command {
        Commands::Bounds(args) => bounds::execute(args, &output),
        Commands::Grid(args) => grid::execute(args, &config, &output),
        Commands::Payload(args) => payload::execute(args, &output),
        Commands::Config => {
            let path = config_loader::resolve_config_path(cli.config.as_deref());
            config::execute(path.as_deref(), &config, &output)
        }
    }
}

/// Read an input file, reporting a missing file with suggestions
fn read_input(path: &Path, command: &str) -> Result<String> {
    if !path.exists() {
        return Err(errors::input_not_found(&path.display().to_string(), command).into());
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

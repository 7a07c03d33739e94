//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, ConfigOutput};
use anyhow::Result;
use landview_core::config::LayeredConfig;
use std::path::Path;
use tabled::Tabled;

#[derive(Tabled)]
struct ConfigRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Source")]
    source: String,
}

pub fn execute(
    config_path: Option<&Path>,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let values: std::collections::BTreeMap<String, ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| (key, ConfigEntry { value, source: format!("{:?}", source) }))
        .collect();

    if output.is_json() {
        return output.result(ConfigOutput {
            config_file: config_path.map(|p| p.display().to_string()),
            values,
        });
    }

    output.section("Configuration Values");
    match config_path {
        Some(path) => output.kv("Config file", path.display()),
        None => output.kv("Config file", "(none)"),
    }

    let rows: Vec<ConfigRow> = values
        .into_iter()
        .map(|(key, entry)| ConfigRow { key, value: entry.value, source: entry.source })
        .collect();
    output.table(rows);

    output.section("Configuration Precedence");
    output.info("CLI arguments > Environment variables > Config file > Defaults");

    Ok(())
}

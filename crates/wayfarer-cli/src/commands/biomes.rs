//! Biomes command handler.

use anyhow::{Context, Result};

use wayfarer_cli::dataset::DataSources;
use wayfarer_cli::output::OutputFormat;

/// Print the biome multipliers in effect, including any CSV overrides.
pub fn handle_biomes(sources: &DataSources, format: OutputFormat) -> Result<()> {
    let table = sources.biome_table()?;
    format
        .render_biomes(&table)
        .context("failed to write biome table")
}

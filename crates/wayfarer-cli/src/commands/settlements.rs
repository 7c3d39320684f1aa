//! Settlements command handler.

use anyhow::{Context, Result};

use wayfarer_cli::dataset::DataSources;
use wayfarer_cli::output::OutputFormat;

/// List every settlement in the dataset with its outgoing route counts.
pub fn handle_settlements(sources: &DataSources, format: OutputFormat) -> Result<()> {
    let graph = sources.load_graph()?;
    format
        .render_settlements(&graph)
        .context("failed to write settlement list")
}

//! Output formatting for journeys and listings.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use wayfarer_lib::{BiomeTable, Graph, JourneyRenderMode, JourneyResult};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable itinerary with per-leg details.
    #[default]
    Text,
    /// Markdown-flavoured itinerary.
    Rich,
    /// Two-line summary suitable for notes.
    Note,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Print a journey to stdout.
    ///
    /// # Errors
    /// Returns an error if JSON serialization or writing fails.
    pub fn render_journey(self, journey: &JourneyResult) -> io::Result<()> {
        let mode = match self {
            OutputFormat::Text => JourneyRenderMode::PlainText,
            OutputFormat::Rich => JourneyRenderMode::RichText,
            OutputFormat::Note => JourneyRenderMode::Note,
            OutputFormat::Json => return write_json(journey),
        };
        let mut stdout = io::stdout().lock();
        stdout.write_all(journey.render(mode).as_bytes())
    }

    /// Print every settlement of the graph, grouped by region.
    pub fn render_settlements(self, graph: &Graph) -> io::Result<()> {
        let rows = settlement_rows(graph);
        if self == OutputFormat::Json {
            return write_json(&rows);
        }

        let palette = ColorPalette::detect();
        let mut stdout = io::stdout().lock();
        if rows.is_empty() {
            writeln!(stdout, "No settlements in dataset.")?;
            return Ok(());
        }

        writeln!(stdout, "Settlements ({}):", rows.len())?;
        let mut current_region: Option<&str> = None;
        for row in &rows {
            if current_region != Some(row.region.as_str()) {
                writeln!(stdout, "{}{}{}", palette.heading, row.region, palette.reset)?;
                current_region = Some(row.region.as_str());
            }
            writeln!(
                stdout,
                "  {:<24} {}{} land{}, {}{} sea{}",
                row.name,
                palette.land,
                row.land_routes,
                palette.reset,
                palette.sea,
                row.sea_routes,
                palette.reset
            )?;
        }
        Ok(())
    }

    /// Print the effective biome multiplier table.
    pub fn render_biomes(self, table: &BiomeTable) -> io::Result<()> {
        let entries = table.entries_sorted();
        if self == OutputFormat::Json {
            let rows: Vec<BiomeRow<'_>> = entries
                .iter()
                .map(|(biome, multiplier)| BiomeRow {
                    biome,
                    multiplier: *multiplier,
                })
                .collect();
            return write_json(&rows);
        }

        let palette = ColorPalette::detect();
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "Biome multipliers ({}):", entries.len())?;
        writeln!(stdout, "{:<24} {:>10}", "Biome", "Multiplier")?;
        for (biome, multiplier) in entries {
            writeln!(
                stdout,
                "{:<24} {}{:>10.2}{}",
                biome,
                palette.for_multiplier(multiplier),
                multiplier,
                palette.reset
            )?;
        }
        writeln!(
            stdout,
            "{}Unlisted biomes use {:.2}; unmapped routes double the total.{}",
            palette.muted,
            wayfarer_lib::travel::DEFAULT_BIOME_MULTIPLIER,
            palette.reset
        )?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SettlementRow {
    name: String,
    region: String,
    land_routes: usize,
    sea_routes: usize,
}

#[derive(Debug, Serialize)]
struct BiomeRow<'a> {
    biome: &'a str,
    multiplier: f64,
}

/// Graph nodes sorted by region then name, with outgoing route counts.
fn settlement_rows(graph: &Graph) -> Vec<SettlementRow> {
    let mut rows: Vec<SettlementRow> = graph
        .nodes()
        .map(|node| {
            let edges = graph.neighbours(node);
            let land_routes = edges
                .iter()
                .filter(|edge| edge.kind() == wayfarer_lib::RouteKind::Land)
                .count();
            SettlementRow {
                name: node.name().to_string(),
                region: node.region().to_string(),
                land_routes,
                sea_routes: edges.len() - land_routes,
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        a.region
            .to_lowercase()
            .cmp(&b.region.to_lowercase())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    rows
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")
}

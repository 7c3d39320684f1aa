//! Route command handler for planning a journey between two settlements.

use anyhow::{anyhow, Context, Result};

use wayfarer_lib::{
    find_path, resolve_settlement, Error as RouteError, Graph, JourneyResult, Mount,
    RoutePreference, RouteRequest, Settlement, SettlementQuery, ShipType, TravelParams,
    WalkingPace,
};

use wayfarer_cli::dataset::DataSources;
use wayfarer_cli::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub from_region: Option<String>,
    pub to: String,
    pub to_region: Option<String>,
    pub preference: RoutePreference,
    /// Biomes no land leg may cross.
    pub avoid_biomes: Vec<String>,
    pub travelers: u32,
    pub pace: WalkingPace,
    pub mount: Option<Mount>,
    pub ship: Option<ShipType>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            origin: query(&self.from, self.from_region.as_deref()),
            destination: query(&self.to, self.to_region.as_deref()),
            preference: self.preference,
            avoid_biomes: self.avoid_biomes.clone(),
            travel: TravelParams {
                travelers: self.travelers,
                pace: self.pace,
                mount: self.mount,
                ship: self.ship,
            },
        }
    }
}

fn query(name: &str, region: Option<&str>) -> SettlementQuery {
    let query = SettlementQuery::named(name);
    match region {
        Some(region) => query.in_region(region),
        None => query,
    }
}

/// Which end of the journey a settlement query names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Origin,
    Destination,
}

impl Endpoint {
    fn region_flag(self) -> &'static str {
        match self {
            Endpoint::Origin => "--from-region",
            Endpoint::Destination => "--to-region",
        }
    }
}

/// Handle the route subcommand.
///
/// Loads the dataset, plans the journey and renders it. A journey that
/// cannot be completed is reported as an error so the exit status is
/// non-zero.
pub fn handle_route_command(
    sources: &DataSources,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let graph = sources.load_graph()?;
    let request = args.to_request();

    let origin = resolve_endpoint(&graph, &request.origin, Endpoint::Origin)?;
    let destination = resolve_endpoint(&graph, &request.destination, Endpoint::Destination)?;

    let journey = find_path(
        &graph,
        &origin,
        &destination,
        request.preference,
        &request.avoid_biomes,
        &request.travel,
    )?;
    if !journey.path_found() {
        return Err(anyhow!(format_route_not_found_message(&journey, args)));
    }

    format
        .render_journey(&journey)
        .context("failed to write journey")
}

fn resolve_endpoint(
    graph: &Graph,
    query: &SettlementQuery,
    endpoint: Endpoint,
) -> Result<Settlement> {
    resolve_settlement(graph, query).map_err(|err| handle_route_failure(endpoint, err))
}

fn handle_route_failure(endpoint: Endpoint, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownSettlement { name, suggestions } => {
            anyhow!(format_unknown_settlement_message(&name, &suggestions))
        }
        RouteError::AmbiguousSettlement { name, candidates } => anyhow!(
            "Settlement '{}' exists in several regions ({}). Pick one with {}.",
            name,
            candidates.join(", "),
            endpoint.region_flag()
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_settlement_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown settlement '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_route_not_found_message(journey: &JourneyResult, args: &RouteCommandArgs) -> String {
    let mut message = format!(
        "No route found between {} and {}.",
        journey.origin(),
        journey.destination()
    );
    let mut tips = Vec::new();
    if args.preference != RoutePreference::Mixed {
        tips.push("allow both land and sea routes (--prefer mixed)".to_string());
    }
    if !args.avoid_biomes.is_empty() {
        tips.push(format!("stop avoiding {}", args.avoid_biomes.join(", ")));
    }
    if tips.is_empty() {
        message.push_str(" The settlements are not connected in this dataset.");
    } else {
        message.push(' ');
        message.push_str(&format!("Try to {}.", tips.join(", or ")));
    }
    message
}

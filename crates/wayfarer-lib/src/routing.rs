use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::journey::{assemble_journey, JourneyResult};
use crate::model::Settlement;
use crate::path::{find_route_dijkstra, PathConstraints, PathOutcome, RoutePreference};
use crate::travel::TravelParams;

const MAX_SUGGESTIONS: usize = 3;

/// Find the lowest-weight journey between two settlements of `graph`.
///
/// Returns [`Error::UnknownSettlement`] when either endpoint is missing from
/// the graph. A search that cannot reach the destination is not an error: the
/// result reports `path_found() == false` with no segments.
pub fn find_path<I, S>(
    graph: &Graph,
    origin: &Settlement,
    destination: &Settlement,
    preference: RoutePreference,
    avoided_biomes: I,
    params: &TravelParams,
) -> Result<JourneyResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    params.validate()?;

    let constraints = PathConstraints::new(preference).avoiding(avoided_biomes);
    match find_route_dijkstra(graph, origin, destination, &constraints)? {
        PathOutcome::Found { edges, .. } => {
            Ok(assemble_journey(origin, destination, &edges, params))
        }
        PathOutcome::NoPath => Ok(JourneyResult::not_found(origin.clone(), destination.clone())),
    }
}

/// Settlement lookup by name, optionally narrowed to a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementQuery {
    pub name: String,
    pub region: Option<String>,
}

impl SettlementQuery {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: None,
        }
    }

    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

impl fmt::Display for SettlementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{} ({})", self.name, region),
            None => f.write_str(&self.name),
        }
    }
}

/// High-level journey planning request using settlement names.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: SettlementQuery,
    pub destination: SettlementQuery,
    pub preference: RoutePreference,
    pub avoid_biomes: Vec<String>,
    pub travel: TravelParams,
}

impl RouteRequest {
    /// Single traveler on foot, any route kind, no avoided biomes.
    pub fn between(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: SettlementQuery::named(origin),
            destination: SettlementQuery::named(destination),
            preference: RoutePreference::default(),
            avoid_biomes: Vec::new(),
            travel: TravelParams::default(),
        }
    }
}

/// Resolve a query to exactly one graph node.
pub fn resolve_settlement(graph: &Graph, query: &SettlementQuery) -> Result<Settlement> {
    let mut candidates = graph.settlements_named(&query.name);
    if let Some(region) = &query.region {
        candidates.retain(|candidate| candidate.in_region(region));
    }

    match candidates.as_slice() {
        [] => Err(Error::UnknownSettlement {
            name: query.to_string(),
            suggestions: graph.fuzzy_matches(&query.name, MAX_SUGGESTIONS),
        }),
        [only] => Ok((*only).clone()),
        many => Err(Error::AmbiguousSettlement {
            name: query.name.clone(),
            candidates: many.iter().map(|s| s.region().to_string()).collect(),
        }),
    }
}

/// Resolve the request's settlement names and compute the journey.
pub fn plan_journey(graph: &Graph, request: &RouteRequest) -> Result<JourneyResult> {
    let origin = resolve_settlement(graph, &request.origin)?;
    let destination = resolve_settlement(graph, &request.destination)?;

    debug!(
        %origin,
        %destination,
        preference = %request.preference,
        avoided = request.avoid_biomes.len(),
        "planning journey"
    );

    find_path(
        graph,
        &origin,
        &destination,
        request.preference,
        &request.avoid_biomes,
        &request.travel,
    )
}

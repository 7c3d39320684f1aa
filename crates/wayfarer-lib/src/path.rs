use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::model::{RouteKind, Settlement};
use crate::queue::MinHeap;
use crate::travel::normalize_biome;

/// Maximum number of suggestions attached to an unknown settlement error.
const MAX_SUGGESTIONS: usize = 3;

/// Which kinds of route the solver may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutePreference {
    #[default]
    Mixed,
    LandOnly,
    SeaOnly,
}

impl RoutePreference {
    pub fn allows(self, kind: RouteKind) -> bool {
        match self {
            RoutePreference::Mixed => true,
            RoutePreference::LandOnly => kind == RouteKind::Land,
            RoutePreference::SeaOnly => kind == RouteKind::Sea,
        }
    }
}

impl fmt::Display for RoutePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoutePreference::Mixed => "mixed",
            RoutePreference::LandOnly => "land only",
            RoutePreference::SeaOnly => "sea only",
        })
    }
}

/// Constraints applied during pathfinding.
#[derive(Debug, Default, Clone)]
pub struct PathConstraints {
    pub preference: RoutePreference,
    /// Normalised biome names a land edge must not cross.
    avoided_biomes: HashSet<String>,
}

impl PathConstraints {
    pub fn new(preference: RoutePreference) -> Self {
        Self {
            preference,
            avoided_biomes: HashSet::new(),
        }
    }

    /// Add biomes to avoid; matching ignores case and separator style.
    pub fn avoiding<I, S>(mut self, biomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.avoided_biomes
            .extend(biomes.into_iter().map(|b| normalize_biome(b.as_ref())));
        self
    }

    pub fn avoided_biomes(&self) -> &HashSet<String> {
        &self.avoided_biomes
    }

    fn allows(&self, edge: &Edge) -> bool {
        if !self.preference.allows(edge.kind()) {
            return false;
        }

        if self.avoided_biomes.is_empty() {
            return true;
        }

        !edge
            .route
            .segments()
            .iter()
            .any(|segment| self.avoided_biomes.contains(&normalize_biome(&segment.biome)))
    }
}

/// Result of a shortest path search between two known settlements.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    /// Edges from origin to destination and their summed weight. Empty when
    /// origin and destination are the same settlement.
    Found { edges: Vec<Edge>, distance: f64 },
    /// The search exhausted every reachable settlement.
    NoPath,
}

impl PathOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }

    pub fn edges(&self) -> &[Edge] {
        match self {
            PathOutcome::Found { edges, .. } => edges,
            PathOutcome::NoPath => &[],
        }
    }

    pub fn distance(&self) -> Option<f64> {
        match self {
            PathOutcome::Found { distance, .. } => Some(*distance),
            PathOutcome::NoPath => None,
        }
    }
}

/// Ensure `settlement` is a node of `graph`.
///
/// # Errors
/// Returns [`Error::UnknownSettlement`] with fuzzy suggestions otherwise.
pub fn require_node(graph: &Graph, settlement: &Settlement) -> Result<()> {
    if graph.contains(settlement) {
        return Ok(());
    }
    Err(Error::UnknownSettlement {
        name: settlement.to_string(),
        suggestions: graph.fuzzy_matches(settlement.name(), MAX_SUGGESTIONS),
    })
}

/// Run Dijkstra's algorithm to find the lowest-weight path that satisfies
/// the provided constraints.
///
/// Edge weights are non-negative by construction, so the search stops as
/// soon as the destination is removed from the queue.
pub fn find_route_dijkstra(
    graph: &Graph,
    origin: &Settlement,
    destination: &Settlement,
    constraints: &PathConstraints,
) -> Result<PathOutcome> {
    require_node(graph, origin)?;
    require_node(graph, destination)?;

    let mut distances: HashMap<Settlement, f64> = HashMap::new();
    let mut predecessors: HashMap<Settlement, Edge> = HashMap::new();
    let mut queue = MinHeap::new();

    distances.insert(origin.clone(), 0.0);
    queue.enqueue(origin.clone(), 0.0);

    let mut settled = 0usize;
    while !queue.is_empty() {
        let (current, current_distance) = queue.dequeue_min()?;
        settled += 1;

        if current == *destination {
            let edges = reconstruct_path(&predecessors, origin, destination);
            debug!(
                %origin,
                %destination,
                settled,
                hops = edges.len(),
                distance = current_distance,
                "shortest path found"
            );
            return Ok(PathOutcome::Found {
                edges,
                distance: current_distance,
            });
        }

        for edge in graph.neighbours(&current) {
            if !constraints.allows(edge) {
                continue;
            }

            // An overflowing weight is still an edge: an unseen node is
            // relaxed even when its tentative distance is infinite.
            let next_distance = current_distance + edge.weight;
            let improves = match distances.get(&edge.destination) {
                Some(&known) => next_distance < known,
                None => true,
            };
            if improves {
                distances.insert(edge.destination.clone(), next_distance);
                predecessors.insert(edge.destination.clone(), edge.clone());
                queue.decrease_priority(edge.destination.clone(), next_distance);
            }
        }
    }

    debug!(%origin, %destination, settled, "no path found");
    Ok(PathOutcome::NoPath)
}

fn reconstruct_path(
    predecessors: &HashMap<Settlement, Edge>,
    origin: &Settlement,
    destination: &Settlement,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut current = destination;
    while current != origin {
        let Some(edge) = predecessors.get(current) else {
            break;
        };
        edges.push(edge.clone());
        current = edge.route.origin();
    }
    edges.reverse();
    edges
}

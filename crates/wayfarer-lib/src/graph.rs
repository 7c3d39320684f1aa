use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::model::{LandRoute, Route, RouteKind, SeaRoute, Settlement};
use crate::travel::{effective_distance, BiomeTable};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Directed edge within the route graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub destination: Settlement,
    /// Effective distance of the route, the metric minimised by the solver.
    pub weight: f64,
    pub route: Route,
}

impl Edge {
    pub fn kind(&self) -> RouteKind {
        self.route.kind()
    }
}

/// Options applied while building a graph.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuildOptions<'a> {
    pub biomes: &'a BiomeTable,
}

impl Default for GraphBuildOptions<'static> {
    fn default() -> Self {
        Self {
            biomes: BiomeTable::standard(),
        }
    }
}

/// Immutable adjacency snapshot built from a complete set of route records.
///
/// Mutating the route set means building a new graph; edges are never added
/// or removed in place.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<Settlement, Vec<Edge>>>,
}

impl Graph {
    /// Outgoing edges of `settlement`, in the order the routes were supplied.
    pub fn neighbours(&self, settlement: &Settlement) -> &[Edge] {
        self.adjacency
            .get(settlement)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, settlement: &Settlement) -> bool {
        self.adjacency.contains_key(settlement)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Settlement> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Nodes whose name matches `name` (ignoring case), sorted by region.
    pub fn settlements_named(&self, name: &str) -> Vec<&Settlement> {
        let mut matches: Vec<&Settlement> =
            self.nodes().filter(|node| node.has_name(name)).collect();
        matches.sort_by(|a, b| a.region().cmp(b.region()));
        matches
    }

    /// Up to `limit` settlement labels similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, String)> = self
            .nodes()
            .filter_map(|node| {
                let score = strsim::jaro_winkler(&needle, &node.name().to_lowercase());
                (score >= SUGGESTION_THRESHOLD).then(|| (score, node.to_string()))
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored.dedup_by(|a, b| a.1 == b.1);
        scored.truncate(limit);
        scored.into_iter().map(|(_, label)| label).collect()
    }
}

/// Build a route graph using the standard biome table.
pub fn build_graph(land_routes: &[LandRoute], sea_routes: &[SeaRoute]) -> Graph {
    build_graph_with(land_routes, sea_routes, &GraphBuildOptions::default())
}

/// Build a route graph with explicit options.
///
/// Each record yields exactly one edge from its origin to its destination.
/// Both endpoints become nodes, so destination-only settlements appear with
/// no outgoing edges. Reverse edges are never synthesised.
pub fn build_graph_with(
    land_routes: &[LandRoute],
    sea_routes: &[SeaRoute],
    options: &GraphBuildOptions<'_>,
) -> Graph {
    let routes = land_routes
        .iter()
        .cloned()
        .map(Route::from)
        .chain(sea_routes.iter().cloned().map(Route::from));

    let mut adjacency: HashMap<Settlement, Vec<Edge>> = HashMap::new();
    for route in routes {
        let weight = effective_distance(&route, options.biomes);
        let origin = route.origin().clone();
        let destination = route.destination().clone();

        adjacency.entry(destination.clone()).or_default();
        adjacency.entry(origin).or_default().push(Edge {
            destination,
            weight,
            route,
        });
    }

    let graph = Graph {
        adjacency: Arc::new(adjacency),
    };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built route graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settlement(name: &str) -> Settlement {
        Settlement::new(name, "Kingdom A")
    }

    #[test]
    fn destination_only_settlements_are_nodes() {
        let sea = SeaRoute::new(settlement("Port"), settlement("Isle"), 12.0).expect("valid");
        let graph = build_graph(&[], &[sea]);

        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains(&settlement("Isle")));
        assert!(graph.neighbours(&settlement("Isle")).is_empty());
        assert_eq!(graph.neighbours(&settlement("Port")).len(), 1);
    }

    #[test]
    fn no_reverse_edges_are_created() {
        let sea = SeaRoute::new(settlement("Port"), settlement("Isle"), 12.0).expect("valid");
        let graph = build_graph(&[], &[sea]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn custom_biome_table_changes_weights() {
        let road = LandRoute::new(
            settlement("A"),
            settlement("B"),
            vec!["desert".to_string()],
            vec![10.0],
            true,
        )
        .expect("valid");

        let mut biomes = BiomeTable::empty();
        biomes.insert("desert", 1.5).expect("valid");
        let graph = build_graph_with(
            std::slice::from_ref(&road),
            &[],
            &GraphBuildOptions { biomes: &biomes },
        );
        assert_eq!(graph.neighbours(&settlement("A"))[0].weight, 15.0);

        let graph = build_graph(&[road], &[]);
        assert_eq!(graph.neighbours(&settlement("A"))[0].weight, 10.0);
    }

    #[test]
    fn fuzzy_matches_suggest_close_names() {
        let sea = SeaRoute::new(settlement("Shadowfen"), settlement("Brightwater"), 12.0)
            .expect("valid");
        let graph = build_graph(&[], &[sea]);

        let suggestions = graph.fuzzy_matches("Shadowfn", 3);
        assert_eq!(suggestions, vec!["Shadowfen (Kingdom A)".to_string()]);
        assert!(graph.fuzzy_matches("Qxzv", 3).is_empty());
    }
}

//! Wayfarer library entry points.
//!
//! This crate turns land and sea route records into a weighted route graph,
//! finds the lowest-cost path between settlements, and assembles a journey
//! with time, cost, and supply totals for the chosen transport. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!
//! The library performs no file or network I/O; callers supply route
//! records and rebuild the graph whenever those records change.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod journey;
pub mod model;
pub mod output;
pub mod path;
pub mod queue;
pub mod routing;
pub mod travel;

pub use error::{Error, Result};
pub use graph::{build_graph, build_graph_with, Edge, Graph, GraphBuildOptions};
pub use journey::{assemble_journey, JourneyResult, JourneySegment};
pub use model::{BiomeSegment, LandRoute, Route, RouteKind, SeaRoute, Settlement};
pub use output::{format_duration, JourneyRenderMode};
pub use path::{find_route_dijkstra, PathConstraints, PathOutcome, RoutePreference};
pub use queue::MinHeap;
pub use routing::{find_path, plan_journey, resolve_settlement, RouteRequest, SettlementQuery};
pub use travel::{BiomeTable, Mount, ShipType, TravelParams, WalkingPace};

//! Journey assembly: turns the edges chosen by the solver into a
//! resource-accounted itinerary.

use serde::Serialize;
use tracing::warn;

use crate::graph::Edge;
use crate::model::{Route, RouteKind, Settlement};
use crate::travel::{
    estimate_leg, TravelParams, HOURS_PER_DAY, LAND_WATER_LITERS_PER_DAY, RATIONS_PER_DAY,
    SEA_WATER_LITERS_PER_DAY,
};

/// One leg of a journey, traveled along a single route record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneySegment {
    pub start: Settlement,
    pub end: Settlement,
    pub distance_km: f64,
    pub effective_distance_km: f64,
    pub time_hours: f64,
    pub cost: f64,
    pub rations: f64,
    pub water_liters: f64,
    pub route: Route,
    /// Biomes crossed in order; empty for sea legs.
    pub biomes_traversed: Vec<String>,
}

impl JourneySegment {
    pub fn kind(&self) -> RouteKind {
        self.route.kind()
    }
}

/// Outcome of a single journey query.
///
/// Built once per query and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyResult {
    origin: Settlement,
    destination: Settlement,
    segments: Vec<JourneySegment>,
    total_distance_km: f64,
    total_time_hours: f64,
    total_cost: f64,
    rations: f64,
    water_liters: f64,
    path_found: bool,
}

impl JourneyResult {
    /// Result for a search that could not connect the two settlements.
    pub fn not_found(origin: Settlement, destination: Settlement) -> Self {
        Self {
            origin,
            destination,
            segments: Vec::new(),
            total_distance_km: 0.0,
            total_time_hours: 0.0,
            total_cost: 0.0,
            rations: 0.0,
            water_liters: 0.0,
            path_found: false,
        }
    }

    pub fn origin(&self) -> &Settlement {
        &self.origin
    }

    pub fn destination(&self) -> &Settlement {
        &self.destination
    }

    pub fn segments(&self) -> &[JourneySegment] {
        &self.segments
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn total_time_hours(&self) -> f64 {
        self.total_time_hours
    }

    pub fn total_days(&self) -> f64 {
        self.total_time_hours / HOURS_PER_DAY
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn rations(&self) -> f64 {
        self.rations
    }

    pub fn water_liters(&self) -> f64 {
        self.water_liters
    }

    /// True when the destination was reached, including the trivial journey
    /// where origin and destination coincide.
    pub fn path_found(&self) -> bool {
        self.path_found
    }

    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }
}

/// Build a journey from the solver's edges, origin to destination.
///
/// Time and cost are recomputed per edge for the chosen transport; the
/// solver's weight only serves as the effective distance of each leg.
pub fn assemble_journey(
    origin: &Settlement,
    destination: &Settlement,
    edges: &[Edge],
    params: &TravelParams,
) -> JourneyResult {
    let travelers = f64::from(params.travelers);
    let mut current = origin.clone();
    let mut segments = Vec::with_capacity(edges.len());

    for edge in edges {
        let kind = edge.kind();
        if kind == RouteKind::Sea && params.ship.is_none() {
            warn!(
                start = %current,
                end = %edge.destination,
                "no ship chosen for sea leg; assuming the default vessel"
            );
        }

        let estimate = estimate_leg(&edge.route, edge.weight, params);
        let days = estimate.time_hours / HOURS_PER_DAY;
        let water_per_day = match kind {
            RouteKind::Land => LAND_WATER_LITERS_PER_DAY,
            RouteKind::Sea => SEA_WATER_LITERS_PER_DAY,
        };

        segments.push(JourneySegment {
            start: current,
            end: edge.destination.clone(),
            distance_km: edge.route.distance_km(),
            effective_distance_km: edge.weight,
            time_hours: estimate.time_hours,
            cost: estimate.cost,
            rations: RATIONS_PER_DAY * travelers * days,
            water_liters: water_per_day * travelers * days,
            route: edge.route.clone(),
            biomes_traversed: edge
                .route
                .segments()
                .iter()
                .map(|segment| segment.biome.clone())
                .collect(),
        });
        current = edge.destination.clone();
    }

    JourneyResult {
        origin: origin.clone(),
        destination: destination.clone(),
        total_distance_km: segments.iter().map(|s| s.distance_km).sum(),
        total_time_hours: segments.iter().map(|s| s.time_hours).sum(),
        total_cost: segments.iter().map(|s| s.cost).sum(),
        rations: segments.iter().map(|s| s.rations).sum(),
        water_liters: segments.iter().map(|s| s.water_liters).sum(),
        path_found: !segments.is_empty() || origin == destination,
        segments,
    }
}

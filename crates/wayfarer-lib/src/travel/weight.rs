//! Edge weight, travel time, and travel cost calculations.
//!
//! Two independent measures are derived for a route:
//!
//! - the *effective distance*, a mode-independent metric in kilometres used
//!   by the solver to choose edges, and
//! - the *leg estimate* (time and cost) for the traveler's chosen transport,
//!   computed only for the edges of the final path.

use serde::Serialize;

use crate::model::{Route, RouteKind};

use super::biome::BiomeTable;
use super::constants::{LAND_GOLD_PER_KM, SEA_GOLD_PER_KM, UNMAPPED_PENALTY};
use super::transport::TravelParams;

/// Pathfinding weight of a route.
///
/// Land routes scale each segment by its biome multiplier and double the
/// sum when the route is unmapped. Sea routes use their raw distance.
pub fn effective_distance(route: &Route, biomes: &BiomeTable) -> f64 {
    match route {
        Route::Land(land) => {
            let adjusted: f64 = land
                .segments()
                .iter()
                .map(|segment| segment.distance_km * biomes.multiplier(&segment.biome))
                .sum();
            if land.is_mapped() {
                adjusted
            } else {
                adjusted * UNMAPPED_PENALTY
            }
        }
        Route::Sea(sea) => sea.distance_km(),
    }
}

/// Hours needed to cover `distance_km` at `speed_kmh`.
///
/// A zero, negative, or non-finite speed yields `f64::INFINITY` ("unreachable")
/// instead of dividing by zero.
pub fn travel_time(distance_km: f64, speed_kmh: f64) -> f64 {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return f64::INFINITY;
    }
    distance_km / speed_kmh
}

/// Gold charged for moving `travelers` people over `effective_km`.
pub fn travel_cost(kind: RouteKind, effective_km: f64, travelers: u32) -> f64 {
    let rate = match kind {
        RouteKind::Land => LAND_GOLD_PER_KM,
        RouteKind::Sea => SEA_GOLD_PER_KM,
    };
    effective_km * rate * f64::from(travelers)
}

/// Time and cost for a single leg of a journey.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegEstimate {
    pub time_hours: f64,
    pub cost: f64,
}

/// Estimate time and cost of traveling `route` with the given party.
///
/// `effective_km` is the route's pathfinding weight; terrain that slows the
/// solver's metric slows the party by the same factor.
pub fn estimate_leg(route: &Route, effective_km: f64, params: &TravelParams) -> LegEstimate {
    let speed = match route.kind() {
        RouteKind::Land => params.land_speed_kmh(),
        RouteKind::Sea => params.sea_speed_kmh(),
    };

    LegEstimate {
        time_hours: travel_time(effective_km, speed),
        cost: travel_cost(route.kind(), effective_km, params.travelers),
    }
}

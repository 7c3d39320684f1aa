//! Travel modifiers: biome difficulty, transport choices, and the edge
//! weight, time, and cost calculations built on them.
//!
//! This module is organized into focused submodules:
//!
//! - [`biome`] - Biome difficulty multipliers and name normalisation
//! - [`transport`] - Walking pace, mounts, ships, and the travel party
//! - [`weight`] - Effective distance, travel time, and cost per leg
//! - [`constants`] - Shared rates and penalties
//!
//! # Example
//!
//! ```
//! use wayfarer_lib::travel::{effective_distance, BiomeTable};
//! use wayfarer_lib::{LandRoute, Route, Settlement};
//!
//! let route: Route = LandRoute::new(
//!     Settlement::new("Shadowfen", "Kingdom A"),
//!     Settlement::new("Reedholm", "Kingdom A"),
//!     vec!["WETLANDS".to_string()],
//!     vec![10.0],
//!     false,
//! )
//! .unwrap()
//! .into();
//!
//! assert_eq!(effective_distance(&route, &BiomeTable::default()), 40.0);
//! ```

pub mod biome;
pub mod constants;
pub mod transport;
pub mod weight;

pub use biome::{normalize_biome, BiomeTable};
pub use constants::{
    DEFAULT_BIOME_MULTIPLIER, HOURS_PER_DAY, LAND_GOLD_PER_KM, LAND_WATER_LITERS_PER_DAY,
    RATIONS_PER_DAY, SEA_GOLD_PER_KM, SEA_WATER_LITERS_PER_DAY, UNMAPPED_PENALTY,
};
pub use transport::{Mount, ShipType, TravelParams, WalkingPace};
pub use weight::{effective_distance, estimate_leg, travel_cost, travel_time, LegEstimate};

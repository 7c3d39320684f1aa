//! Common test utilities and fixture helpers.
//!
//! Route records are built through the public constructors so every fixture
//! passes the same validation as loaded data.

use wayfarer_lib::{LandRoute, SeaRoute, Settlement};

/// Region shared by fixtures that do not care about regions.
pub const REGION: &str = "Kingdom A";

pub fn settlement(name: &str) -> Settlement {
    Settlement::new(name, REGION)
}

/// Land route through `(biome, km)` segments.
pub fn land(from: &str, to: &str, segments: &[(&str, f64)], mapped: bool) -> LandRoute {
    LandRoute::new(
        settlement(from),
        settlement(to),
        segments.iter().map(|(biome, _)| biome.to_string()).collect(),
        segments.iter().map(|(_, km)| *km).collect(),
        mapped,
    )
    .expect("valid land route fixture")
}

pub fn sea(from: &str, to: &str, km: f64) -> SeaRoute {
    SeaRoute::new(settlement(from), settlement(to), km).expect("valid sea route fixture")
}

/// Small coastal world used by several scenario tests:
///
/// ```text
/// Shadowfen --wetlands 20 (unmapped)--> Reedholm --grasslands 15--> Highcross
///     \                                                                 ^
///      \------------------------sea 60----------------------------------/
/// Reedholm --sea 10--> Gull Rock
/// ```
#[allow(dead_code)]
pub fn coastal_world() -> (Vec<LandRoute>, Vec<SeaRoute>) {
    (
        vec![
            land("Shadowfen", "Reedholm", &[("wetlands", 20.0)], false),
            land("Reedholm", "Highcross", &[("grasslands", 15.0)], true),
        ],
        vec![
            sea("Shadowfen", "Highcross", 60.0),
            sea("Reedholm", "Gull Rock", 10.0),
        ],
    )
}

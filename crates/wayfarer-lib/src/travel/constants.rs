//! Rates and penalties shared by the weight and journey calculations.

/// Multiplier applied to the effective distance of a route that has not
/// been surveyed.
pub const UNMAPPED_PENALTY: f64 = 2.0;

/// Multiplier used for biomes missing from the table.
pub const DEFAULT_BIOME_MULTIPLIER: f64 = 1.0;

/// Gold charged per effective kilometre per traveler.
pub const LAND_GOLD_PER_KM: f64 = 0.05;
pub const SEA_GOLD_PER_KM: f64 = 0.10;

/// Ration units eaten per person per day.
pub const RATIONS_PER_DAY: f64 = 1.0;

/// Fresh water in litres per person per day. Ships carry their water, so sea
/// legs budget twice the overland amount.
pub const LAND_WATER_LITERS_PER_DAY: f64 = 1.0;
pub const SEA_WATER_LITERS_PER_DAY: f64 = 2.0;

/// Hours in a provisioning day.
pub const HOURS_PER_DAY: f64 = 24.0;

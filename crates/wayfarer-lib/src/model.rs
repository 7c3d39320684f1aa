//! Entity model for the route graph: settlements and the raw route records
//! connecting them.
//!
//! Route records are validated on construction, so anything that reaches the
//! graph builder already satisfies the biome/distance pairing and carries
//! non-negative distances.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named location within a region; the node type of the route graph.
///
/// Equality and hashing ignore case over both fields, so two values spelled
/// differently (`"Shadowfen"` and `"SHADOWFEN"`) are the same graph node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    name: String,
    region: String,
}

impl Settlement {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Case-insensitive comparison against a bare settlement name.
    pub fn has_name(&self, name: &str) -> bool {
        eq_ignore_case(&self.name, name)
    }

    /// Case-insensitive comparison against a region name.
    pub fn in_region(&self, region: &str) -> bool {
        eq_ignore_case(&self.region, region)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl PartialEq for Settlement {
    fn eq(&self, other: &Self) -> bool {
        eq_ignore_case(&self.name, &other.name) && eq_ignore_case(&self.region, &other.region)
    }
}

impl Eq for Settlement {}

impl Hash for Settlement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.name.chars().flat_map(char::to_lowercase) {
            c.hash(state);
        }
        // Field separator so ("ab", "c") and ("a", "bc") hash apart.
        state.write_u8(0xff);
        for c in self.region.chars().flat_map(char::to_lowercase) {
            c.hash(state);
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.region)
    }
}

/// One stretch of a land route through a single biome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeSegment {
    pub biome: String,
    pub distance_km: f64,
}

/// Overland route made of consecutive biome segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandRoute {
    origin: Settlement,
    destination: Settlement,
    segments: Vec<BiomeSegment>,
    is_mapped: bool,
}

impl LandRoute {
    /// Build a land route from parallel biome and distance lists.
    ///
    /// # Errors
    /// Returns [`Error::BiomeDistanceMismatch`] when the lists differ in
    /// length and [`Error::InvalidDistance`] for a negative or non-finite
    /// distance.
    pub fn new(
        origin: Settlement,
        destination: Settlement,
        biomes: Vec<String>,
        distances: Vec<f64>,
        is_mapped: bool,
    ) -> Result<Self> {
        if biomes.len() != distances.len() {
            return Err(Error::BiomeDistanceMismatch {
                biomes: biomes.len(),
                distances: distances.len(),
            });
        }

        let segments = biomes
            .into_iter()
            .zip(distances)
            .map(|(biome, distance_km)| BiomeSegment { biome, distance_km })
            .collect();

        Self::from_segments(origin, destination, segments, is_mapped)
    }

    /// Build a land route from already-paired segments.
    pub fn from_segments(
        origin: Settlement,
        destination: Settlement,
        segments: Vec<BiomeSegment>,
        is_mapped: bool,
    ) -> Result<Self> {
        for segment in &segments {
            validate_distance(segment.distance_km)?;
        }
        // Segments may each be finite while their sum overflows.
        validate_distance(segments.iter().map(|s| s.distance_km).sum())?;

        Ok(Self {
            origin,
            destination,
            segments,
            is_mapped,
        })
    }

    pub fn origin(&self) -> &Settlement {
        &self.origin
    }

    pub fn destination(&self) -> &Settlement {
        &self.destination
    }

    pub fn segments(&self) -> &[BiomeSegment] {
        &self.segments
    }

    pub fn is_mapped(&self) -> bool {
        self.is_mapped
    }

    /// Sum of all segment distances in kilometres.
    pub fn total_distance(&self) -> f64 {
        self.segments.iter().map(|s| s.distance_km).sum()
    }

    /// Biome names in travel order.
    pub fn biomes(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.biome.as_str())
    }
}

/// Direct sea crossing between two settlements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeaRoute {
    origin: Settlement,
    destination: Settlement,
    distance_km: f64,
}

impl SeaRoute {
    pub fn new(origin: Settlement, destination: Settlement, distance_km: f64) -> Result<Self> {
        validate_distance(distance_km)?;
        Ok(Self {
            origin,
            destination,
            distance_km,
        })
    }

    pub fn origin(&self) -> &Settlement {
        &self.origin
    }

    pub fn destination(&self) -> &Settlement {
        &self.destination
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

fn validate_distance(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidDistance { value });
    }
    Ok(())
}

/// Discriminant for the two route record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Land,
    Sea,
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RouteKind::Land => "land",
            RouteKind::Sea => "sea",
        })
    }
}

/// Shared handle over either route record, carried by graph edges so the
/// journey assembler can recover biomes and mapping state later.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Land(Arc<LandRoute>),
    Sea(Arc<SeaRoute>),
}

impl Route {
    pub fn origin(&self) -> &Settlement {
        match self {
            Route::Land(route) => route.origin(),
            Route::Sea(route) => route.origin(),
        }
    }

    pub fn destination(&self) -> &Settlement {
        match self {
            Route::Land(route) => route.destination(),
            Route::Sea(route) => route.destination(),
        }
    }

    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Land(_) => RouteKind::Land,
            Route::Sea(_) => RouteKind::Sea,
        }
    }

    /// Raw distance in kilometres, before any terrain modifiers.
    pub fn distance_km(&self) -> f64 {
        match self {
            Route::Land(route) => route.total_distance(),
            Route::Sea(route) => route.distance_km(),
        }
    }

    /// Biome segments traversed; always empty for sea routes.
    pub fn segments(&self) -> &[BiomeSegment] {
        match self {
            Route::Land(route) => route.segments(),
            Route::Sea(_) => &[],
        }
    }
}

impl From<LandRoute> for Route {
    fn from(route: LandRoute) -> Self {
        Route::Land(Arc::new(route))
    }
}

impl From<SeaRoute> for Route {
    fn from(route: SeaRoute) -> Self {
        Route::Sea(Arc::new(route))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of(settlement: &Settlement) -> u64 {
        let mut hasher = DefaultHasher::new();
        settlement.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn settlement_identity_ignores_case() {
        let a = Settlement::new("Shadowfen", "Kingdom A");
        let b = Settlement::new("SHADOWFEN", "kingdom a");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn settlement_fields_do_not_bleed_into_each_other() {
        let a = Settlement::new("ab", "c");
        let b = Settlement::new("a", "bc");
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn land_route_rejects_mismatched_lists() {
        let err = LandRoute::new(
            Settlement::new("A", "R"),
            Settlement::new("B", "R"),
            vec!["tundra".to_string(), "taiga".to_string()],
            vec![10.0],
            true,
        )
        .expect_err("mismatch");
        assert!(matches!(
            err,
            Error::BiomeDistanceMismatch {
                biomes: 2,
                distances: 1
            }
        ));
    }

    #[test]
    fn land_route_rejects_negative_distance() {
        let err = LandRoute::new(
            Settlement::new("A", "R"),
            Settlement::new("B", "R"),
            vec!["tundra".to_string()],
            vec![-1.0],
            true,
        )
        .expect_err("negative");
        assert!(matches!(err, Error::InvalidDistance { .. }));
    }

    #[test]
    fn land_route_rejects_overflowing_total() {
        let err = LandRoute::new(
            Settlement::new("A", "R"),
            Settlement::new("B", "R"),
            vec!["tundra".to_string(), "taiga".to_string()],
            vec![f64::MAX, f64::MAX],
            true,
        )
        .expect_err("sum overflows");
        assert!(matches!(err, Error::InvalidDistance { value } if value.is_infinite()));
    }

    #[test]
    fn land_route_total_distance_sums_segments() {
        let route = LandRoute::new(
            Settlement::new("A", "R"),
            Settlement::new("B", "R"),
            vec!["tundra".to_string(), "grasslands".to_string()],
            vec![12.5, 7.5],
            true,
        )
        .expect("valid");
        assert_eq!(route.total_distance(), 20.0);
        assert_eq!(route.biomes().collect::<Vec<_>>(), ["tundra", "grasslands"]);
    }

    #[test]
    fn sea_route_rejects_nan_distance() {
        let err = SeaRoute::new(Settlement::new("A", "R"), Settlement::new("B", "R"), f64::NAN)
            .expect_err("nan");
        assert!(matches!(err, Error::InvalidDistance { .. }));
    }

    #[test]
    fn route_exposes_uniform_view() {
        let sea: Route = SeaRoute::new(Settlement::new("A", "R"), Settlement::new("B", "R"), 30.0)
            .expect("valid")
            .into();
        assert_eq!(sea.kind(), RouteKind::Sea);
        assert_eq!(sea.distance_km(), 30.0);
        assert!(sea.segments().is_empty());
        assert_eq!(sea.destination().name(), "B");
    }
}

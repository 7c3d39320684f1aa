//! Transport choices and the travel party configuration.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Walking pace of the party on foot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalkingPace {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl WalkingPace {
    /// Speed in kilometres per hour.
    pub fn speed_kmh(self) -> f64 {
        match self {
            WalkingPace::Slow => 3.2,
            WalkingPace::Normal => 4.8,
            WalkingPace::Fast => 6.4,
        }
    }
}

impl fmt::Display for WalkingPace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WalkingPace::Slow => "slow",
            WalkingPace::Normal => "normal",
            WalkingPace::Fast => "fast",
        })
    }
}

/// Riding animal used on land legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mount {
    RidingHorse,
    Warhorse,
}

impl Mount {
    pub fn speed_kmh(self) -> f64 {
        match self {
            Mount::RidingHorse => 9.6,
            Mount::Warhorse => 8.0,
        }
    }
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mount::RidingHorse => "riding horse",
            Mount::Warhorse => "warhorse",
        })
    }
}

/// Vessel used on sea legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipType {
    Rowboat,
    Keelboat,
    Longship,
    Galley,
    #[default]
    SailingShip,
}

impl ShipType {
    pub fn speed_kmh(self) -> f64 {
        match self {
            ShipType::Rowboat => 2.4,
            ShipType::Keelboat => 1.6,
            ShipType::Longship => 4.8,
            ShipType::Galley => 6.4,
            ShipType::SailingShip => 3.2,
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShipType::Rowboat => "rowboat",
            ShipType::Keelboat => "keelboat",
            ShipType::Longship => "longship",
            ShipType::Galley => "galley",
            ShipType::SailingShip => "sailing ship",
        })
    }
}

/// Mode parameters chosen by the traveler for a journey query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TravelParams {
    pub travelers: u32,
    pub pace: WalkingPace,
    pub mount: Option<Mount>,
    /// Vessel for sea legs; [`ShipType::default`] is used when unset.
    pub ship: Option<ShipType>,
}

impl Default for TravelParams {
    fn default() -> Self {
        Self {
            travelers: 1,
            pace: WalkingPace::default(),
            mount: None,
            ship: None,
        }
    }
}

impl TravelParams {
    /// Party of `travelers` walking at normal pace.
    pub fn on_foot(travelers: u32) -> Self {
        Self {
            travelers,
            ..Self::default()
        }
    }

    pub fn with_pace(mut self, pace: WalkingPace) -> Self {
        self.pace = pace;
        self
    }

    pub fn with_mount(mut self, mount: Mount) -> Self {
        self.mount = Some(mount);
        self
    }

    pub fn with_ship(mut self, ship: ShipType) -> Self {
        self.ship = Some(ship);
        self
    }

    /// Reject a party nobody is traveling in.
    pub fn validate(&self) -> Result<()> {
        if self.travelers == 0 {
            return Err(Error::InvalidTravelParty {
                message: "traveler count must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Overland speed: the faster of walking pace and mount.
    pub fn land_speed_kmh(&self) -> f64 {
        let walking = self.pace.speed_kmh();
        self.mount
            .map(|mount| walking.max(mount.speed_kmh()))
            .unwrap_or(walking)
    }

    /// Sea speed of the chosen (or default) ship.
    pub fn sea_speed_kmh(&self) -> f64 {
        self.ship.unwrap_or_default().speed_kmh()
    }
}

use serde::{Deserialize, Serialize};

use crate::entity::ship::{Ship, ShipState};
use crate::stats::los::{fleet_observation_los_mod, formula33};

pub const MAX_FLEET_SHIPS: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetState {
    pub ships: Vec<Option<ShipState>>,
}

impl FleetState {
    pub fn new<I>(ships: I) -> Self
    where
        I: IntoIterator<Item = ShipState>,
    {
        Self {
            ships: ships.into_iter().map(Some).collect(),
        }
    }
}

/// Ordered ship slots; index 0 is the flagship.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fleet {
    pub ships: Vec<Option<Ship>>,
    pub fingerprint: u64,
}

impl Fleet {
    pub fn members(&self) -> impl Iterator<Item = (usize, &Ship)> + '_ {
        self.ships
            .iter()
            .enumerate()
            .filter_map(|(index, ship)| ship.as_ref().map(|ship| (index, ship)))
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index).and_then(Option::as_ref)
    }

    pub fn flagship(&self) -> Option<&Ship> {
        self.ship(0)
    }

    pub fn len(&self) -> usize {
        self.members().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn fighter_power(&self) -> i32 {
        self.members().map(|(_, ship)| ship.fighter_power()).sum()
    }

    /// Formula 33 effective LoS at a node factor.
    pub fn effective_los(&self, hq_level: u16, node_factor: f64) -> Option<f64> {
        let ships: Vec<&Ship> = self.members().map(|(_, ship)| ship).collect();
        formula33(&ships, hq_level, node_factor)
    }

    pub fn observation_los_mod(&self) -> f64 {
        let ships: Vec<&Ship> = self.members().map(|(_, ship)| ship).collect();
        fleet_observation_los_mod(&ships)
    }
}

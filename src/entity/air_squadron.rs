use serde::{Deserialize, Serialize};

use crate::entity::gear::{Gear, GearState};
use crate::stats::fighter_power::{
    recon_multiplier, squadron_radius, squadron_slot_fighter_power, AirSquadronMode,
};

pub const MAX_SQUADRON_SLOTS: usize = 4;
pub const DEFAULT_SQUADRON_SLOT: i32 = 18;
pub const DEFAULT_RECON_SLOT: i32 = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AirSquadronState {
    pub mode: AirSquadronMode,
    pub gears: Vec<Option<GearState>>,
    pub slots: Option<Vec<i32>>,
}

/// Land-based air squadron: four plane slots and a mode.
#[derive(Debug, Clone, PartialEq)]
pub struct AirSquadron {
    pub mode: AirSquadronMode,
    pub gears: Vec<Option<Gear>>,
    pub slots: Vec<i32>,
    pub fingerprint: u64,
}

impl AirSquadron {
    pub fn planes(&self) -> impl Iterator<Item = (i32, &Gear)> + '_ {
        self.gears.iter().enumerate().filter_map(|(index, gear)| {
            gear.as_ref()
                .map(|gear| (self.slots.get(index).copied().unwrap_or(0), gear))
        })
    }

    /// Sum of slot fighter power, scaled by the best recon multiplier.
    pub fn fighter_power(&self) -> i32 {
        let base: i32 = self
            .planes()
            .map(|(slot, gear)| squadron_slot_fighter_power(gear, slot, self.mode))
            .sum();
        let multiplier = self
            .planes()
            .filter(|(slot, _)| *slot > 0)
            .map(|(_, gear)| recon_multiplier(gear, self.mode))
            .fold(1.0_f64, f64::max);
        (f64::from(base) * multiplier).floor() as i32
    }

    pub fn radius(&self) -> Option<i32> {
        squadron_radius(self.planes().map(|(_, gear)| gear))
    }
}

pub fn default_slot_size(gear: &Gear) -> i32 {
    if gear.category().is_recon() {
        DEFAULT_RECON_SLOT
    } else {
        DEFAULT_SQUADRON_SLOT
    }
}

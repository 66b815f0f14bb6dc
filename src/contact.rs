//! Contact chance per rank, day (recon planes over the fleet) and night
//! (night recon seaplanes).

use serde::{Deserialize, Serialize};

use crate::combat::types::{AirState, ContactRank};
use crate::cutin::sequential_rates;
use crate::data::cutin::AllocationRule;
use crate::data::gear::{GearAttr, GearCategory};
use crate::entity::comp::Comp;
use crate::entity::gear::Gear;
use crate::entity::ship::Ship;

const NIGHT_CONTACT_DIVISOR: f64 = 25.0;
const CONTACT_LUCK_DIVISOR: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactChance {
    pub trigger_rate: f64,
    pub rank1: f64,
    pub rank2: f64,
    pub rank3: f64,
}

impl ContactChance {
    pub fn total(&self) -> f64 {
        self.rank1 + self.rank2 + self.rank3
    }

    pub fn rank(&self, rank: ContactRank) -> f64 {
        match rank {
            ContactRank::Rank1 => self.rank1,
            ContactRank::Rank2 => self.rank2,
            ContactRank::Rank3 => self.rank3,
        }
    }

    fn add(&mut self, rank: ContactRank, rate: f64) {
        match rank {
            ContactRank::Rank1 => self.rank1 += rate,
            ContactRank::Rank2 => self.rank2 += rate,
            ContactRank::Rank3 => self.rank3 += rate,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactAnalysis {
    pub air_supremacy: ContactChance,
    pub air_superiority: ContactChance,
    pub air_denial: ContactChance,
    pub night: ContactChance,
}

/// Contact needs some air control; `None` where it cannot happen.
pub fn air_state_coefficient(air_state: AirState) -> Option<f64> {
    match air_state {
        AirState::AirSupremacy => Some(3.0),
        AirState::AirSuperiority => Some(2.0),
        AirState::AirDenial => Some(1.0),
        AirState::AirParity | AirState::AirIncapability => None,
    }
}

fn triggers_contact(gear: &Gear) -> bool {
    matches!(
        gear.category(),
        GearCategory::CbRecon | GearCategory::ReconSeaplane | GearCategory::LargeFlyingBoat
    )
}

fn selectable_for_contact(gear: &Gear) -> bool {
    triggers_contact(gear) || gear.category() == GearCategory::CbTorpedoBomber
}

fn gear_los(gear: &Gear) -> f64 {
    f64::from(gear.master.los)
}

/// Luck of the carrying ship lowers the roll threshold: `1 + floor(sqrt(luck)) / 50`.
/// Unknown luck leaves the threshold alone.
pub fn contact_luck_mod(luck: Option<i32>) -> f64 {
    luck.map_or(1.0, |luck| {
        1.0 + f64::from(luck.max(0)).sqrt().floor() / CONTACT_LUCK_DIVISOR
    })
}

/// Day contact: trigger `(sum floor(los * sqrt(slot)) + 1) / (70 - 15c)`,
/// then planes in accuracy-descending order each roll `los / (20 - 2c)`
/// scaled by the carrier's luck.
pub fn day_contact<'a, I>(ships: I, air_state: AirState, rule: AllocationRule) -> ContactChance
where
    I: IntoIterator<Item = &'a Ship>,
{
    let Some(c) = air_state_coefficient(air_state) else {
        return ContactChance::default();
    };

    let mut trigger_sum = 0.0;
    let mut candidates: Vec<(&Gear, f64)> = Vec::new();
    for ship in ships {
        let luck_mod = contact_luck_mod(ship.luck());
        for (slot, gear) in ship.gear_iter() {
            if slot.aircraft() <= 0 {
                continue;
            }
            if triggers_contact(gear) {
                trigger_sum += (gear_los(gear) * f64::from(slot.aircraft()).sqrt()).floor();
            }
            if selectable_for_contact(gear) && gear.master.los > 0 {
                candidates.push((gear, luck_mod));
            }
        }
    }

    let trigger_rate = ((trigger_sum + 1.0) / (70.0 - 15.0 * c)).min(1.0);
    candidates.sort_by_key(|(gear, _)| std::cmp::Reverse(gear.master.accuracy));

    let (rates, _) = sequential_rates(
        candidates.iter().map(|(gear, luck_mod)| {
            let rank = ContactRank::from_accuracy(gear.master.accuracy);
            (rank, Some(gear_los(gear) / (20.0 - 2.0 * c) * luck_mod))
        }),
        rule,
    );

    let mut chance = ContactChance {
        trigger_rate,
        ..Default::default()
    };
    for (rank, rate) in rates {
        chance.add(rank, trigger_rate * rate);
    }
    chance
}

/// Night contact: each night recon rolls `floor(sqrt(los * level)) / 25`,
/// scaled by the carrier's luck, in fleet order.
pub fn night_contact<'a, I>(ships: I, rule: AllocationRule) -> ContactChance
where
    I: IntoIterator<Item = &'a Ship>,
{
    let mut planes = Vec::new();
    for ship in ships {
        let luck_mod = contact_luck_mod(ship.luck());
        for (slot, gear) in ship.gear_iter() {
            if slot.aircraft() > 0 && gear.has_attr(GearAttr::NightRecon) {
                let chance = (gear_los(gear) * f64::from(ship.level)).sqrt().floor()
                    / NIGHT_CONTACT_DIVISOR
                    * luck_mod;
                planes.push((ContactRank::from_accuracy(gear.master.accuracy), chance));
            }
        }
    }

    let (rates, residual) = sequential_rates(
        planes.into_iter().map(|(rank, chance)| (rank, Some(chance))),
        rule,
    );
    let mut chance = ContactChance {
        trigger_rate: 1.0 - residual,
        ..Default::default()
    };
    for (rank, rate) in rates {
        chance.add(rank, rate);
    }
    chance
}

pub fn analyze_contact(comp: &Comp, rule: AllocationRule) -> ContactAnalysis {
    let ships = || comp.ships().map(|(_, _, ship)| ship);
    let analysis = ContactAnalysis {
        air_supremacy: day_contact(ships(), AirState::AirSupremacy, rule),
        air_superiority: day_contact(ships(), AirState::AirSuperiority, rule),
        air_denial: day_contact(ships(), AirState::AirDenial, rule),
        night: night_contact(ships(), rule),
    };
    tracing::debug!(
        supremacy = analysis.air_supremacy.total(),
        night = analysis.night.total(),
        "contact analysed"
    );
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_never_makes_contact() {
        assert_eq!(air_state_coefficient(AirState::AirParity), None);
        let chance = day_contact(
            std::iter::empty(),
            AirState::AirParity,
            AllocationRule::Capped,
        );
        assert_eq!(chance, ContactChance::default());
    }

    #[test]
    fn luck_lowers_the_selection_threshold() {
        assert_eq!(contact_luck_mod(None), 1.0);
        assert_eq!(contact_luck_mod(Some(0)), 1.0);
        assert!((contact_luck_mod(Some(10)) - 1.06).abs() < 1e-12);
        assert!((contact_luck_mod(Some(100)) - 1.2).abs() < 1e-12);
    }

    #[test]
    fn empty_fleet_still_has_base_trigger_rate() {
        let chance = day_contact(
            std::iter::empty(),
            AirState::AirSupremacy,
            AllocationRule::Capped,
        );
        assert!((chance.trigger_rate - 1.0 / 25.0).abs() < 1e-12);
        assert_eq!(chance.total(), 0.0);
    }
}

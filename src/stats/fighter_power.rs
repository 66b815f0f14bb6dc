//! Fighter power for ship slots and land-based air squadrons.

use serde::{Deserialize, Serialize};

use crate::data::gear::GearCategory;
use crate::entity::gear::Gear;

const FIGHTER_BONUS: [f64; 8] = [0.0, 0.0, 2.0, 5.0, 9.0, 14.0, 14.0, 22.0];
const SEAPLANE_BOMBER_BONUS: [f64; 8] = [0.0, 0.0, 1.0, 1.0, 1.0, 3.0, 3.0, 6.0];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirSquadronMode {
    #[default]
    Sortie,
    AirDefense,
}

fn proficiency_bonus(gear: &Gear) -> f64 {
    let level = gear.proficiency();
    let type_bonus = match gear.category() {
        c if c.is_fighter() => FIGHTER_BONUS[level],
        GearCategory::SeaplaneBomber => SEAPLANE_BOMBER_BONUS[level],
        _ => 0.0,
    };
    (f64::from(gear.exp) / 10.0).sqrt() + type_bonus
}

/// Fighter power of one ship slot (carrier-based and seaplane aircraft).
pub fn slot_fighter_power(gear: &Gear, slot: i32) -> i32 {
    if slot <= 0 || !gear.category().is_fighter_power_aircraft() {
        return 0;
    }
    let anti_air = f64::from(gear.master.anti_air) + gear.improvement.fighter_power;
    (anti_air * f64::from(slot).sqrt() + proficiency_bonus(gear)).floor() as i32
}

/// Fighter power of one land-based squadron slot.
pub fn squadron_slot_fighter_power(gear: &Gear, slot: i32, mode: AirSquadronMode) -> i32 {
    let category = gear.category();
    let counts = category.is_fighter_power_aircraft() || category.is_recon();
    if slot <= 0 || !counts {
        return 0;
    }
    let master = &gear.master;
    let anti_air = f64::from(master.anti_air)
        + gear.improvement.fighter_power
        + match mode {
            AirSquadronMode::Sortie => 1.5 * f64::from(master.interception),
            AirSquadronMode::AirDefense => {
                f64::from(master.interception) + 2.0 * f64::from(master.anti_bomber)
            }
        };
    (anti_air * f64::from(slot).sqrt() + proficiency_bonus(gear)).floor() as i32
}

/// Multiplier a reconnaissance aircraft applies to a squadron's total fighter power.
pub fn recon_multiplier(gear: &Gear, mode: AirSquadronMode) -> f64 {
    let los = gear.master.los;
    match (mode, gear.category()) {
        (_, GearCategory::LbRecon) => match mode {
            AirSquadronMode::Sortie if los >= 9 => 1.18,
            AirSquadronMode::Sortie => 1.15,
            AirSquadronMode::AirDefense if los >= 9 => 1.24,
            AirSquadronMode::AirDefense => 1.18,
        },
        (AirSquadronMode::AirDefense, GearCategory::CbRecon) => {
            if los >= 9 {
                1.3
            } else {
                1.2
            }
        }
        (
            AirSquadronMode::AirDefense,
            GearCategory::ReconSeaplane | GearCategory::LargeFlyingBoat,
        ) => match los {
            los if los >= 9 => 1.16,
            8 => 1.13,
            _ => 1.1,
        },
        _ => 1.0,
    }
}

/// Squadron combat radius: the shortest-ranged plane, extended by a longer-ranged recon.
pub fn squadron_radius<'a, I>(gears: I) -> Option<i32>
where
    I: IntoIterator<Item = &'a Gear>,
{
    let gears: Vec<&Gear> = gears.into_iter().collect();
    let base = gears.iter().map(|gear| gear.master.radius).min()?;
    let recon = gears
        .iter()
        .filter(|gear| gear.category().is_recon())
        .map(|gear| gear.master.radius)
        .max();
    let extension = match recon {
        Some(radius) if radius > base => {
            let extra = f64::from(radius - base).sqrt().round() as i32;
            extra.min(3)
        }
        _ => 0,
    };
    Some(base + extension)
}

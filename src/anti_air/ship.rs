//! Per-ship anti-air terms: adjusted anti-air, fleet contribution and shootdown.

use crate::combat::types::{FleetType, Side};
use crate::data::gear::{GearAttr, GearCategory};
use crate::entity::gear::Gear;
use crate::entity::org::OrgType;
use crate::entity::ship::Ship;
use crate::stats::stacking::StatKind;

const PROPORTIONAL_DIVISOR: f64 = 400.0;
const FIXED_BASE_CONSTANT: f64 = 0.25;
const PLAYER_FIXED_MOD: f64 = 0.8;
const ENEMY_FIXED_MOD: f64 = 0.75;

/// Weight of a gear's anti-air in the ship's adjusted anti-air.
pub fn adjusted_multiplier(gear: &Gear) -> f64 {
    if gear.has_attr(GearAttr::HighAngleMount) {
        return 4.0;
    }
    match gear.category() {
        GearCategory::AntiAirGun => 6.0,
        GearCategory::AntiAirFireDirector => 4.0,
        _ if gear.has_attr(GearAttr::AirRadar) => 3.0,
        _ => 0.0,
    }
}

/// Weight of a gear's anti-air in the fleet anti-air sum.
pub fn fleet_multiplier(gear: &Gear) -> f64 {
    if gear.has_attr(GearAttr::AntiAirShell) {
        0.6
    } else if gear.has_attr(GearAttr::AirRadar) {
        0.4
    } else if gear.has_attr(GearAttr::HighAngleMount)
        || gear.category() == GearCategory::AntiAirFireDirector
    {
        0.35
    } else {
        0.2
    }
}

/// Player ships round down to even; abyssal ships use `2 * floor(sqrt(naked))`.
pub fn adjusted_anti_air(ship: &Ship) -> Option<f64> {
    let naked = f64::from(ship.naked(StatKind::AntiAir)?);
    let gears: f64 = ship
        .gear_iter()
        .map(|(_, gear)| {
            f64::from(gear.master.anti_air) * adjusted_multiplier(gear)
                + gear.improvement.adjusted_anti_air
        })
        .sum();

    if ship.is_abyssal() {
        Some(2.0 * naked.sqrt().floor() + gears)
    } else {
        Some(2.0 * ((naked + gears) / 2.0).floor())
    }
}

pub fn fleet_anti_air_bonus(ship: &Ship) -> f64 {
    ship.gear_iter()
        .map(|(_, gear)| {
            f64::from(gear.master.anti_air) * fleet_multiplier(gear)
                + gear.improvement.fleet_anti_air
        })
        .sum::<f64>()
        .floor()
}

/// Combined fleets share their anti-air between the two fleets unevenly.
pub fn combined_fleet_mod(org_type: OrgType, fleet_type: FleetType) -> f64 {
    if !org_type.is_combined() {
        return 1.0;
    }
    match (org_type.side(), fleet_type) {
        (Side::Player, FleetType::Main) => 0.72,
        (Side::Enemy, FleetType::Main) => 0.8,
        (_, FleetType::Escort) => 0.48,
    }
}

pub fn proportional_shotdown_rate(adjusted_anti_air: f64, combined_mod: f64) -> f64 {
    adjusted_anti_air * combined_mod / PROPORTIONAL_DIVISOR
}

/// Planes shot down proportionally from a slot of `slot` planes.
pub fn proportional_shotdown(slot: i32, rate: f64, resistance: f64) -> i32 {
    (f64::from(slot) * rate * resistance).floor() as i32
}

pub fn fixed_shotdown_number(
    adjusted_anti_air: f64,
    fleet_anti_air: f64,
    side: Side,
    combined_mod: f64,
    cutin_rate_mod: f64,
) -> i32 {
    let side_mod = match side {
        Side::Player => PLAYER_FIXED_MOD,
        Side::Enemy => ENEMY_FIXED_MOD,
    };
    ((adjusted_anti_air + fleet_anti_air)
        * FIXED_BASE_CONSTANT
        * side_mod
        * combined_mod
        * cutin_rate_mod)
        .floor() as i32
}

/// Guaranteed shootdown: one plane on the player side, plus the cut-in's fixed bonus.
pub fn minimum_bonus(side: Side, cutin_fixed: i32) -> i32 {
    let base = match side {
        Side::Player => 1,
        Side::Enemy => 0,
    };
    base + cutin_fixed
}

//! Fleet line of sight: formula 33 (routing) and the day observation fleet LoS.

use crate::data::gear::GearCategory;
use crate::entity::ship::Ship;
use crate::stats::stacking::StatKind;

pub const FLEET_SIZE_FOR_LOS: usize = 6;

pub fn equipment_los_coefficient(category: GearCategory) -> f64 {
    match category {
        GearCategory::CbTorpedoBomber => 0.8,
        GearCategory::CbRecon => 1.0,
        GearCategory::ReconSeaplane => 1.2,
        GearCategory::SeaplaneBomber => 1.1,
        _ => 0.6,
    }
}

/// `node_factor * sum(coef * (los + imp)) + sum(sqrt(naked los)) - ceil(0.4 * hq) + 2 * (6 - ships)`.
/// `None` when any ship's naked LoS is unknown.
pub fn formula33(ships: &[&Ship], hq_level: u16, node_factor: f64) -> Option<f64> {
    let mut equipment = 0.0;
    let mut naked = 0.0;
    for ship in ships {
        naked += f64::from(ship.naked(StatKind::Los)?.max(0)).sqrt();
        for (_, gear) in ship.gear_iter() {
            let los = f64::from(gear.master.los) + gear.improvement.los;
            equipment += equipment_los_coefficient(gear.category()) * los;
        }
        // equipment bonus LoS is added unweighted
        naked += f64::from(ship.ebonus.los);
    }
    let hq_penalty = (0.4 * f64::from(hq_level)).ceil();
    let empty_slots = FLEET_SIZE_FOR_LOS.saturating_sub(ships.len()) as f64;
    Some(node_factor * equipment + naked - hq_penalty + 2.0 * empty_slots)
}

/// `floor(sqrt(F) + F / 10)` where `F` sums naked LoS and observation seaplane
/// `floor(sqrt(slot) * los)` over the fleet.
pub fn fleet_observation_los_mod(ships: &[&Ship]) -> f64 {
    let total: f64 = ships
        .iter()
        .map(|ship| {
            let naked = f64::from(ship.naked(StatKind::Los).unwrap_or(0).max(0));
            let planes: f64 = ship
                .gear_iter()
                .filter(|(slot, gear)| {
                    slot.aircraft() > 0 && gear.category().is_observation_seaplane()
                })
                .map(|(slot, gear)| {
                    (f64::from(slot.aircraft()).sqrt() * f64::from(gear.master.los)).floor()
                })
                .sum();
            naked + planes
        })
        .sum();
    (total.sqrt() + total / 10.0).floor()
}

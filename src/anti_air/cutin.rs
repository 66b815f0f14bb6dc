//! Anti-air cut-in availability and the fleet-wide AACI lottery.

use serde::{Deserialize, Serialize};

use crate::cutin::sequential_rates;
use crate::data::anti_air_cutin::AntiAirCutinDef;
use crate::data::cutin::AllocationRule;
use crate::entity::ship::Ship;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntiAirCutinRate {
    pub id: u8,
    pub rate: f64,
}

/// Kinds `ship` can trigger, in table order.
pub fn available_anti_air_cutins<'a>(
    ship: &Ship,
    defs: &'a [AntiAirCutinDef],
) -> Vec<&'a AntiAirCutinDef> {
    let gears = ship.gear_pairs();
    defs.iter()
        .filter(|def| def.is_available(&ship.master, &gears))
        .collect()
}

/// One roll per kind present anywhere in the fleet, highest priority first.
/// Returns the rates and the chance that no cut-in fires.
pub fn anti_air_cutin_rates<'s, I>(
    ships: I,
    defs: &[AntiAirCutinDef],
    rule: AllocationRule,
) -> (Vec<AntiAirCutinRate>, f64)
where
    I: IntoIterator<Item = &'s Ship>,
{
    let ships: Vec<&Ship> = ships.into_iter().collect();
    let present = defs.iter().filter(|def| {
        let gears_ok = |ship: &&Ship| def.is_available(&ship.master, &ship.gear_pairs());
        ships.iter().any(gears_ok)
    });

    let (rates, residual) = sequential_rates(present.map(|def| (def.id, Some(def.chance))), rule);
    let rates = rates
        .into_iter()
        .map(|(id, rate)| AntiAirCutinRate { id, rate })
        .collect();
    (rates, residual)
}

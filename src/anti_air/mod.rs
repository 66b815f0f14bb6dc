//! Anti-air analysis of one comp: adjusted and fleet anti-air, shootdown
//! numbers per ship and the anti-air cut-in lottery.

pub mod cutin;
pub mod ship;

use serde::{Deserialize, Serialize};

use crate::combat::types::FleetType;
use crate::data::anti_air_cutin::AntiAirCutinDef;
use crate::data::cutin::AllocationRule;
use crate::entity::comp::Comp;
use crate::entity::ship::Ship;

pub use cutin::{anti_air_cutin_rates, available_anti_air_cutins, AntiAirCutinRate};
pub use ship::{
    adjusted_anti_air, combined_fleet_mod, fixed_shotdown_number, fleet_anti_air_bonus,
    minimum_bonus, proportional_shotdown, proportional_shotdown_rate,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipAntiAirAnalysis {
    pub fleet_type: FleetType,
    pub position: usize,
    pub ship_id: u16,
    pub adjusted_anti_air: Option<f64>,
    pub proportional_shotdown_rate: Option<f64>,
    pub fixed_shotdown_number: Option<i32>,
    pub minimum_bonus: i32,
    pub anti_air_cutins: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompAntiAirAnalysis {
    pub fleet_anti_air: f64,
    /// Cut-in assumed active for the shootdown numbers.
    pub cutin: Option<u8>,
    pub cutin_rates: Vec<AntiAirCutinRate>,
    pub no_cutin_rate: f64,
    pub ships: Vec<ShipAntiAirAnalysis>,
}

impl CompAntiAirAnalysis {
    pub fn total_cutin_rate(&self) -> f64 {
        self.cutin_rates.iter().map(|entry| entry.rate).sum()
    }

    pub fn cutin_rate(&self, id: u8) -> Option<f64> {
        self.cutin_rates
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.rate)
    }
}

/// `floor(formation_mod * sum(floor(ship bonus)))` over every ship in the comp.
pub fn fleet_anti_air(comp: &Comp) -> f64 {
    let sum: f64 = comp.ships().map(|(_, _, ship)| fleet_anti_air_bonus(ship)).sum();
    (comp.formation.fleet_anti_air_mod() * sum).floor()
}

/// Analyse `comp` with cut-in `cutin` (by id) assumed to have fired, or none.
/// `rule` is the lottery rule of the active cut-in tables.
pub fn analyze_anti_air(
    comp: &Comp,
    defs: &[AntiAirCutinDef],
    rule: AllocationRule,
    cutin: Option<u8>,
) -> CompAntiAirAnalysis {
    let fleet_aa = fleet_anti_air(comp);
    let side = comp.side();
    let active = cutin.and_then(|id| defs.iter().find(|def| def.id == id));
    let rate_mod = active.map_or(1.0, |def| def.rate_mod);
    let cutin_fixed = active.map_or(0, |def| def.fixed_air_defense);

    let ships = comp
        .ships()
        .map(|(fleet_type, position, ship)| {
            let combined_mod = combined_fleet_mod(comp.org_type, fleet_type);
            let adjusted = adjusted_anti_air(ship);
            ShipAntiAirAnalysis {
                fleet_type,
                position,
                ship_id: ship.ship_id(),
                adjusted_anti_air: adjusted,
                proportional_shotdown_rate: adjusted
                    .map(|value| proportional_shotdown_rate(value, combined_mod)),
                fixed_shotdown_number: adjusted.map(|value| {
                    fixed_shotdown_number(value, fleet_aa, side, combined_mod, rate_mod)
                }),
                minimum_bonus: minimum_bonus(side, cutin_fixed),
                anti_air_cutins: available_anti_air_cutins(ship, defs)
                    .iter()
                    .map(|def| def.id)
                    .collect(),
            }
        })
        .collect();

    let members: Vec<&Ship> = comp.ships().map(|(_, _, ship)| ship).collect();
    let (cutin_rates, no_cutin_rate) = anti_air_cutin_rates(members, defs, rule);

    tracing::debug!(
        fleet_anti_air = fleet_aa,
        cutins = cutin_rates.len(),
        no_cutin_rate,
        "anti-air analysed"
    );

    CompAntiAirAnalysis {
        fleet_anti_air: fleet_aa,
        cutin,
        cutin_rates,
        no_cutin_rate,
        ships,
    }
}

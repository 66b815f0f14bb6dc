//! Day artillery spotting and carrier cut-ins.

use crate::combat::types::{AirState, DamageState, ShipEnvironment};
use crate::data::cutin::DayCutin;
use crate::data::gear::{GearAttr, GearCategory};
use crate::data::ship::ShipType;
use crate::entity::ship::Ship;
use crate::stats::los::fleet_observation_los_mod;

const FLAGSHIP_BONUS: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DayLoadout {
    main_guns: usize,
    secondary_guns: usize,
    ap_shells: usize,
    radars: usize,
    observation_planes: usize,
    zuiun: usize,
    air_sea: usize,
    fighters: usize,
    dive_bombers: usize,
    torpedo_bombers: usize,
}

impl DayLoadout {
    fn of(ship: &Ship) -> Self {
        Self {
            main_guns: ship.count_attr(GearAttr::MainGun),
            secondary_guns: ship.count_category(GearCategory::SecondaryGun),
            ap_shells: ship.count_attr(GearAttr::ApShell),
            radars: ship.count_attr(GearAttr::Radar),
            observation_planes: ship.count_planes(|gear| gear.has_attr(GearAttr::ObservationSeaplane)),
            zuiun: ship.count_planes(|gear| gear.has_attr(GearAttr::Zuiun)),
            air_sea: ship.count_planes(|gear| gear.has_attr(GearAttr::AirSeaBomber)),
            fighters: ship.count_planes(|gear| gear.category() == GearCategory::CbFighter),
            dive_bombers: ship.count_planes(|gear| gear.category() == GearCategory::CbDiveBomber),
            torpedo_bombers: ship
                .count_planes(|gear| gear.category() == GearCategory::CbTorpedoBomber),
        }
    }
}

/// Day cut-ins the attacker's loadout supports, unordered. Empty when the
/// air state or damage state rules out special attacks.
pub fn available_day_cutins(attacker: &Ship, air_state: AirState) -> Vec<DayCutin> {
    if !air_state.allows_day_cutin() || attacker.damage_state() <= DamageState::Taiha {
        return Vec::new();
    }
    let g = DayLoadout::of(attacker);
    let mut kinds = Vec::new();

    if attacker.is_carrier() {
        if g.dive_bombers >= 1 && g.torpedo_bombers >= 1 && g.fighters >= 1 {
            kinds.push(DayCutin::Fba);
        }
        if g.dive_bombers >= 2 && g.torpedo_bombers >= 1 {
            kinds.push(DayCutin::Bba);
        }
        if g.dive_bombers >= 1 && g.torpedo_bombers >= 1 {
            kinds.push(DayCutin::Ba);
        }
        return kinds;
    }

    if g.observation_planes == 0 || g.main_guns == 0 {
        return kinds;
    }
    let seaplane_carrier = matches!(attacker.ship_type(), ShipType::CAV | ShipType::BBV);
    if seaplane_carrier && g.zuiun >= 2 {
        kinds.push(DayCutin::Zuiun);
    }
    if attacker.ship_type() == ShipType::BBV && g.air_sea >= 2 {
        kinds.push(DayCutin::AirSea);
    }
    if g.main_guns >= 2 && g.ap_shells >= 1 {
        kinds.push(DayCutin::MainMain);
    }
    if g.secondary_guns >= 1 && g.ap_shells >= 1 {
        kinds.push(DayCutin::MainAp);
    }
    if g.secondary_guns >= 1 && g.radars >= 1 {
        kinds.push(DayCutin::MainRadar);
    }
    if g.secondary_guns >= 1 {
        kinds.push(DayCutin::MainSec);
    }
    if g.main_guns >= 2 {
        kinds.push(DayCutin::DoubleAttack);
    }
    kinds
}

/// Artillery spotting term. Supremacy:
/// `floor(sqrt(luck) + 10) + floor(0.7 * (fleet_los + 1.6 * equipment_los)) + 10`;
/// superiority: `floor(sqrt(luck) + 10) + floor(0.6 * (fleet_los + 1.2 * equipment_los))`;
/// `+15` for the flagship.
pub fn observation_term(attacker: &Ship, env: &ShipEnvironment, air_state: AirState) -> Option<f64> {
    let luck = f64::from(attacker.luck()?.max(0));
    let fleet_los = env
        .fleet_los_mod
        .unwrap_or_else(|| fleet_observation_los_mod(&[attacker]));
    let equipment_los = f64::from(attacker.equipment_los());
    let luck_term = (luck.sqrt() + 10.0).floor();
    let term = match air_state {
        AirState::AirSupremacy => {
            luck_term + (0.7 * (fleet_los + 1.6 * equipment_los)).floor() + 10.0
        }
        AirState::AirSuperiority => luck_term + (0.6 * (fleet_los + 1.2 * equipment_los)).floor(),
        _ => return None,
    };
    let flagship = if env.is_flagship() { FLAGSHIP_BONUS } else { 0.0 };
    Some(term + flagship)
}

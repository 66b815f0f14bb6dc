//! Builds entities from plain state objects against the master data.
//!
//! Construction is the only step that fails loudly: unknown ids and
//! oversized collections are `FactoryError`s. Out-of-range numbers (level,
//! hp, morale, ammo, fuel) are clamped instead.

use std::sync::Arc;

use crate::data::gear::MasterGear;
use crate::data::ibonus::StatBonus;
use crate::data::master::MasterData;
use crate::data::ship::MasterShip;
use crate::entity::air_squadron::{
    default_slot_size, AirSquadron, AirSquadronState, MAX_SQUADRON_SLOTS,
};
use crate::entity::fingerprint::{combine, fingerprint};
use crate::entity::fleet::{Fleet, FleetState, MAX_FLEET_SHIPS};
use crate::entity::gear::{Gear, GearState};
use crate::entity::org::{Org, OrgState, DEFAULT_HQ_LEVEL, MAX_AIR_SQUADRONS, MAX_FLEETS};
use crate::entity::ship::{Ship, ShipState, DEFAULT_MORALE, MAX_SHIP_SLOTS};
use crate::error::FactoryError;
use crate::stats::equipment_bonus::evaluate_equipment_bonuses;
use crate::stats::resolve::{clamp_level, naked_stat};
use crate::stats::stacking::{StatContribution, StatKind, StatStacking};

pub const DEFAULT_PLAYER_LEVEL: u16 = 99;
pub const DEFAULT_ABYSSAL_LEVEL: u16 = 1;
pub const MAX_MORALE: i32 = 100;
pub const MAX_HQ_LEVEL: u16 = 120;

fn gear_stat(gear: &MasterGear, kind: StatKind) -> i32 {
    match kind {
        StatKind::Firepower => gear.firepower,
        StatKind::Torpedo => gear.torpedo,
        StatKind::AntiAir => gear.anti_air,
        StatKind::Armor => gear.armor,
        StatKind::Evasion => gear.evasion,
        StatKind::Asw => gear.asw,
        StatKind::Los => gear.los,
        StatKind::Accuracy => gear.accuracy,
        StatKind::Bombing => gear.bombing,
        StatKind::MaxHp | StatKind::Luck | StatKind::Speed | StatKind::Range => 0,
    }
}

fn bonus_stat(bonus: &StatBonus, kind: StatKind) -> i32 {
    match kind {
        StatKind::Firepower => bonus.firepower,
        StatKind::Torpedo => bonus.torpedo,
        StatKind::AntiAir => bonus.anti_air,
        StatKind::Armor => bonus.armor,
        StatKind::Evasion => bonus.evasion,
        StatKind::Asw => bonus.asw,
        StatKind::Los => bonus.los,
        StatKind::Accuracy => bonus.accuracy,
        StatKind::Bombing => bonus.bombing,
        StatKind::Range => bonus.range,
        StatKind::Speed => bonus.speed,
        StatKind::MaxHp | StatKind::Luck => 0,
    }
}

/// Max hp never exceeds the template's upper bound.
fn cap_max_hp(master: &MasterShip, hp: i32) -> i32 {
    master.max_hp.right().map_or(hp, |cap| hp.min(cap))
}

fn stat_layers(
    master: &MasterShip,
    state: &ShipState,
    level: u16,
    gears: &[&MasterGear],
    ebonus: &StatBonus,
) -> StatStacking<StatKind> {
    let mut stacking = StatStacking::new();
    for kind in StatKind::ALL {
        let modifier = state.modifiers.get(&kind).copied().unwrap_or(0);
        let naked = naked_stat(master, kind, level, modifier);
        if let Some(value) = naked {
            stacking.add(StatContribution::naked(kind, value));
        }

        let equipment = if kind == StatKind::Range {
            // range is the longest of ship and gear, not a sum
            let longest = gears.iter().map(|gear| i32::from(gear.range)).max();
            match (longest, naked) {
                (Some(longest), Some(own)) => (longest - own).max(0),
                _ => 0,
            }
        } else {
            gears.iter().map(|gear| gear_stat(gear, kind)).sum()
        };
        stacking.add(StatContribution::equipment(kind, equipment));
        stacking.add(StatContribution::bonus(kind, bonus_stat(ebonus, kind)));

        if let Some(&value) = state.overrides.get(&kind) {
            let value = match kind {
                StatKind::MaxHp => cap_max_hp(master, value),
                _ => value,
            };
            stacking.add(StatContribution::overridden(kind, value));
        }
    }
    stacking
}

/// Entity constructor bound to one master data set.
#[derive(Debug, Clone)]
pub struct Factory {
    master: Arc<MasterData>,
}

impl Factory {
    pub fn new(master: Arc<MasterData>) -> Self {
        Self { master }
    }

    pub fn master(&self) -> &MasterData {
        &self.master
    }

    pub fn create_gear(&self, state: &GearState) -> Result<Gear, FactoryError> {
        let master = self
            .master
            .gear(state.gear_id)
            .cloned()
            .ok_or(FactoryError::UnknownGear(state.gear_id))?;
        Ok(Gear::new(master, state))
    }

    fn create_gears(&self, states: &[Option<GearState>]) -> Result<Vec<Option<Gear>>, FactoryError> {
        states
            .iter()
            .map(|state| state.as_ref().map(|state| self.create_gear(state)).transpose())
            .collect()
    }

    pub fn create_ship(&self, state: &ShipState) -> Result<Ship, FactoryError> {
        let master = self
            .master
            .ship(state.ship_id)
            .cloned()
            .ok_or(FactoryError::UnknownShip(state.ship_id))?;
        if state.gears.len() > MAX_SHIP_SLOTS {
            return Err(FactoryError::TooManySlots {
                ship_id: state.ship_id,
                count: state.gears.len(),
                max: MAX_SHIP_SLOTS,
            });
        }

        let gears = self.create_gears(&state.gears)?;
        let extra_gear = state
            .extra_gear
            .as_ref()
            .map(|gear| self.create_gear(gear))
            .transpose()?;

        let default_level = if master.is_abyssal() {
            DEFAULT_ABYSSAL_LEVEL
        } else {
            DEFAULT_PLAYER_LEVEL
        };
        let level = clamp_level(state.level.unwrap_or(default_level));

        let slots: Vec<i32> = (0..gears.len().max(master.slots.len()))
            .map(|index| {
                let capacity = master.slots.get(index).copied();
                let current = state
                    .slots
                    .as_ref()
                    .and_then(|slots| slots.get(index).copied())
                    .or(capacity)
                    .unwrap_or(0);
                match capacity {
                    Some(capacity) => current.clamp(0, capacity.max(0)),
                    None => current.max(0),
                }
            })
            .collect();

        let equipped: Vec<&Gear> = gears.iter().flatten().chain(extra_gear.iter()).collect();
        let pairs: Vec<(&MasterGear, u8)> = equipped
            .iter()
            .map(|gear| (gear.master.as_ref(), gear.stars))
            .collect();
        let templates: Vec<&MasterGear> = pairs.iter().map(|(gear, _)| *gear).collect();
        let ebonus = evaluate_equipment_bonuses(&self.master.ibonuses, &master, &pairs);
        let stats = stat_layers(&master, state, level, &templates, &ebonus);

        let max_hp = stats
            .composed_for(&StatKind::MaxHp)
            .map(|hp| cap_max_hp(&master, hp));
        let current_hp = match (state.current_hp, max_hp) {
            (Some(hp), Some(max)) => Some(hp.clamp(0, max)),
            (Some(hp), None) => Some(hp.max(0)),
            (None, max) => max,
        };
        let morale = state.morale.unwrap_or(DEFAULT_MORALE).clamp(0, MAX_MORALE);
        let clamp_supply = |current: Option<i32>, max: Option<i32>| match (current, max) {
            (Some(current), Some(max)) => Some(current.clamp(0, max)),
            (Some(current), None) => Some(current.max(0)),
            (None, max) => max,
        };
        let ammo = clamp_supply(state.ammo, master.ammo);
        let fuel = clamp_supply(state.fuel, master.fuel);

        Ok(Ship {
            id: state.id.clone(),
            fingerprint: fingerprint(&("ship", state)),
            master,
            level,
            gears,
            extra_gear,
            slots,
            stats,
            ebonus,
            max_hp,
            current_hp,
            morale,
            ammo,
            fuel,
            custom: state.custom,
        })
    }

    pub fn create_fleet(&self, state: &FleetState) -> Result<Fleet, FactoryError> {
        if state.ships.len() > MAX_FLEET_SHIPS {
            return Err(FactoryError::TooManyShips {
                count: state.ships.len(),
                max: MAX_FLEET_SHIPS,
            });
        }
        let ships = state
            .ships
            .iter()
            .map(|ship| ship.as_ref().map(|ship| self.create_ship(ship)).transpose())
            .collect::<Result<Vec<_>, _>>()?;
        let fingerprint = combine(
            "fleet",
            ships
                .iter()
                .map(|ship| ship.as_ref().map(|ship| ship.fingerprint).unwrap_or(0)),
        );
        Ok(Fleet { ships, fingerprint })
    }

    pub fn create_air_squadron(
        &self,
        state: &AirSquadronState,
    ) -> Result<AirSquadron, FactoryError> {
        if state.gears.len() > MAX_SQUADRON_SLOTS {
            return Err(FactoryError::TooManySquadronSlots {
                count: state.gears.len(),
                max: MAX_SQUADRON_SLOTS,
            });
        }
        let gears = self.create_gears(&state.gears)?;
        let slots = gears
            .iter()
            .enumerate()
            .map(|(index, gear)| {
                let given = state.slots.as_ref().and_then(|slots| slots.get(index).copied());
                match (given, gear) {
                    (Some(size), _) => size.max(0),
                    (None, Some(gear)) => default_slot_size(gear),
                    (None, None) => 0,
                }
            })
            .collect();
        Ok(AirSquadron {
            mode: state.mode,
            gears,
            slots,
            fingerprint: fingerprint(&("air_squadron", state)),
        })
    }

    pub fn create_org(&self, state: &OrgState) -> Result<Org, FactoryError> {
        if state.fleets.len() > MAX_FLEETS {
            return Err(FactoryError::TooManyFleets {
                count: state.fleets.len(),
                max: MAX_FLEETS,
            });
        }
        if state.air_squadrons.len() > MAX_AIR_SQUADRONS {
            return Err(FactoryError::TooManyAirSquadrons {
                count: state.air_squadrons.len(),
                max: MAX_AIR_SQUADRONS,
            });
        }
        let fleets = state
            .fleets
            .iter()
            .map(|fleet| self.create_fleet(fleet))
            .collect::<Result<Vec<_>, _>>()?;
        let air_squadrons = state
            .air_squadrons
            .iter()
            .map(|squadron| self.create_air_squadron(squadron))
            .collect::<Result<Vec<_>, _>>()?;
        let hq_level = state
            .hq_level
            .unwrap_or(DEFAULT_HQ_LEVEL)
            .clamp(1, MAX_HQ_LEVEL);

        let fingerprint = combine(
            "org",
            std::iter::once(fingerprint(&(state.org_type, hq_level)))
                .chain(fleets.iter().map(|fleet| fleet.fingerprint))
                .chain(air_squadrons.iter().map(|squadron| squadron.fingerprint)),
        );
        tracing::debug!(
            org_type = ?state.org_type,
            fleets = fleets.len(),
            air_squadrons = air_squadrons.len(),
            fingerprint,
            "org constructed"
        );
        Ok(Org {
            org_type: state.org_type,
            hq_level,
            fleets,
            air_squadrons,
            fingerprint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::master::MasterDataFile;
    use crate::data::ship::StatInterval;

    fn factory() -> Factory {
        let file = MasterDataFile {
            ships: vec![MasterShip {
                ship_id: 10,
                max_hp: StatInterval::new(30, 40),
                firepower: StatInterval::new(10, 40),
                armor: StatInterval::new(10, 30),
                luck: StatInterval::new(10, 50),
                slots: vec![2, 2],
                ammo: Some(20),
                ..Default::default()
            }],
            gears: vec![MasterGear {
                gear_id: 1,
                types: [1, 1, 1, 1, 0],
                firepower: 2,
                range: 1,
                ..Default::default()
            }],
            ..Default::default()
        };
        Factory::new(Arc::new(MasterData::new(file).unwrap()))
    }

    #[test]
    fn unknown_ids_fail_construction() {
        let factory = factory();
        assert_eq!(
            factory.create_ship(&ShipState::new(999)).unwrap_err(),
            FactoryError::UnknownShip(999)
        );
        let state = ShipState::new(10).with_gears([GearState::new(77)]);
        assert_eq!(
            factory.create_ship(&state).unwrap_err(),
            FactoryError::UnknownGear(77)
        );
    }

    #[test]
    fn equipment_adds_to_naked_stats() {
        let factory = factory();
        let ship = factory
            .create_ship(&ShipState::new(10).with_gears([GearState::new(1), GearState::new(1)]))
            .unwrap();
        assert_eq!(ship.firepower(), Some(14));
        assert_eq!(ship.naked(StatKind::Firepower), Some(10));
        assert_eq!(ship.max_hp, Some(30));
        assert_eq!(ship.current_hp, Some(30));
    }

    #[test]
    fn out_of_range_state_is_clamped() {
        let factory = factory();
        let state = ShipState {
            current_hp: Some(500),
            morale: Some(-3),
            ammo: Some(99),
            ..ShipState::new(10)
        };
        let ship = factory.create_ship(&state).unwrap();
        assert_eq!(ship.current_hp, Some(30));
        assert_eq!(ship.morale, 0);
        assert_eq!(ship.ammo, Some(20));
    }

    #[test]
    fn same_state_gives_same_fingerprint() {
        let factory = factory();
        let state = ShipState::new(10).with_gears([GearState::new(1)]);
        let a = factory.create_ship(&state).unwrap();
        let b = factory.create_ship(&state).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a, b);

        let other = factory
            .create_ship(&ShipState::new(10).with_level(50))
            .unwrap();
        assert_ne!(a.fingerprint, other.fingerprint);
    }

    #[test]
    fn oversized_collections_are_rejected() {
        let factory = factory();
        let fleet = FleetState::new(vec![ShipState::new(10); 8]);
        assert!(matches!(
            factory.create_fleet(&fleet),
            Err(FactoryError::TooManyShips { count: 8, max: 7 })
        ));
        let org = OrgState {
            fleets: vec![FleetState::default(); 5],
            ..Default::default()
        };
        assert!(matches!(
            factory.create_org(&org),
            Err(FactoryError::TooManyFleets { .. })
        ));
    }
}

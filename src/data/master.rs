//! Immutable master data store. Built once, then shared by reference (`Arc`)
//! across every analysis.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::anti_air_cutin::{default_anti_air_cutins, AntiAirCutinDef};
use crate::data::cutin::CutinTables;
use crate::data::gear::MasterGear;
use crate::data::ibonus::EquipmentBonusRule;
use crate::data::ship::MasterShip;
use crate::error::MasterDataError;

/// On-disk shape of a master data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterDataFile {
    pub data_version: Option<String>,
    pub ships: Vec<MasterShip>,
    pub gears: Vec<MasterGear>,
    pub ibonuses: Vec<EquipmentBonusRule>,
    #[serde(default = "default_anti_air_cutins")]
    pub anti_air_cutins: Vec<AntiAirCutinDef>,
    pub cutin_tables: CutinTables,
}

#[derive(Debug, Clone, Default)]
pub struct MasterData {
    pub data_version: Option<String>,
    ships: HashMap<u16, Arc<MasterShip>>,
    gears: HashMap<u16, Arc<MasterGear>>,
    pub ibonuses: Vec<EquipmentBonusRule>,
    pub anti_air_cutins: Vec<AntiAirCutinDef>,
    pub cutin_tables: CutinTables,
}

impl MasterData {
    pub fn new(file: MasterDataFile) -> Result<Self, MasterDataError> {
        let mut ships = HashMap::with_capacity(file.ships.len());
        for ship in file.ships {
            let id = ship.ship_id;
            if ships.insert(id, Arc::new(ship)).is_some() {
                return Err(MasterDataError::DuplicateShipId(id));
            }
        }

        let mut gears = HashMap::with_capacity(file.gears.len());
        for gear in file.gears {
            let id = gear.gear_id;
            if gears.insert(id, Arc::new(gear)).is_some() {
                return Err(MasterDataError::DuplicateGearId(id));
            }
        }

        let master = Self {
            data_version: file.data_version,
            ships,
            gears,
            ibonuses: file.ibonuses,
            anti_air_cutins: file.anti_air_cutins,
            cutin_tables: file.cutin_tables,
        };
        master.warn_dangling_references();
        Ok(master)
    }

    pub fn ship(&self, ship_id: u16) -> Option<&Arc<MasterShip>> {
        self.ships.get(&ship_id)
    }

    pub fn gear(&self, gear_id: u16) -> Option<&Arc<MasterGear>> {
        self.gears.get(&gear_id)
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn gear_count(&self) -> usize {
        self.gears.len()
    }

    pub fn ships(&self) -> impl Iterator<Item = &Arc<MasterShip>> {
        self.ships.values()
    }

    pub fn gears(&self) -> impl Iterator<Item = &Arc<MasterGear>> {
        self.gears.values()
    }

    fn warn_dangling_references(&self) {
        for (index, rule) in self.ibonuses.iter().enumerate() {
            for gear_id in rule.referenced_gear_ids() {
                if !self.gears.contains_key(&gear_id) {
                    tracing::warn!(rule = index, gear_id, "equipment bonus refers to unknown gear");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ship_ids_are_rejected() {
        let file = MasterDataFile {
            ships: vec![
                MasterShip {
                    ship_id: 1,
                    ..Default::default()
                },
                MasterShip {
                    ship_id: 1,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert!(matches!(
            MasterData::new(file),
            Err(MasterDataError::DuplicateShipId(1))
        ));
    }

    #[test]
    fn missing_tables_fall_back_to_builtins() {
        let file: MasterDataFile = serde_json::from_str(r#"{"ships":[],"gears":[]}"#).unwrap();
        let master = MasterData::new(file).unwrap();
        assert_eq!(master.anti_air_cutins.len(), 12);
        assert_eq!(master.cutin_tables, CutinTables::default());
    }
}

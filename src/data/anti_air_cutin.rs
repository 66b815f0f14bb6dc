//! Anti-air cut-in (AACI) table. Entries are listed in trigger priority order.

use serde::{Deserialize, Serialize};

use crate::data::filter::GearRequirement;
use crate::data::gear::{GearAttr, GearCategory, MasterGear};
use crate::data::ship::{MasterShip, ShipType};

pub const AKIZUKI_CLASS: u16 = 54;
pub const MAYA_KAI_NI: u16 = 428;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiAirCutinDef {
    pub id: u8,
    pub fixed_air_defense: i32,
    pub rate_mod: f64,
    /// Base trigger chance in `[0, 1]`.
    pub chance: f64,
    #[serde(default)]
    pub ship_ids: Vec<u16>,
    #[serde(default)]
    pub ship_classes: Vec<u16>,
    #[serde(default)]
    pub ship_types: Vec<ShipType>,
    pub requirements: Vec<GearRequirement>,
}

impl AntiAirCutinDef {
    fn ship_matches(&self, ship: &MasterShip) -> bool {
        let id_ok = self.ship_ids.is_empty() || self.ship_ids.contains(&ship.ship_id);
        let class_ok =
            self.ship_classes.is_empty() || self.ship_classes.contains(&ship.ship_class);
        let type_ok = self.ship_types.is_empty() || self.ship_types.contains(&ship.ship_type);
        id_ok && class_ok && type_ok
    }

    pub fn is_available(&self, ship: &MasterShip, gears: &[(&MasterGear, u8)]) -> bool {
        self.ship_matches(ship)
            && self
                .requirements
                .iter()
                .all(|req| req.is_met_by(gears.iter().copied()))
    }
}

pub fn default_anti_air_cutins() -> Vec<AntiAirCutinDef> {
    use GearAttr::*;

    let any = |id: u8, fixed: i32, rate_mod: f64, chance: f64, requirements: Vec<GearRequirement>| {
        AntiAirCutinDef {
            id,
            fixed_air_defense: fixed,
            rate_mod,
            chance,
            ship_ids: Vec::new(),
            ship_classes: Vec::new(),
            ship_types: Vec::new(),
            requirements,
        }
    };
    let battleships = vec![ShipType::FBB, ShipType::BB, ShipType::BBV];

    vec![
        AntiAirCutinDef {
            ship_classes: vec![AKIZUKI_CLASS],
            ..any(
                1,
                7,
                1.7,
                0.65,
                vec![
                    GearRequirement::attr(HighAngleMount, 2),
                    GearRequirement::attr(AirRadar, 1),
                ],
            )
        },
        AntiAirCutinDef {
            ship_classes: vec![AKIZUKI_CLASS],
            ..any(
                2,
                6,
                1.7,
                0.58,
                vec![
                    GearRequirement::attr(HighAngleMount, 1),
                    GearRequirement::attr(AirRadar, 1),
                ],
            )
        },
        AntiAirCutinDef {
            ship_classes: vec![AKIZUKI_CLASS],
            ..any(3, 4, 1.6, 0.5, vec![GearRequirement::attr(HighAngleMount, 2)])
        },
        AntiAirCutinDef {
            ship_types: battleships.clone(),
            ..any(
                4,
                6,
                1.5,
                0.52,
                vec![
                    GearRequirement::category(GearCategory::LargeMainGun, 1),
                    GearRequirement::attr(AntiAirShell, 1),
                    GearRequirement::category(GearCategory::AntiAirFireDirector, 1),
                    GearRequirement::attr(AirRadar, 1),
                ],
            )
        },
        any(
            5,
            4,
            1.5,
            0.55,
            vec![
                GearRequirement::attr(HighAngleMountWithDirector, 2),
                GearRequirement::attr(AirRadar, 1),
            ],
        ),
        AntiAirCutinDef {
            ship_types: battleships,
            ..any(
                6,
                4,
                1.45,
                0.4,
                vec![
                    GearRequirement::category(GearCategory::LargeMainGun, 1),
                    GearRequirement::attr(AntiAirShell, 1),
                    GearRequirement::category(GearCategory::AntiAirFireDirector, 1),
                ],
            )
        },
        any(
            7,
            3,
            1.35,
            0.45,
            vec![
                GearRequirement::attr(HighAngleMount, 1),
                GearRequirement::category(GearCategory::AntiAirFireDirector, 1),
                GearRequirement::attr(AirRadar, 1),
            ],
        ),
        any(
            8,
            4,
            1.4,
            0.5,
            vec![
                GearRequirement::attr(HighAngleMountWithDirector, 1),
                GearRequirement::attr(AirRadar, 1),
            ],
        ),
        any(
            9,
            2,
            1.3,
            0.4,
            vec![
                GearRequirement::attr(HighAngleMount, 1),
                GearRequirement::category(GearCategory::AntiAirFireDirector, 1),
            ],
        ),
        AntiAirCutinDef {
            ship_ids: vec![MAYA_KAI_NI],
            ..any(
                10,
                8,
                1.65,
                0.6,
                vec![
                    GearRequirement::attr(HighAngleMount, 1),
                    GearRequirement::attr(ConcentratedAntiAirGun, 1),
                    GearRequirement::attr(AirRadar, 1),
                ],
            )
        },
        AntiAirCutinDef {
            ship_ids: vec![MAYA_KAI_NI],
            ..any(
                11,
                6,
                1.5,
                0.55,
                vec![
                    GearRequirement::attr(HighAngleMount, 1),
                    GearRequirement::attr(ConcentratedAntiAirGun, 1),
                ],
            )
        },
        any(
            12,
            3,
            1.25,
            0.45,
            vec![
                GearRequirement::attr(ConcentratedAntiAirGun, 1),
                GearRequirement::category(GearCategory::AntiAirGun, 2),
                GearRequirement::attr(AirRadar, 1),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_by_id() {
        let table = default_anti_air_cutins();
        let ids: Vec<u8> = table.iter().map(|def| def.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn akizuki_only_kinds_reject_other_classes() {
        let table = default_anti_air_cutins();
        let ha = MasterGear {
            gear_id: 122,
            types: [1, 1, 1, 16, 16],
            anti_air: 10,
            ..Default::default()
        };
        let gears = [(&ha, 0u8), (&ha, 0u8)];
        let akizuki = MasterShip {
            ship_class: AKIZUKI_CLASS,
            ..Default::default()
        };
        let other = MasterShip {
            ship_class: 1,
            ..Default::default()
        };
        assert!(table[2].is_available(&akizuki, &gears));
        assert!(!table[2].is_available(&other, &gears));
    }
}

//! Equipment bonus rules ("ibonuses"): stat bonuses granted by combinations
//! of equipped gear on particular ships.

use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

use crate::data::filter::GearFilter;
use crate::data::gear::MasterGear;
use crate::data::ship::{MasterShip, ShipType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BonusCondition {
    Always,
    All { conditions: Vec<BonusCondition> },
    Any { conditions: Vec<BonusCondition> },
    Not { condition: Box<BonusCondition> },
    ShipId { ship_ids: Vec<u16> },
    ShipClass { classes: Vec<u16> },
    ShipType { types: Vec<ShipType> },
    GearCount { filter: GearFilter, at_least: usize },
}

impl BonusCondition {
    pub fn evaluate(&self, ship: &MasterShip, gears: &[(&MasterGear, u8)]) -> bool {
        match self {
            Self::Always => true,
            Self::All { conditions } => conditions.iter().all(|c| c.evaluate(ship, gears)),
            Self::Any { conditions } => conditions.iter().any(|c| c.evaluate(ship, gears)),
            Self::Not { condition } => !condition.evaluate(ship, gears),
            Self::ShipId { ship_ids } => ship_ids.contains(&ship.ship_id),
            Self::ShipClass { classes } => classes.contains(&ship.ship_class),
            Self::ShipType { types } => types.contains(&ship.ship_type),
            Self::GearCount { filter, at_least } => {
                filter.count(gears.iter().copied()) >= *at_least
            }
        }
    }

    pub fn referenced_gear_ids(&self) -> Vec<u16> {
        match self {
            Self::All { conditions } | Self::Any { conditions } => conditions
                .iter()
                .flat_map(BonusCondition::referenced_gear_ids)
                .collect(),
            Self::Not { condition } => condition.referenced_gear_ids(),
            Self::GearCount { filter, .. } => filter.referenced_gear_ids(),
            Self::Always | Self::ShipId { .. } | Self::ShipClass { .. } | Self::ShipType { .. } => {
                Vec::new()
            }
        }
    }
}

/// Flat stat deltas. `speed` is in game speed units (5 = one rank).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBonus {
    pub firepower: i32,
    pub torpedo: i32,
    pub anti_air: i32,
    pub armor: i32,
    pub evasion: i32,
    pub asw: i32,
    pub los: i32,
    pub accuracy: i32,
    pub bombing: i32,
    pub range: i32,
    pub speed: i32,
}

impl StatBonus {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for StatBonus {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            firepower: self.firepower + rhs.firepower,
            torpedo: self.torpedo + rhs.torpedo,
            anti_air: self.anti_air + rhs.anti_air,
            armor: self.armor + rhs.armor,
            evasion: self.evasion + rhs.evasion,
            asw: self.asw + rhs.asw,
            los: self.los + rhs.los,
            accuracy: self.accuracy + rhs.accuracy,
            bombing: self.bombing + rhs.bombing,
            range: self.range + rhs.range,
            speed: self.speed + rhs.speed,
        }
    }
}

impl AddAssign for StatBonus {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<i32> for StatBonus {
    type Output = Self;

    fn mul(self, n: i32) -> Self {
        Self {
            firepower: self.firepower * n,
            torpedo: self.torpedo * n,
            anti_air: self.anti_air * n,
            armor: self.armor * n,
            evasion: self.evasion * n,
            asw: self.asw * n,
            los: self.los * n,
            accuracy: self.accuracy * n,
            bombing: self.bombing * n,
            range: self.range * n,
            speed: self.speed * n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentBonusRule {
    pub condition: BonusCondition,
    /// When set, the bonus is granted once per gear matching this filter.
    #[serde(default)]
    pub per_gear: Option<GearFilter>,
    pub bonus: StatBonus,
}

impl EquipmentBonusRule {
    pub fn bonus_for(&self, ship: &MasterShip, gears: &[(&MasterGear, u8)]) -> Option<StatBonus> {
        if !self.condition.evaluate(ship, gears) {
            return None;
        }
        match &self.per_gear {
            Some(filter) => {
                let count = filter.count(gears.iter().copied());
                if count == 0 {
                    None
                } else {
                    Some(self.bonus * count as i32)
                }
            }
            None => Some(self.bonus),
        }
    }

    pub fn referenced_gear_ids(&self) -> Vec<u16> {
        let mut ids = self.condition.referenced_gear_ids();
        if let Some(filter) = &self.per_gear {
            ids.extend(filter.referenced_gear_ids());
        }
        ids
    }
}

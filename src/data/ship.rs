//! Ship templates: stat intervals, slot layout, classification.
//! Player ships interpolate growth stats by level; abyssal ships (id > 1500)
//! use the left bound as a fixed stat.

use serde::{Deserialize, Serialize};

pub const ABYSSAL_ID_THRESHOLD: u16 = 1500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipType {
    DE,
    #[default]
    DD,
    CL,
    CLT,
    CA,
    CAV,
    CVL,
    FBB,
    BB,
    BBV,
    CV,
    CVB,
    SS,
    SSV,
    AV,
    LHA,
    AR,
    AS,
    CT,
    AO,
}

impl ShipType {
    pub fn is_submarine(self) -> bool {
        matches!(self, Self::SS | Self::SSV)
    }

    pub fn is_carrier(self) -> bool {
        matches!(self, Self::CVL | Self::CV | Self::CVB)
    }

    pub fn is_battleship(self) -> bool {
        matches!(self, Self::FBB | Self::BB | Self::BBV)
    }

    pub fn is_light_cruiser_class(self) -> bool {
        matches!(self, Self::CL | Self::CLT | Self::CT)
    }

    pub fn is_heavily_armored(self) -> bool {
        matches!(
            self,
            Self::CA | Self::CAV | Self::FBB | Self::BB | Self::BBV | Self::CV | Self::CVB
        )
    }

    /// Ship types that attack submarines with depth charges and sonar.
    pub fn is_depth_charge_asw_type(self) -> bool {
        matches!(
            self,
            Self::DE | Self::DD | Self::CL | Self::CLT | Self::CT | Self::AO
        )
    }

    /// Ship types that attack submarines with aircraft.
    pub fn is_aircraft_asw_type(self) -> bool {
        matches!(
            self,
            Self::CVL | Self::CAV | Self::BBV | Self::AV | Self::LHA | Self::CV | Self::CVB
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipAttr {
    Installation,
    OpeningAswAlways,
    NightCarrier,
    NightShellingCarrier,
}

/// Enemy categories that receive their own attack power modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecialEnemyType {
    SoftSkinned,
    Pillbox,
    IsolatedIsland,
    SupplyDepot,
    HarbourSummerPrincess,
    PtImp,
}

impl SpecialEnemyType {
    pub fn is_installation(self) -> bool {
        !matches!(self, Self::PtImp)
    }
}

/// `[min, max]` stat bounds. Either side may be unknown (common for enemy data).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatInterval(pub Option<i32>, pub Option<i32>);

impl StatInterval {
    pub fn fixed(value: i32) -> Self {
        Self(Some(value), Some(value))
    }

    pub fn new(min: i32, max: i32) -> Self {
        Self(Some(min), Some(max))
    }

    pub fn left(&self) -> Option<i32> {
        self.0
    }

    pub fn right(&self) -> Option<i32> {
        self.1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterShip {
    pub ship_id: u16,
    pub name: String,
    pub ship_type: ShipType,
    pub ship_class: u16,
    pub max_hp: StatInterval,
    pub firepower: StatInterval,
    pub torpedo: StatInterval,
    pub anti_air: StatInterval,
    pub armor: StatInterval,
    pub evasion: StatInterval,
    pub asw: StatInterval,
    pub los: StatInterval,
    pub luck: StatInterval,
    pub slots: Vec<i32>,
    pub speed: u8,
    pub range: u8,
    pub fuel: Option<i32>,
    pub ammo: Option<i32>,
    pub attrs: Vec<ShipAttr>,
    pub special_enemy_type: Option<SpecialEnemyType>,
}

impl MasterShip {
    pub fn is_abyssal(&self) -> bool {
        self.ship_id > ABYSSAL_ID_THRESHOLD
    }

    pub fn has_attr(&self, attr: ShipAttr) -> bool {
        self.attrs.contains(&attr)
    }

    pub fn is_installation(&self) -> bool {
        self.has_attr(ShipAttr::Installation)
            || self
                .special_enemy_type
                .map(SpecialEnemyType::is_installation)
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abyssal_threshold_is_exclusive() {
        let mut ship = MasterShip {
            ship_id: 1500,
            ..Default::default()
        };
        assert!(!ship.is_abyssal());
        ship.ship_id = 1501;
        assert!(ship.is_abyssal());
    }

    #[test]
    fn installation_follows_special_enemy_type() {
        let ship = MasterShip {
            special_enemy_type: Some(SpecialEnemyType::Pillbox),
            ..Default::default()
        };
        assert!(ship.is_installation());

        let imp = MasterShip {
            special_enemy_type: Some(SpecialEnemyType::PtImp),
            ..Default::default()
        };
        assert!(!imp.is_installation());
    }

    #[test]
    fn stat_interval_serializes_as_pair() {
        let json = serde_json::to_string(&StatInterval(Some(10), None)).unwrap();
        assert_eq!(json, "[10,null]");
    }
}

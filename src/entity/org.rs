use serde::{Deserialize, Serialize};

use crate::combat::types::{FleetType, Side};
use crate::data::formation::Formation;
use crate::entity::air_squadron::{AirSquadron, AirSquadronState};
use crate::entity::comp::Comp;
use crate::entity::fleet::{Fleet, FleetState};

pub const MAX_FLEETS: usize = 4;
pub const MAX_AIR_SQUADRONS: usize = 3;
pub const DEFAULT_HQ_LEVEL: u16 = 120;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgType {
    #[default]
    Single,
    CarrierTaskForce,
    SurfaceTaskForce,
    TransportEscort,
    EnemySingle,
    EnemyCombined,
}

impl OrgType {
    pub fn is_combined(self) -> bool {
        !matches!(self, Self::Single | Self::EnemySingle)
    }

    pub fn side(self) -> Side {
        match self {
            Self::EnemySingle | Self::EnemyCombined => Side::Enemy,
            _ => Side::Player,
        }
    }

    pub fn default_formation(self) -> Formation {
        if self.is_combined() {
            Formation::Cruising4
        } else {
            Formation::LineAhead
        }
    }

    /// Flat shelling power term for combined fleets.
    pub fn shelling_power_bonus(self, fleet_type: FleetType) -> f64 {
        match (self, fleet_type) {
            (Self::Single | Self::EnemySingle, _) => 0.0,
            (Self::CarrierTaskForce, FleetType::Main) => 2.0,
            (Self::CarrierTaskForce, FleetType::Escort) => 10.0,
            (Self::SurfaceTaskForce, FleetType::Main) => 10.0,
            (Self::SurfaceTaskForce, FleetType::Escort) => -5.0,
            (Self::TransportEscort, FleetType::Main) => -5.0,
            (Self::TransportEscort, FleetType::Escort) => 10.0,
            (Self::EnemyCombined, FleetType::Main) => 10.0,
            (Self::EnemyCombined, FleetType::Escort) => -5.0,
        }
    }

    /// Flat torpedo power term for combined fleets.
    pub fn torpedo_power_bonus(self) -> f64 {
        if self.is_combined() {
            -5.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgState {
    pub org_type: OrgType,
    pub hq_level: Option<u16>,
    pub fleets: Vec<FleetState>,
    pub air_squadrons: Vec<AirSquadronState>,
}

/// Up to four fleets and three land-based air squadrons.
#[derive(Debug, Clone, PartialEq)]
pub struct Org {
    pub org_type: OrgType,
    pub hq_level: u16,
    pub fleets: Vec<Fleet>,
    pub air_squadrons: Vec<AirSquadron>,
    pub fingerprint: u64,
}

impl Org {
    pub fn main_fleet(&self) -> Option<&Fleet> {
        self.fleets.first()
    }

    pub fn escort_fleet(&self) -> Option<&Fleet> {
        if self.org_type.is_combined() {
            self.fleets.get(1)
        } else {
            None
        }
    }

    /// Combat snapshot; `formation` defaults to the org type's.
    pub fn comp(&self, formation: Option<Formation>) -> Comp {
        Comp {
            org_type: self.org_type,
            hq_level: self.hq_level,
            formation: formation.unwrap_or_else(|| self.org_type.default_formation()),
            main: self.main_fleet().cloned().unwrap_or_default(),
            escort: self.escort_fleet().cloned(),
            air_squadrons: self.air_squadrons.clone(),
        }
    }
}

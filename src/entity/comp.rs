use crate::combat::types::{FleetType, ShipEnvironment, Side};
use crate::data::formation::Formation;
use crate::entity::air_squadron::AirSquadron;
use crate::entity::fleet::Fleet;
use crate::entity::org::OrgType;
use crate::entity::ship::Ship;

/// Read-only, combat-ready view of one side of an engagement.
#[derive(Debug, Clone, PartialEq)]
pub struct Comp {
    pub org_type: OrgType,
    pub hq_level: u16,
    pub formation: Formation,
    pub main: Fleet,
    pub escort: Option<Fleet>,
    pub air_squadrons: Vec<AirSquadron>,
}

impl Comp {
    pub fn side(&self) -> Side {
        self.org_type.side()
    }

    pub fn is_combined(&self) -> bool {
        self.org_type.is_combined() && self.escort.is_some()
    }

    pub fn fleet(&self, fleet_type: FleetType) -> Option<&Fleet> {
        match fleet_type {
            FleetType::Main => Some(&self.main),
            FleetType::Escort => self.escort.as_ref(),
        }
    }

    /// Every ship with its fleet and position, main fleet first.
    pub fn ships(&self) -> impl Iterator<Item = (FleetType, usize, &Ship)> + '_ {
        let main = self
            .main
            .members()
            .map(|(index, ship)| (FleetType::Main, index, ship));
        let escort = self.escort.iter().flat_map(|fleet| {
            fleet
                .members()
                .map(|(index, ship)| (FleetType::Escort, index, ship))
        });
        main.chain(escort)
    }

    pub fn ship(&self, fleet_type: FleetType, position: usize) -> Option<&Ship> {
        self.fleet(fleet_type).and_then(|fleet| fleet.ship(position))
    }

    pub fn fleet_los_mod(&self, fleet_type: FleetType) -> f64 {
        self.fleet(fleet_type)
            .map(Fleet::observation_los_mod)
            .unwrap_or(0.0)
    }

    pub fn fighter_power(&self) -> i32 {
        self.ships().map(|(_, _, ship)| ship.fighter_power()).sum()
    }

    /// Environment of the ship at `position` in `fleet_type`.
    pub fn environment(&self, fleet_type: FleetType, position: usize) -> ShipEnvironment {
        let fleet_len = self
            .fleet(fleet_type)
            .map(|fleet| fleet.ships.len().max(fleet.len()))
            .unwrap_or(0);
        ShipEnvironment {
            side: self.side(),
            org_type: self.org_type,
            fleet_type,
            position,
            fleet_len,
            formation: self.formation,
            fleet_los_mod: Some(self.fleet_los_mod(fleet_type)),
        }
    }
}

//! Scenario documents read by the command line: entity states plus an
//! engagement context, as JSON or YAML.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::combat::types::WarfareContext;
use crate::data::formation::Formation;
use crate::data::loader::{load_master_data, master_data_path};
use crate::data::master::MasterData;
use crate::entity::comp::Comp;
use crate::entity::factory::Factory;
use crate::entity::org::OrgState;
use crate::entity::ship::{Ship, ShipState};
use crate::error::{FactoryError, MasterDataError};
use crate::simulator::scenario::Phase;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioDocument {
    /// Overrides `FLEETHUB_MASTER_DATA`.
    pub master_data: Option<String>,
    pub context: WarfareContext,
    pub attacker: Option<ShipState>,
    pub target: Option<ShipState>,
    pub attacker_org: Option<OrgState>,
    pub target_org: Option<OrgState>,
    pub attacker_formation: Option<Formation>,
    pub target_formation: Option<Formation>,
    pub phase: Phase,
    /// Anti-air cut-in assumed active by `anti-air`.
    pub anti_air_cutin: Option<u8>,
}

impl ScenarioDocument {
    pub fn master_data_path(&self) -> String {
        self.master_data.clone().unwrap_or_else(master_data_path)
    }

    pub fn load_master_data(&self) -> Result<Arc<MasterData>, MasterDataError> {
        load_master_data(self.master_data_path()).map(Arc::new)
    }

    /// `(attacker, target)` ships, when both are given.
    pub fn ships(&self, factory: &Factory) -> Result<Option<(Ship, Ship)>, FactoryError> {
        let (Some(attacker), Some(target)) = (&self.attacker, &self.target) else {
            return Ok(None);
        };
        Ok(Some((
            factory.create_ship(attacker)?,
            factory.create_ship(target)?,
        )))
    }

    pub fn attacker_comp(&self, factory: &Factory) -> Result<Option<Comp>, FactoryError> {
        comp(factory, self.attacker_org.as_ref(), self.attacker_formation)
    }

    pub fn target_comp(&self, factory: &Factory) -> Result<Option<Comp>, FactoryError> {
        comp(factory, self.target_org.as_ref(), self.target_formation)
    }
}

fn comp(
    factory: &Factory,
    state: Option<&OrgState>,
    formation: Option<Formation>,
) -> Result<Option<Comp>, FactoryError> {
    state
        .map(|state| factory.create_org(state).map(|org| org.comp(formation)))
        .transpose()
}

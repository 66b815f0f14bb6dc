//! Shared bench fixtures built from the bundled sample master data.

#![allow(dead_code)]

use std::sync::Arc;

use fleethub_core::data::{MasterData, MasterDataFile};
use fleethub_core::entity::{Comp, Factory, FleetState, GearState, OrgState, OrgType, ShipState};

const SAMPLE_MASTER: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/master_data.json"));

pub const BATTLESHIP: u16 = 1;
pub const DESTROYER: u16 = 2;
pub const ENEMY_DESTROYER: u16 = 1501;
pub const SURFACE_RADAR: u16 = 101;
pub const LARGE_GUN: u16 = 102;
pub const RECON_SEAPLANE: u16 = 103;
pub const TORPEDO: u16 = 201;

pub fn factory() -> Factory {
    let file: MasterDataFile =
        serde_json::from_str(SAMPLE_MASTER).expect("sample master data should parse");
    Factory::new(Arc::new(MasterData::new(file).expect("sample master data should load")))
}

pub fn ship_state(ship_id: u16, gears: &[u16]) -> ShipState {
    ShipState::new(ship_id).with_gears(gears.iter().map(|&id| GearState::new(id)))
}

pub fn comp(factory: &Factory, org_type: OrgType, ships: Vec<ShipState>) -> Comp {
    let org = OrgState {
        org_type,
        fleets: vec![FleetState::new(ships)],
        ..Default::default()
    };
    factory
        .create_org(&org)
        .expect("bench org should build")
        .comp(None)
}

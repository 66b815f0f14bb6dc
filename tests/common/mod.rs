#![allow(dead_code)]

use std::sync::Arc;

use fleethub_core::combat::{AirState, ShipEnvironment, WarfareContext};
use fleethub_core::data::{
    default_anti_air_cutins, MasterData, MasterDataFile, MasterGear, MasterShip, ShipType,
    StatInterval,
};
use fleethub_core::entity::{
    Comp, Factory, FleetState, GearState, OrgState, OrgType, Ship, ShipState,
};

pub const BATTLESHIP: u16 = 1;
pub const DESTROYER: u16 = 2;
pub const ESCORT: u16 = 3;
pub const AKIZUKI: u16 = 330;
pub const ENEMY_DESTROYER: u16 = 1501;
pub const ENEMY_SUBMARINE: u16 = 1502;

pub const SURFACE_RADAR: u16 = 101;
pub const LARGE_GUN: u16 = 102;
pub const RECON_SEAPLANE: u16 = 103;
pub const AIR_RADAR: u16 = 106;
pub const HIGH_ANGLE_MOUNT: u16 = 122;
pub const TORPEDO: u16 = 201;
pub const SONAR: u16 = 301;
pub const DEPTH_CHARGE: u16 = 302;

pub fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a}");
}

fn gear(gear_id: u16, name: &str, types: [u8; 5]) -> MasterGear {
    MasterGear {
        gear_id,
        name: name.to_string(),
        types,
        ..Default::default()
    }
}

pub fn master_file() -> MasterDataFile {
    let ships = vec![
        MasterShip {
            ship_id: BATTLESHIP,
            name: "Test Battleship".to_string(),
            ship_type: ShipType::BB,
            ship_class: 2,
            max_hp: StatInterval::new(80, 92),
            firepower: StatInterval::new(90, 99),
            torpedo: StatInterval::fixed(0),
            anti_air: StatInterval::new(40, 80),
            armor: StatInterval::new(80, 90),
            evasion: StatInterval::new(30, 60),
            asw: StatInterval::fixed(0),
            los: StatInterval::new(15, 40),
            luck: StatInterval::new(10, 49),
            slots: vec![3, 3, 3, 3],
            speed: 5,
            range: 3,
            fuel: Some(100),
            ammo: Some(100),
            ..Default::default()
        },
        MasterShip {
            ship_id: DESTROYER,
            name: "Test Destroyer".to_string(),
            ship_type: ShipType::DD,
            ship_class: 38,
            max_hp: StatInterval::new(32, 40),
            firepower: StatInterval::new(10, 49),
            torpedo: StatInterval::new(28, 79),
            anti_air: StatInterval::new(9, 49),
            armor: StatInterval::new(5, 19),
            evasion: StatInterval::new(40, 79),
            asw: StatInterval::new(20, 49),
            los: StatInterval::new(5, 19),
            luck: StatInterval::new(12, 49),
            slots: vec![0, 0, 0],
            speed: 10,
            range: 1,
            fuel: Some(15),
            ammo: Some(20),
            ..Default::default()
        },
        MasterShip {
            ship_id: ESCORT,
            name: "Test Escort".to_string(),
            ship_type: ShipType::DE,
            ship_class: 74,
            max_hp: StatInterval::new(16, 22),
            firepower: StatInterval::new(6, 29),
            torpedo: StatInterval::fixed(0),
            anti_air: StatInterval::new(7, 39),
            armor: StatInterval::new(5, 19),
            evasion: StatInterval::new(37, 79),
            asw: StatInterval::new(30, 69),
            los: StatInterval::new(4, 19),
            luck: StatInterval::new(10, 49),
            slots: vec![0, 0, 0],
            speed: 5,
            range: 1,
            fuel: Some(10),
            ammo: Some(10),
            ..Default::default()
        },
        MasterShip {
            ship_id: AKIZUKI,
            name: "Test Akizuki".to_string(),
            ship_type: ShipType::DD,
            ship_class: 54,
            max_hp: StatInterval::new(37, 45),
            firepower: StatInterval::new(10, 49),
            torpedo: StatInterval::new(18, 59),
            anti_air: StatInterval::new(50, 90),
            armor: StatInterval::new(12, 29),
            evasion: StatInterval::new(42, 79),
            asw: StatInterval::new(27, 59),
            los: StatInterval::new(9, 25),
            luck: StatInterval::new(12, 49),
            slots: vec![0, 0, 0, 0],
            speed: 10,
            range: 1,
            fuel: Some(15),
            ammo: Some(25),
            ..Default::default()
        },
        MasterShip {
            ship_id: ENEMY_DESTROYER,
            name: "Test Enemy Destroyer".to_string(),
            ship_type: ShipType::DD,
            max_hp: StatInterval::fixed(100),
            firepower: StatInterval::fixed(5),
            torpedo: StatInterval::fixed(15),
            anti_air: StatInterval::fixed(6),
            armor: StatInterval::fixed(20),
            evasion: StatInterval::fixed(40),
            asw: StatInterval::fixed(0),
            los: StatInterval::fixed(1),
            luck: StatInterval::fixed(1),
            slots: vec![0, 0, 0],
            ..Default::default()
        },
        MasterShip {
            ship_id: ENEMY_SUBMARINE,
            name: "Test Enemy Submarine".to_string(),
            ship_type: ShipType::SS,
            max_hp: StatInterval::fixed(30),
            firepower: StatInterval::fixed(0),
            torpedo: StatInterval::fixed(20),
            armor: StatInterval::fixed(10),
            evasion: StatInterval::fixed(20),
            asw: StatInterval::fixed(0),
            luck: StatInterval::fixed(1),
            ..Default::default()
        },
    ];

    let gears = vec![
        MasterGear {
            accuracy: 10,
            los: 5,
            ..gear(SURFACE_RADAR, "Surface Radar", [5, 8, 12, 11, 0])
        },
        MasterGear {
            firepower: 15,
            anti_air: 4,
            range: 3,
            ..gear(LARGE_GUN, "Large Twin Gun", [1, 1, 3, 3, 0])
        },
        MasterGear {
            los: 9,
            accuracy: 1,
            asw: 2,
            ..gear(RECON_SEAPLANE, "Recon Seaplane", [5, 7, 10, 10, 0])
        },
        MasterGear {
            anti_air: 4,
            los: 5,
            accuracy: 3,
            ..gear(AIR_RADAR, "Air Radar", [5, 8, 12, 11, 0])
        },
        MasterGear {
            firepower: 2,
            anti_air: 10,
            range: 1,
            ..gear(HIGH_ANGLE_MOUNT, "High-Angle Mount with Director", [1, 1, 1, 16, 16])
        },
        MasterGear {
            torpedo: 10,
            ..gear(TORPEDO, "Quad Torpedo", [2, 5, 5, 5, 0])
        },
        MasterGear {
            asw: 10,
            ..gear(SONAR, "Sonar", [6, 10, 14, 18, 0])
        },
        MasterGear {
            asw: 8,
            ..gear(DEPTH_CHARGE, "Depth Charge", [7, 12, 15, 17, 0])
        },
    ];

    MasterDataFile {
        data_version: Some("fixture".to_string()),
        ships,
        gears,
        anti_air_cutins: default_anti_air_cutins(),
        ..Default::default()
    }
}

pub fn master() -> Arc<MasterData> {
    Arc::new(MasterData::new(master_file()).expect("fixture master data is valid"))
}

pub fn factory() -> Factory {
    Factory::new(master())
}

pub fn ship_state(ship_id: u16, gears: &[u16]) -> ShipState {
    ShipState::new(ship_id).with_gears(gears.iter().map(|&id| GearState::new(id)))
}

pub fn ship(factory: &Factory, ship_id: u16, gears: &[u16]) -> Ship {
    factory
        .create_ship(&ship_state(ship_id, gears))
        .expect("fixture ship should build")
}

/// Single player fleet of the given ships.
pub fn player_comp(factory: &Factory, ships: Vec<ShipState>) -> Comp {
    let org = OrgState {
        org_type: OrgType::Single,
        fleets: vec![FleetState::new(ships)],
        ..Default::default()
    };
    factory
        .create_org(&org)
        .expect("fixture org should build")
        .comp(None)
}

pub fn enemy_comp(factory: &Factory, ships: Vec<ShipState>) -> Comp {
    let org = OrgState {
        org_type: OrgType::EnemySingle,
        fleets: vec![FleetState::new(ships)],
        ..Default::default()
    };
    factory
        .create_org(&org)
        .expect("fixture org should build")
        .comp(None)
}

/// Player flagship against an enemy ship, line ahead on both sides.
pub fn enemy_ctx(air_state: AirState) -> WarfareContext {
    WarfareContext::new(ShipEnvironment::default(), ShipEnvironment::enemy())
        .with_air_state(air_state)
}

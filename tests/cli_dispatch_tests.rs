mod common;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use common::*;
use fleethub_core::data::StatInterval;
use fleethub_core::document::ScenarioDocument;
use fleethub_core::entity::{FleetState, OrgState, OrgType};
use fleethub_core::simulator::Phase;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_fleethub")
}

fn unique_temp_path(name: &str, ext: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("fleethub-{name}-{stamp}.{ext}"))
}

fn write_master(name: &str) -> PathBuf {
    let path = unique_temp_path(name, "json");
    let raw = serde_json::to_string(&master_file()).expect("master data serializes");
    fs::write(&path, raw).expect("fixture should be written");
    path
}

fn org(org_type: OrgType, ship_id: u16, gears: &[u16]) -> OrgState {
    OrgState {
        org_type,
        fleets: vec![FleetState::new(vec![ship_state(ship_id, gears)])],
        ..Default::default()
    }
}

fn scenario(master: &Path) -> ScenarioDocument {
    ScenarioDocument {
        master_data: Some(master.to_string_lossy().into_owned()),
        context: enemy_ctx(fleethub_core::combat::AirState::AirSupremacy),
        attacker: Some(ship_state(BATTLESHIP, &[SURFACE_RADAR, SURFACE_RADAR])),
        target: Some(ship_state(ENEMY_DESTROYER, &[])),
        attacker_org: Some(org(OrgType::Single, DESTROYER, &[TORPEDO, TORPEDO])),
        target_org: Some(org(OrgType::EnemySingle, ENEMY_DESTROYER, &[])),
        phase: Phase::Night,
        ..Default::default()
    }
}

fn write_scenario(name: &str, master: &Path) -> PathBuf {
    let path = unique_temp_path(name, "json");
    let raw = serde_json::to_string(&scenario(master)).expect("scenario serializes");
    fs::write(&path, raw).expect("fixture should be written");
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(bin())
        .args(args)
        .output()
        .expect("binary should run")
}

#[test]
fn analyze_command_emits_warfare_info() {
    let master = write_master("analyze-master");
    let path = write_scenario("analyze", &master);

    let output = run(&["analyze", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("analyze should emit json");
    assert_eq!(payload["day"]["is_active"], true);
    assert_eq!(payload["day"]["attacks"][0]["attack_power"]["normal"], 95.0);

    let _ = fs::remove_file(path);
    let _ = fs::remove_file(master);
}

#[test]
fn analyze_command_reads_yaml() {
    let master = write_master("yaml-master");
    let path = unique_temp_path("analyze", "yaml");
    let raw = serde_yaml::to_string(&scenario(&master)).expect("scenario serializes");
    fs::write(&path, raw).expect("fixture should be written");

    let output = run(&["analyze", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(0));

    let _ = fs::remove_file(path);
    let _ = fs::remove_file(master);
}

#[test]
fn simulate_command_emits_json_and_csv() {
    let master = write_master("simulate-master");
    let path = write_scenario("simulate", &master);
    let path_arg = path.to_string_lossy().into_owned();

    let output = run(&["simulate", &path_arg, "500", "11"]);
    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("simulate should emit json");
    assert_eq!(payload["iterations"], 500);
    assert_eq!(payload["sunk_vec"].as_array().map(Vec::len), Some(2));

    let again = run(&["simulate", &path_arg, "500", "11"]);
    assert_eq!(output.stdout, again.stdout, "seeded runs repeat");

    let csv = run(&["simulate", &path_arg, "500", "11", "--csv"]);
    assert_eq!(csv.status.code(), Some(0));
    let text = String::from_utf8_lossy(&csv.stdout);
    assert!(text.starts_with("count,rate,cumulative_rate"));
    assert_eq!(text.lines().count(), 3);

    let _ = fs::remove_file(path);
    let _ = fs::remove_file(master);
}

#[test]
fn anti_air_command_reports_anti_air_and_contact() {
    let master = write_master("anti-air-master");
    let path = unique_temp_path("anti-air", "json");
    let doc = ScenarioDocument {
        attacker_org: Some(org(
            OrgType::Single,
            AKIZUKI,
            &[HIGH_ANGLE_MOUNT, HIGH_ANGLE_MOUNT, AIR_RADAR],
        )),
        anti_air_cutin: Some(5),
        ..scenario(&master)
    };
    fs::write(&path, serde_json::to_string(&doc).expect("serializes")).expect("written");

    let output = run(&["anti-air", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("anti-air should emit json");
    assert_eq!(payload["anti_air"]["ships"][0]["fixed_shotdown_number"], 45);
    assert!(payload["contact"]["air_supremacy"]["trigger_rate"].is_number());
    assert_eq!(payload["fighter_power"], 0);

    let _ = fs::remove_file(path);
    let _ = fs::remove_file(master);
}

#[test]
fn validate_command_accepts_good_data() {
    let master = write_master("valid");
    let output = run(&["validate", master.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("validation passed"));
    let _ = fs::remove_file(master);
}

#[test]
fn validate_command_returns_non_zero_on_invalid_data() {
    let mut file = master_file();
    file.ships[0].max_hp = StatInterval::new(90, 10);
    let path = unique_temp_path("invalid", "json");
    fs::write(&path, serde_json::to_string(&file).expect("serializes")).expect("written");

    let output = run(&["validate", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("validation failed"));
    let _ = fs::remove_file(path);
}

#[test]
fn usage_errors_exit_with_two() {
    let unknown = run(&["serve"]);
    assert_eq!(unknown.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("usage: fleethub"));

    let missing = run(&["analyze"]);
    assert_eq!(missing.status.code(), Some(2));
}

#[test]
fn missing_scenario_file_fails() {
    let output = run(&["analyze", "/nonexistent/fleethub-scenario.json"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load scenario"));
}

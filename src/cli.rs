use std::io;

use crate::anti_air::analyze_anti_air;
use crate::combat::analyzer::Analyzer;
use crate::contact::analyze_contact;
use crate::data::loader::{load_document, load_master_data, master_data_path};
use crate::data::validate::validate_master_data;
use crate::document::ScenarioDocument;
use crate::entity::factory::Factory;
use crate::parallel::{CancelToken, WorkerPool};
use crate::simulator::{
    run_simulation, write_sunk_csv, Scenario, SimulatorConfig, DEFAULT_ITERATIONS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Analyze,
    Simulate,
    AntiAir,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("analyze") => Some(Command::Analyze),
        Some("simulate") => Some(Command::Simulate),
        Some("anti-air") => Some(Command::AntiAir),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Analyze) => handle_analyze(args),
        Some(Command::Simulate) => handle_simulate(args),
        Some(Command::AntiAir) => handle_anti_air(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: fleethub <analyze|simulate|anti-air|validate>");
            2
        }
    }
}

/// Scenario document and a factory over its master data.
fn load_scenario(path: &str) -> Result<(ScenarioDocument, Factory), String> {
    let doc: ScenarioDocument =
        load_document(path).map_err(|err| format!("failed to load scenario: {err}"))?;
    let master = doc
        .load_master_data()
        .map_err(|err| format!("failed to load master data: {err}"))?;
    Ok((doc, Factory::new(master)))
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize result: {err}");
            1
        }
    }
}

fn handle_analyze(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: fleethub analyze <scenario.json|yaml>");
        return 2;
    };
    let (doc, factory) = match load_scenario(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };
    let (attacker, target) = match doc.ships(&factory) {
        Ok(Some(ships)) => ships,
        Ok(None) => {
            eprintln!("scenario needs both 'attacker' and 'target' ships");
            return 1;
        }
        Err(err) => {
            eprintln!("invalid scenario: {err}");
            return 1;
        }
    };

    let analyzer = Analyzer::new(&factory.master().cutin_tables);
    let info = analyzer.analyze(&doc.context, &attacker, &target);
    print_json(&info)
}

fn handle_simulate(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: fleethub simulate <scenario.json|yaml> [iterations] [seed] [--csv]");
        return 2;
    };
    let positional: Vec<&String> = args
        .iter()
        .skip(3)
        .filter(|arg| !arg.starts_with("--"))
        .collect();
    let iterations = parse_u32_arg(positional.first().copied(), "iterations", DEFAULT_ITERATIONS);
    let seed = positional.get(1).map(|raw| parse_u64_arg(Some(*raw), "seed", 0));
    let as_csv = args.iter().any(|arg| arg == "--csv");

    let (doc, factory) = match load_scenario(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };
    let comps = doc
        .attacker_comp(&factory)
        .and_then(|attacker| Ok((attacker, doc.target_comp(&factory)?)));
    let (attacker, target) = match comps {
        Ok((Some(attacker), Some(target))) => (attacker, target),
        Ok(_) => {
            eprintln!("scenario needs both 'attacker_org' and 'target_org'");
            return 1;
        }
        Err(err) => {
            eprintln!("invalid scenario: {err}");
            return 1;
        }
    };

    let analyzer = Analyzer::new(&factory.master().cutin_tables);
    let scenario =
        match Scenario::from_comps(&analyzer, &attacker, &target, &doc.context, doc.phase) {
            Ok(scenario) => scenario,
            Err(err) => {
                eprintln!("invalid scenario: {err}");
                return 1;
            }
        };

    let config = SimulatorConfig {
        iterations,
        seed,
        ..SimulatorConfig::default()
    };
    let pool = WorkerPool::from_env();
    let result = match run_simulation(&scenario, &config, &pool, &CancelToken::new()) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            return 1;
        }
    };

    if as_csv {
        if let Err(err) = write_sunk_csv(&result, io::stdout().lock()) {
            eprintln!("failed to write csv: {err}");
            return 1;
        }
        0
    } else {
        print_json(&result)
    }
}

fn handle_anti_air(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: fleethub anti-air <scenario.json|yaml>");
        return 2;
    };
    let (doc, factory) = match load_scenario(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };
    let comp = match doc.attacker_comp(&factory) {
        Ok(Some(comp)) => comp,
        Ok(None) => {
            eprintln!("scenario needs 'attacker_org'");
            return 1;
        }
        Err(err) => {
            eprintln!("invalid scenario: {err}");
            return 1;
        }
    };

    let master = factory.master();
    let rule = master.cutin_tables.allocation;
    let anti_air = analyze_anti_air(&comp, &master.anti_air_cutins, rule, doc.anti_air_cutin);
    let contact = analyze_contact(&comp, rule);
    print_json(&serde_json::json!({
        "anti_air": anti_air,
        "contact": contact,
        "fighter_power": comp.fighter_power(),
    }))
}

fn handle_validate(args: &[String]) -> i32 {
    let path = args.get(2).cloned().unwrap_or_else(master_data_path);

    let master = match load_master_data(&path) {
        Ok(master) => master,
        Err(err) => {
            eprintln!("validation failed: {err}");
            return 1;
        }
    };
    let report = validate_master_data(&master);
    for diag in &report.diagnostics {
        eprintln!("- {diag}");
    }
    if report.has_errors() {
        eprintln!("validation failed: {} issue(s)", report.diagnostics.len());
        1
    } else {
        println!("validation passed: {path}");
        0
    }
}

fn parse_u32_arg(raw: Option<&String>, name: &str, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_u64_arg(raw: Option<&String>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

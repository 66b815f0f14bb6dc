mod common;

use common::*;
use fleethub_core::combat::{Analyzer, DamageState, FleetType, WarfareContext};
use fleethub_core::entity::Comp;
use fleethub_core::parallel::{CancelToken, WorkerPool};
use fleethub_core::simulator::{run_simulation, write_sunk_csv, Phase, Scenario, SimulatorConfig};
use fleethub_core::SimulationError;

fn night_duel(attackers: usize, targets: usize) -> (Comp, Comp) {
    let factory = factory();
    let attacker = player_comp(
        &factory,
        (0..attackers)
            .map(|_| ship_state(DESTROYER, &[TORPEDO, TORPEDO]))
            .collect(),
    );
    let target = enemy_comp(
        &factory,
        (0..targets).map(|_| ship_state(ENEMY_DESTROYER, &[])).collect(),
    );
    (attacker, target)
}

fn base_ctx(attacker: &Comp, target: &Comp) -> WarfareContext {
    WarfareContext::new(
        attacker.environment(FleetType::Main, 0),
        target.environment(FleetType::Main, 0),
    )
}

fn config(iterations: u32, seed: u64) -> SimulatorConfig {
    SimulatorConfig {
        iterations,
        seed: Some(seed),
        batches: 8,
    }
}

#[test]
fn monte_carlo_converges_to_the_analytic_distribution() {
    let (attacker_comp, target_comp) = night_duel(1, 1);
    let ctx = base_ctx(&attacker_comp, &target_comp);
    let analyzer = Analyzer::default();

    let attacker = attacker_comp.ship(FleetType::Main, 0).expect("attacker");
    let target = target_comp.ship(FleetType::Main, 0).expect("target");
    let analytic = analyzer
        .analyze(&ctx, attacker, target)
        .night
        .damage_states
        .expect("analytic distribution");

    let scenario = Scenario::from_comps(&analyzer, &attacker_comp, &target_comp, &ctx, Phase::Night)
        .expect("scenario builds");
    let result = run_simulation(
        &scenario,
        &config(100_000, 20240601),
        &WorkerPool::default(),
        &CancelToken::new(),
    )
    .expect("simulation runs");

    assert_eq!(result.iterations, 100_000);
    let simulated = &result.items[0].damage_states;
    for state in DamageState::ALL {
        approx_eq(simulated.get(state), analytic.get(state), 0.01);
    }
}

#[test]
fn results_do_not_depend_on_worker_count() {
    let (attacker_comp, target_comp) = night_duel(2, 3);
    let ctx = base_ctx(&attacker_comp, &target_comp);
    let analyzer = Analyzer::default();
    let scenario = Scenario::from_comps(&analyzer, &attacker_comp, &target_comp, &ctx, Phase::Night)
        .expect("scenario builds");

    let cfg = config(20_000, 7);
    let single = run_simulation(&scenario, &cfg, &WorkerPool::with_workers(1), &CancelToken::new())
        .expect("single worker");
    let many = run_simulation(&scenario, &cfg, &WorkerPool::with_workers(4), &CancelToken::new())
        .expect("four workers");
    assert_eq!(single, many);

    let reseeded = run_simulation(&scenario, &config(20_000, 8), &WorkerPool::default(), &CancelToken::new())
        .expect("other seed");
    assert_ne!(single, reseeded);
}

#[test]
fn sunk_vec_is_a_distribution_over_counts() {
    let (attacker_comp, target_comp) = night_duel(2, 2);
    let ctx = base_ctx(&attacker_comp, &target_comp);
    let scenario =
        Scenario::from_comps(&Analyzer::default(), &attacker_comp, &target_comp, &ctx, Phase::Night)
            .expect("scenario builds");
    let result = run_simulation(&scenario, &config(5_000, 1), &WorkerPool::default(), &CancelToken::new())
        .expect("simulation runs");

    assert_eq!(result.sunk_vec.len(), 3);
    let total: f64 = result.sunk_vec.iter().map(|entry| entry.rate).sum();
    approx_eq(total, 1.0, 1e-9);
    approx_eq(result.sunk_vec[0].cumulative_rate, 1.0, 1e-9);
    for pair in result.sunk_vec.windows(2) {
        assert!(pair[0].cumulative_rate >= pair[1].cumulative_rate);
    }
    for item in &result.items {
        approx_eq(item.damage_states.total(), 1.0, 1e-9);
        assert!(item.average_hp >= 0.0 && item.average_hp <= 100.0);
    }

    let mut csv = Vec::new();
    write_sunk_csv(&result, &mut csv).expect("csv writes");
    let text = String::from_utf8(csv).expect("utf8");
    assert_eq!(text.lines().count(), 4);
    assert!(text.starts_with("count,rate,cumulative_rate"));
}

#[test]
fn cancelled_run_reports_progress() {
    let (attacker_comp, target_comp) = night_duel(1, 1);
    let ctx = base_ctx(&attacker_comp, &target_comp);
    let scenario =
        Scenario::from_comps(&Analyzer::default(), &attacker_comp, &target_comp, &ctx, Phase::Night)
            .expect("scenario builds");

    let cancel = CancelToken::new();
    cancel.cancel();
    let err = run_simulation(&scenario, &config(1_000, 3), &WorkerPool::default(), &cancel)
        .expect_err("cancelled before start");
    match err {
        SimulationError::Cancelled { completed, requested } => {
            assert_eq!(completed, 0);
            assert_eq!(requested, 1_000);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn submarine_targets_are_skipped_by_surface_attackers() {
    let factory = factory();
    let attacker_comp = player_comp(&factory, vec![ship_state(BATTLESHIP, &[LARGE_GUN])]);
    let target_comp = enemy_comp(&factory, vec![ship_state(ENEMY_SUBMARINE, &[])]);
    let ctx = base_ctx(&attacker_comp, &target_comp);
    let scenario =
        Scenario::from_comps(&Analyzer::default(), &attacker_comp, &target_comp, &ctx, Phase::Day)
            .expect("scenario builds");
    assert!(scenario.attacks[0][0].is_none());

    let result = run_simulation(&scenario, &config(100, 0), &WorkerPool::default(), &CancelToken::new())
        .expect("simulation runs");
    assert_eq!(result.items[0].damage_states.get(DamageState::Normal), 1.0);
    assert_eq!(result.sunk_vec[0].rate, 1.0);
}

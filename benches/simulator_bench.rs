//! Monte Carlo throughput, sequential against parallel batches.
//!
//! Run with: `cargo bench --bench simulator`

mod common;

use common::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fleethub_core::combat::{Analyzer, FleetType, WarfareContext};
use fleethub_core::entity::OrgType;
use fleethub_core::parallel::{CancelToken, WorkerPool};
use fleethub_core::simulator::{run_simulation, Phase, Scenario, SimulatorConfig};

fn night_scenario() -> Scenario {
    let factory = factory();
    let attackers = (0..6)
        .map(|_| ship_state(DESTROYER, &[TORPEDO, TORPEDO]))
        .collect();
    let targets = (0..6).map(|_| ship_state(ENEMY_DESTROYER, &[])).collect();
    let attacker = comp(&factory, OrgType::Single, attackers);
    let target = comp(&factory, OrgType::EnemySingle, targets);

    let ctx = WarfareContext::new(
        attacker.environment(FleetType::Main, 0),
        target.environment(FleetType::Main, 0),
    );
    let analyzer = Analyzer::new(&factory.master().cutin_tables);
    Scenario::from_comps(&analyzer, &attacker, &target, &ctx, Phase::Night)
        .expect("bench scenario builds")
}

fn bench_simulator(c: &mut Criterion) {
    let scenario = night_scenario();
    let iterations = 10_000u32;
    let config = SimulatorConfig {
        iterations,
        seed: Some(7),
        ..SimulatorConfig::default()
    };

    let mut group = c.benchmark_group("simulator");
    group.sample_size(20);
    group.throughput(Throughput::Elements(u64::from(iterations)));

    for workers in [1usize, 0] {
        let label = if workers == 0 { "all_cores" } else { "single" };
        let pool = WorkerPool::with_workers(workers);
        group.bench_with_input(BenchmarkId::new("night_6v6", label), &pool, |b, pool| {
            b.iter(|| {
                black_box(
                    run_simulation(&scenario, &config, pool, &CancelToken::new())
                        .expect("simulation runs"),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_simulator);
criterion_main!(benches);

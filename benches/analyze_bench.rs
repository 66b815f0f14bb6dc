//! Analytic warfare throughput: one attacker/target pair per iteration.
//!
//! Run with: `cargo bench --bench analyze`

mod common;

use common::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fleethub_core::anti_air::analyze_anti_air;
use fleethub_core::combat::{AirState, Analyzer, ShipEnvironment, WarfareContext};
use fleethub_core::entity::OrgType;

fn bench_analyze(c: &mut Criterion) {
    let factory = factory();
    let analyzer = Analyzer::new(&factory.master().cutin_tables);
    let target = factory
        .create_ship(&ship_state(ENEMY_DESTROYER, &[]))
        .expect("target builds");
    let ctx = WarfareContext::new(ShipEnvironment::default(), ShipEnvironment::enemy())
        .with_air_state(AirState::AirSupremacy);

    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Elements(1));

    // Single normal attack
    let gunner = factory
        .create_ship(&ship_state(BATTLESHIP, &[SURFACE_RADAR, SURFACE_RADAR]))
        .expect("attacker builds");
    group.bench_function("day_normal", |b| {
        b.iter(|| black_box(analyzer.analyze(&ctx, &gunner, &target)))
    });

    // Artillery spotting plus night double attack
    let spotter = factory
        .create_ship(&ship_state(BATTLESHIP, &[LARGE_GUN, LARGE_GUN, RECON_SEAPLANE]))
        .expect("attacker builds");
    group.bench_function("day_cutin", |b| {
        b.iter(|| black_box(analyzer.analyze(&ctx, &spotter, &target)))
    });

    // Two-hit torpedo cut-in: the hp distribution is convolved twice
    let torpedo = factory
        .create_ship(&ship_state(DESTROYER, &[TORPEDO, TORPEDO]))
        .expect("attacker builds");
    group.bench_function("night_cutin", |b| {
        b.iter(|| black_box(analyzer.analyze(&ctx, &torpedo, &target)))
    });

    group.finish();
}

fn bench_anti_air(c: &mut Criterion) {
    let factory = factory();
    let ships = (0..6)
        .map(|_| ship_state(BATTLESHIP, &[LARGE_GUN, LARGE_GUN, RECON_SEAPLANE]))
        .collect();
    let fleet = comp(&factory, OrgType::Single, ships);
    let master = factory.master();
    let rule = master.cutin_tables.allocation;

    c.bench_function("anti_air_six_ships", |b| {
        b.iter(|| black_box(analyze_anti_air(&fleet, &master.anti_air_cutins, rule, None)))
    });
}

criterion_group!(benches, bench_analyze, bench_anti_air);
criterion_main!(benches);

mod common;

use common::*;
use fleethub_core::anti_air::{adjusted_anti_air, analyze_anti_air, combined_fleet_mod};
use fleethub_core::combat::{AirState, FleetType};
use fleethub_core::contact::{analyze_contact, day_contact};
use fleethub_core::data::AllocationRule;
use fleethub_core::entity::OrgType;
use fleethub_core::stats::StatKind;

fn akizuki_comp() -> fleethub_core::entity::Comp {
    let factory = factory();
    player_comp(
        &factory,
        vec![ship_state(AKIZUKI, &[HIGH_ANGLE_MOUNT, HIGH_ANGLE_MOUNT, AIR_RADAR])],
    )
}

#[test]
fn anti_air_golden_values() {
    let comp = akizuki_comp();
    let master = master();
    let rule = master.cutin_tables.allocation;
    let analysis = analyze_anti_air(&comp, &master.anti_air_cutins, rule, None);

    assert_eq!(analysis.fleet_anti_air, 8.0);
    assert_eq!(analysis.cutin, None);

    let ship = &analysis.ships[0];
    assert_eq!(ship.ship_id, AKIZUKI);
    assert_eq!(ship.adjusted_anti_air, Some(142.0));
    approx_eq(ship.proportional_shotdown_rate.expect("known"), 0.355, 1e-12);
    assert_eq!(ship.fixed_shotdown_number, Some(30));
    assert_eq!(ship.minimum_bonus, 1);
    assert_eq!(ship.anti_air_cutins, vec![1, 2, 3, 5, 8]);
}

#[test]
fn anti_air_cutin_lottery_caps_each_kind_at_the_remaining_mass() {
    let comp = akizuki_comp();
    let master = master();
    let rule = master.cutin_tables.allocation;
    let analysis = analyze_anti_air(&comp, &master.anti_air_cutins, rule, None);

    // 0.65, then min(0.35, 0.58), then nothing is left
    let expected = [(1, 0.65), (2, 0.35), (3, 0.0), (5, 0.0), (8, 0.0)];
    assert_eq!(analysis.cutin_rates.len(), expected.len());
    for (entry, (id, rate)) in analysis.cutin_rates.iter().zip(expected) {
        assert_eq!(entry.id, id);
        approx_eq(entry.rate, rate, 1e-9);
    }
    approx_eq(analysis.no_cutin_rate, 0.0, 1e-9);
    approx_eq(analysis.total_cutin_rate() + analysis.no_cutin_rate, 1.0, 1e-12);
}

#[test]
fn sequential_roll_lottery_rolls_in_table_order() {
    let comp = akizuki_comp();
    let master = master();
    let analysis =
        analyze_anti_air(&comp, &master.anti_air_cutins, AllocationRule::SequentialRoll, None);

    let expected = [
        (1, 0.65),
        (2, 0.203),
        (3, 0.0735),
        (5, 0.040425),
        (8, 0.0165375),
    ];
    for (entry, (id, rate)) in analysis.cutin_rates.iter().zip(expected) {
        assert_eq!(entry.id, id);
        approx_eq(entry.rate, rate, 1e-9);
    }
    approx_eq(analysis.no_cutin_rate, 0.0165375, 1e-9);
}

#[test]
fn active_cutin_boosts_fixed_shootdown() {
    let comp = akizuki_comp();
    let master = master();
    let rule = master.cutin_tables.allocation;
    let analysis = analyze_anti_air(&comp, &master.anti_air_cutins, rule, Some(5));

    assert_eq!(analysis.cutin, Some(5));
    let ship = &analysis.ships[0];
    assert_eq!(ship.fixed_shotdown_number, Some(45));
    assert_eq!(ship.minimum_bonus, 5);
}

#[test]
fn abyssal_adjusted_anti_air_uses_square_root() {
    let factory = factory();
    let enemy = ship(&factory, ENEMY_DESTROYER, &[]);
    assert_eq!(adjusted_anti_air(&enemy), Some(4.0));

    let comp = enemy_comp(&factory, vec![ship_state(ENEMY_DESTROYER, &[])]);
    let analysis = analyze_anti_air(
        &comp,
        &factory.master().anti_air_cutins,
        AllocationRule::Capped,
        None,
    );
    assert_eq!(analysis.ships[0].minimum_bonus, 0);
    assert!(analysis.cutin_rates.is_empty());
    assert_eq!(analysis.no_cutin_rate, 1.0);
}

#[test]
fn combined_fleet_mods_depend_on_side_and_fleet() {
    assert_eq!(combined_fleet_mod(OrgType::Single, FleetType::Main), 1.0);
    assert_eq!(combined_fleet_mod(OrgType::CarrierTaskForce, FleetType::Main), 0.72);
    assert_eq!(combined_fleet_mod(OrgType::EnemyCombined, FleetType::Main), 0.8);
    assert_eq!(combined_fleet_mod(OrgType::CarrierTaskForce, FleetType::Escort), 0.48);
}

#[test]
fn recon_seaplane_gives_day_contact() {
    let factory = factory();
    let comp = player_comp(
        &factory,
        vec![ship_state(BATTLESHIP, &[LARGE_GUN, LARGE_GUN, RECON_SEAPLANE])],
    );
    let contact = analyze_contact(&comp, AllocationRule::Capped);

    // (floor(9 * sqrt(3)) + 1) / (70 - 45); luck 10 scales selection by 1.06
    approx_eq(contact.air_supremacy.trigger_rate, 0.64, 1e-12);
    approx_eq(contact.air_supremacy.rank3, 0.64 * 9.0 / 14.0 * 1.06, 1e-12);
    assert_eq!(contact.air_supremacy.rank1, 0.0);

    // (15 + 1) / 40 and 9 / 16
    approx_eq(contact.air_superiority.trigger_rate, 0.4, 1e-12);
    approx_eq(contact.air_superiority.total(), 0.4 * 9.0 / 16.0 * 1.06, 1e-12);

    assert_eq!(contact.night.total(), 0.0);
}

#[test]
fn luckier_carrier_selects_contact_more_often() {
    let factory = factory();
    let mut lucky = ship_state(BATTLESHIP, &[RECON_SEAPLANE]);
    lucky.overrides.insert(StatKind::Luck, 100);
    let plain = player_comp(&factory, vec![ship_state(BATTLESHIP, &[RECON_SEAPLANE])]);
    let lucky = player_comp(&factory, vec![lucky]);

    let plain = analyze_contact(&plain, AllocationRule::Capped).air_supremacy;
    let lucky = analyze_contact(&lucky, AllocationRule::Capped).air_supremacy;
    approx_eq(lucky.trigger_rate, plain.trigger_rate, 1e-12);
    approx_eq(lucky.total() / plain.total(), 1.2 / 1.06, 1e-12);
}

#[test]
fn no_air_control_means_no_contact() {
    let factory = factory();
    let ships = [ship(&factory, BATTLESHIP, &[RECON_SEAPLANE])];
    let chance = day_contact(ships.iter(), AirState::AirParity, AllocationRule::Capped);
    assert_eq!(chance.trigger_rate, 0.0);
    assert_eq!(chance.total(), 0.0);
}

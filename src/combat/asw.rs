//! Anti-submarine attacks (day, opening and night).

use crate::combat::attack_power::AttackPowerParams;
use crate::combat::common::{finish_hit_rate, finish_power, formation_mods, target_evasion};
use crate::combat::hit_rate::{basic_accuracy_term, HitRateParams};
use crate::combat::modifier::AttackPowerModifier;
use crate::combat::report::AttackParams;
use crate::combat::types::{DamageState, WarfareContext};
use crate::data::formation::FormationWarfare;
use crate::data::gear::{GearAttr, GearCategory};
use crate::data::ship::ShipAttr;
use crate::entity::gear::Gear;
use crate::entity::ship::Ship;
use crate::stats::stacking::StatKind;

pub const ASW_CAP: f64 = 170.0;
pub const ASW_CRITICAL_CONSTANT: f64 = 1.1;
pub const ASW_BASE_ACCURACY: f64 = 80.0;
pub const DEPTH_CHARGE_TYPE_CONSTANT: f64 = 13.0;
pub const AIRCRAFT_TYPE_CONSTANT: f64 = 8.0;
pub const OPENING_ASW_THRESHOLD: i32 = 100;

fn is_asw_plane(gear: &Gear) -> bool {
    let anti_sub = matches!(
        gear.category(),
        GearCategory::CbDiveBomber
            | GearCategory::CbTorpedoBomber
            | GearCategory::SeaplaneBomber
            | GearCategory::Autogyro
            | GearCategory::AntiSubPatrolAircraft
            | GearCategory::LargeFlyingBoat
    );
    anti_sub && gear.master.asw > 0
}

fn uses_aircraft(attacker: &Ship) -> bool {
    attacker.ship_type().is_aircraft_asw_type()
}

pub fn can_attack(attacker: &Ship, target: &Ship) -> bool {
    if !target.is_submarine() || attacker.is_submarine() {
        return false;
    }
    if attacker.damage_state() == DamageState::Sunk {
        return false;
    }
    if uses_aircraft(attacker) {
        let healthy = !attacker.is_carrier() || attacker.damage_state() > DamageState::Chuuha;
        return healthy && attacker.count_planes(is_asw_plane) > 0;
    }
    attacker.ship_type().is_depth_charge_asw_type()
        && attacker.asw().map(|asw| asw > 0).unwrap_or(false)
}

/// Only depth-charge ship types attack submarines at night.
pub fn can_night_attack(attacker: &Ship, target: &Ship) -> bool {
    can_attack(attacker, target)
        && !uses_aircraft(attacker)
        && attacker.damage_state() > DamageState::Taiha
}

pub fn can_opening_attack(attacker: &Ship, target: &Ship) -> bool {
    if !can_attack(attacker, target) {
        return false;
    }
    if attacker.has_ship_attr(ShipAttr::OpeningAswAlways) {
        return true;
    }
    let has_sonar = attacker.count_gears(|gear| gear.category().is_sonar()) > 0;
    has_sonar
        && attacker
            .asw()
            .map(|asw| asw >= OPENING_ASW_THRESHOLD)
            .unwrap_or(false)
}

/// Sonar + depth charge, and projector + additional depth charge (stronger with a sonar).
pub fn synergy_mod(attacker: &Ship) -> f64 {
    let sonar = attacker.count_gears(|gear| gear.category().is_sonar()) > 0;
    let depth_charge = attacker.count_category(GearCategory::DepthCharge) > 0;
    let projector = attacker.has_attr(GearAttr::DepthChargeProjector);
    let additional = attacker.has_attr(GearAttr::AdditionalDepthCharge);

    let old = if sonar && depth_charge { 1.15 } else { 1.0 };
    let new = match (projector && additional, sonar) {
        (true, true) => 1.25,
        (true, false) => 1.1,
        _ => 1.0,
    };
    old * new
}

/// `2 * sqrt(naked asw) + 1.5 * equipment asw + improvement + type constant`.
pub fn basic_power(attacker: &Ship) -> Option<f64> {
    let naked = f64::from(attacker.naked(StatKind::Asw)?.max(0));
    let equipment = f64::from(attacker.equipment(StatKind::Asw));
    let constant = if uses_aircraft(attacker) {
        AIRCRAFT_TYPE_CONSTANT
    } else {
        DEPTH_CHARGE_TYPE_CONSTANT
    };
    Some(
        2.0 * naked.sqrt()
            + 1.5 * equipment
            + attacker.improvement_sum(|imp| imp.asw_power)
            + constant,
    )
}

pub fn params(ctx: &WarfareContext, attacker: &Ship, target: &Ship) -> AttackParams {
    let env = &ctx.attacker_env;
    let power = basic_power(attacker).map(|basic| {
        let precap_a = formation_mods(env, FormationWarfare::Asw).power
            * ctx.engagement.modifier()
            * attacker.damage_state().common_power_mod()
            * synergy_mod(attacker);
        let mut params = AttackPowerParams::new(basic, ASW_CAP);
        params.precap_mod = AttackPowerModifier::multiply(precap_a);
        finish_power(params, attacker, target)
    });

    let sonar_asw: i32 = attacker
        .gear_iter()
        .filter(|(_, gear)| gear.category().is_sonar())
        .map(|(_, gear)| gear.master.asw)
        .sum();
    let accuracy = attacker.luck().map(|luck| {
        let base = ASW_BASE_ACCURACY
            + basic_accuracy_term(attacker.level, luck)
            + 2.0 * f64::from(sonar_asw)
            + attacker.improvement_sum(|imp| imp.asw_accuracy);
        let formation = formation_mods(env, FormationWarfare::Asw).accuracy;
        let engagement = ctx.engagement.accuracy_modifier();
        (base * formation * engagement * attacker.morale_state().attacker_accuracy_mod()).floor()
    });
    let hit_rate = accuracy
        .zip(target_evasion(target, &ctx.target_env, FormationWarfare::Asw, 0.0))
        .map(|(accuracy, evasion)| {
            finish_hit_rate(
                HitRateParams::new(accuracy, evasion, ASW_CRITICAL_CONSTANT),
                attacker,
                target,
            )
        });

    AttackParams {
        power,
        hit_rate,
        hits: 1,
    }
}

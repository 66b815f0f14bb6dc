//! Day shelling: surface ships and carriers.

use crate::combat::attack_power::AttackPowerParams;
use crate::combat::common::{
    finish_hit_rate, finish_power, formation_mods, proficiency_critical_mod, target_evasion,
};
use crate::combat::hit_rate::{basic_accuracy_term, HitRateParams};
use crate::combat::modifier::AttackPowerModifier;
use crate::combat::report::AttackParams;
use crate::combat::style::AttackStyle;
use crate::combat::types::{DamageState, Engagement, ShipEnvironment, WarfareContext};
use crate::data::formation::FormationWarfare;
use crate::data::gear::{GearAttr, GearCategory};
use crate::data::ship::ShipType;
use crate::entity::ship::Ship;

pub const DAY_SHELLING_CAP: f64 = 220.0;
pub const SHELLING_CRITICAL_CONSTANT: f64 = 1.3;
pub const SHELLING_BASE_ACCURACY: f64 = 90.0;
const SURFACE_POWER_BASE: f64 = 5.0;
const CARRIER_POWER_BASE: f64 = 55.0;

/// Ships that shell with aircraft instead of guns.
pub fn uses_carrier_formula(ship: &Ship) -> bool {
    ship.is_carrier() && !ship.is_installation()
}

pub fn can_attack(attacker: &Ship) -> bool {
    if attacker.is_submarine() || attacker.damage_state() == DamageState::Sunk {
        return false;
    }
    if !uses_carrier_formula(attacker) {
        return true;
    }
    let has_bombers = attacker.count_planes(|gear| gear.category().is_attack_aircraft()) > 0;
    let healthy = if attacker.ship_type() == ShipType::CVB {
        attacker.damage_state() > DamageState::Taiha
    } else {
        attacker.damage_state() > DamageState::Chuuha
    };
    has_bombers && healthy
}

/// Light cruiser gun fit: `sqrt(single) + 2 * sqrt(twin)` for CL/CLT/CT.
pub fn light_cruiser_fit_bonus(attacker: &Ship) -> f64 {
    if !attacker.ship_type().is_light_cruiser_class() {
        return 0.0;
    }
    let single = attacker.count_attr(GearAttr::CruiserSingleGun) as f64;
    let twin = attacker.count_attr(GearAttr::CruiserTwinGun) as f64;
    single.sqrt() + 2.0 * twin.sqrt()
}

/// Armor-piercing shell `(power, accuracy)` modifiers against heavily armored targets.
pub fn ap_shell_mods(attacker: &Ship, target: &Ship) -> Option<(f64, f64)> {
    if !target.ship_type().is_heavily_armored() {
        return None;
    }
    let main = attacker.count_attr(GearAttr::MainGun);
    let ap = attacker.count_attr(GearAttr::ApShell);
    if main == 0 || ap == 0 {
        return None;
    }
    let secondary = attacker.count_category(GearCategory::SecondaryGun) > 0;
    let radar = attacker.has_attr(GearAttr::Radar);
    Some(match (secondary, radar) {
        (true, true) => (1.15, 1.3),
        (true, false) => (1.15, 1.2),
        (false, true) => (1.1, 1.25),
        (false, false) => (1.08, 1.1),
    })
}

/// Carrier basic power `floor(1.5 * (fp + tp + floor(1.3 * bombing) + extra)) + 55`.
/// Torpedo does not count against installations.
pub fn carrier_basic_power(attacker: &Ship, target: &Ship, extra: f64) -> Option<f64> {
    let firepower = f64::from(attacker.firepower()?);
    let torpedo = if target.is_installation() {
        0.0
    } else {
        f64::from(attacker.torpedo().unwrap_or(0))
    };
    let bombing = (1.3 * f64::from(attacker.bombing())).floor();
    Some((1.5 * (firepower + torpedo + bombing + extra)).floor() + CARRIER_POWER_BASE)
}

fn basic_power(attacker: &Ship, target: &Ship, env: &ShipEnvironment) -> Option<f64> {
    let improvement = attacker.improvement_sum(|imp| imp.shelling_power);
    let combined = env.org_type.shelling_power_bonus(env.fleet_type);
    let fit = light_cruiser_fit_bonus(attacker);
    if uses_carrier_formula(attacker) {
        return carrier_basic_power(attacker, target, improvement + combined + fit);
    }
    let firepower = f64::from(attacker.firepower()?);
    Some(firepower + improvement + combined + fit + SURFACE_POWER_BASE)
}

fn accuracy_term(
    attacker: &Ship,
    env: &ShipEnvironment,
    engagement: Engagement,
    style: &AttackStyle,
    ap_mod: f64,
) -> Option<f64> {
    let luck = attacker.luck()?;
    let base = SHELLING_BASE_ACCURACY
        + basic_accuracy_term(attacker.level, luck)
        + f64::from(attacker.accuracy())
        + attacker.improvement_sum(|imp| imp.shelling_accuracy);
    let formation = formation_mods(env, FormationWarfare::Shelling).accuracy;
    let morale = attacker.morale_state().attacker_accuracy_mod();
    let engagement = engagement.accuracy_modifier();
    Some((base * formation * engagement * morale * ap_mod * style.accuracy_mod() + style.accuracy_adder()).floor())
}

pub fn params(
    ctx: &WarfareContext,
    attacker: &Ship,
    target: &Ship,
    style: &AttackStyle,
) -> AttackParams {
    let env = &ctx.attacker_env;
    let ap = ap_shell_mods(attacker, target);

    let power = basic_power(attacker, target, env).map(|basic| {
        let precap_a = formation_mods(env, FormationWarfare::Shelling).power
            * ctx.engagement.modifier()
            * attacker.damage_state().common_power_mod();
        let mut params = AttackPowerParams::new(basic, DAY_SHELLING_CAP);
        params.precap_mod = AttackPowerModifier::multiply(precap_a);
        params.ap_shell_mod = ap.map(|(power, _)| power);
        params.postcap_style_mod = style.power_mod();
        params.critical_mod = proficiency_critical_mod(attacker);
        finish_power(params, attacker, target)
    });

    let ap_accuracy = ap.map(|(_, accuracy)| accuracy).unwrap_or(1.0);
    let hit_rate = accuracy_term(attacker, env, ctx.engagement, style, ap_accuracy)
        .zip(target_evasion(target, &ctx.target_env, FormationWarfare::Shelling, 0.0))
        .map(|(accuracy, evasion)| {
            let params = HitRateParams::new(accuracy, evasion, SHELLING_CRITICAL_CONSTANT);
            finish_hit_rate(params, attacker, target)
        });

    AttackParams {
        power,
        hit_rate,
        hits: style.hits(),
    }
}

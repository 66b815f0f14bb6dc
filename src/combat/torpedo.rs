//! Opening and closing torpedo attacks.

use crate::combat::attack_power::AttackPowerParams;
use crate::combat::common::{finish_hit_rate, finish_power, formation_mods, target_evasion};
use crate::combat::hit_rate::{basic_accuracy_term, HitRateParams};
use crate::combat::modifier::AttackPowerModifier;
use crate::combat::report::AttackParams;
use crate::combat::types::{DamageState, WarfareContext};
use crate::data::formation::FormationWarfare;
use crate::entity::ship::Ship;

pub const TORPEDO_CAP: f64 = 180.0;
pub const TORPEDO_CRITICAL_CONSTANT: f64 = 1.5;
pub const TORPEDO_BASE_ACCURACY: f64 = 85.0;
const TORPEDO_POWER_BASE: f64 = 5.0;

/// Needs a torpedo stat, a surface target and better than Chuuha.
pub fn can_attack(attacker: &Ship, target: &Ship) -> bool {
    let armed = attacker.torpedo().map(|torpedo| torpedo > 0).unwrap_or(false);
    armed
        && !attacker.is_carrier()
        && !target.is_submarine()
        && !target.is_installation()
        && attacker.damage_state() > DamageState::Chuuha
}

pub fn params(ctx: &WarfareContext, attacker: &Ship, target: &Ship) -> AttackParams {
    let env = &ctx.attacker_env;
    let basic = attacker.torpedo().map(|torpedo| {
        f64::from(torpedo)
            + attacker.improvement_sum(|imp| imp.torpedo_power)
            + env.org_type.torpedo_power_bonus()
            + TORPEDO_POWER_BASE
    });

    let power = basic.map(|basic| {
        let precap_a = formation_mods(env, FormationWarfare::Torpedo).power
            * ctx.engagement.modifier()
            * attacker.damage_state().torpedo_power_mod();
        let mut params = AttackPowerParams::new(basic, TORPEDO_CAP);
        params.precap_mod = AttackPowerModifier::multiply(precap_a);
        finish_power(params, attacker, target)
    });

    let accuracy = attacker.luck().zip(basic).map(|(luck, basic)| {
        let base = TORPEDO_BASE_ACCURACY
            + basic_accuracy_term(attacker.level, luck)
            + f64::from(attacker.accuracy())
            + (basic / 5.0).floor()
            + attacker.improvement_sum(|imp| imp.torpedo_accuracy);
        let formation = formation_mods(env, FormationWarfare::Torpedo).accuracy;
        let engagement = ctx.engagement.accuracy_modifier();
        (base * formation * engagement * attacker.morale_state().attacker_accuracy_mod()).floor()
    });
    let hit_rate = accuracy
        .zip(target_evasion(target, &ctx.target_env, FormationWarfare::Torpedo, 0.0))
        .map(|(accuracy, evasion)| {
            finish_hit_rate(
                HitRateParams::new(accuracy, evasion, TORPEDO_CRITICAL_CONSTANT),
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

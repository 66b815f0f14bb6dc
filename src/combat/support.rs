//! Support expedition shelling.

use crate::combat::attack_power::AttackPowerParams;
use crate::combat::common::{finish_hit_rate, finish_power, formation_mods, target_evasion};
use crate::combat::hit_rate::{basic_accuracy_term, HitRateParams};
use crate::combat::modifier::AttackPowerModifier;
use crate::combat::report::AttackParams;
use crate::combat::shelling::{carrier_basic_power, uses_carrier_formula, SHELLING_CRITICAL_CONSTANT};
use crate::combat::types::{DamageState, WarfareContext};
use crate::data::formation::FormationWarfare;
use crate::entity::ship::Ship;

pub const SUPPORT_SHELLING_CAP: f64 = 170.0;
pub const SUPPORT_BASE_ACCURACY: f64 = 64.0;
const SUPPORT_POWER_BASE: f64 = 4.0;

pub fn can_attack(attacker: &Ship, target: &Ship) -> bool {
    !attacker.is_submarine()
        && !target.is_submarine()
        && attacker.damage_state() > DamageState::Taiha
}

pub fn params(ctx: &WarfareContext, attacker: &Ship, target: &Ship) -> AttackParams {
    let env = &ctx.attacker_env;
    let basic = if uses_carrier_formula(attacker) {
        carrier_basic_power(attacker, target, 0.0)
    } else {
        attacker
            .firepower()
            .map(|firepower| f64::from(firepower) + SUPPORT_POWER_BASE)
    };

    let power = basic.map(|basic| {
        let precap_a = formation_mods(env, FormationWarfare::Shelling).power
            * ctx.engagement.modifier()
            * attacker.damage_state().common_power_mod();
        let mut params = AttackPowerParams::new(basic, SUPPORT_SHELLING_CAP);
        params.precap_mod = AttackPowerModifier::multiply(precap_a);
        finish_power(params, attacker, target)
    });

    let accuracy = attacker.luck().map(|luck| {
        let base = SUPPORT_BASE_ACCURACY
            + basic_accuracy_term(attacker.level, luck)
            + f64::from(attacker.accuracy());
        let engagement = ctx.engagement.accuracy_modifier();
        (base * engagement * attacker.morale_state().attacker_accuracy_mod()).floor()
    });
    let hit_rate = accuracy
        .zip(target_evasion(target, &ctx.target_env, FormationWarfare::Shelling, 0.0))
        .map(|(accuracy, evasion)| {
            finish_hit_rate(
                HitRateParams::new(accuracy, evasion, SHELLING_CRITICAL_CONSTANT),
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

//! Pieces every phase calculator shares: formation lookups, the evasion side
//! of the hit formula and the user's custom modifiers.

use crate::combat::attack_power::AttackPowerParams;
use crate::combat::hit_rate::{evasion_term, HitRateParams};
use crate::combat::special_enemy::special_enemy_modifiers;
use crate::combat::types::ShipEnvironment;
use crate::data::formation::{FormationModifiers, FormationWarfare};
use crate::entity::ship::Ship;

pub fn formation_mods(env: &ShipEnvironment, warfare: FormationWarfare) -> FormationModifiers {
    env.formation.modifiers(warfare, env.is_top_half())
}

/// Target evasion term, `None` when the target's evasion is unknown.
pub fn target_evasion(
    target: &Ship,
    env: &ShipEnvironment,
    warfare: FormationWarfare,
    bonus: f64,
) -> Option<f64> {
    let evasion = f64::from(target.evasion()?);
    let formation = formation_mods(env, warfare).evasion;
    Some(evasion_term(evasion, formation, bonus))
}

/// Attach special-enemy, custom, historical and remaining-ammo modifiers.
pub fn finish_power(
    mut params: AttackPowerParams,
    attacker: &Ship,
    target: &Ship,
) -> AttackPowerParams {
    let special = special_enemy_modifiers(attacker, target);
    params.precap_mod = params.precap_mod.then(special.precap);
    params.special_postcap_mod = special.postcap;
    params.custom_precap_mod = attacker.custom.precap_mod;
    params.custom_postcap_mod = attacker.custom.postcap_mod;
    params.historical_mod = attacker.custom.historical_mod;
    params.remaining_ammo_mod = attacker.remaining_ammo_mod();
    params
}

pub fn finish_hit_rate(mut params: HitRateParams, attacker: &Ship, target: &Ship) -> HitRateParams {
    params.target_morale_mod = target.morale_state().target_mod();
    params.critical_rate_multiplier = attacker.custom.critical_rate_multiplier;
    params.hit_percentage_bonus = attacker.custom.hit_percentage_bonus;
    params.critical_percentage_bonus = attacker.custom.critical_percentage_bonus;
    params
}

/// `1.5` times the carrier proficiency term: a plane in the first slot counts
/// fully, the others at half weight.
pub fn proficiency_critical_mod(attacker: &Ship) -> f64 {
    if !attacker.is_carrier() {
        return 1.5;
    }
    let bonus: f64 = attacker
        .gear_iter()
        .filter(|(slot, gear)| slot.aircraft() > 0 && gear.category().is_attack_aircraft())
        .map(|(slot, gear)| {
            let weight = if slot.index == 0 { 1.0 } else { 0.5 };
            weight * gear.proficiency_critical_mod()
        })
        .sum();
    1.5 * (1.0 + bonus)
}

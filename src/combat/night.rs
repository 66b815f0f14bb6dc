//! Night battle attacks: surface ships and night-capable carriers.

use crate::combat::attack_power::AttackPowerParams;
use crate::combat::common::{finish_hit_rate, finish_power, formation_mods, target_evasion};
use crate::combat::hit_rate::{basic_accuracy_term, HitRateParams};
use crate::combat::modifier::AttackPowerModifier;
use crate::combat::report::AttackParams;
use crate::combat::style::AttackStyle;
use crate::combat::types::{DamageState, WarfareContext};
use crate::data::formation::FormationWarfare;
use crate::data::gear::GearAttr;
use crate::data::ship::ShipAttr;
use crate::entity::gear::Gear;
use crate::entity::ship::Ship;
use crate::stats::stacking::StatKind;

pub const NIGHT_CAP: f64 = 360.0;
pub const NIGHT_CRITICAL_CONSTANT: f64 = 1.5;
pub const NIGHT_BASE_ACCURACY: f64 = 69.0;
pub const STARSHELL_ACCURACY_BONUS: f64 = 5.0;
pub const SEARCHLIGHT_ACCURACY_BONUS: f64 = 7.0;

pub fn is_night_plane(gear: &Gear) -> bool {
    gear.master.is_night_plane() || gear.has_attr(GearAttr::SemiNightPlane)
}

/// Carriers that attack at night with night planes.
pub fn is_night_carrier(ship: &Ship) -> bool {
    ship.is_carrier()
        && ship.has_ship_attr(ShipAttr::NightCarrier)
        && ship.count_planes(is_night_plane) > 0
}

pub fn can_attack(attacker: &Ship, target: &Ship) -> bool {
    if target.is_submarine() || attacker.damage_state() <= DamageState::Taiha {
        return false;
    }
    if attacker.is_carrier() {
        return is_night_carrier(attacker)
            || attacker.has_ship_attr(ShipAttr::NightShellingCarrier);
    }
    true
}

/// `naked fp + sum(fp + tp) + sum(A * slot + B * (fp + tp + asw + bombing) * sqrt(slot) + sqrt(stars))`
/// over night planes. `A = 3, B = 0.45` for night fighters and attackers,
/// `A = 0, B = 0.3` for the other night-capable planes.
fn night_carrier_basic(attacker: &Ship, target: &Ship) -> Option<f64> {
    let naked = f64::from(attacker.naked(StatKind::Firepower)?);
    let planes: f64 = attacker
        .gear_iter()
        .filter(|(slot, gear)| slot.aircraft() > 0 && is_night_plane(gear))
        .map(|(slot, gear)| {
            let master = &gear.master;
            let torpedo = if target.is_installation() {
                0.0
            } else {
                f64::from(master.torpedo)
            };
            let (a, b) = if master.is_night_plane() {
                (3.0, 0.45)
            } else {
                (0.0, 0.3)
            };
            let stats = f64::from(master.firepower) + torpedo;
            let slot = f64::from(slot.aircraft());
            let weighted = stats + f64::from(master.asw) + f64::from(master.bombing);
            stats + a * slot + b * weighted * slot.sqrt() + f64::from(gear.stars).sqrt()
        })
        .sum();
    Some(naked + planes)
}

fn surface_basic(attacker: &Ship, target: &Ship) -> Option<f64> {
    let firepower = f64::from(attacker.firepower()?);
    let torpedo = if target.is_installation() {
        0.0
    } else {
        f64::from(attacker.torpedo().unwrap_or(0))
    };
    Some(firepower + torpedo + attacker.improvement_sum(|imp| imp.night_power))
}

pub fn basic_power(ctx: &WarfareContext, attacker: &Ship, target: &Ship) -> Option<f64> {
    let contact = ctx
        .night
        .attacker
        .contact
        .map(|rank| rank.night_power_bonus())
        .unwrap_or(0.0);
    let basic = if is_night_carrier(attacker) {
        night_carrier_basic(attacker, target)?
    } else {
        surface_basic(attacker, target)?
    };
    Some(basic + contact)
}

pub fn params(
    ctx: &WarfareContext,
    attacker: &Ship,
    target: &Ship,
    style: &AttackStyle,
) -> AttackParams {
    let env = &ctx.attacker_env;
    let power = basic_power(ctx, attacker, target).map(|basic| {
        let precap_a = formation_mods(env, FormationWarfare::Night).power
            * attacker.damage_state().common_power_mod()
            * style.power_mod();
        let mut params = AttackPowerParams::new(basic, NIGHT_CAP);
        params.precap_mod = AttackPowerModifier::multiply(precap_a)
            .then(AttackPowerModifier::add(style.power_adder()));
        finish_power(params, attacker, target)
    });

    let conditions = &ctx.night.attacker;
    let accuracy = attacker.luck().map(|luck| {
        let starshell = if conditions.starshell {
            STARSHELL_ACCURACY_BONUS
        } else {
            0.0
        };
        let searchlight = if conditions.searchlight {
            SEARCHLIGHT_ACCURACY_BONUS
        } else {
            0.0
        };
        let base = NIGHT_BASE_ACCURACY
            + starshell
            + basic_accuracy_term(attacker.level, luck)
            + f64::from(attacker.accuracy())
            + attacker.improvement_sum(|imp| imp.night_accuracy);
        let formation = formation_mods(env, FormationWarfare::Night).accuracy;
        let morale = attacker.morale_state().attacker_accuracy_mod();
        (base * formation * morale * style.accuracy_mod() + style.accuracy_adder()).floor()
            + searchlight
    });
    let hit_rate = accuracy
        .zip(target_evasion(target, &ctx.target_env, FormationWarfare::Night, 0.0))
        .map(|(accuracy, evasion)| {
            finish_hit_rate(
                HitRateParams::new(accuracy, evasion, NIGHT_CRITICAL_CONSTANT),
                attacker,
                target,
            )
        });

    AttackParams {
        power,
        hit_rate,
        hits: style.hits(),
    }
}

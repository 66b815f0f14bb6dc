//! Attack power modifiers against installations and PT imps.

use serde::{Deserialize, Serialize};

use crate::combat::modifier::AttackPowerModifier;
use crate::data::gear::{GearAttr, GearCategory};
use crate::data::ship::SpecialEnemyType;
use crate::entity::ship::Ship;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecialEnemyModifiers {
    pub precap: AttackPowerModifier,
    pub postcap: AttackPowerModifier,
}

struct Loadout {
    ap_shell: usize,
    aa_shell: usize,
    landing_craft: usize,
    rockets: usize,
    small_guns: usize,
    secondary_guns: usize,
    aa_guns: usize,
    seaplanes: usize,
}

impl Loadout {
    fn of(ship: &Ship) -> Self {
        Self {
            ap_shell: ship.count_attr(GearAttr::ApShell),
            aa_shell: ship.count_attr(GearAttr::AntiAirShell),
            landing_craft: ship.count_attr(GearAttr::LandingCraft),
            rockets: ship.count_attr(GearAttr::AntiGroundRocket),
            small_guns: ship.count_category(GearCategory::SmallMainGun),
            secondary_guns: ship.count_category(GearCategory::SecondaryGun),
            aa_guns: ship.count_category(GearCategory::AntiAirGun),
            seaplanes: ship.count_category(GearCategory::SeaplaneBomber)
                + ship.count_category(GearCategory::SeaplaneFighter),
        }
    }
}

/// Two-step multiplier: `first` for one piece, `first * second` for two or more.
fn stepped(count: usize, first: f64, second: f64) -> f64 {
    match count {
        0 => 1.0,
        1 => first,
        _ => first * second,
    }
}

pub fn special_enemy_modifiers(attacker: &Ship, target: &Ship) -> SpecialEnemyModifiers {
    let Some(kind) = target.master.special_enemy_type else {
        return SpecialEnemyModifiers::default();
    };
    let g = Loadout::of(attacker);

    let precap_a = match kind {
        SpecialEnemyType::SoftSkinned => {
            (if g.aa_shell > 0 { 2.5 } else { 1.0 })
                * stepped(g.landing_craft, 1.4, 1.15)
                * stepped(g.rockets, 1.3, 1.4)
                * (if g.seaplanes > 0 { 1.2 } else { 1.0 })
        }
        SpecialEnemyType::Pillbox => {
            (if g.ap_shell > 0 { 1.85 } else { 1.0 })
                * stepped(g.landing_craft, 1.8, 1.15)
                * stepped(g.rockets, 1.5, 1.4)
                * stepped(g.small_guns, 1.5, 1.4)
                * (if g.seaplanes > 0 { 1.5 } else { 1.0 })
        }
        SpecialEnemyType::IsolatedIsland => {
            (if g.aa_shell > 0 { 1.75 } else { 1.0 })
                * stepped(g.landing_craft, 1.8, 1.15)
                * stepped(g.rockets, 1.4, 1.5)
        }
        SpecialEnemyType::HarbourSummerPrincess => {
            (if g.aa_shell > 0 { 1.75 } else { 1.0 })
                * (if g.ap_shell > 0 { 1.3 } else { 1.0 })
                * stepped(g.landing_craft, 1.7, 1.0)
                * stepped(g.rockets, 1.4, 1.2)
        }
        SpecialEnemyType::SupplyDepot => 1.0,
        SpecialEnemyType::PtImp => {
            stepped(g.small_guns, 1.5, 1.4)
                * stepped(g.secondary_guns, 1.3, 1.0)
                * stepped(g.aa_guns, 1.2, 1.2)
        }
    };

    let postcap_a = match kind {
        SpecialEnemyType::SupplyDepot => {
            (if g.aa_shell > 0 { 1.25 } else { 1.0 })
                * stepped(g.landing_craft, 1.7, 1.5)
                * stepped(g.rockets, 1.25, 1.3)
        }
        SpecialEnemyType::HarbourSummerPrincess => {
            (if g.aa_shell > 0 { 1.1 } else { 1.0 }) * stepped(g.landing_craft, 1.1, 1.0)
        }
        _ => 1.0,
    };

    SpecialEnemyModifiers {
        precap: AttackPowerModifier::multiply(precap_a),
        postcap: AttackPowerModifier::multiply(postcap_a),
    }
}

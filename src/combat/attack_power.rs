//! Attack power chain: basic power, pre-cap modifiers, soft cap, post-cap modifiers.

use serde::{Deserialize, Serialize};

use crate::combat::modifier::AttackPowerModifier;

/// `cap + sqrt(value - cap)` above the cap.
pub fn soft_cap(value: f64, cap: f64) -> (f64, bool) {
    if value > cap {
        (cap + (value - cap).sqrt(), true)
    } else {
        (value, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackPowerParams {
    /// Floor-truncated basic power
    pub basic: f64,
    pub cap: f64,
    /// Formation, engagement, damage state, cut-in (night) and special enemy pre-cap terms
    pub precap_mod: AttackPowerModifier,
    pub custom_precap_mod: AttackPowerModifier,
    pub ap_shell_mod: Option<f64>,
    /// Day cut-in and carrier contact multiplier
    pub postcap_style_mod: f64,
    /// `1.5` times the aircraft proficiency critical modifier
    pub critical_mod: f64,
    pub special_postcap_mod: AttackPowerModifier,
    pub custom_postcap_mod: AttackPowerModifier,
    pub historical_mod: f64,
    pub armor_penetration: f64,
    pub remaining_ammo_mod: f64,
}

impl AttackPowerParams {
    pub fn new(basic: f64, cap: f64) -> Self {
        Self {
            basic: basic.floor(),
            cap,
            precap_mod: AttackPowerModifier::IDENTITY,
            custom_precap_mod: AttackPowerModifier::IDENTITY,
            ap_shell_mod: None,
            postcap_style_mod: 1.0,
            critical_mod: 1.5,
            special_postcap_mod: AttackPowerModifier::IDENTITY,
            custom_postcap_mod: AttackPowerModifier::IDENTITY,
            historical_mod: 1.0,
            armor_penetration: 0.0,
            remaining_ammo_mod: 1.0,
        }
    }

    fn postcap(&self, capped: f64, critical: bool) -> f64 {
        let mut power = capped.floor();
        if let Some(ap) = self.ap_shell_mod {
            power = (power * ap).floor();
        }
        if self.postcap_style_mod != 1.0 {
            power = (power * self.postcap_style_mod).floor();
        }
        if critical {
            power = (power * self.critical_mod).floor();
        }
        power = self.special_postcap_mod.apply(power).floor();
        power = self.custom_postcap_mod.apply(power);
        (power * self.historical_mod).floor().max(0.0)
    }

    pub fn calc(&self) -> AttackPower {
        let precap = self.custom_precap_mod.apply(self.precap_mod.apply(self.basic));
        let (capped, is_capped) = soft_cap(precap, self.cap);
        AttackPower {
            precap,
            capped,
            is_capped,
            normal: self.postcap(capped, false),
            critical: self.postcap(capped, true),
            armor_penetration: self.armor_penetration,
            remaining_ammo_mod: self.remaining_ammo_mod,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackPower {
    pub precap: f64,
    pub capped: f64,
    pub is_capped: bool,
    pub normal: f64,
    pub critical: f64,
    pub armor_penetration: f64,
    pub remaining_ammo_mod: f64,
}

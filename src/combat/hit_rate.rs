use serde::{Deserialize, Serialize};

pub const HIT_PERCENT_FLOOR: f64 = 10.0;
pub const HIT_PERCENT_CEIL: f64 = 96.0;

/// Evasion term: formation-scaled evasion with diminishing returns above 40 and 65.
pub fn evasion_term(evasion: f64, formation_mod: f64, bonus: f64) -> f64 {
    let base = (evasion * formation_mod + bonus).floor();
    if base >= 65.0 {
        (55.0 + 2.0 * (base - 65.0).sqrt()).floor()
    } else if base >= 40.0 {
        (40.0 + 3.0 * (base - 40.0).sqrt()).floor()
    } else {
        base
    }
}

/// `2 * sqrt(level) + 1.5 * sqrt(luck)`, shared by every accuracy formula.
pub fn basic_accuracy_term(level: u16, luck: i32) -> f64 {
    2.0 * f64::from(level).sqrt() + 1.5 * f64::from(luck.max(0)).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRateParams {
    pub accuracy_term: f64,
    pub evasion_term: f64,
    pub target_morale_mod: f64,
    pub critical_rate_constant: f64,
    pub critical_rate_multiplier: f64,
    /// Percentage points
    pub hit_percentage_bonus: f64,
    /// Percentage points
    pub critical_percentage_bonus: f64,
}

impl HitRateParams {
    pub fn new(accuracy_term: f64, evasion_term: f64, critical_rate_constant: f64) -> Self {
        Self {
            accuracy_term,
            evasion_term,
            target_morale_mod: 1.0,
            critical_rate_constant,
            critical_rate_multiplier: 1.0,
            hit_percentage_bonus: 0.0,
            critical_percentage_bonus: 0.0,
        }
    }

    pub fn calc(&self) -> HitRate {
        let base = ((self.accuracy_term - self.evasion_term) * self.target_morale_mod).floor();
        let capped = base.clamp(HIT_PERCENT_FLOOR, HIT_PERCENT_CEIL);
        let total = ((capped + 1.0 + self.hit_percentage_bonus) / 100.0).clamp(0.0, 1.0);

        let critical_percent = ((capped.sqrt() * self.critical_rate_constant).floor() + 1.0)
            * self.critical_rate_multiplier
            + self.critical_percentage_bonus;
        let critical = (critical_percent / 100.0).clamp(0.0, total);

        HitRate {
            total,
            normal: total - critical,
            critical,
        }
    }
}

/// `total = normal + critical`; the miss rate is `1 - total`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRate {
    pub total: f64,
    pub normal: f64,
    pub critical: f64,
}

impl HitRate {
    pub fn miss(&self) -> f64 {
        1.0 - self.total
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::data::gear::{GearAttr, GearCategory, MasterGear};
use crate::stats::improvement::GearImprovement;

pub const MAX_STARS: u8 = 10;
pub const MAX_EXP: u8 = 120;

/// Proficiency level thresholds on internal experience.
pub const PROFICIENCY_THRESHOLDS: [u8; 8] = [0, 10, 25, 40, 55, 70, 85, 100];

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GearState {
    pub id: Option<String>,
    pub gear_id: u16,
    pub stars: Option<u8>,
    pub exp: Option<u8>,
}

impl GearState {
    pub fn new(gear_id: u16) -> Self {
        Self {
            gear_id,
            ..Default::default()
        }
    }

    pub fn with_stars(mut self, stars: u8) -> Self {
        self.stars = Some(stars);
        self
    }

    pub fn with_exp(mut self, exp: u8) -> Self {
        self.exp = Some(exp);
        self
    }
}

pub fn proficiency_level(exp: u8) -> usize {
    PROFICIENCY_THRESHOLDS
        .iter()
        .rposition(|&threshold| exp >= threshold)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gear {
    pub id: Option<String>,
    pub master: Arc<MasterGear>,
    pub stars: u8,
    pub exp: u8,
    pub improvement: GearImprovement,
}

impl Gear {
    pub fn new(master: Arc<MasterGear>, state: &GearState) -> Self {
        let stars = state.stars.unwrap_or(0).min(MAX_STARS);
        let exp = state.exp.unwrap_or(0).min(MAX_EXP);
        let improvement = GearImprovement::new(&master, stars);
        Self {
            id: state.id.clone(),
            master,
            stars,
            exp,
            improvement,
        }
    }

    pub fn state(&self) -> GearState {
        GearState {
            id: self.id.clone(),
            gear_id: self.master.gear_id,
            stars: Some(self.stars),
            exp: Some(self.exp),
        }
    }

    pub fn gear_id(&self) -> u16 {
        self.master.gear_id
    }

    pub fn category(&self) -> GearCategory {
        self.master.category()
    }

    pub fn has_attr(&self, attr: GearAttr) -> bool {
        self.master.has_attr(attr)
    }

    pub fn proficiency(&self) -> usize {
        proficiency_level(self.exp)
    }

    /// Critical power modifier from aircraft proficiency, before the per-slot weighting.
    pub fn proficiency_critical_mod(&self) -> f64 {
        const TABLE: [f64; 8] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 10.0];
        let bonus = TABLE[self.proficiency()];
        let exp_bonus = f64::from(self.exp).sqrt();
        (exp_bonus + bonus) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_levels_follow_thresholds() {
        assert_eq!(proficiency_level(0), 0);
        assert_eq!(proficiency_level(9), 0);
        assert_eq!(proficiency_level(10), 1);
        assert_eq!(proficiency_level(99), 6);
        assert_eq!(proficiency_level(120), 7);
    }

    #[test]
    fn stars_and_exp_are_clamped() {
        let master = Arc::new(MasterGear::default());
        let gear = Gear::new(
            master,
            &GearState {
                stars: Some(42),
                exp: Some(200),
                ..Default::default()
            },
        );
        assert_eq!(gear.stars, MAX_STARS);
        assert_eq!(gear.exp, MAX_EXP);
    }
}

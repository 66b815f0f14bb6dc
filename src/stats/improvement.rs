//! Improvement (stars) bonuses per gear category.

use serde::{Deserialize, Serialize};

use crate::data::gear::{GearAttr, GearCategory, MasterGear};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GearImprovement {
    pub shelling_power: f64,
    pub torpedo_power: f64,
    pub night_power: f64,
    pub asw_power: f64,
    pub shelling_accuracy: f64,
    pub torpedo_accuracy: f64,
    pub night_accuracy: f64,
    pub asw_accuracy: f64,
    pub evasion: f64,
    pub los: f64,
    pub adjusted_anti_air: f64,
    pub fleet_anti_air: f64,
    pub fighter_power: f64,
}

impl GearImprovement {
    pub fn new(gear: &MasterGear, stars: u8) -> Self {
        if stars == 0 {
            return Self::default();
        }
        let s = f64::from(stars);
        let root = s.sqrt();
        let category = gear.category();
        let is_ha = gear.has_attr(GearAttr::HighAngleMount);

        let mut imp = Self::default();

        imp.shelling_power = match category {
            GearCategory::LargeMainGun => 1.5 * root,
            GearCategory::SecondaryGun if is_ha => 0.2 * s,
            GearCategory::SmallMainGun
            | GearCategory::MediumMainGun
            | GearCategory::SecondaryGun
            | GearCategory::ApShell
            | GearCategory::AntiAirFireDirector
            | GearCategory::Searchlight
            | GearCategory::LargeSearchlight
            | GearCategory::AntiAirShell
            | GearCategory::LandingCraft => root,
            GearCategory::Sonar | GearCategory::DepthCharge => 0.75 * root,
            GearCategory::CbTorpedoBomber | GearCategory::CbDiveBomber => 0.2 * s,
            _ => 0.0,
        };

        imp.night_power = match category {
            GearCategory::SecondaryGun if is_ha => 0.2 * s,
            GearCategory::SmallMainGun
            | GearCategory::MediumMainGun
            | GearCategory::LargeMainGun
            | GearCategory::SecondaryGun
            | GearCategory::Torpedo
            | GearCategory::SubmarineTorpedo
            | GearCategory::ApShell
            | GearCategory::Searchlight
            | GearCategory::LargeSearchlight
            | GearCategory::StarShell
            | GearCategory::LandingCraft => root,
            _ => 0.0,
        };

        imp.torpedo_power = match category {
            GearCategory::Torpedo | GearCategory::SubmarineTorpedo | GearCategory::AntiAirGun => {
                1.2 * root
            }
            _ => 0.0,
        };

        imp.asw_power = match category {
            GearCategory::Sonar | GearCategory::LargeSonar | GearCategory::DepthCharge => {
                2.0 / 3.0 * root
            }
            _ => 0.0,
        };

        imp.shelling_accuracy = match category {
            _ if gear.has_attr(GearAttr::SurfaceRadar) => 1.7 * root,
            GearCategory::SmallRadar | GearCategory::LargeRadar => root,
            GearCategory::SmallMainGun
            | GearCategory::MediumMainGun
            | GearCategory::LargeMainGun
            | GearCategory::SecondaryGun
            | GearCategory::ApShell
            | GearCategory::AntiAirFireDirector => root,
            _ => 0.0,
        };

        imp.night_accuracy = match category {
            GearCategory::SmallMainGun
            | GearCategory::MediumMainGun
            | GearCategory::LargeMainGun
            | GearCategory::SecondaryGun
            | GearCategory::SmallRadar
            | GearCategory::LargeRadar => 1.3 * root,
            _ => 0.0,
        };

        imp.torpedo_accuracy = match category {
            GearCategory::Torpedo | GearCategory::SubmarineTorpedo => 2.0 * root,
            GearCategory::AntiAirGun => root,
            _ => 0.0,
        };

        imp.asw_accuracy = match category {
            GearCategory::Sonar | GearCategory::LargeSonar => 1.3 * root,
            _ => 0.0,
        };

        imp.evasion = match category {
            GearCategory::EngineImprovement | GearCategory::Sonar => 1.5 * root,
            _ => 0.0,
        };

        imp.los = match category {
            GearCategory::SmallRadar => 1.25 * root,
            GearCategory::LargeRadar => 1.4 * root,
            GearCategory::ReconSeaplane | GearCategory::CbRecon | GearCategory::SeaplaneBomber => {
                1.2 * root
            }
            _ => 0.0,
        };

        let strong = gear.anti_air >= 8;
        imp.adjusted_anti_air = match category {
            _ if is_ha => {
                if strong {
                    3.0 * root
                } else {
                    2.0 * root
                }
            }
            GearCategory::AntiAirGun => {
                if strong {
                    3.0 * root
                } else {
                    2.0 * root
                }
            }
            _ => 0.0,
        };

        imp.fleet_anti_air = match category {
            _ if is_ha || category == GearCategory::AntiAirFireDirector => {
                if strong {
                    3.0 * root
                } else {
                    2.0 * root
                }
            }
            _ if gear.has_attr(GearAttr::AirRadar) => 1.5 * root,
            _ => 0.0,
        };

        imp.fighter_power = match category {
            c if c.is_fighter() => 0.2 * s,
            GearCategory::CbDiveBomber if gear.anti_air > 0 => 0.25 * s,
            GearCategory::LbAttacker => 0.5 * root,
            _ => 0.0,
        };

        imp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stars_has_no_bonus() {
        let gear = MasterGear {
            types: [1, 1, 3, 3, 0],
            ..Default::default()
        };
        assert_eq!(GearImprovement::new(&gear, 0), GearImprovement::default());
    }

    #[test]
    fn large_main_gun_uses_one_and_a_half_root() {
        let gear = MasterGear {
            types: [1, 1, 3, 3, 0],
            ..Default::default()
        };
        let imp = GearImprovement::new(&gear, 4);
        assert!((imp.shelling_power - 3.0).abs() < 1e-12);
        assert!((imp.night_power - 2.0).abs() < 1e-12);
    }

    #[test]
    fn surface_radar_accuracy_beats_plain_radar() {
        let surface = MasterGear {
            types: [5, 8, 12, 11, 0],
            los: 5,
            ..Default::default()
        };
        let plain = MasterGear {
            types: [5, 8, 12, 11, 0],
            anti_air: 2,
            ..Default::default()
        };
        assert!(
            GearImprovement::new(&surface, 4).shelling_accuracy
                > GearImprovement::new(&plain, 4).shelling_accuracy
        );
    }
}

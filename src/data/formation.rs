//! Formation definitions: per-warfare power/accuracy/evasion modifiers and the
//! fleet anti-air modifier.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    LineAhead,
    DoubleLine,
    Diamond,
    Echelon,
    LineAbreast,
    Vanguard,
    /// Combined fleet, anti-submarine
    Cruising1,
    /// Combined fleet, forward
    Cruising2,
    /// Combined fleet, ring
    Cruising3,
    /// Combined fleet, battle
    Cruising4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormationWarfare {
    Shelling,
    Torpedo,
    Asw,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormationModifiers {
    pub power: f64,
    pub accuracy: f64,
    pub evasion: f64,
}

const fn mods(power: f64, accuracy: f64, evasion: f64) -> FormationModifiers {
    FormationModifiers {
        power,
        accuracy,
        evasion,
    }
}

const NEUTRAL: FormationModifiers = mods(1.0, 1.0, 1.0);

impl Formation {
    pub fn is_combined(self) -> bool {
        matches!(
            self,
            Self::Cruising1 | Self::Cruising2 | Self::Cruising3 | Self::Cruising4
        )
    }

    /// Modifiers for a ship at a given position. Vanguard treats the top half
    /// of the fleet differently from the bottom half.
    pub fn modifiers(self, warfare: FormationWarfare, is_top_half: bool) -> FormationModifiers {
        use Formation::*;
        use FormationWarfare::*;

        match (warfare, self) {
            (Shelling, LineAhead) => NEUTRAL,
            (Shelling, DoubleLine) => mods(0.8, 1.2, 1.0),
            (Shelling, Diamond) => mods(0.7, 1.0, 1.1),
            (Shelling, Echelon) => mods(0.75, 1.2, 1.4),
            (Shelling, LineAbreast) => mods(0.6, 1.2, 1.3),
            (Shelling, Vanguard) if is_top_half => mods(0.5, 0.8, 1.1),
            (Shelling, Vanguard) => mods(1.0, 1.2, 1.0),
            (Shelling, Cruising1) => mods(0.8, 1.0, 1.0),
            (Shelling, Cruising2) => NEUTRAL,
            (Shelling, Cruising3) => mods(0.7, 1.0, 1.0),
            (Shelling, Cruising4) => mods(1.1, 1.0, 1.0),

            (Torpedo, LineAhead) => NEUTRAL,
            (Torpedo, DoubleLine) => mods(0.8, 0.8, 1.0),
            (Torpedo, Diamond) => mods(0.7, 0.4, 1.1),
            (Torpedo, Echelon) => mods(0.6, 0.6, 1.3),
            (Torpedo, LineAbreast) => mods(0.6, 0.3, 1.4),
            (Torpedo, Vanguard) => mods(1.0, 0.6, 1.0),
            (Torpedo, Cruising1) => mods(0.7, 1.0, 1.0),
            (Torpedo, Cruising2) => mods(0.9, 1.0, 1.0),
            (Torpedo, Cruising3) => mods(0.6, 1.0, 1.0),
            (Torpedo, Cruising4) => NEUTRAL,

            (Asw, LineAhead) => mods(0.6, 1.0, 1.0),
            (Asw, DoubleLine) => mods(0.8, 1.2, 1.0),
            (Asw, Diamond) => mods(1.2, 1.0, 1.1),
            (Asw, Echelon) => mods(1.1, 1.2, 1.3),
            (Asw, LineAbreast) => mods(1.3, 1.2, 1.3),
            (Asw, Vanguard) if is_top_half => mods(1.0, 1.1, 1.0),
            (Asw, Vanguard) => mods(0.6, 1.0, 1.0),
            (Asw, Cruising1) => mods(1.3, 1.0, 1.0),
            (Asw, Cruising2) => mods(1.1, 1.0, 1.0),
            (Asw, Cruising3) => NEUTRAL,
            (Asw, Cruising4) => mods(0.7, 1.0, 1.0),

            (Night, LineAhead) => NEUTRAL,
            (Night, DoubleLine) => mods(1.0, 0.9, 1.0),
            (Night, Diamond) => mods(1.0, 0.7, 1.0),
            (Night, Echelon) => mods(1.0, 0.8, 1.1),
            (Night, LineAbreast) => mods(1.0, 0.8, 1.0),
            (Night, Vanguard) if is_top_half => mods(0.5, 0.5, 1.2),
            (Night, Vanguard) => NEUTRAL,
            (Night, _) => NEUTRAL,
        }
    }

    pub fn fleet_anti_air_mod(self) -> f64 {
        match self {
            Self::LineAhead | Self::Echelon | Self::Cruising2 | Self::Cruising4 => 1.0,
            Self::DoubleLine => 1.2,
            Self::Diamond => 1.6,
            Self::LineAbreast | Self::Vanguard | Self::Cruising1 => 1.1,
            Self::Cruising3 => 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_ahead_shelling_is_neutral() {
        let m = Formation::LineAhead.modifiers(FormationWarfare::Shelling, true);
        assert_eq!(m, NEUTRAL);
    }

    #[test]
    fn vanguard_depends_on_position() {
        let top = Formation::Vanguard.modifiers(FormationWarfare::Shelling, true);
        let bottom = Formation::Vanguard.modifiers(FormationWarfare::Shelling, false);
        assert_eq!(top.power, 0.5);
        assert_eq!(bottom.power, 1.0);
    }

    #[test]
    fn diamond_has_the_strongest_fleet_anti_air() {
        let all = [
            Formation::LineAhead,
            Formation::DoubleLine,
            Formation::Echelon,
            Formation::LineAbreast,
            Formation::Vanguard,
            Formation::Cruising1,
            Formation::Cruising2,
            Formation::Cruising3,
            Formation::Cruising4,
        ];
        for formation in all {
            assert!(formation.fleet_anti_air_mod() < Formation::Diamond.fleet_anti_air_mod());
        }
    }
}

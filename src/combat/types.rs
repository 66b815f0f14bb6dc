//! Engagement context: the value objects every warfare calculation takes.

use serde::{Deserialize, Serialize};

use crate::data::formation::Formation;
use crate::entity::org::OrgType;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FleetType {
    #[default]
    Main,
    Escort,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Engagement {
    #[default]
    Parallel,
    HeadOn,
    GreenT,
    RedT,
}

impl Engagement {
    /// Pre-cap power multiplier.
    pub fn modifier(self) -> f64 {
        match self {
            Self::Parallel => 1.0,
            Self::HeadOn => 0.8,
            Self::GreenT => 1.2,
            Self::RedT => 0.6,
        }
    }

    /// Accuracy multiplier for day shelling, torpedo, ASW and support attacks.
    pub fn accuracy_modifier(self) -> f64 {
        match self {
            Self::Parallel => 1.0,
            Self::HeadOn => 0.9,
            Self::GreenT => 1.1,
            Self::RedT => 0.8,
        }
    }
}

/// Air control from the attacker's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirState {
    AirSupremacy,
    AirSuperiority,
    #[default]
    AirParity,
    AirDenial,
    AirIncapability,
}

impl AirState {
    /// Fighter power ratio thresholds: `fp >= 3 * enemy` is supremacy, and so on.
    pub fn from_fighter_power(own: i32, enemy: i32) -> Self {
        let own = f64::from(own.max(0));
        let enemy = f64::from(enemy.max(0));
        if enemy == 0.0 {
            return if own > 0.0 {
                Self::AirSupremacy
            } else {
                Self::AirParity
            };
        }
        if own >= 3.0 * enemy {
            Self::AirSupremacy
        } else if own >= 1.5 * enemy {
            Self::AirSuperiority
        } else if own * 1.5 > enemy {
            Self::AirParity
        } else if own * 3.0 > enemy {
            Self::AirDenial
        } else {
            Self::AirIncapability
        }
    }

    pub fn allows_day_cutin(self) -> bool {
        matches!(self, Self::AirSupremacy | Self::AirSuperiority)
    }
}

/// Health buckets. Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageState {
    Sunk,
    Taiha,
    Chuuha,
    Shouha,
    Normal,
}

impl DamageState {
    pub const ALL: [DamageState; 5] = [
        DamageState::Sunk,
        DamageState::Taiha,
        DamageState::Chuuha,
        DamageState::Shouha,
        DamageState::Normal,
    ];

    pub fn from_hp(current_hp: i32, max_hp: i32) -> Self {
        if current_hp <= 0 {
            return Self::Sunk;
        }
        if max_hp <= 0 {
            return Self::Normal;
        }
        let quarter = 4 * current_hp;
        if quarter <= max_hp {
            Self::Taiha
        } else if quarter <= 2 * max_hp {
            Self::Chuuha
        } else if quarter <= 3 * max_hp {
            Self::Shouha
        } else {
            Self::Normal
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Attack power modifier for shelling, ASW and night attacks.
    pub fn common_power_mod(self) -> f64 {
        match self {
            Self::Chuuha => 0.7,
            Self::Taiha => 0.4,
            _ => 1.0,
        }
    }

    pub fn torpedo_power_mod(self) -> f64 {
        match self {
            Self::Chuuha => 0.8,
            Self::Taiha | Self::Sunk => 0.0,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoraleState {
    Sparkle,
    Normal,
    Orange,
    Red,
}

impl MoraleState {
    pub fn from_morale(morale: i32) -> Self {
        match morale {
            m if m >= 50 => Self::Sparkle,
            m if m >= 30 => Self::Normal,
            m if m >= 20 => Self::Orange,
            _ => Self::Red,
        }
    }

    pub fn attacker_accuracy_mod(self) -> f64 {
        match self {
            Self::Sparkle => 1.2,
            Self::Normal => 1.0,
            Self::Orange => 0.8,
            Self::Red => 0.5,
        }
    }

    /// Multiplies the accuracy-minus-evasion term when this ship is the target.
    pub fn target_mod(self) -> f64 {
        match self {
            Self::Sparkle => 0.7,
            Self::Normal => 1.0,
            Self::Orange => 1.2,
            Self::Red => 1.4,
        }
    }
}

/// Contact ranks, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContactRank {
    Rank1,
    Rank2,
    Rank3,
}

impl ContactRank {
    pub const ALL: [ContactRank; 3] = [ContactRank::Rank1, ContactRank::Rank2, ContactRank::Rank3];

    pub fn from_accuracy(accuracy: i32) -> Self {
        match accuracy {
            a if a >= 3 => Self::Rank1,
            2 => Self::Rank2,
            _ => Self::Rank3,
        }
    }

    /// Carrier shelling power modifier applied after the cap.
    pub fn day_power_mod(self) -> f64 {
        match self {
            Self::Rank1 => 1.2,
            Self::Rank2 => 1.17,
            Self::Rank3 => 1.12,
        }
    }

    /// Flat night attack power bonus from a night contact plane of this accuracy.
    pub fn night_power_bonus(self) -> f64 {
        match self {
            Self::Rank1 => 9.0,
            Self::Rank2 => 7.0,
            Self::Rank3 => 5.0,
        }
    }
}

/// Night battle conditions one side brings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NightConditions {
    pub contact: Option<ContactRank>,
    pub searchlight: bool,
    pub starshell: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NightSituation {
    pub attacker: NightConditions,
    pub target: NightConditions,
}

/// Where a ship sits in its comp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipEnvironment {
    pub side: Side,
    pub org_type: OrgType,
    pub fleet_type: FleetType,
    pub position: usize,
    pub fleet_len: usize,
    pub formation: Formation,
    /// Day observation fleet LoS term; computed from the ship alone when absent
    pub fleet_los_mod: Option<f64>,
}

impl Default for ShipEnvironment {
    fn default() -> Self {
        Self {
            side: Side::Player,
            org_type: OrgType::Single,
            fleet_type: FleetType::Main,
            position: 0,
            fleet_len: 6,
            formation: Formation::LineAhead,
            fleet_los_mod: None,
        }
    }
}

impl ShipEnvironment {
    pub fn enemy() -> Self {
        Self {
            side: Side::Enemy,
            org_type: OrgType::EnemySingle,
            ..Default::default()
        }
    }

    pub fn is_flagship(&self) -> bool {
        self.position == 0 && self.fleet_type == FleetType::Main
    }

    pub fn is_top_half(&self) -> bool {
        self.position < self.fleet_len.div_ceil(2)
    }

    pub fn is_combined(&self) -> bool {
        self.org_type.is_combined()
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    pub fn with_formation(mut self, formation: Formation) -> Self {
        self.formation = formation;
        self
    }
}

/// Everything about an engagement that is not a ship. Never mutated in place:
/// every `with_*` returns a new context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarfareContext {
    pub attacker_env: ShipEnvironment,
    pub target_env: ShipEnvironment,
    pub engagement: Engagement,
    pub air_state: AirState,
    pub night: NightSituation,
}

impl WarfareContext {
    pub fn new(attacker_env: ShipEnvironment, target_env: ShipEnvironment) -> Self {
        Self {
            attacker_env,
            target_env,
            ..Default::default()
        }
    }

    pub fn with_engagement(self, engagement: Engagement) -> Self {
        Self { engagement, ..self }
    }

    pub fn with_air_state(self, air_state: AirState) -> Self {
        Self { air_state, ..self }
    }

    pub fn with_formations(self, attacker: Formation, target: Formation) -> Self {
        Self {
            attacker_env: self.attacker_env.with_formation(attacker),
            target_env: self.target_env.with_formation(target),
            ..self
        }
    }

    pub fn with_night(self, night: NightSituation) -> Self {
        Self { night, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_state_thresholds() {
        assert_eq!(DamageState::from_hp(40, 40), DamageState::Normal);
        assert_eq!(DamageState::from_hp(31, 40), DamageState::Normal);
        assert_eq!(DamageState::from_hp(30, 40), DamageState::Shouha);
        assert_eq!(DamageState::from_hp(20, 40), DamageState::Chuuha);
        assert_eq!(DamageState::from_hp(10, 40), DamageState::Taiha);
        assert_eq!(DamageState::from_hp(0, 40), DamageState::Sunk);
    }

    #[test]
    fn damage_state_is_monotonic_in_hp() {
        let max_hp = 57;
        let mut previous = DamageState::Sunk;
        for hp in 0..=max_hp {
            let state = DamageState::from_hp(hp, max_hp);
            assert!(state >= previous);
            previous = state;
        }
    }

    #[test]
    fn air_state_from_fighter_power() {
        assert_eq!(AirState::from_fighter_power(300, 100), AirState::AirSupremacy);
        assert_eq!(AirState::from_fighter_power(150, 100), AirState::AirSuperiority);
        assert_eq!(AirState::from_fighter_power(100, 100), AirState::AirParity);
        assert_eq!(AirState::from_fighter_power(50, 100), AirState::AirDenial);
        assert_eq!(AirState::from_fighter_power(30, 100), AirState::AirIncapability);
    }

    #[test]
    fn context_builders_return_new_values() {
        let base = WarfareContext::default();
        let changed = base.with_engagement(Engagement::RedT);
        assert_eq!(base.engagement, Engagement::Parallel);
        assert_eq!(changed.engagement, Engagement::RedT);
    }
}

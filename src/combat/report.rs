//! Result structs of a warfare analysis. Plain data: every field that could
//! not be computed is `None`, never zero.

use serde::{Deserialize, Serialize};

use crate::combat::attack_power::{AttackPower, AttackPowerParams};
use crate::combat::damage::{
    damage_ranges, DamageRanges, DamageStateDistribution, DefenseParams, HpDistribution,
};
use crate::combat::hit_rate::{HitRate, HitRateParams};
use crate::combat::style::AttackStyle;
use crate::combat::types::{ShipEnvironment, Side};
use crate::entity::ship::Ship;

/// Formula inputs for one attack style. Either half may be unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackParams {
    pub power: Option<AttackPowerParams>,
    pub hit_rate: Option<HitRateParams>,
    pub hits: u8,
}

/// Target side of the damage formula; `None` when armor or hp is unknown.
pub fn defense_params(target: &Ship, env: &ShipEnvironment) -> Option<DefenseParams> {
    Some(DefenseParams {
        armor: target.armor()?,
        current_hp: target.current_hp?,
        max_hp: target.max_hp?,
        sinking_protection: env.side == Side::Player,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackReport {
    pub style: AttackStyle,
    /// Chance this style is the one used
    pub rate: Option<f64>,
    pub hits: u8,
    pub attack_power: Option<AttackPower>,
    pub hit_rate: Option<HitRate>,
    pub damage: Option<DamageRanges>,
    pub damage_states: Option<DamageStateDistribution>,
}

impl AttackReport {
    pub fn new(
        style: AttackStyle,
        rate: Option<f64>,
        params: &AttackParams,
        defense: Option<&DefenseParams>,
    ) -> Self {
        let attack_power = params.power.map(|power| power.calc());
        let hit_rate = params.hit_rate.map(|hit| hit.calc());
        let damage = attack_power
            .as_ref()
            .zip(defense)
            .map(|(power, defense)| damage_ranges(power, defense));
        let damage_states = match (&attack_power, &hit_rate, defense) {
            (Some(power), Some(hit), Some(defense)) => Some(
                HpDistribution::certain(defense.current_hp)
                    .after_attack(params.hits, hit, power, defense)
                    .damage_states(defense.max_hp),
            ),
            _ => None,
        };
        Self {
            style,
            rate,
            hits: params.hits,
            attack_power,
            hit_rate,
            damage,
            damage_states,
        }
    }
}

/// Everything one ship can do in one phase against one target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionReport {
    pub is_active: bool,
    pub attacks: Vec<AttackReport>,
    /// Damage-state distribution weighted by each style's rate
    pub damage_states: Option<DamageStateDistribution>,
}

impl ActionReport {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn new(attacks: Vec<AttackReport>) -> Self {
        let damage_states = attacks
            .iter()
            .try_fold(DamageStateDistribution::default(), |mut acc, attack| {
                let rate = attack.rate?;
                acc.merge_scaled(attack.damage_states.as_ref()?, rate);
                Some(acc)
            });
        Self {
            is_active: true,
            attacks,
            damage_states,
        }
    }

    pub fn total_rate(&self) -> Option<f64> {
        self.attacks.iter().map(|attack| attack.rate).sum()
    }

    pub fn find(&self, style_label: &str) -> Option<&AttackReport> {
        self.attacks
            .iter()
            .find(|attack| attack.style.label() == style_label)
    }
}

/// One report per battle phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarfareInfo {
    pub day: ActionReport,
    pub closing_torpedo: ActionReport,
    pub night: ActionReport,
    pub opening_asw: ActionReport,
    pub support_shelling: ActionReport,
}

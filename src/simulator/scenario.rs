//! Simulator input: every attacker's sampled attack against every target.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::analyzer::Analyzer;
use crate::combat::attack_power::AttackPower;
use crate::combat::damage::{sample_damage, DefenseParams};
use crate::combat::hit_rate::HitRate;
use crate::combat::report::{defense_params, ActionReport, WarfareInfo};
use crate::combat::style::AttackStyle;
use crate::combat::types::WarfareContext;
use crate::entity::comp::Comp;
use crate::error::SimulationError;

/// Battle phase a scenario samples from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Day,
    ClosingTorpedo,
    Night,
    OpeningAsw,
    #[default]
    SupportShelling,
}

impl Phase {
    pub fn report(self, info: &WarfareInfo) -> &ActionReport {
        match self {
            Self::Day => &info.day,
            Self::ClosingTorpedo => &info.closing_torpedo,
            Self::Night => &info.night,
            Self::OpeningAsw => &info.opening_asw,
            Self::SupportShelling => &info.support_shelling,
        }
    }
}

/// One style with everything its hit and damage rolls need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleOutcome {
    pub style: AttackStyle,
    pub rate: f64,
    pub hits: u8,
    pub hit_rate: HitRate,
    pub power: AttackPower,
}

/// A style lottery with fully known parameters. Any mass the styles leave
/// over means the attacker does nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedAttack {
    pub styles: Vec<StyleOutcome>,
}

impl PlannedAttack {
    /// `None` unless every style of an active report has a rate, hit rate and power.
    pub fn from_report(report: &ActionReport) -> Option<Self> {
        if !report.is_active {
            return None;
        }
        let styles = report
            .attacks
            .iter()
            .map(|attack| {
                Some(StyleOutcome {
                    style: attack.style,
                    rate: attack.rate?,
                    hits: attack.hits,
                    hit_rate: attack.hit_rate?,
                    power: attack.attack_power?,
                })
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { styles })
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&StyleOutcome> {
        let roll: f64 = rng.gen();
        let mut cumulative = 0.0;
        for outcome in &self.styles {
            cumulative += outcome.rate;
            if roll < cumulative {
                return Some(outcome);
            }
        }
        None
    }

    /// Sample one use of this attack against `hp`; returns the hp left.
    pub fn resolve<R: Rng + ?Sized>(&self, defense: &DefenseParams, hp: i32, rng: &mut R) -> i32 {
        let Some(outcome) = self.pick(rng) else {
            return hp;
        };
        let mut hp = hp;
        for _ in 0..outcome.hits.max(1) {
            if hp <= 0 {
                break;
            }
            let roll: f64 = rng.gen();
            let power = if roll < outcome.hit_rate.normal {
                outcome.power.normal
            } else if roll < outcome.hit_rate.normal + outcome.hit_rate.critical {
                outcome.power.critical
            } else {
                continue;
            };
            hp -= sample_damage(power, &outcome.power, defense, hp, rng);
        }
        hp
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimTarget {
    pub ship_id: u16,
    pub defense: DefenseParams,
}

/// Attackers act in order; each picks a uniformly random living target it can attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub targets: Vec<SimTarget>,
    /// `attacks[attacker][target]`
    pub attacks: Vec<Vec<Option<PlannedAttack>>>,
}

impl Scenario {
    pub fn new(
        targets: Vec<SimTarget>,
        attacks: Vec<Vec<Option<PlannedAttack>>>,
    ) -> Result<Self, SimulationError> {
        for (index, row) in attacks.iter().enumerate() {
            if row.len() != targets.len() {
                return Err(SimulationError::ShapeMismatch {
                    attacker: index,
                    expected: targets.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { targets, attacks })
    }

    /// Every ship of `attacker` against every ship of `target` in `phase`.
    pub fn from_comps(
        analyzer: &Analyzer<'_>,
        attacker: &Comp,
        target: &Comp,
        ctx: &WarfareContext,
        phase: Phase,
    ) -> Result<Self, SimulationError> {
        let defenders: Vec<_> = target
            .ships()
            .map(|(fleet_type, position, ship)| (target.environment(fleet_type, position), ship))
            .collect();

        let targets = defenders
            .iter()
            .map(|(env, ship)| {
                defense_params(ship, env)
                    .map(|defense| SimTarget {
                        ship_id: ship.ship_id(),
                        defense,
                    })
                    .ok_or(SimulationError::UnknownDefense {
                        ship_id: ship.ship_id(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let attacks = attacker
            .ships()
            .map(|(fleet_type, position, ship)| {
                let attacker_env = attacker.environment(fleet_type, position);
                defenders
                    .iter()
                    .map(|(target_env, target_ship)| {
                        let pair_ctx = WarfareContext {
                            attacker_env,
                            target_env: *target_env,
                            ..*ctx
                        };
                        let info = analyzer.analyze(&pair_ctx, ship, target_ship);
                        PlannedAttack::from_report(phase.report(&info))
                    })
                    .collect()
            })
            .collect();

        Self::new(targets, attacks)
    }

    pub fn initial_hp(&self) -> Vec<i32> {
        self.targets
            .iter()
            .map(|target| target.defense.current_hp)
            .collect()
    }
}

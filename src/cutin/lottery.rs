//! Priority-sequential allocation of probability mass among attack styles.

use serde::{Deserialize, Serialize};

use crate::combat::style::AttackStyle;
use crate::data::cutin::AllocationRule;

/// A style with its own trigger chance. `None` takes whatever mass is left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutinCandidate {
    pub style: AttackStyle,
    pub chance: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleRate {
    pub style: AttackStyle,
    pub rate: f64,
}

/// Rates in priority order. `residual` is the chance no listed style fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSelection {
    pub rates: Vec<StyleRate>,
    pub residual: f64,
}

impl Default for StyleSelection {
    fn default() -> Self {
        Self {
            rates: Vec::new(),
            residual: 1.0,
        }
    }
}

impl StyleSelection {
    pub fn total(&self) -> f64 {
        self.rates.iter().map(|entry| entry.rate).sum()
    }
}

/// Walk `candidates` in order, handing each its share of the remaining mass.
pub fn allocate(candidates: &[CutinCandidate], rule: AllocationRule) -> StyleSelection {
    let (rates, residual) = sequential_rates(
        candidates.iter().map(|candidate| (candidate.style, candidate.chance)),
        rule,
    );
    StyleSelection {
        rates: rates
            .into_iter()
            .map(|(style, rate)| StyleRate { style, rate })
            .collect(),
        residual,
    }
}

/// The allocation itself, over any entry type. Returns the per-entry rates and
/// the mass left over.
pub fn sequential_rates<T, I>(entries: I, rule: AllocationRule) -> (Vec<(T, f64)>, f64)
where
    I: IntoIterator<Item = (T, Option<f64>)>,
{
    let mut remaining = 1.0_f64;
    let mut rates = Vec::new();
    for (entry, chance) in entries {
        let allocated = match chance {
            None => remaining,
            Some(chance) => {
                let chance = chance.clamp(0.0, 1.0);
                match rule {
                    AllocationRule::SequentialRoll => remaining * chance,
                    AllocationRule::Capped => remaining.min(chance),
                }
            }
        };
        remaining = (remaining - allocated).max(0.0);
        rates.push((entry, allocated));
    }
    (rates, remaining)
}

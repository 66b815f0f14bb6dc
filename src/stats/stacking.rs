use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    MaxHp,
    Firepower,
    Torpedo,
    AntiAir,
    Armor,
    Evasion,
    Asw,
    Los,
    Luck,
    Accuracy,
    Bombing,
    Speed,
    Range,
}

impl StatKind {
    pub const ALL: [StatKind; 13] = [
        StatKind::MaxHp,
        StatKind::Firepower,
        StatKind::Torpedo,
        StatKind::AntiAir,
        StatKind::Armor,
        StatKind::Evasion,
        StatKind::Asw,
        StatKind::Los,
        StatKind::Luck,
        StatKind::Accuracy,
        StatKind::Bombing,
        StatKind::Speed,
        StatKind::Range,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLayer {
    /// Level-resolved template stat with the ship's own modifier applied
    Naked,
    /// Sum of equipped gear stats
    Equipment,
    /// Equipment bonus table contribution
    Bonus,
    /// Replaces the composed value
    Override,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatContribution<K> {
    pub key: K,
    pub layer: StatLayer,
    pub value: i32,
}

impl<K> StatContribution<K> {
    pub fn naked(key: K, value: i32) -> Self {
        Self {
            key,
            layer: StatLayer::Naked,
            value,
        }
    }

    pub fn equipment(key: K, value: i32) -> Self {
        Self {
            key,
            layer: StatLayer::Equipment,
            value,
        }
    }

    pub fn bonus(key: K, value: i32) -> Self {
        Self {
            key,
            layer: StatLayer::Bonus,
            value,
        }
    }

    pub fn overridden(key: K, value: i32) -> Self {
        Self {
            key,
            layer: StatLayer::Override,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerTotals {
    /// `None` when the template does not know this stat
    pub naked: Option<i32>,
    pub equipment: i32,
    pub bonus: i32,
    pub override_value: Option<i32>,
}

impl LayerTotals {
    pub fn apply(&mut self, layer: StatLayer, value: i32) {
        match layer {
            StatLayer::Naked => self.naked = Some(self.naked.unwrap_or(0) + value),
            StatLayer::Equipment => self.equipment += value,
            StatLayer::Bonus => self.bonus += value,
            StatLayer::Override => self.override_value = Some(value),
        }
    }

    /// Effective stat, never negative. An override wins over the layered sum.
    pub fn compose(self) -> Option<i32> {
        let raw = match self.override_value {
            Some(value) => value,
            None => self.naked? + self.equipment + self.bonus,
        };
        Some(raw.max(0))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatStacking<K: Ord> {
    totals: BTreeMap<K, LayerTotals>,
}

impl<K: Ord> StatStacking<K> {
    pub fn new() -> Self {
        Self {
            totals: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, contribution: StatContribution<K>) {
        self.totals
            .entry(contribution.key)
            .or_default()
            .apply(contribution.layer, contribution.value);
    }

    pub fn add_many<I>(&mut self, contributions: I)
    where
        I: IntoIterator<Item = StatContribution<K>>,
    {
        for contribution in contributions {
            self.add(contribution);
        }
    }

    pub fn totals_for(&self, key: &K) -> Option<LayerTotals> {
        self.totals.get(key).copied()
    }

    pub fn composed_for(&self, key: &K) -> Option<i32> {
        self.totals_for(key).and_then(LayerTotals::compose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_sum_and_clamp_at_zero() {
        let mut stacking = StatStacking::new();
        stacking.add_many([
            StatContribution::naked(StatKind::Firepower, 10),
            StatContribution::equipment(StatKind::Firepower, 5),
            StatContribution::bonus(StatKind::Firepower, -30),
        ]);
        assert_eq!(stacking.composed_for(&StatKind::Firepower), Some(0));
    }

    #[test]
    fn unknown_naked_stat_is_unknown_unless_overridden() {
        let mut stacking = StatStacking::new();
        stacking.add(StatContribution::equipment(StatKind::Armor, 3));
        assert_eq!(stacking.composed_for(&StatKind::Armor), None);

        stacking.add(StatContribution::overridden(StatKind::Armor, 40));
        assert_eq!(stacking.composed_for(&StatKind::Armor), Some(40));
    }

    #[test]
    fn clamping_is_idempotent() {
        let totals = LayerTotals {
            naked: Some(-4),
            ..Default::default()
        };
        let once = totals.compose();
        let twice = LayerTotals {
            naked: once,
            ..Default::default()
        }
        .compose();
        assert_eq!(once, twice);
    }
}

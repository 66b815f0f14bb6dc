use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::combat::modifier::AttackPowerModifier;
use crate::combat::types::{DamageState, MoraleState};
use crate::data::gear::{GearAttr, GearCategory, MasterGear};
use crate::data::ibonus::StatBonus;
use crate::data::ship::{MasterShip, ShipAttr, ShipType};
use crate::entity::gear::{Gear, GearState};
use crate::stats::fighter_power::slot_fighter_power;
use crate::stats::improvement::GearImprovement;
use crate::stats::speed::{RangeCategory, SpeedRank};
use crate::stats::stacking::{StatKind, StatStacking};

pub const MAX_SHIP_SLOTS: usize = 5;
pub const DEFAULT_MORALE: i32 = 49;

/// User-supplied attack modifiers layered on top of the game formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomModifiers {
    pub precap_mod: AttackPowerModifier,
    pub postcap_mod: AttackPowerModifier,
    pub hit_percentage_bonus: f64,
    pub critical_percentage_bonus: f64,
    pub critical_rate_multiplier: f64,
    pub historical_mod: f64,
}

impl Default for CustomModifiers {
    fn default() -> Self {
        Self {
            precap_mod: AttackPowerModifier::IDENTITY,
            postcap_mod: AttackPowerModifier::IDENTITY,
            hit_percentage_bonus: 0.0,
            critical_percentage_bonus: 0.0,
            critical_rate_multiplier: 1.0,
            historical_mod: 1.0,
        }
    }
}

impl Hash for CustomModifiers {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.precap_mod.hash(state);
        self.postcap_mod.hash(state);
        self.hit_percentage_bonus.to_bits().hash(state);
        self.critical_percentage_bonus.to_bits().hash(state);
        self.critical_rate_multiplier.to_bits().hash(state);
        self.historical_mod.to_bits().hash(state);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipState {
    pub id: Option<String>,
    pub ship_id: u16,
    pub level: Option<u16>,
    pub current_hp: Option<i32>,
    pub morale: Option<i32>,
    pub ammo: Option<i32>,
    pub fuel: Option<i32>,
    /// Current aircraft count per slot
    pub slots: Option<Vec<i32>>,
    pub gears: Vec<Option<GearState>>,
    pub extra_gear: Option<GearState>,
    /// Additive deltas on the level-resolved template stat
    pub modifiers: BTreeMap<StatKind, i32>,
    pub overrides: BTreeMap<StatKind, i32>,
    pub custom: CustomModifiers,
}

impl ShipState {
    pub fn new(ship_id: u16) -> Self {
        Self {
            ship_id,
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: u16) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_gears<I>(mut self, gears: I) -> Self
    where
        I: IntoIterator<Item = GearState>,
    {
        self.gears = gears.into_iter().map(Some).collect();
        self
    }
}

/// A regular slot (`index < 5`, with an aircraft count) or the extra slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearSlot {
    pub index: usize,
    pub size: Option<i32>,
}

impl GearSlot {
    pub fn is_extra(&self) -> bool {
        self.size.is_none()
    }

    pub fn aircraft(&self) -> i32 {
        self.size.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub id: Option<String>,
    pub master: Arc<MasterShip>,
    pub level: u16,
    pub gears: Vec<Option<Gear>>,
    pub extra_gear: Option<Gear>,
    pub slots: Vec<i32>,
    pub stats: StatStacking<StatKind>,
    pub ebonus: StatBonus,
    pub max_hp: Option<i32>,
    pub current_hp: Option<i32>,
    pub morale: i32,
    pub ammo: Option<i32>,
    pub fuel: Option<i32>,
    pub custom: CustomModifiers,
    pub fingerprint: u64,
}

impl Ship {
    pub fn ship_id(&self) -> u16 {
        self.master.ship_id
    }

    pub fn ship_type(&self) -> ShipType {
        self.master.ship_type
    }

    pub fn ship_class(&self) -> u16 {
        self.master.ship_class
    }

    pub fn is_abyssal(&self) -> bool {
        self.master.is_abyssal()
    }

    pub fn is_submarine(&self) -> bool {
        self.ship_type().is_submarine()
    }

    pub fn is_carrier(&self) -> bool {
        self.ship_type().is_carrier()
    }

    pub fn is_installation(&self) -> bool {
        self.master.is_installation()
    }

    pub fn has_ship_attr(&self, attr: ShipAttr) -> bool {
        self.master.has_attr(attr)
    }

    pub fn stat(&self, kind: StatKind) -> Option<i32> {
        self.stats.composed_for(&kind)
    }

    pub fn naked(&self, kind: StatKind) -> Option<i32> {
        self.stats.totals_for(&kind).and_then(|totals| totals.naked)
    }

    pub fn equipment(&self, kind: StatKind) -> i32 {
        self.stats
            .totals_for(&kind)
            .map(|totals| totals.equipment)
            .unwrap_or(0)
    }

    pub fn firepower(&self) -> Option<i32> {
        self.stat(StatKind::Firepower)
    }

    pub fn torpedo(&self) -> Option<i32> {
        self.stat(StatKind::Torpedo)
    }

    pub fn anti_air(&self) -> Option<i32> {
        self.stat(StatKind::AntiAir)
    }

    pub fn armor(&self) -> Option<i32> {
        self.stat(StatKind::Armor)
    }

    pub fn evasion(&self) -> Option<i32> {
        self.stat(StatKind::Evasion)
    }

    pub fn asw(&self) -> Option<i32> {
        self.stat(StatKind::Asw)
    }

    pub fn los(&self) -> Option<i32> {
        self.stat(StatKind::Los)
    }

    pub fn luck(&self) -> Option<i32> {
        self.stat(StatKind::Luck)
    }

    /// Equipment accuracy plus equipment bonus accuracy.
    pub fn accuracy(&self) -> i32 {
        self.stat(StatKind::Accuracy).unwrap_or(0)
    }

    pub fn bombing(&self) -> i32 {
        self.stat(StatKind::Bombing).unwrap_or(0)
    }

    pub fn speed_rank(&self) -> SpeedRank {
        SpeedRank::from_speed(self.stat(StatKind::Speed).unwrap_or(0))
    }

    pub fn range(&self) -> RangeCategory {
        RangeCategory::from_value(self.stat(StatKind::Range).unwrap_or(0))
    }

    /// Regular slots first, then the extra slot.
    pub fn gear_iter(&self) -> impl Iterator<Item = (GearSlot, &Gear)> + '_ {
        let regular = self.gears.iter().enumerate().filter_map(|(index, gear)| {
            gear.as_ref().map(|gear| {
                let slot = GearSlot {
                    index,
                    size: Some(self.slots.get(index).copied().unwrap_or(0)),
                };
                (slot, gear)
            })
        });
        let extra = self.extra_gear.iter().map(|gear| {
            (
                GearSlot {
                    index: MAX_SHIP_SLOTS,
                    size: None,
                },
                gear,
            )
        });
        regular.chain(extra)
    }

    /// `(template, stars)` pairs, the shape gear filters take.
    pub fn gear_pairs(&self) -> Vec<(&MasterGear, u8)> {
        self.gear_iter()
            .map(|(_, gear)| (gear.master.as_ref(), gear.stars))
            .collect()
    }

    pub fn count_gears<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Gear) -> bool,
    {
        self.gear_iter().filter(|(_, gear)| predicate(gear)).count()
    }

    pub fn count_attr(&self, attr: GearAttr) -> usize {
        self.count_gears(|gear| gear.has_attr(attr))
    }

    pub fn count_category(&self, category: GearCategory) -> usize {
        self.count_gears(|gear| gear.category() == category)
    }

    pub fn has_attr(&self, attr: GearAttr) -> bool {
        self.count_attr(attr) > 0
    }

    /// Aircraft in regular slots that still have planes.
    pub fn count_planes<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Gear) -> bool,
    {
        self.gear_iter()
            .filter(|(slot, gear)| slot.aircraft() > 0 && predicate(gear))
            .count()
    }

    pub fn improvement_sum<F>(&self, field: F) -> f64
    where
        F: Fn(&GearImprovement) -> f64,
    {
        self.gear_iter().map(|(_, gear)| field(&gear.improvement)).sum()
    }

    pub fn damage_state(&self) -> DamageState {
        match (self.current_hp, self.max_hp) {
            (Some(current), Some(max)) => DamageState::from_hp(current, max),
            _ => DamageState::Normal,
        }
    }

    pub fn morale_state(&self) -> MoraleState {
        MoraleState::from_morale(self.morale)
    }

    /// Remaining-ammo damage modifier: full below 50% ammo scales linearly.
    pub fn remaining_ammo_mod(&self) -> f64 {
        match (self.ammo, self.master.ammo) {
            (Some(current), Some(max)) if max > 0 => {
                let percent = (f64::from(current) * 100.0 / f64::from(max)).floor();
                (percent / 50.0).min(1.0)
            }
            _ => 1.0,
        }
    }

    pub fn fighter_power(&self) -> i32 {
        self.gear_iter()
            .filter_map(|(slot, gear)| slot.size.map(|size| slot_fighter_power(gear, size)))
            .sum()
    }

    /// Total LoS of equipped gear (no improvement).
    pub fn equipment_los(&self) -> i32 {
        self.equipment(StatKind::Los)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gear_slot_size_distinguishes_extra_slot() {
        let regular = GearSlot {
            index: 0,
            size: Some(12),
        };
        let extra = GearSlot {
            index: MAX_SHIP_SLOTS,
            size: None,
        };
        assert!(!regular.is_extra());
        assert!(extra.is_extra());
        assert_eq!(extra.aircraft(), 0);
    }

    #[test]
    fn ship_state_deserializes_with_defaults() {
        let state: ShipState =
            serde_json::from_str(r#"{"ship_id":144,"modifiers":{"luck":5}}"#).unwrap();
        assert_eq!(state.ship_id, 144);
        assert_eq!(state.modifiers.get(&StatKind::Luck), Some(&5));
        assert_eq!(state.custom, CustomModifiers::default());
    }
}

//! Damage rolls and exact damage-state distributions.
//!
//! One hit: an armor roll `0.7 * armor + 0.6 * floor(rand * armor)` reduced by
//! armor penetration, then `floor((power - armor) * ammo_mod)`. Non-positive
//! results become scratch damage `floor(0.06 * hp + 0.08 * floor(rand * hp))`.
//! Player-side targets not yet in Taiha are protected from sinking:
//! lethal damage becomes `floor(0.5 * hp + 0.3 * floor(rand * hp))`.

use std::collections::{BTreeMap, HashMap};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::attack_power::AttackPower;
use crate::combat::hit_rate::HitRate;
use crate::combat::types::DamageState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenseParams {
    pub armor: i32,
    pub current_hp: i32,
    pub max_hp: i32,
    pub sinking_protection: bool,
}

impl DefenseParams {
    fn armor_outcomes(&self) -> i32 {
        self.armor.max(1)
    }

    fn effective_armor(&self, roll: i32, penetration: f64) -> f64 {
        let armor = f64::from(self.armor.max(0));
        (0.7 * armor + 0.6 * f64::from(roll) - penetration).max(0.0)
    }
}

/// Damage one hit can deal at the target's current hp, scratch hits included.
/// Sinking protection is not reflected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: i32,
    pub max: i32,
    /// Chance a hit lands as scratch damage
    pub scratch_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageRanges {
    pub normal: DamageRange,
    pub critical: DamageRange,
}

fn raw_damage(power: f64, effective_armor: f64, ammo_mod: f64) -> i32 {
    ((power - effective_armor) * ammo_mod).floor() as i32
}

pub fn damage_range(power: f64, attack: &AttackPower, defense: &DefenseParams) -> DamageRange {
    let outcomes = defense.armor_outcomes();
    let penetration = attack.armor_penetration;
    let ammo_mod = attack.remaining_ammo_mod;

    let raws: Vec<i32> = (0..outcomes)
        .map(|roll| raw_damage(power, defense.effective_armor(roll, penetration), ammo_mod))
        .collect();
    let scratch = raws.iter().filter(|&&raw| raw <= 0).count();
    let landed = raws.iter().copied().filter(|&raw| raw > 0);
    let mut min = landed.clone().min();
    let mut max = landed.max();

    let hp = defense.current_hp;
    if scratch > 0 && hp > 0 {
        let lowest = scratch_damage(hp, 0);
        let highest = scratch_damage(hp, hp - 1);
        min = Some(min.map_or(lowest, |min| min.min(lowest)));
        max = Some(max.map_or(highest, |max| max.max(highest)));
    }

    DamageRange {
        min: min.unwrap_or(0),
        max: max.unwrap_or(0),
        scratch_rate: scratch as f64 / f64::from(outcomes),
    }
}

pub fn damage_ranges(attack: &AttackPower, defense: &DefenseParams) -> DamageRanges {
    DamageRanges {
        normal: damage_range(attack.normal, attack, defense),
        critical: damage_range(attack.critical, attack, defense),
    }
}

fn scratch_damage(hp: i32, roll: i32) -> i32 {
    (0.06 * f64::from(hp) + 0.08 * f64::from(roll)).floor() as i32
}

fn protected_damage(hp: i32, roll: i32) -> i32 {
    (0.5 * f64::from(hp) + 0.3 * f64::from(roll)).floor() as i32
}

/// Final damage for one armor-roll outcome and the two secondary rolls.
pub fn resolve_damage(
    raw: i32,
    current_hp: i32,
    max_hp: i32,
    protection: bool,
    secondary_roll: i32,
) -> i32 {
    let damage = if raw <= 0 {
        scratch_damage(current_hp, secondary_roll)
    } else {
        raw
    };
    let protected =
        protection && DamageState::from_hp(current_hp, max_hp) > DamageState::Taiha;
    if protected && damage >= current_hp {
        protected_damage(current_hp, secondary_roll)
    } else {
        damage
    }
}

/// Draw the damage of one hit of `power` against a target at `current_hp`.
/// Never more than `current_hp`.
pub fn sample_damage<R: Rng + ?Sized>(
    power: f64,
    attack: &AttackPower,
    defense: &DefenseParams,
    current_hp: i32,
    rng: &mut R,
) -> i32 {
    if current_hp <= 0 {
        return 0;
    }
    let roll = rng.gen_range(0..defense.armor_outcomes());
    let raw = raw_damage(
        power,
        defense.effective_armor(roll, attack.armor_penetration),
        attack.remaining_ammo_mod,
    );
    let secondary = rng.gen_range(0..current_hp);
    resolve_damage(
        raw,
        current_hp,
        defense.max_hp,
        defense.sinking_protection,
        secondary,
    )
    .clamp(0, current_hp)
}

/// Armor-roll outcomes grouped by raw damage. Every non-positive result is a
/// scratch hit and lands on key 0.
fn raw_damage_counts(power: f64, attack: &AttackPower, defense: &DefenseParams) -> BTreeMap<i32, u32> {
    let mut counts = BTreeMap::new();
    for roll in 0..defense.armor_outcomes() {
        let raw = raw_damage(
            power,
            defense.effective_armor(roll, attack.armor_penetration),
            attack.remaining_ammo_mod,
        );
        *counts.entry(raw.max(0)).or_insert(0) += 1;
    }
    counts
}

/// Damage histograms of the hp-dependent secondary roll, per hp. `lethal`
/// selects the sinking-protection branch, otherwise scratch damage. Only valid
/// for one `DefenseParams`.
#[derive(Debug, Default)]
struct SecondaryRolls {
    cache: HashMap<(i32, bool), Vec<(i32, u32)>>,
}

impl SecondaryRolls {
    fn get(&mut self, hp: i32, lethal: bool, defense: &DefenseParams) -> &[(i32, u32)] {
        self.cache.entry((hp, lethal)).or_insert_with(|| {
            let raw = if lethal { hp } else { 0 };
            let mut counts = BTreeMap::new();
            for roll in 0..hp {
                let damage =
                    resolve_damage(raw, hp, defense.max_hp, defense.sinking_protection, roll);
                *counts.entry(damage).or_insert(0u32) += 1;
            }
            counts.into_iter().collect()
        })
    }
}

/// Probability distribution over remaining hp.
#[derive(Debug, Clone, PartialEq)]
pub struct HpDistribution {
    probs: BTreeMap<i32, f64>,
}

impl HpDistribution {
    pub fn certain(hp: i32) -> Self {
        let mut probs = BTreeMap::new();
        probs.insert(hp.max(0), 1.0);
        Self { probs }
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.probs.iter().map(|(&hp, &p)| (hp, p))
    }

    fn add(&mut self, hp: i32, p: f64) {
        if p > 0.0 {
            *self.probs.entry(hp.max(0)).or_insert(0.0) += p;
        }
    }

    fn merge_scaled(&mut self, other: &HpDistribution, weight: f64) {
        for (hp, p) in other.iter() {
            self.add(hp, p * weight);
        }
    }

    /// Apply one hit with the given power to every hp state.
    pub fn after_hit(&self, power: f64, attack: &AttackPower, defense: &DefenseParams) -> Self {
        self.after_hit_with(power, attack, defense, &mut SecondaryRolls::default())
    }

    fn after_hit_with(
        &self,
        power: f64,
        attack: &AttackPower,
        defense: &DefenseParams,
        secondary: &mut SecondaryRolls,
    ) -> Self {
        let counts = raw_damage_counts(power, attack, defense);
        let outcomes = f64::from(defense.armor_outcomes());
        let mut next = Self {
            probs: BTreeMap::new(),
        };
        for (hp, p) in self.iter() {
            if hp <= 0 {
                next.add(0, p);
                continue;
            }
            let protection_possible = defense.sinking_protection
                && DamageState::from_hp(hp, defense.max_hp) > DamageState::Taiha;

            let mut scratch_mass = 0.0;
            let mut lethal_mass = 0.0;
            for (&raw, &count) in &counts {
                let p_raw = p * f64::from(count) / outcomes;
                if raw <= 0 {
                    scratch_mass += p_raw;
                } else if protection_possible && raw >= hp {
                    lethal_mass += p_raw;
                } else {
                    next.add(hp - raw, p_raw);
                }
            }

            for (lethal, mass) in [(false, scratch_mass), (true, lethal_mass)] {
                if mass <= 0.0 {
                    continue;
                }
                let per_roll = mass / f64::from(hp);
                for &(damage, rolls) in secondary.get(hp, lethal, defense) {
                    next.add(hp - damage, per_roll * f64::from(rolls));
                }
            }
        }
        next
    }

    /// One attack of `hits` independent hit rolls.
    pub fn after_attack(
        &self,
        hits: u8,
        hit_rate: &HitRate,
        attack: &AttackPower,
        defense: &DefenseParams,
    ) -> Self {
        let mut secondary = SecondaryRolls::default();
        let mut current = self.clone();
        for _ in 0..hits.max(1) {
            let mut next = Self {
                probs: BTreeMap::new(),
            };
            next.merge_scaled(&current, hit_rate.miss());
            if hit_rate.normal > 0.0 {
                next.merge_scaled(
                    &current.after_hit_with(attack.normal, attack, defense, &mut secondary),
                    hit_rate.normal,
                );
            }
            if hit_rate.critical > 0.0 {
                next.merge_scaled(
                    &current.after_hit_with(attack.critical, attack, defense, &mut secondary),
                    hit_rate.critical,
                );
            }
            current = next;
        }
        current
    }

    pub fn damage_states(&self, max_hp: i32) -> DamageStateDistribution {
        let mut dist = DamageStateDistribution::default();
        for (hp, p) in self.iter() {
            dist.add(DamageState::from_hp(hp, max_hp), p);
        }
        dist
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageStateDistribution(pub BTreeMap<DamageState, f64>);

impl DamageStateDistribution {
    pub fn add(&mut self, state: DamageState, p: f64) {
        if p > 0.0 {
            *self.0.entry(state).or_insert(0.0) += p;
        }
    }

    pub fn get(&self, state: DamageState) -> f64 {
        self.0.get(&state).copied().unwrap_or(0.0)
    }

    pub fn merge_scaled(&mut self, other: &DamageStateDistribution, weight: f64) {
        for (&state, &p) in &other.0 {
            self.add(state, p * weight);
        }
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power(normal: f64, critical: f64) -> AttackPower {
        AttackPower {
            precap: normal,
            capped: normal,
            is_capped: false,
            normal,
            critical,
            armor_penetration: 0.0,
            remaining_ammo_mod: 1.0,
        }
    }

    fn defense(armor: i32, hp: i32) -> DefenseParams {
        DefenseParams {
            armor,
            current_hp: hp,
            max_hp: hp,
            sinking_protection: false,
        }
    }

    #[test]
    fn range_spans_the_armor_roll() {
        let attack = power(95.0, 142.0);
        let ranges = damage_ranges(&attack, &defense(20, 100));
        assert_eq!((ranges.normal.min, ranges.normal.max), (69, 81));
        assert_eq!((ranges.critical.min, ranges.critical.max), (116, 128));
        assert_eq!(ranges.normal.scratch_rate, 0.0);
    }

    #[test]
    fn weak_attack_is_all_scratch() {
        let attack = power(10.0, 15.0);
        let range = damage_range(10.0, &attack, &defense(100, 80));
        assert_eq!(range.scratch_rate, 1.0);
        // floor(0.06 * 80) and floor(0.06 * 80 + 0.08 * 79)
        assert_eq!((range.min, range.max), (4, 11));
    }

    #[test]
    fn partial_scratch_reports_the_scratch_minimum() {
        let attack = power(20.0, 30.0);
        let range = damage_range(20.0, &attack, &defense(20, 100));
        assert!(range.scratch_rate > 0.0 && range.scratch_rate < 1.0);
        // lowest landed roll deals 1, scratch reaches floor(6 + 0.08 * 99)
        assert_eq!(range.min, 1);
        assert_eq!(range.max, 13);
    }

    fn brute_force_after_hit(
        dist: &HpDistribution,
        power: f64,
        attack: &AttackPower,
        defense: &DefenseParams,
    ) -> HpDistribution {
        let outcomes = defense.armor_outcomes();
        let mut next = HpDistribution {
            probs: BTreeMap::new(),
        };
        for (hp, p) in dist.iter() {
            if hp <= 0 {
                next.add(0, p);
                continue;
            }
            for roll in 0..outcomes {
                let raw = raw_damage(
                    power,
                    defense.effective_armor(roll, attack.armor_penetration),
                    attack.remaining_ammo_mod,
                );
                for secondary in 0..hp {
                    let damage =
                        resolve_damage(raw, hp, defense.max_hp, defense.sinking_protection, secondary);
                    next.add(hp - damage, p / f64::from(outcomes) / f64::from(hp));
                }
            }
        }
        next
    }

    #[test]
    fn grouped_rolls_match_enumerating_every_roll() {
        let attack = power(38.0, 57.0);
        let mut defense = defense(30, 45);
        defense.sinking_protection = true;
        let start = HpDistribution::certain(45);

        let mut grouped = start.clone();
        let mut enumerated = start;
        for _ in 0..3 {
            grouped = grouped.after_hit(attack.normal, &attack, &defense);
            enumerated = brute_force_after_hit(&enumerated, attack.normal, &attack, &defense);
        }
        let grouped: Vec<_> = grouped.iter().collect();
        let enumerated: Vec<_> = enumerated.iter().collect();
        assert_eq!(grouped.len(), enumerated.len());
        for ((hp_a, p_a), (hp_b, p_b)) in grouped.into_iter().zip(enumerated) {
            assert_eq!(hp_a, hp_b);
            assert!((p_a - p_b).abs() < 1e-12);
        }
    }

    #[test]
    fn heavy_target_distribution_stays_cheap() {
        let attack = power(400.0, 600.0);
        let defense = defense(300, 900);
        let rate = HitRate {
            total: 0.9,
            normal: 0.8,
            critical: 0.1,
        };
        let dist = HpDistribution::certain(900).after_attack(2, &rate, &attack, &defense);
        let total: f64 = dist.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(dist.damage_states(900).get(DamageState::Sunk), 0.0);
    }

    #[test]
    fn distribution_sums_to_one() {
        let attack = power(30.0, 45.0);
        let defense = defense(20, 40);
        let rate = HitRate {
            total: 0.8,
            normal: 0.7,
            critical: 0.1,
        };
        let dist = HpDistribution::certain(40).after_attack(2, &rate, &attack, &defense);
        let total: f64 = dist.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert!((dist.damage_states(40).total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sinking_protection_prevents_sinking_from_healthy() {
        let attack = power(500.0, 750.0);
        let mut defense = defense(10, 40);
        defense.sinking_protection = true;
        let rate = HitRate {
            total: 1.0,
            normal: 1.0,
            critical: 0.0,
        };
        let dist = HpDistribution::certain(40).after_attack(1, &rate, &attack, &defense);
        assert_eq!(dist.damage_states(40).get(DamageState::Sunk), 0.0);
    }
}

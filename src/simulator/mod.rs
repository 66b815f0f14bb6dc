//! Monte Carlo simulator: samples style selection, hit/miss and damage rolls
//! for scenarios whose composition has no closed form.

pub mod export;
pub mod runner;
pub mod scenario;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::damage::DamageStateDistribution;
use crate::combat::types::DamageState;

pub use export::{write_items_csv, write_sunk_csv};
pub use runner::{run_simulation, SimulatorConfig, DEFAULT_BATCHES, DEFAULT_ITERATIONS};
pub use scenario::{Phase, PlannedAttack, Scenario, SimTarget, StyleOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunkEntry {
    pub count: usize,
    /// Chance exactly `count` targets sink
    pub rate: f64,
    /// Chance at least `count` targets sink
    pub cumulative_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipOutcome {
    pub index: usize,
    pub ship_id: u16,
    pub damage_states: DamageStateDistribution,
    pub average_hp: f64,
}

impl ShipOutcome {
    pub fn sunk_rate(&self) -> f64 {
        self.damage_states.get(DamageState::Sunk)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorResult {
    pub iterations: u32,
    pub sunk_vec: Vec<SunkEntry>,
    pub items: Vec<ShipOutcome>,
}

/// Raw counts; batches merge their tallies before rates are taken.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub iterations: u32,
    pub sunk_counts: Vec<u64>,
    pub states: Vec<[u64; 5]>,
    pub hp_sums: Vec<i64>,
}

impl Tally {
    pub fn new(targets: usize) -> Self {
        Self {
            iterations: 0,
            sunk_counts: vec![0; targets + 1],
            states: vec![[0; 5]; targets],
            hp_sums: vec![0; targets],
        }
    }

    fn record(&mut self, scenario: &Scenario, hp: &[i32]) {
        self.iterations += 1;
        let mut sunk = 0;
        for (index, (target, &left)) in scenario.targets.iter().zip(hp).enumerate() {
            let state = DamageState::from_hp(left, target.defense.max_hp);
            if state == DamageState::Sunk {
                sunk += 1;
            }
            self.states[index][state.index()] += 1;
            self.hp_sums[index] += i64::from(left.max(0));
        }
        self.sunk_counts[sunk] += 1;
    }

    pub fn merge(mut self, other: Tally) -> Tally {
        if self.sunk_counts.len() < other.sunk_counts.len() {
            return other.merge(self);
        }
        self.iterations += other.iterations;
        for (mine, theirs) in self.sunk_counts.iter_mut().zip(&other.sunk_counts) {
            *mine += theirs;
        }
        for (mine, theirs) in self.states.iter_mut().zip(&other.states) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        for (mine, theirs) in self.hp_sums.iter_mut().zip(&other.hp_sums) {
            *mine += theirs;
        }
        self
    }

    pub fn into_result(self, scenario: &Scenario) -> SimulatorResult {
        let n = f64::from(self.iterations.max(1));
        let mut at_least = self.sunk_counts.iter().sum::<u64>();
        let sunk_vec = self
            .sunk_counts
            .iter()
            .enumerate()
            .map(|(count, &hits)| {
                let entry = SunkEntry {
                    count,
                    rate: hits as f64 / n,
                    cumulative_rate: at_least as f64 / n,
                };
                at_least -= hits;
                entry
            })
            .collect();

        let items = scenario
            .targets
            .iter()
            .enumerate()
            .map(|(index, target)| {
                let mut damage_states = DamageStateDistribution::default();
                for state in DamageState::ALL {
                    damage_states.add(state, self.states[index][state.index()] as f64 / n);
                }
                ShipOutcome {
                    index,
                    ship_id: target.ship_id,
                    damage_states,
                    average_hp: self.hp_sums[index] as f64 / n,
                }
            })
            .collect();

        SimulatorResult {
            iterations: self.iterations,
            sunk_vec,
            items,
        }
    }
}

fn run_once<R: Rng + ?Sized>(scenario: &Scenario, rng: &mut R, hp: &mut [i32]) {
    let mut candidates = Vec::with_capacity(scenario.targets.len());
    for row in &scenario.attacks {
        candidates.clear();
        candidates.extend(
            row.iter()
                .enumerate()
                .filter(|(index, attack)| attack.is_some() && hp[*index] > 0)
                .map(|(index, _)| index),
        );
        if candidates.is_empty() {
            continue;
        }
        let target = candidates[rng.gen_range(0..candidates.len())];
        if let Some(attack) = &row[target] {
            hp[target] = attack.resolve(&scenario.targets[target].defense, hp[target], rng);
        }
    }
}

/// Run `iterations` independent samples into a tally.
pub fn simulate_tally<R: Rng + ?Sized>(scenario: &Scenario, iterations: u32, rng: &mut R) -> Tally {
    let initial = scenario.initial_hp();
    let mut hp = initial.clone();
    let mut tally = Tally::new(scenario.targets.len());
    for _ in 0..iterations {
        hp.copy_from_slice(&initial);
        run_once(scenario, rng, &mut hp);
        tally.record(scenario, &hp);
    }
    tally
}

pub fn simulate<R: Rng + ?Sized>(scenario: &Scenario, iterations: u32, rng: &mut R) -> SimulatorResult {
    simulate_tally(scenario, iterations, rng).into_result(scenario)
}

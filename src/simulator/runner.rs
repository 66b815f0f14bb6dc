//! Batched, cancellable simulator runs on the rayon pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::rng::{batch_seed, SplitMix64};
use crate::error::SimulationError;
use crate::parallel::{split_iterations, CancelToken, WorkerPool};
use crate::simulator::scenario::Scenario;
use crate::simulator::{simulate_tally, SimulatorResult, Tally};

pub const DEFAULT_ITERATIONS: u32 = 10_000;
pub const DEFAULT_BATCHES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub iterations: u32,
    /// `None` draws a seed from the operating system.
    pub seed: Option<u64>,
    pub batches: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            batches: DEFAULT_BATCHES,
        }
    }
}

impl SimulatorConfig {
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    fn resolve_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => match SplitMix64::from_os() {
                Ok(mut rng) => rand::RngCore::next_u64(&mut rng),
                Err(err) => {
                    tracing::warn!(error = %err, "os entropy unavailable, seeding from 0");
                    0
                }
            },
        }
    }
}

/// Split the run into `config.batches` seeded batches on `pool`. Batches that
/// start after `cancel` fires are skipped and the run reports
/// [`SimulationError::Cancelled`].
pub fn run_simulation(
    scenario: &Scenario,
    config: &SimulatorConfig,
    pool: &WorkerPool,
    cancel: &CancelToken,
) -> Result<SimulatorResult, SimulationError> {
    let seed = config.resolve_seed();
    let batches = split_iterations(config.iterations, config.batches.max(1));

    let tally = pool.install(|| {
        batches
            .par_iter()
            .enumerate()
            .map(|(index, &size)| {
                if cancel.is_cancelled() {
                    return Tally::new(scenario.targets.len());
                }
                let mut rng = SplitMix64::new(batch_seed(seed, index));
                let tally = simulate_tally(scenario, size, &mut rng);
                tracing::debug!(batch = index, iterations = size, "simulator batch done");
                tally
            })
            .reduce(|| Tally::new(scenario.targets.len()), Tally::merge)
    })?;

    if cancel.is_cancelled() && tally.iterations < config.iterations {
        return Err(SimulationError::Cancelled {
            completed: tally.iterations,
            requested: config.iterations,
        });
    }

    tracing::debug!(
        iterations = tally.iterations,
        batches = batches.len(),
        seed,
        "simulation finished"
    );
    Ok(tally.into_result(scenario))
}

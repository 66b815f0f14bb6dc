//! Warfare analysis engine for a fleet-based naval combat game: stat
//! resolution, attack power, hit rates, cut-in rates, damage-state
//! distributions, anti-air, contact and a Monte Carlo simulator.

pub mod anti_air;
pub mod cli;
pub mod combat;
pub mod contact;
pub mod cutin;
pub mod data;
pub mod document;
pub mod entity;
pub mod error;
pub mod parallel;
pub mod simulator;
pub mod stats;

pub use combat::{analyze, Analyzer, WarfareContext, WarfareInfo};
pub use entity::Factory;
pub use error::{FactoryError, MasterDataError, SimulationError};

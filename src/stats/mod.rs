pub mod equipment_bonus;
pub mod fighter_power;
pub mod improvement;
pub mod los;
pub mod resolve;
pub mod speed;
pub mod stacking;

pub use equipment_bonus::evaluate_equipment_bonuses;
pub use fighter_power::{
    recon_multiplier, slot_fighter_power, squadron_radius, squadron_slot_fighter_power,
    AirSquadronMode,
};
pub use improvement::GearImprovement;
pub use los::{equipment_los_coefficient, fleet_observation_los_mod, formula33};
pub use resolve::{clamp_level, naked_stat, MAX_LEVEL, MIN_LEVEL};
pub use speed::{RangeCategory, SpeedRank};
pub use stacking::{LayerTotals, StatContribution, StatKind, StatLayer, StatStacking};

pub mod analyzer;
pub mod asw;
pub mod attack_power;
pub mod common;
pub mod damage;
pub mod hit_rate;
pub mod modifier;
pub mod night;
pub mod report;
pub mod rng;
pub mod shelling;
pub mod special_enemy;
pub mod style;
pub mod support;
pub mod torpedo;
pub mod types;

pub use analyzer::{analyze, builtin_tables, Analyzer};
pub use attack_power::{soft_cap, AttackPower, AttackPowerParams};
pub use damage::{
    damage_range, damage_ranges, DamageRange, DamageRanges, DamageStateDistribution,
    DefenseParams, HpDistribution,
};
pub use hit_rate::{HitRate, HitRateParams};
pub use modifier::AttackPowerModifier;
pub use report::{ActionReport, AttackParams, AttackReport, WarfareInfo};
pub use rng::SplitMix64;
pub use style::AttackStyle;
pub use types::{
    AirState, ContactRank, DamageState, Engagement, FleetType, MoraleState, NightConditions,
    NightSituation, ShipEnvironment, Side, WarfareContext,
};

pub mod anti_air_cutin;
pub mod cutin;
pub mod filter;
pub mod formation;
pub mod gear;
pub mod ibonus;
pub mod loader;
pub mod master;
pub mod ship;
pub mod validate;

pub use anti_air_cutin::{default_anti_air_cutins, AntiAirCutinDef};
pub use cutin::{
    AllocationRule, CutinDef, CutinTables, DayCutin, NightCutin, BUILTIN_CUTIN_TABLE_VERSION,
};
pub use filter::{GearFilter, GearRequirement};
pub use formation::{Formation, FormationModifiers, FormationWarfare};
pub use gear::{GearAttr, GearCategory, MasterGear};
pub use ibonus::{BonusCondition, EquipmentBonusRule, StatBonus};
pub use loader::{
    load_document, load_master_data, master_data_path, DocumentFormat, DEFAULT_MASTER_DATA_PATH,
};
pub use master::{MasterData, MasterDataFile};
pub use ship::{MasterShip, ShipAttr, ShipType, SpecialEnemyType, StatInterval};
pub use validate::{validate_master_data, ValidationReport, ValidationSeverity};

pub mod air_squadron;
pub mod comp;
pub mod factory;
pub mod fingerprint;
pub mod fleet;
pub mod gear;
pub mod org;
pub mod ship;

pub use air_squadron::{AirSquadron, AirSquadronState};
pub use comp::Comp;
pub use factory::Factory;
pub use fleet::{Fleet, FleetState};
pub use gear::{Gear, GearState};
pub use org::{Org, OrgState, OrgType};
pub use ship::{CustomModifiers, GearSlot, Ship, ShipState};

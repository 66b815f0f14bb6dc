use thiserror::Error;

/// Failures while reading a master data file.
#[derive(Debug, Error)]
pub enum MasterDataError {
    #[error("unable to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse json '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to parse yaml '{path}': {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported data format for '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    #[error("duplicate ship id {0}")]
    DuplicateShipId(u16),

    #[error("duplicate gear id {0}")]
    DuplicateGearId(u16),
}

/// Entity construction failures. Construction is the only place that fails loudly;
/// everything downstream reports "cannot be computed" as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("unknown gear id {0}")]
    UnknownGear(u16),

    #[error("unknown ship id {0}")]
    UnknownShip(u16),

    #[error("ship {ship_id} has {count} gear slots, at most {max} allowed")]
    TooManySlots { ship_id: u16, count: usize, max: usize },

    #[error("air squadron has {count} slots, at most {max} allowed")]
    TooManySquadronSlots { count: usize, max: usize },

    #[error("fleet has {count} ships, at most {max} allowed")]
    TooManyShips { count: usize, max: usize },

    #[error("org has {count} fleets, at most {max} allowed")]
    TooManyFleets { count: usize, max: usize },

    #[error("org has {count} air squadrons, at most {max} allowed")]
    TooManyAirSquadrons { count: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("simulation cancelled after {completed} of {requested} iterations")]
    Cancelled { completed: u32, requested: u32 },

    #[error("worker pool error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("ship {ship_id} has no resolved armor or hp")]
    UnknownDefense { ship_id: u16 },

    #[error("attacker {attacker} has {found} planned attacks for {expected} targets")]
    ShapeMismatch {
        attacker: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Factory(#[from] FactoryError),
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpeedRank {
    Land,
    Slow,
    Fast,
    FastPlus,
    Fastest,
}

impl SpeedRank {
    /// Game speed value: 5 slow, 10 fast, 15 fast+, 20 fastest.
    pub fn from_speed(speed: i32) -> Self {
        match speed {
            s if s <= 0 => Self::Land,
            s if s < 10 => Self::Slow,
            s if s < 15 => Self::Fast,
            s if s < 20 => Self::FastPlus,
            _ => Self::Fastest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RangeCategory {
    None,
    Short,
    Medium,
    Long,
    VeryLong,
}

impl RangeCategory {
    pub fn from_value(range: i32) -> Self {
        match range {
            r if r <= 0 => Self::None,
            1 => Self::Short,
            2 => Self::Medium,
            3 => Self::Long,
            _ => Self::VeryLong,
        }
    }
}

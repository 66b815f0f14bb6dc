//! Cut-in definitions and their precedence tables.
//!
//! The order of `day`/`night` entries is the order in which the game rolls
//! cut-ins. It is data, not logic: a master data file may replace the built-in
//! tables, and `version` identifies which table produced a result.

use serde::{Deserialize, Serialize};

pub const BUILTIN_CUTIN_TABLE_VERSION: &str = "builtin-2024.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayCutin {
    DoubleAttack,
    MainSec,
    MainRadar,
    MainAp,
    MainMain,
    Fba,
    Bba,
    Ba,
    Zuiun,
    AirSea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NightCutin {
    DoubleAttack,
    MainMainMain,
    MainMainSec,
    TorpMain,
    TorpTorp,
    SubRadarTorp,
    SubTorpTorp,
    TorpRadar,
    TorpLookout,
    TorpTorpLookout,
    TorpDrum,
    CvCi1_25,
    CvCi1_20,
    CvCi1_18,
}

/// Modifier parameters a cut-in applies to the attack it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutinDef {
    pub power_mod: f64,
    #[serde(default)]
    pub power_adder: f64,
    pub accuracy_mod: f64,
    #[serde(default)]
    pub accuracy_adder: f64,
    pub hits: u8,
    /// `None` means the style has no trigger roll of its own (it takes the residual).
    pub chance_denom: Option<u32>,
}

impl CutinDef {
    pub const fn new(power_mod: f64, accuracy_mod: f64, hits: u8, chance_denom: Option<u32>) -> Self {
        Self {
            power_mod,
            power_adder: 0.0,
            accuracy_mod,
            accuracy_adder: 0.0,
            hits,
            chance_denom,
        }
    }
}

/// How probability mass is handed out while walking a precedence table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationRule {
    /// `allocated = min(remaining, chance)`: higher-priority styles use up
    /// mass before lower ones are looked at.
    #[default]
    Capped,
    /// `allocated = remaining * min(chance, 1)`: each style is rolled only if
    /// every higher-priority style failed its roll.
    SequentialRoll,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayCutinEntry {
    pub kind: DayCutin,
    pub def: CutinDef,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NightCutinEntry {
    pub kind: NightCutin,
    pub def: CutinDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutinTables {
    pub version: String,
    #[serde(default)]
    pub allocation: AllocationRule,
    pub day: Vec<DayCutinEntry>,
    pub night: Vec<NightCutinEntry>,
}

impl Default for CutinTables {
    fn default() -> Self {
        use DayCutin as D;
        use NightCutin as N;

        let day = vec![
            (D::Zuiun, CutinDef::new(1.35, 1.0, 1, Some(120))),
            (D::AirSea, CutinDef::new(1.3, 1.0, 1, Some(130))),
            (D::MainMain, CutinDef::new(1.5, 1.2, 1, Some(140))),
            (D::MainAp, CutinDef::new(1.3, 1.3, 1, Some(130))),
            (D::MainRadar, CutinDef::new(1.2, 1.5, 1, Some(130))),
            (D::MainSec, CutinDef::new(1.1, 1.3, 1, Some(120))),
            (D::DoubleAttack, CutinDef::new(1.2, 1.1, 2, Some(130))),
            (D::Fba, CutinDef::new(1.25, 1.2, 1, Some(125))),
            (D::Bba, CutinDef::new(1.2, 1.2, 1, Some(140))),
            (D::Ba, CutinDef::new(1.15, 1.2, 1, Some(155))),
        ]
        .into_iter()
        .map(|(kind, def)| DayCutinEntry { kind, def })
        .collect();

        let night = vec![
            (N::CvCi1_25, CutinDef::new(1.25, 1.0, 1, Some(105))),
            (N::CvCi1_20, CutinDef::new(1.2, 1.0, 1, Some(115))),
            (N::CvCi1_18, CutinDef::new(1.18, 1.0, 1, Some(125))),
            (N::SubRadarTorp, CutinDef::new(1.75, 1.0, 2, Some(105))),
            (N::SubTorpTorp, CutinDef::new(1.6, 1.0, 2, Some(110))),
            (N::MainMainMain, CutinDef::new(2.0, 2.0, 1, Some(140))),
            (N::MainMainSec, CutinDef::new(1.75, 1.5, 1, Some(130))),
            (N::TorpRadar, CutinDef::new(1.3, 1.0, 2, Some(130))),
            (N::TorpLookout, CutinDef::new(1.2, 1.0, 2, Some(150))),
            (N::TorpTorpLookout, CutinDef::new(1.5, 1.0, 2, Some(122))),
            (N::TorpDrum, CutinDef::new(1.3, 1.0, 2, Some(122))),
            (N::TorpTorp, CutinDef::new(1.5, 1.65, 2, Some(122))),
            (N::TorpMain, CutinDef::new(1.3, 1.5, 2, Some(115))),
            (N::DoubleAttack, CutinDef::new(1.2, 1.1, 2, None)),
        ]
        .into_iter()
        .map(|(kind, def)| NightCutinEntry { kind, def })
        .collect();

        Self {
            version: BUILTIN_CUTIN_TABLE_VERSION.to_string(),
            allocation: AllocationRule::Capped,
            day,
            night,
        }
    }
}

impl CutinTables {
    pub fn night_def(&self, kind: NightCutin) -> Option<&CutinDef> {
        self.night
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| &entry.def)
    }

    /// Position of a day cut-in in the precedence table (lower rolls first).
    pub fn day_priority(&self, kind: DayCutin) -> Option<usize> {
        self.day.iter().position(|entry| entry.kind == kind)
    }

    pub fn night_priority(&self, kind: NightCutin) -> Option<usize> {
        self.night.iter().position(|entry| entry.kind == kind)
    }
}

//! Consistency checks over a loaded master dataset. Loading only rejects what
//! cannot be represented (duplicate ids); everything else is reported here.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::data::cutin::CutinTables;
use crate::data::master::MasterData;
use crate::data::ship::{MasterShip, StatInterval};

pub const MAX_SHIP_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

pub fn validate_master_data(master: &MasterData) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut ships: Vec<_> = master.ships().collect();
    ships.sort_by_key(|ship| ship.ship_id);
    for ship in ships {
        validate_ship(&mut report, ship);
    }

    for (index, rule) in master.ibonuses.iter().enumerate() {
        for gear_id in rule.referenced_gear_ids() {
            if master.gear(gear_id).is_none() {
                report.push(
                    ValidationSeverity::Warning,
                    format!("ibonuses[{index}]"),
                    format!("refers to unknown gear {gear_id}"),
                );
            }
        }
        if rule.bonus.is_zero() {
            report.push(
                ValidationSeverity::Info,
                format!("ibonuses[{index}]"),
                "bonus is all zero",
            );
        }
    }

    let mut seen_aaci = HashSet::new();
    for (index, def) in master.anti_air_cutins.iter().enumerate() {
        let context = format!("anti_air_cutins[{index}] id={}", def.id);
        if !seen_aaci.insert(def.id) {
            report.push(ValidationSeverity::Error, context.clone(), "duplicate id");
        }
        if !(0.0..=1.0).contains(&def.chance) {
            report.push(
                ValidationSeverity::Error,
                context.clone(),
                format!("chance {} outside [0, 1]", def.chance),
            );
        }
        if def.requirements.is_empty() {
            report.push(ValidationSeverity::Warning, context, "no gear requirements");
        }
    }

    validate_cutin_tables(&mut report, &master.cutin_tables);
    report
}

fn validate_ship(report: &mut ValidationReport, ship: &MasterShip) {
    let context = format!("ship {}", ship.ship_id);
    if ship.slots.len() > MAX_SHIP_SLOTS {
        report.push(
            ValidationSeverity::Error,
            context.clone(),
            format!("{} slots, at most {MAX_SHIP_SLOTS}", ship.slots.len()),
        );
    }
    if ship.slots.iter().any(|&size| size < 0) {
        report.push(ValidationSeverity::Error, context.clone(), "negative slot size");
    }

    let intervals = [
        ("max_hp", ship.max_hp),
        ("firepower", ship.firepower),
        ("torpedo", ship.torpedo),
        ("anti_air", ship.anti_air),
        ("armor", ship.armor),
        ("evasion", ship.evasion),
        ("asw", ship.asw),
        ("los", ship.los),
        ("luck", ship.luck),
    ];
    for (name, interval) in intervals {
        if let StatInterval(Some(min), Some(max)) = interval {
            if min > max {
                report.push(
                    ValidationSeverity::Error,
                    format!("{context}.{name}"),
                    format!("interval [{min}, {max}] is reversed"),
                );
            }
        }
    }

    if ship.max_hp.left().is_none() {
        report.push(
            ValidationSeverity::Warning,
            context.clone(),
            "missing max_hp; damage state analysis will be unavailable",
        );
    }
    if ship.is_abyssal() && ship.armor.left().is_none() {
        report.push(
            ValidationSeverity::Info,
            context,
            "abyssal ship without armor; attacks against it cannot be computed",
        );
    }
}

fn validate_cutin_tables(report: &mut ValidationReport, tables: &CutinTables) {
    if tables.version.trim().is_empty() {
        report.push(ValidationSeverity::Warning, "cutin_tables", "empty version");
    }

    let mut seen_day = HashSet::new();
    for (index, entry) in tables.day.iter().enumerate() {
        let context = format!("cutin_tables.day[{index}] {:?}", entry.kind);
        if !seen_day.insert(entry.kind) {
            report.push(ValidationSeverity::Error, context.clone(), "duplicate kind");
        }
        if entry.def.chance_denom == Some(0) {
            report.push(ValidationSeverity::Error, context, "chance_denom is zero");
        }
    }

    let mut seen_night = HashSet::new();
    for (index, entry) in tables.night.iter().enumerate() {
        let context = format!("cutin_tables.night[{index}] {:?}", entry.kind);
        if !seen_night.insert(entry.kind) {
            report.push(ValidationSeverity::Error, context.clone(), "duplicate kind");
        }
        if entry.def.chance_denom == Some(0) {
            report.push(ValidationSeverity::Error, context, "chance_denom is zero");
        }
    }
}

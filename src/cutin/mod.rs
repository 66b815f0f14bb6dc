//! Cut-in selection: which special attacks an attacker can use and how often.

pub mod day;
pub mod lottery;
pub mod night;

use crate::combat::style::AttackStyle;
use crate::combat::types::WarfareContext;
use crate::data::cutin::CutinTables;
use crate::entity::ship::Ship;

pub use day::{available_day_cutins, observation_term};
pub use lottery::{allocate, sequential_rates, CutinCandidate, StyleRate, StyleSelection};
pub use night::{available_night_cutins, night_cutin_term};

/// Day cut-in styles the attacker can use, in precedence-table order.
pub fn day_candidates(attacker: &Ship, ctx: &WarfareContext, tables: &CutinTables) -> Vec<AttackStyle> {
    let kinds = available_day_cutins(attacker, ctx.air_state);
    tables
        .day
        .iter()
        .filter(|entry| kinds.contains(&entry.kind))
        .map(|entry| AttackStyle::DayCutin {
            cutin: entry.kind,
            def: entry.def,
        })
        .collect()
}

pub fn night_candidates(attacker: &Ship, tables: &CutinTables) -> Vec<AttackStyle> {
    let kinds = available_night_cutins(attacker);
    tables
        .night
        .iter()
        .filter(|entry| kinds.contains(&entry.kind))
        .map(|entry| AttackStyle::NightCutin {
            cutin: entry.kind,
            def: entry.def,
        })
        .collect()
}

fn priority(style: &AttackStyle, tables: &CutinTables) -> Option<usize> {
    match style {
        AttackStyle::DayCutin { cutin, .. } => tables.day_priority(*cutin),
        AttackStyle::NightCutin { cutin, .. } => tables.night_priority(*cutin),
        AttackStyle::Normal | AttackStyle::Asw | AttackStyle::Torpedo => None,
    }
}

/// Trigger rates for `candidates`, rolled in table precedence order.
///
/// Day cut-ins roll `observation_term / denom`, night cut-ins
/// `night_cutin_term / denom`; a style without a denominator takes what is
/// left. Plain styles are not rolled and share the residual. `None` when a
/// term cannot be computed (unknown luck, no air control for day cut-ins).
pub fn select_styles(
    attacker: &Ship,
    ctx: &WarfareContext,
    candidates: &[AttackStyle],
    tables: &CutinTables,
) -> Option<StyleSelection> {
    let mut ordered: Vec<(usize, &AttackStyle)> = candidates
        .iter()
        .filter_map(|style| priority(style, tables).map(|rank| (rank, style)))
        .collect();
    ordered.sort_by_key(|(rank, _)| *rank);
    if ordered.is_empty() {
        return Some(StyleSelection::default());
    }

    let mut rolled = Vec::with_capacity(ordered.len());
    for (_, style) in ordered {
        let term = match style {
            AttackStyle::DayCutin { .. } => {
                observation_term(attacker, &ctx.attacker_env, ctx.air_state)?
            }
            _ => night_cutin_term(attacker, &ctx.attacker_env, &ctx.night)?,
        };
        let chance = style
            .def()
            .and_then(|def| def.chance_denom)
            .map(|denom| term / f64::from(denom.max(1)));
        rolled.push(CutinCandidate {
            style: *style,
            chance,
        });
    }

    let selection = allocate(&rolled, tables.allocation);
    tracing::debug!(
        table = %tables.version,
        styles = selection.rates.len(),
        residual = selection.residual,
        "cut-in rates selected"
    );
    Some(selection)
}

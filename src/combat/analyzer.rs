//! `analyze`: every phase one attacker can act in against one target.

use std::sync::OnceLock;

use crate::combat::damage::DefenseParams;
use crate::combat::report::{defense_params, ActionReport, AttackParams, AttackReport, WarfareInfo};
use crate::combat::style::AttackStyle;
use crate::combat::types::WarfareContext;
use crate::combat::{asw, night, shelling, support, torpedo};
use crate::cutin::{day_candidates, night_candidates, select_styles};
use crate::data::cutin::CutinTables;
use crate::entity::ship::Ship;

pub fn builtin_tables() -> &'static CutinTables {
    static TABLES: OnceLock<CutinTables> = OnceLock::new();
    TABLES.get_or_init(CutinTables::default)
}

/// Warfare analysis against a fixed cut-in precedence table.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    tables: &'a CutinTables,
}

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new(builtin_tables())
    }
}

impl<'a> Analyzer<'a> {
    pub fn new(tables: &'a CutinTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &CutinTables {
        self.tables
    }

    pub fn analyze(&self, ctx: &WarfareContext, attacker: &Ship, target: &Ship) -> WarfareInfo {
        let defense = defense_params(target, &ctx.target_env);
        let defense = defense.as_ref();

        let info = WarfareInfo {
            day: self.day(ctx, attacker, target, defense),
            closing_torpedo: if torpedo::can_attack(attacker, target) {
                single(AttackStyle::Torpedo, torpedo::params(ctx, attacker, target), defense)
            } else {
                ActionReport::inactive()
            },
            night: self.night(ctx, attacker, target, defense),
            opening_asw: if asw::can_opening_attack(attacker, target) {
                single(AttackStyle::Asw, asw::params(ctx, attacker, target), defense)
            } else {
                ActionReport::inactive()
            },
            support_shelling: if support::can_attack(attacker, target) {
                single(AttackStyle::Normal, support::params(ctx, attacker, target), defense)
            } else {
                ActionReport::inactive()
            },
        };
        tracing::debug!(
            attacker = attacker.ship_id(),
            target = target.ship_id(),
            day = info.day.is_active,
            torpedo = info.closing_torpedo.is_active,
            night = info.night.is_active,
            "warfare analysed"
        );
        info
    }

    fn day(
        &self,
        ctx: &WarfareContext,
        attacker: &Ship,
        target: &Ship,
        defense: Option<&DefenseParams>,
    ) -> ActionReport {
        if target.is_submarine() {
            return if asw::can_attack(attacker, target) {
                single(AttackStyle::Asw, asw::params(ctx, attacker, target), defense)
            } else {
                ActionReport::inactive()
            };
        }
        if !shelling::can_attack(attacker) {
            return ActionReport::inactive();
        }
        let candidates = day_candidates(attacker, ctx, self.tables);
        self.styled(ctx, attacker, &candidates, defense, |style| {
            shelling::params(ctx, attacker, target, style)
        })
    }

    fn night(
        &self,
        ctx: &WarfareContext,
        attacker: &Ship,
        target: &Ship,
        defense: Option<&DefenseParams>,
    ) -> ActionReport {
        if target.is_submarine() {
            return if asw::can_night_attack(attacker, target) {
                single(AttackStyle::Asw, asw::params(ctx, attacker, target), defense)
            } else {
                ActionReport::inactive()
            };
        }
        if !night::can_attack(attacker, target) {
            return ActionReport::inactive();
        }
        let candidates = night_candidates(attacker, self.tables);
        self.styled(ctx, attacker, &candidates, defense, |style| {
            night::params(ctx, attacker, target, style)
        })
    }

    /// Cut-in styles at their selected rates, then the plain attack with the residual.
    fn styled<F>(
        &self,
        ctx: &WarfareContext,
        attacker: &Ship,
        candidates: &[AttackStyle],
        defense: Option<&DefenseParams>,
        params: F,
    ) -> ActionReport
    where
        F: Fn(&AttackStyle) -> AttackParams,
    {
        let normal = AttackStyle::Normal;
        let Some(selection) = select_styles(attacker, ctx, candidates, self.tables) else {
            let attacks = candidates
                .iter()
                .chain(std::iter::once(&normal))
                .map(|style| AttackReport::new(*style, None, &params(style), defense))
                .collect();
            return ActionReport::new(attacks);
        };

        let mut attacks: Vec<AttackReport> = selection
            .rates
            .iter()
            .filter(|entry| entry.rate > 0.0)
            .map(|entry| {
                AttackReport::new(entry.style, Some(entry.rate), &params(&entry.style), defense)
            })
            .collect();
        if selection.residual > 0.0 {
            attacks.push(AttackReport::new(
                normal,
                Some(selection.residual),
                &params(&normal),
                defense,
            ));
        }
        ActionReport::new(attacks)
    }
}

fn single(style: AttackStyle, params: AttackParams, defense: Option<&DefenseParams>) -> ActionReport {
    ActionReport::new(vec![AttackReport::new(style, Some(1.0), &params, defense)])
}

/// `analyze` with the built-in cut-in tables.
pub fn analyze(ctx: &WarfareContext, attacker: &Ship, target: &Ship) -> WarfareInfo {
    Analyzer::default().analyze(ctx, attacker, target)
}

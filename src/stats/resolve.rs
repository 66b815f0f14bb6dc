//! Template stat at a given level.
//!
//! Growth stats (evasion, ASW, LoS) interpolate linearly between the interval
//! bounds; the others start at the left bound and can be raised by the ship's
//! modifier up to the right bound. Abyssal ships have no growth.

use crate::data::ship::{MasterShip, StatInterval};
use crate::stats::stacking::StatKind;

pub const MIN_LEVEL: u16 = 1;
pub const MAX_LEVEL: u16 = 185;
pub const MARRIAGE_LEVEL: u16 = 100;

pub fn clamp_level(level: u16) -> u16 {
    level.clamp(MIN_LEVEL, MAX_LEVEL)
}

pub fn is_growth_stat(kind: StatKind) -> bool {
    matches!(kind, StatKind::Evasion | StatKind::Asw | StatKind::Los)
}

fn interval_for(master: &MasterShip, kind: StatKind) -> Option<StatInterval> {
    let interval = match kind {
        StatKind::MaxHp => master.max_hp,
        StatKind::Firepower => master.firepower,
        StatKind::Torpedo => master.torpedo,
        StatKind::AntiAir => master.anti_air,
        StatKind::Armor => master.armor,
        StatKind::Evasion => master.evasion,
        StatKind::Asw => master.asw,
        StatKind::Los => master.los,
        StatKind::Luck => master.luck,
        StatKind::Accuracy | StatKind::Bombing | StatKind::Speed | StatKind::Range => {
            return None
        }
    };
    Some(interval)
}

/// `floor((max - min) * level / 99) + min`
pub fn interpolate(min: i32, max: i32, level: u16) -> i32 {
    let level = i32::from(clamp_level(level));
    (max - min) * level / 99 + min
}

/// Max HP bonus from marriage (level 100 and above), by base HP.
pub fn marriage_hp_bonus(left: i32) -> i32 {
    match left {
        i32::MIN..=29 => 4,
        30..=39 => 5,
        40..=49 => 6,
        50..=69 => 7,
        70..=90 => 8,
        _ => 9,
    }
}

/// Naked stat at `level` with the ship's own modifier applied. `None` when the
/// template does not know the stat.
pub fn naked_stat(master: &MasterShip, kind: StatKind, level: u16, modifier: i32) -> Option<i32> {
    let level = clamp_level(level);
    let Some(interval) = interval_for(master, kind) else {
        return match kind {
            StatKind::Accuracy | StatKind::Bombing => Some(modifier),
            StatKind::Speed => Some(i32::from(master.speed) + modifier),
            StatKind::Range => Some(i32::from(master.range) + modifier),
            _ => None,
        };
    };

    if master.is_abyssal() {
        return interval.left().map(|left| left + modifier);
    }

    if is_growth_stat(kind) {
        let value = match (interval.left(), interval.right()) {
            (Some(min), Some(max)) => interpolate(min, max, level),
            (Some(min), None) => min,
            _ => return None,
        };
        return Some(value + modifier);
    }

    let left = interval.left()?;
    let base = if kind == StatKind::MaxHp && level >= MARRIAGE_LEVEL {
        left + marriage_hp_bonus(left)
    } else {
        left
    };
    let value = base + modifier;
    Some(match interval.right() {
        Some(max) => value.min(max),
        None => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> MasterShip {
        MasterShip {
            ship_id: 100,
            max_hp: StatInterval::new(32, 40),
            firepower: StatInterval::new(10, 49),
            asw: StatInterval::new(24, 59),
            evasion: StatInterval::new(43, 89),
            ..Default::default()
        }
    }

    #[test]
    fn growth_stats_interpolate_by_level() {
        let ship = ship();
        assert_eq!(naked_stat(&ship, StatKind::Asw, 1, 0), Some(24));
        assert_eq!(naked_stat(&ship, StatKind::Asw, 99, 0), Some(59));
        assert_eq!(naked_stat(&ship, StatKind::Evasion, 50, 0), Some(66));
    }

    #[test]
    fn level_is_clamped() {
        let ship = ship();
        assert_eq!(
            naked_stat(&ship, StatKind::Asw, 999, 0),
            naked_stat(&ship, StatKind::Asw, MAX_LEVEL, 0)
        );
        assert_eq!(
            naked_stat(&ship, StatKind::Asw, 0, 0),
            naked_stat(&ship, StatKind::Asw, MIN_LEVEL, 0)
        );
    }

    #[test]
    fn naked_stats_never_drop_with_level() {
        let ship = ship();
        for kind in [StatKind::MaxHp, StatKind::Asw, StatKind::Evasion] {
            let mut previous = 0;
            for level in MIN_LEVEL..=MAX_LEVEL {
                let value = naked_stat(&ship, kind, level, 0).unwrap_or(0);
                assert!(value >= previous, "{kind:?} dropped at level {level}");
                previous = value;
            }
        }
    }

    #[test]
    fn modifier_is_capped_at_right_bound() {
        let ship = ship();
        assert_eq!(naked_stat(&ship, StatKind::Firepower, 99, 100), Some(49));
        assert_eq!(naked_stat(&ship, StatKind::Firepower, 99, 5), Some(15));
    }

    #[test]
    fn marriage_raises_hp_within_max() {
        let ship = ship();
        assert_eq!(naked_stat(&ship, StatKind::MaxHp, 99, 0), Some(32));
        assert_eq!(naked_stat(&ship, StatKind::MaxHp, 100, 0), Some(37));
        assert_eq!(naked_stat(&ship, StatKind::MaxHp, 100, 5), Some(40));
    }

    #[test]
    fn abyssal_ships_use_left_bound() {
        let ship = MasterShip {
            ship_id: 1501,
            asw: StatInterval(Some(7), None),
            armor: StatInterval(None, None),
            ..Default::default()
        };
        assert_eq!(naked_stat(&ship, StatKind::Asw, 150, 0), Some(7));
        assert_eq!(naked_stat(&ship, StatKind::Armor, 1, 0), None);
    }
}

//! Night cut-in eligibility and the night cut-in term.

use crate::combat::night::is_night_carrier;
use crate::combat::types::{DamageState, NightSituation, ShipEnvironment};
use crate::data::cutin::NightCutin;
use crate::data::gear::{GearAttr, GearCategory};
use crate::data::ship::ShipType;
use crate::entity::ship::Ship;

const FLAGSHIP_BONUS: f64 = 15.0;
const CHUUHA_BONUS: f64 = 18.0;
const OWN_SEARCHLIGHT_BONUS: f64 = 7.0;
const ENEMY_SEARCHLIGHT_PENALTY: f64 = 5.0;
const OWN_STARSHELL_BONUS: f64 = 4.0;
const ENEMY_STARSHELL_PENALTY: f64 = 10.0;
const LOOKOUTS_BONUS: f64 = 5.0;

struct NightLoadout {
    main_guns: usize,
    secondary_guns: usize,
    torpedoes: usize,
    late_model_torpedoes: usize,
    submarine_radars: usize,
    surface_radars: usize,
    lookouts: usize,
    drums: usize,
    night_fighters: usize,
    night_attackers: usize,
    semi_night_planes: usize,
}

impl NightLoadout {
    fn of(ship: &Ship) -> Self {
        Self {
            main_guns: ship.count_attr(GearAttr::MainGun),
            secondary_guns: ship.count_category(GearCategory::SecondaryGun),
            torpedoes: ship.count_category(GearCategory::Torpedo)
                + ship.count_category(GearCategory::SubmarineTorpedo),
            late_model_torpedoes: ship.count_attr(GearAttr::LateModelTorpedo),
            submarine_radars: ship.count_attr(GearAttr::SubmarineRadar),
            surface_radars: ship.count_attr(GearAttr::SurfaceRadar),
            lookouts: ship.count_attr(GearAttr::SkilledLookouts),
            drums: ship.count_attr(GearAttr::Drum),
            night_fighters: ship.count_planes(|gear| gear.has_attr(GearAttr::NightFighter)),
            night_attackers: ship.count_planes(|gear| gear.has_attr(GearAttr::NightAttacker)),
            semi_night_planes: ship.count_planes(|gear| gear.has_attr(GearAttr::SemiNightPlane)),
        }
    }
}

/// Night cut-ins (and the night double attack) the loadout supports, unordered.
pub fn available_night_cutins(attacker: &Ship) -> Vec<NightCutin> {
    if attacker.damage_state() <= DamageState::Taiha {
        return Vec::new();
    }
    let g = NightLoadout::of(attacker);
    let mut kinds = Vec::new();

    if is_night_carrier(attacker) {
        let night_planes = g.night_fighters + g.night_attackers;
        if g.night_fighters >= 2 && g.night_attackers >= 1 {
            kinds.push(NightCutin::CvCi1_25);
        }
        if g.night_fighters >= 1 && g.night_attackers >= 1 {
            kinds.push(NightCutin::CvCi1_20);
        }
        if night_planes >= 1 && night_planes + g.semi_night_planes >= 2 {
            kinds.push(NightCutin::CvCi1_18);
        }
        return kinds;
    }

    if attacker.is_submarine() {
        if g.late_model_torpedoes >= 1 && g.submarine_radars >= 1 {
            kinds.push(NightCutin::SubRadarTorp);
        }
        if g.late_model_torpedoes >= 2 {
            kinds.push(NightCutin::SubTorpTorp);
        }
    }

    let destroyer = attacker.ship_type() == ShipType::DD;
    if destroyer {
        if g.main_guns >= 1 && g.torpedoes >= 1 && g.surface_radars >= 1 {
            kinds.push(NightCutin::TorpRadar);
        }
        if g.torpedoes >= 1 && g.surface_radars >= 1 && g.lookouts >= 1 {
            kinds.push(NightCutin::TorpLookout);
        }
        if g.torpedoes >= 2 && g.lookouts >= 1 {
            kinds.push(NightCutin::TorpTorpLookout);
        }
        if g.torpedoes >= 1 && g.drums >= 1 && g.surface_radars >= 1 {
            kinds.push(NightCutin::TorpDrum);
        }
    }

    if g.main_guns >= 3 {
        kinds.push(NightCutin::MainMainMain);
    }
    if g.main_guns >= 2 && g.secondary_guns >= 1 {
        kinds.push(NightCutin::MainMainSec);
    }
    if g.torpedoes >= 2 {
        kinds.push(NightCutin::TorpTorp);
    }
    if g.main_guns >= 1 && g.torpedoes >= 1 {
        kinds.push(NightCutin::TorpMain);
    }
    if g.main_guns + g.secondary_guns >= 2 {
        kinds.push(NightCutin::DoubleAttack);
    }
    kinds
}

/// `floor(15 + luck + 0.75 * sqrt(level))` below luck 50,
/// `floor(65 + sqrt(luck - 50) + 0.8 * sqrt(level))` from 50, plus flagship,
/// Chuuha, searchlight, star shell and lookout terms.
pub fn night_cutin_term(attacker: &Ship, env: &ShipEnvironment, night: &NightSituation) -> Option<f64> {
    let luck = attacker.luck()?;
    let level = f64::from(attacker.level).sqrt();
    let base = if luck < 50 {
        (15.0 + f64::from(luck) + 0.75 * level).floor()
    } else {
        (65.0 + f64::from(luck - 50).sqrt() + 0.8 * level).floor()
    };

    let mut term = base;
    if env.is_flagship() {
        term += FLAGSHIP_BONUS;
    }
    if attacker.damage_state() == DamageState::Chuuha {
        term += CHUUHA_BONUS;
    }
    if night.attacker.searchlight {
        term += OWN_SEARCHLIGHT_BONUS;
    }
    if night.target.searchlight {
        term -= ENEMY_SEARCHLIGHT_PENALTY;
    }
    if night.attacker.starshell {
        term += OWN_STARSHELL_BONUS;
    }
    if night.target.starshell {
        term -= ENEMY_STARSHELL_PENALTY;
    }
    if attacker.has_attr(GearAttr::SkilledLookouts) {
        term += LOOKOUTS_BONUS;
    }
    Some(term.max(0.0))
}

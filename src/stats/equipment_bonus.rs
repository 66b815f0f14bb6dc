use crate::data::gear::MasterGear;
use crate::data::ibonus::{EquipmentBonusRule, StatBonus};
use crate::data::ship::MasterShip;

/// Sum of every rule that applies to this ship and loadout.
pub fn evaluate_equipment_bonuses(
    rules: &[EquipmentBonusRule],
    ship: &MasterShip,
    gears: &[(&MasterGear, u8)],
) -> StatBonus {
    let total = rules
        .iter()
        .filter_map(|rule| rule.bonus_for(ship, gears))
        .fold(StatBonus::default(), |acc, bonus| acc + bonus);
    if !total.is_zero() {
        tracing::debug!(ship_id = ship.ship_id, ?total, "equipment bonus applied");
    }
    total
}

//! CSV export of simulator results.

use std::io::Write;

use crate::combat::types::DamageState;
use crate::simulator::SimulatorResult;

pub fn write_sunk_csv<W: Write>(result: &SimulatorResult, writer: W) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["count", "rate", "cumulative_rate"])?;
    for entry in &result.sunk_vec {
        out.write_record([
            entry.count.to_string(),
            entry.rate.to_string(),
            entry.cumulative_rate.to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// One row per target: damage-state rates in `DamageState::ALL` order, then average hp.
pub fn write_items_csv<W: Write>(result: &SimulatorResult, writer: W) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    let mut header = vec!["index".to_string(), "ship_id".to_string()];
    header.extend(DamageState::ALL.iter().map(|state| format!("{state:?}").to_lowercase()));
    header.push("average_hp".to_string());
    out.write_record(&header)?;

    for item in &result.items {
        let mut row = vec![item.index.to_string(), item.ship_id.to_string()];
        row.extend(
            DamageState::ALL
                .iter()
                .map(|&state| item.damage_states.get(state).to_string()),
        );
        row.push(item.average_hp.to_string());
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

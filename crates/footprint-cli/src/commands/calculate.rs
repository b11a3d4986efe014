// crates/footprint-cli/src/commands/calculate.rs

use anyhow::Result;
use comfy_table::Table;

use footprint_core::calc::{
    band_note, build_tips, classify_risk, compute_footprint, scale_for_timeframe,
};
use footprint_core::config::Settings;
use footprint_core::history::{JsonHistoryStore, HISTORY_CAPACITY};
use footprint_core::session::FootprintSession;
use footprint_core::types::{Measurements, Timeframe};

pub fn handle_calculate_command(measurements: Measurements, timeframe: Timeframe) -> Result<()> {
    let result = compute_footprint(&measurements)?;
    let scaled = scale_for_timeframe(&result, timeframe);
    let band = classify_risk(result.total);

    let mut table = Table::new();
    table.set_header(vec![
        "Category".to_string(),
        format!("kg CO2 ({})", timeframe),
    ]);
    for (category, value) in scaled.parts.entries() {
        table.add_row(vec![category.to_string(), format!("{:.2}", value)]);
    }
    println!("{table}");

    println!();
    println!(
        "Total ({}): {:.2} kg CO2 ({})",
        timeframe, scaled.total, band
    );
    println!("{}", band_note(band));
    println!();
    println!("Tips:");
    for tip in build_tips(&result) {
        println!("  - {tip}");
    }
    Ok(())
}

pub fn handle_save_command(measurements: Measurements, settings: &Settings) -> Result<()> {
    let store = JsonHistoryStore::new(&settings.history_path);
    let mut session = FootprintSession::new(store);
    let entries = session.save(measurements)?;
    println!(
        "✅ Saved. History holds {} of {} entries.",
        entries.len(),
        HISTORY_CAPACITY
    );
    Ok(())
}

// crates/footprint-cli/src/commands/report.rs

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use footprint_core::advice::AdviceClient;
use footprint_core::chart::ChartRenderer;
use footprint_core::config::Settings;
use footprint_core::error::FootprintError;
use footprint_core::history::JsonHistoryStore;
use footprint_core::session::FootprintSession;
use footprint_core::types::{Measurements, Timeframe};

pub async fn handle_report_command(
    measurements: Measurements,
    timeframe: Timeframe,
    out: &Path,
    with_advice: bool,
    settings: &Settings,
) -> Result<()> {
    let store = JsonHistoryStore::new(&settings.history_path);
    let mut session = FootprintSession::new(store);
    session.compute(measurements)?;

    let advice = if with_advice {
        let client = AdviceClient::new(&settings.advice_url, settings.advice_timeout())?;
        println!("🤖 Generating advice...");
        match session.request_advice(&client).await {
            Ok(text) => text,
            Err(err @ (FootprintError::AdviceTransport(_) | FootprintError::AdviceResponse(_))) => {
                eprintln!("🤖 Error getting advice: {err}");
                None
            }
            Err(err) => return Err(err.into()),
        }
    } else {
        None
    };

    // The chart shows the same timeframe the report displays.
    let scaled = session.scaled(timeframe)?;
    let chart = ChartRenderer::default().render(&scaled.parts)?;

    let bytes = session.export_report(timeframe, advice, Some(&chart))?;
    debug!(bytes = bytes.len(), "report rendered");
    std::fs::write(out, &bytes)
        .with_context(|| format!("failed to write report to {}", out.display()))?;
    println!("✅ Report written to {}", out.display());
    Ok(())
}

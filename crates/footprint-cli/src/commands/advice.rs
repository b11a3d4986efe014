// crates/footprint-cli/src/commands/advice.rs

use anyhow::Result;

use footprint_core::advice::AdviceClient;
use footprint_core::config::Settings;
use footprint_core::error::FootprintError;
use footprint_core::history::JsonHistoryStore;
use footprint_core::session::FootprintSession;
use footprint_core::types::Measurements;

pub async fn handle_advice_command(measurements: Measurements, settings: &Settings) -> Result<()> {
    let store = JsonHistoryStore::new(&settings.history_path);
    let mut session = FootprintSession::new(store);
    session.compute(measurements)?;

    let client = AdviceClient::new(&settings.advice_url, settings.advice_timeout())?;
    println!("🤖 Generating advice...");
    match session.request_advice(&client).await {
        Ok(Some(text)) => println!("🤖 {text}"),
        Ok(None) => {}
        Err(err @ (FootprintError::AdviceTransport(_) | FootprintError::AdviceResponse(_))) => {
            println!("🤖 Error getting advice: {err}");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

// crates/footprint-cli/src/commands/history.rs

use anyhow::Result;
use clap::Subcommand;
use comfy_table::Table;

use footprint_core::config::Settings;
use footprint_core::history::{HistoryStore, JsonHistoryStore};

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// List the saved calculations, newest first.
    List {
        /// Emit the raw history as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the saved history.
    Clear,
}

pub fn handle_history_command(command: HistoryCommands, settings: &Settings) -> Result<()> {
    let store = JsonHistoryStore::new(&settings.history_path);

    match command {
        HistoryCommands::List { json } => {
            let entries = store.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }
            if entries.is_empty() {
                println!("History is empty.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec!["#", "Recorded (UTC)", "Weekly total (kg CO2)"]);
            let count = entries.len();
            for (idx, entry) in entries.iter().enumerate() {
                table.add_row(vec![
                    format!("{}", count - idx),
                    entry.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                    format!("{:.2}", entry.total_weekly),
                ]);
            }
            println!("{table}");
            Ok(())
        }
        HistoryCommands::Clear => {
            store.clear()?;
            println!("✅ History cleared.");
            Ok(())
        }
    }
}

// crates/footprint-cli/src/main.rs

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::advice::handle_advice_command;
use commands::calculate::{handle_calculate_command, handle_save_command};
use commands::history::{handle_history_command, HistoryCommands};
use commands::report::handle_report_command;

use footprint_core::config::Settings;
use footprint_core::types::{Measurements, Timeframe};

/// A CLI for the carbon footprint estimator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML settings file (defaults to ./footprint.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute and display a footprint for the given measurements.
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,
        /// Display timeframe (week, month or year)
        #[arg(long, default_value = "week")]
        timeframe: Timeframe,
    },
    /// Compute a footprint and append it to the saved history.
    Save {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Inspect or clear the saved history.
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Request free-text advice from the configured advice endpoint.
    Advice {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Export a PDF report with the breakdown chart embedded.
    Report {
        #[command(flatten)]
        inputs: InputArgs,
        /// Display timeframe (week, month or year)
        #[arg(long, default_value = "week")]
        timeframe: Timeframe,
        /// Output file
        #[arg(long, default_value = footprint_core::report::REPORT_FILE_NAME)]
        out: PathBuf,
        /// Also request advice and include it in the report
        #[arg(long)]
        with_advice: bool,
    },
}

/// The five raw measurements, weekly basis.
#[derive(Args, Debug, Clone, Copy)]
struct InputArgs {
    /// Distance travelled (km)
    #[arg(long)]
    transportation: f64,
    /// Energy used (kWh)
    #[arg(long)]
    energy: f64,
    /// Meals eaten
    #[arg(long)]
    food: f64,
    /// Waste produced (kg)
    #[arg(long)]
    waste: f64,
    /// Items purchased
    #[arg(long)]
    purchases: f64,
}

impl From<InputArgs> for Measurements {
    fn from(args: InputArgs) -> Self {
        Measurements {
            transportation_km: args.transportation,
            energy_kwh: args.energy,
            food_meals: args.food,
            waste_kg: args.waste,
            purchases: args.purchases,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Calculate { inputs, timeframe } => {
            handle_calculate_command(inputs.into(), timeframe)
        }
        Commands::Save { inputs } => handle_save_command(inputs.into(), &settings),
        Commands::History { command } => handle_history_command(command, &settings),
        Commands::Advice { inputs } => handle_advice_command(inputs.into(), &settings).await,
        Commands::Report {
            inputs,
            timeframe,
            out,
            with_advice,
        } => handle_report_command(inputs.into(), timeframe, &out, with_advice, &settings).await,
    }
}

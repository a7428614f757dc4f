use anyhow::Result;
use caliber_core::track::Track;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "caliber")]
#[command(about = "Caliber - sales roleplay training arena", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive roleplay call against a scripted prospect
    Arena {
        /// Scenario track (b2b or b2c); prompted interactively when omitted
        #[arg(long)]
        track: Option<Track>,
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Generate a prospect profile from a free-text description
    Prospect {
        /// Description text; prompted interactively when omitted
        description: Vec<String>,
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Derive a scouting report for a final score
    Grade {
        /// Final score in [0, 100]
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        score: u8,
        /// Scenario track the call ran against
        #[arg(long, default_value = "b2b")]
        track: Track,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Arena { track, config } => commands::arena::run(track, config).await,
        Commands::Prospect { description, json } => commands::prospect::run(&description, json),
        Commands::Grade { score, track, json } => commands::grade::run(score, track, json),
    }
}

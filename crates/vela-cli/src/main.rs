//! Vela CLI — headless sheet simulation and config validation.

use clap::{Parser, Subcommand};

mod commands;
mod runner;
mod scenario;

#[derive(Parser)]
#[command(name = "vela")]
#[command(version, about = "Vela — deformable-sheet simulation engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation scenario headless.
    Simulate {
        /// Path to a run config (TOML). Defaults to the built-in
        /// hanging-sheet scenario.
        #[arg(short, long)]
        config: Option<String>,

        /// Export per-frame animation data to this JSON file.
        #[arg(short, long)]
        output: Option<String>,

        /// Write run metrics to this CSV file.
        #[arg(short, long)]
        metrics: Option<String>,
    },

    /// Validate a run config file.
    Validate {
        /// Path to a run config (TOML).
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            output,
            metrics,
        } => commands::simulate(config.as_deref(), output.as_deref(), metrics.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! debt-stats CLI
//!
//! Dataset statistics and evolution analysis for smart-contract
//! technical-debt measurements.

use anyhow::Result;
use clap::{Parser, Subcommand};
use debt_stats::commands::{
    display_version, execute_evolution, execute_stats, validate_evolution_args,
    validate_report_file, validate_stats_args, EvolutionArgs, StatsArgs,
};
use debt_stats::utils::config::{DEFAULT_CDF_FILENAME, DEFAULT_PLOT_WIDTH};
use env_logger::Env;
use std::path::PathBuf;

/// debt-stats - Dataset statistics for smart-contract debt measurements
#[derive(Parser, Debug)]
#[command(name = "debt-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute dataset statistics from a version-history CSV
    Stats {
        /// Path to the dataset CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON report (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Render the version-count CDF plot (optional path)
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_CDF_FILENAME)]
        plot: Option<PathBuf>,

        /// Plot title
        #[arg(long)]
        title: Option<String>,

        /// Plot width in pixels
        #[arg(long, default_value_t = DEFAULT_PLOT_WIDTH)]
        width: u32,
    },

    /// Analyze debt evolution across a snapshot directory tree
    Evolution {
        /// Root of the snapshot directory tree
        #[arg(short, long)]
        root: PathBuf,

        /// Output path for the JSON summary (optional)
        #[arg(short, long)]
        json: Option<PathBuf>,
    },

    /// Validate a stats report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Stats {
            input,
            json,
            plot,
            title,
            width,
        } => {
            let args = StatsArgs {
                input,
                output_json: json,
                output_plot: plot,
                plot_title: title,
                plot_width: width,
            };

            // Validate args first
            validate_stats_args(&args)?;

            // Execute stats
            execute_stats(args)?;
        }

        Commands::Evolution { root, json } => {
            let args = EvolutionArgs {
                root,
                output_json: json,
            };

            validate_evolution_args(&args)?;

            execute_evolution(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

//! Stats command implementation.
//!
//! The stats command:
//! 1. Aggregates the dataset CSV in one pass
//! 2. Derives the report (average, weighted median)
//! 3. Renders the CDF plot (if requested)
//! 4. Writes the JSON report (if requested)
//! 5. Prints the text report

use crate::aggregator::{aggregate_file, derive_report};
use crate::commands::models::StatsArgs;
use crate::output::{render_stats_report, write_report};
use crate::plot::{render_cdf, CdfConfig};
use crate::utils::config::{MAX_PLOT_WIDTH, MIN_PLOT_WIDTH};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the stats command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Stats command arguments
///
/// # Returns
/// Ok if the run succeeds, Err with context if any step fails
///
/// # Errors
/// * CSV read failures and malformed rows (fatal, no per-row recovery)
/// * Empty dataset (average undefined)
/// * Plot and file write errors
pub fn execute_stats(args: StatsArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting stats run for: {}", args.input.display());

    // Step 1: Aggregate the dataset
    info!("Step 1/4: Aggregating dataset...");
    let aggregates = aggregate_file(&args.input)
        .context("Failed to aggregate dataset")?;

    // Step 2: Derive statistics
    info!("Step 2/4: Deriving statistics...");
    let report = derive_report(&aggregates, &args.input)
        .context("Failed to derive statistics")?;

    // Step 3: Render CDF plot (if requested)
    if let Some(plot_path) = &args.output_plot {
        info!("Step 3/4: Rendering CDF plot...");

        let mut config = CdfConfig::new().with_width(args.plot_width);
        if let Some(title) = &args.plot_title {
            config = config.with_title(title.clone());
        }

        render_cdf(&aggregates.version_histogram, Some(&config), plot_path)
            .context("Failed to render CDF plot")?;

        info!("✓ Plot written to: {}", plot_path.display());
    } else {
        info!("Step 3/4: Skipping plot (not requested)");
    }

    // Step 4: Write JSON report (if requested)
    if let Some(json_path) = &args.output_json {
        info!("Step 4/4: Writing JSON report...");
        write_report(&report, json_path)
            .context("Failed to write JSON report")?;

        info!("✓ Report written to: {}", json_path.display());
    } else {
        info!("Step 4/4: Skipping JSON report (not requested)");
    }

    // The text report always goes to stdout
    print!("{}", render_stats_report(&report));

    let elapsed = start_time.elapsed();
    info!("Stats run completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate stats arguments
///
/// **Public** - called before execute_stats for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_stats_args(args: &StatsArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if let Some(plot_path) = &args.output_plot {
        if plot_path.as_os_str().is_empty() {
            anyhow::bail!("Plot path cannot be empty");
        }
    }

    if args.plot_width < MIN_PLOT_WIDTH {
        anyhow::bail!("Plot width is too small (min {})", MIN_PLOT_WIDTH);
    }

    if args.plot_width > MAX_PLOT_WIDTH {
        anyhow::bail!("Plot width is too large (max {})", MAX_PLOT_WIDTH);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_stats_args_valid() {
        let args = StatsArgs {
            input: PathBuf::from("total_debt.csv"),
            ..Default::default()
        };

        assert!(validate_stats_args(&args).is_ok());
    }

    #[test]
    fn test_validate_stats_args_empty_input() {
        let args = StatsArgs::default();

        assert!(validate_stats_args(&args).is_err());
    }

    #[test]
    fn test_validate_stats_args_width_too_small() {
        let args = StatsArgs {
            input: PathBuf::from("total_debt.csv"),
            plot_width: 10,
            ..Default::default()
        };

        assert!(validate_stats_args(&args).is_err());
    }

    #[test]
    fn test_validate_stats_args_width_too_large() {
        let args = StatsArgs {
            input: PathBuf::from("total_debt.csv"),
            plot_width: 50_000,
            ..Default::default()
        };

        assert!(validate_stats_args(&args).is_err());
    }
}

//! Evolution command implementation.
//!
//! The evolution command:
//! 1. Walks the snapshot directory tree
//! 2. Summarizes per-contract tallies
//! 3. Writes the JSON summary (if requested)
//! 4. Prints the text summary

use crate::commands::models::EvolutionArgs;
use crate::evolution::{analyze_tree, summarize};
use crate::output::{render_evolution_summary, write_evolution_summary};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the evolution command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Traversal and snapshot read failures
/// * Non-numeric snapshot file names
/// * Zero analyzed contracts (occurrence percentage undefined)
pub fn execute_evolution(args: EvolutionArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting evolution run for: {}", args.root.display());

    // Step 1: Walk the tree and diff consecutive snapshots
    info!("Step 1/3: Analyzing snapshot tree...");
    let contracts = analyze_tree(&args.root)
        .context("Failed to analyze snapshot tree")?;

    // Step 2: Summarize
    info!("Step 2/3: Summarizing contract tallies...");
    let summary = summarize(&contracts, &args.root)
        .context("Failed to summarize evolution data")?;

    // Step 3: Write JSON summary (if requested)
    if let Some(json_path) = &args.output_json {
        info!("Step 3/3: Writing JSON summary...");
        write_evolution_summary(&summary, json_path)
            .context("Failed to write JSON summary")?;

        info!("✓ Summary written to: {}", json_path.display());
    } else {
        info!("Step 3/3: Skipping JSON summary (not requested)");
    }

    print!("{}", render_evolution_summary(&summary));

    let elapsed = start_time.elapsed();
    info!("Evolution run completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate evolution arguments
///
/// **Public** - called before execute_evolution for early validation
pub fn validate_evolution_args(args: &EvolutionArgs) -> Result<()> {
    if args.root.as_os_str().is_empty() {
        anyhow::bail!("Root directory cannot be empty");
    }

    Ok(())
}

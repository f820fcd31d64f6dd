use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a stats report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source: {}", report.source);
    println!("  Dataset size: {}", report.dataset_size);
    println!("  Histogram entries: {}", report.version_histogram.len());
    println!("  Anomalous contracts: {}", report.anomalous_contracts.len());
    println!("  Median version count: {}", report.median_version_count);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("debt-stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Dataset statistics and evolution analysis for smart-contract debt measurements.");
}

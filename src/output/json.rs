//! JSON report output writers.
//!
//! Writes report structs to JSON files with proper formatting.

use crate::parser::schema::{EvolutionSummary, StatsReport};
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a stats report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report data to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &StatsReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing stats report to: {}", output_path.display());
    write_pretty_json(report, output_path)?;
    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a stats report from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<StatsReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading stats report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let report: StatsReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} records",
        report.version, report.dataset_size
    );

    Ok(report)
}

/// Write an evolution summary to a JSON file
///
/// **Public** - same path handling as `write_report`
pub fn write_evolution_summary(
    summary: &EvolutionSummary,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing evolution summary to: {}", output_path.display());
    write_pretty_json(summary, output_path)?;
    info!(
        "Summary written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Serialize a value as pretty JSON behind a buffered writer
///
/// **Private** - shared by both writers; creates parent directories
fn write_pretty_json(value: &impl Serialize, output_path: &Path) -> Result<(), OutputError> {
    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::NamedTempFile;

    fn create_test_report() -> StatsReport {
        let mut histogram = BTreeMap::new();
        histogram.insert(1, 2u64);
        histogram.insert(3, 1u64);

        StatsReport {
            version: "1.0.0".to_string(),
            source: "total_debt.csv".to_string(),
            dataset_size: 3,
            version_histogram: histogram,
            anomalous_contracts: Vec::new(),
            total_initial_debt: 60,
            average_initial_debt: 20.0,
            median_version_count: 1.0,
            generated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let report = create_test_report();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        // Write
        write_report(&report, path).unwrap();

        // Read back
        let loaded = read_report(path).unwrap();

        assert_eq!(loaded.version, report.version);
        assert_eq!(loaded.dataset_size, report.dataset_size);
        assert_eq!(loaded.version_histogram, report.version_histogram);
        assert_eq!(loaded.median_version_count, report.median_version_count);
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        // Try to write to a directory path
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        let report = create_test_report();
        write_report(&report, &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}

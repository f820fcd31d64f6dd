//! Single-pass aggregation of the dataset CSV.
//!
//! Rows are classified one at a time and folded into running aggregates:
//! dataset size, total initial debt, the version-count histogram, and the
//! anomalous listing. Derived statistics (average, weighted median) are
//! computed after the pass.

use crate::aggregator::median::weighted_median;
use crate::parser::record::{classify_record, AnomalousRecord, RecordOutcome};
use crate::parser::schema::{AnomalousEntry, StatsReport};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::StatsError;
use chrono::Utc;
use log::{debug, info};
use std::collections::BTreeMap;
use std::path::Path;

/// Running aggregates over the dataset
///
/// Built incrementally during the single pass; never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct DatasetAggregates {
    /// Count of valid, non-anomalous records
    pub dataset_size: u64,

    /// Sum of field index 2 over all counted records
    pub total_initial_debt: i64,

    /// Version count -> occurrence count; one increment per counted record
    pub version_histogram: BTreeMap<u32, u64>,

    /// Records excluded for exceeding the version-count threshold
    pub anomalous: Vec<AnomalousRecord>,
}

impl DatasetAggregates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified row into the aggregates
    ///
    /// Skipped rows touch nothing; anomalous rows only extend the listing.
    pub fn observe(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Skipped => {}
            RecordOutcome::Anomalous(record) => {
                self.anomalous.push(record);
            }
            RecordOutcome::Counted(record) => {
                self.dataset_size += 1;
                self.total_initial_debt += record.initial_debt;
                *self
                    .version_histogram
                    .entry(record.version_count)
                    .or_insert(0) += 1;
            }
        }
    }
}

/// Aggregate a dataset CSV file in one pass
///
/// **Public** - main entry point for the stats pipeline
///
/// # Arguments
/// * `input_path` - Path to the comma-delimited dataset file (no header row)
///
/// # Returns
/// The populated aggregates
///
/// # Errors
/// * `StatsError::Csv` - CSV-level read failure (including a missing file)
/// * `StatsError::Record` - malformed counted row; aborts the whole pass
pub fn aggregate_file(input_path: impl AsRef<Path>) -> Result<DatasetAggregates, StatsError> {
    let input_path = input_path.as_ref();

    info!("Aggregating dataset: {}", input_path.display());

    // Rows have varying field counts by design, hence the flexible reader
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input_path)?;

    let mut aggregates = DatasetAggregates::new();
    let mut rows_seen = 0u64;

    for result in reader.records() {
        let row = result?;
        rows_seen += 1;
        aggregates.observe(classify_record(&row)?);
    }

    debug!(
        "Pass complete: {} rows seen, {} counted, {} anomalous",
        rows_seen,
        aggregates.dataset_size,
        aggregates.anomalous.len()
    );

    Ok(aggregates)
}

/// Derive the final report from the aggregates
///
/// **Public** - computes average and weighted median
///
/// # Arguments
/// * `aggregates` - Result of `aggregate_file`
/// * `source` - Input path, recorded in the report
///
/// # Errors
/// * `StatsError::EmptyDataset` - zero counted records; the average is
///   undefined and the condition must surface, never be suppressed
pub fn derive_report(
    aggregates: &DatasetAggregates,
    source: impl AsRef<Path>,
) -> Result<StatsReport, StatsError> {
    if aggregates.dataset_size == 0 {
        return Err(StatsError::EmptyDataset);
    }

    let average_initial_debt =
        aggregates.total_initial_debt as f64 / aggregates.dataset_size as f64;

    // dataset_size > 0 guarantees the histogram holds occurrences
    let median = weighted_median(&aggregates.version_histogram)
        .ok_or(StatsError::EmptyDataset)?;

    debug!(
        "Derived statistics: average={:.2}, median={:?}",
        average_initial_debt, median
    );

    Ok(StatsReport {
        version: SCHEMA_VERSION.to_string(),
        source: source.as_ref().display().to_string(),
        dataset_size: aggregates.dataset_size,
        version_histogram: aggregates.version_histogram.clone(),
        anomalous_contracts: aggregates.anomalous.iter().map(AnomalousEntry::from).collect(),
        total_initial_debt: aggregates.total_initial_debt,
        average_initial_debt,
        median_version_count: median.resolve(),
        generated_at: Utc::now().to_rfc3339(),
    })
}

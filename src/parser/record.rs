//! Row classification for the debt dataset CSV.
//!
//! Each line of the input file is one contract's version history:
//! `identifier,label,debt_v1,...,debt_vN`. A row is either skipped
//! (identifier does not start with the validity marker), anomalous
//! (version count above the threshold), or counted into the aggregates.

use crate::utils::config::{VALIDITY_MARKER, VERSION_ANOMALY_THRESHOLD};
use crate::utils::error::RecordError;
use csv::StringRecord;

/// A valid, non-anomalous record contributing to the aggregates
///
/// Only the first debt value (field index 2) is ever converted;
/// the remaining per-version values feed nothing but the version count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// Contract address
    pub identifier: String,

    /// Deployer label
    pub label: String,

    /// Number of recorded versions (field count minus 2)
    pub version_count: u32,

    /// Debt value of the first recorded version
    pub initial_debt: i64,
}

/// A valid record whose version count exceeds the anomaly threshold
///
/// Excluded from all aggregates; retained for the report listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnomalousRecord {
    /// Contract address
    pub identifier: String,

    /// Deployer label
    pub label: String,

    /// Number of recorded versions
    pub version_count: u32,
}

impl AnomalousRecord {
    /// Render the record the way the report lists it: `"<id> <label>"`
    pub fn listing_line(&self) -> String {
        format!("{} {}", self.identifier, self.label)
    }
}

/// Result of classifying one CSV row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Identifier did not start with the validity marker; no effect anywhere
    Skipped,

    /// Version count above the threshold; listed but not aggregated
    Anomalous(AnomalousRecord),

    /// Counted into dataset size, histogram, and debt sum
    Counted(VersionRecord),
}

/// Classify a single CSV row
///
/// **Public** - called once per row by the aggregator
///
/// # Arguments
/// * `row` - One record from the `csv` reader (flexible field count)
///
/// # Returns
/// The row's classification
///
/// # Errors
/// * `RecordError::MissingDebtField` - counted row with fewer than 3 fields
/// * `RecordError::InvalidDebtValue` - field index 2 is not an integer
///
/// Both are fatal for the whole run; there is no per-row recovery.
pub fn classify_record(row: &StringRecord) -> Result<RecordOutcome, RecordError> {
    let identifier = row.get(0).unwrap_or("");

    // An empty identifier cannot start with the marker, so it is skipped too
    if !identifier.starts_with(VALIDITY_MARKER) {
        return Ok(RecordOutcome::Skipped);
    }

    let label = row.get(1).unwrap_or("").to_string();
    let version_count = row.len().saturating_sub(2) as u32;

    if version_count > VERSION_ANOMALY_THRESHOLD {
        return Ok(RecordOutcome::Anomalous(AnomalousRecord {
            identifier: identifier.to_string(),
            label,
            version_count,
        }));
    }

    // Field index 2 holds the first version's debt value
    let debt_field = row.get(2).ok_or_else(|| RecordError::MissingDebtField {
        identifier: identifier.to_string(),
        fields: row.len(),
    })?;

    let initial_debt =
        debt_field
            .trim()
            .parse::<i64>()
            .map_err(|_| RecordError::InvalidDebtValue {
                identifier: identifier.to_string(),
                value: debt_field.to_string(),
            })?;

    Ok(RecordOutcome::Counted(VersionRecord {
        identifier: identifier.to_string(),
        label,
        version_count,
        initial_debt,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_counted_row() {
        let outcome = classify_record(&row(&["0xabc", "deployer", "42", "40"])).unwrap();
        match outcome {
            RecordOutcome::Counted(record) => {
                assert_eq!(record.identifier, "0xabc");
                assert_eq!(record.label, "deployer");
                assert_eq!(record.version_count, 2);
                assert_eq!(record.initial_debt, 42);
            }
            other => panic!("expected counted, got {:?}", other),
        }
    }

    #[test]
    fn test_skipped_when_marker_missing() {
        let outcome = classify_record(&row(&["1xyz", "deployer", "42"])).unwrap();
        assert_eq!(outcome, RecordOutcome::Skipped);
    }

    #[test]
    fn test_skipped_when_identifier_empty() {
        let outcome = classify_record(&row(&["", "deployer", "42"])).unwrap();
        assert_eq!(outcome, RecordOutcome::Skipped);
    }

    #[test]
    fn test_anomalous_above_threshold() {
        let mut fields = vec!["0xanomaly".to_string(), "deployer".to_string()];
        fields.extend((0..102).map(|v| v.to_string()));
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();

        let outcome = classify_record(&row(&fields)).unwrap();
        match outcome {
            RecordOutcome::Anomalous(record) => {
                assert_eq!(record.version_count, 102);
                assert_eq!(record.listing_line(), "0xanomaly deployer");
            }
            other => panic!("expected anomalous, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_debt_field_is_fatal() {
        let result = classify_record(&row(&["0xabc", "deployer"]));
        assert!(matches!(
            result,
            Err(RecordError::MissingDebtField { fields: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_debt_value_is_fatal() {
        let result = classify_record(&row(&["0xabc", "deployer", "not-a-number"]));
        assert!(matches!(
            result,
            Err(RecordError::InvalidDebtValue { .. })
        ));
    }
}

//! Output JSON schema definitions for report artifacts.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::parser::record::AnomalousRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level dataset statistics report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input CSV the report was computed from
    pub source: String,

    /// Count of valid, non-anomalous records
    pub dataset_size: u64,

    /// Version count -> occurrence count (ascending keys)
    pub version_histogram: BTreeMap<u32, u64>,

    /// Records excluded for exceeding the version-count threshold
    pub anomalous_contracts: Vec<AnomalousEntry>,

    /// Sum of the first debt value over all counted records
    pub total_initial_debt: i64,

    /// `total_initial_debt / dataset_size`
    pub average_initial_debt: f64,

    /// Weighted median of the version-count histogram
    pub median_version_count: f64,

    /// Timestamp when the report was generated (RFC 3339)
    pub generated_at: String,
}

/// One anomalous record in the report listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalousEntry {
    pub identifier: String,
    pub label: String,
    pub version_count: u32,
}

impl From<&AnomalousRecord> for AnomalousEntry {
    fn from(record: &AnomalousRecord) -> Self {
        Self {
            identifier: record.identifier.clone(),
            label: record.label.clone(),
            version_count: record.version_count,
        }
    }
}

/// Evolution analysis summary written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionSummary {
    /// Schema version for compatibility checking
    pub version: String,

    /// Root directory that was walked
    pub root: String,

    /// Leaf directories with at least one consecutive snapshot pair
    pub contracts_analyzed: u64,

    /// Contracts that removed at least one debt item at some point
    pub contracts_with_removal: u64,

    /// `contracts_with_removal * 100 / contracts_analyzed`
    pub removal_occurrence_pct: f64,

    /// Debt items added across all consecutive pairs
    pub total_added: u64,

    /// Debt items removed across all consecutive pairs
    pub total_removed: u64,

    /// Per-contract tallies
    pub contracts: Vec<ContractDelta>,

    /// Timestamp when the summary was generated (RFC 3339)
    pub generated_at: String,
}

/// Per-contract evolution tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDelta {
    /// Leaf directory path
    pub contract: String,

    /// Item count of the first snapshot
    pub initial_items: u64,

    /// Items added across consecutive pairs
    pub added: u64,

    /// Items removed across consecutive pairs
    pub removed: u64,
}

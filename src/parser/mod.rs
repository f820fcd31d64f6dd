//! Record model and report schema definitions.
//!
//! This module handles:
//! - Classifying CSV rows (counted / anomalous / skipped)
//! - Defining the JSON report schema

pub mod record;
pub mod schema;

// Re-export main types
pub use record::{classify_record, AnomalousRecord, RecordOutcome, VersionRecord};
pub use schema::{AnomalousEntry, ContractDelta, EvolutionSummary, StatsReport};

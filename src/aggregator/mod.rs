//! Aggregation of dataset rows into statistics.
//!
//! This module transforms classified CSV rows into:
//! - Running aggregates (dataset size, debt sum, version histogram)
//! - Derived statistics (average initial debt, weighted median)

pub mod dataset;
pub mod median;

// Re-export main types and functions
pub use dataset::{aggregate_file, derive_report, DatasetAggregates};
pub use median::{weighted_median, WeightedMedian};

//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while classifying a single CSV row
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("invalid debt value {value:?} for contract {identifier}: not an integer")]
    InvalidDebtValue { identifier: String, value: String },

    #[error("row for contract {identifier} has {fields} fields, need at least 3 for the initial debt")]
    MissingDebtField { identifier: String, fields: usize },
}

/// Errors that can occur during dataset aggregation
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no valid records in dataset, cannot derive statistics")]
    EmptyDataset,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur during CDF plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Empty histogram, nothing to plot")]
    EmptyData,

    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),
}

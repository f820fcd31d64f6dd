//! Debt evolution analysis over snapshot directory trees.
//!
//! This module walks a tree of per-contract leaf directories, loads the
//! numerically ordered snapshot files inside each one, and diffs
//! consecutive snapshots as multisets of debt items to count additions
//! and removals per contract.
//!
//! # Example
//! ```ignore
//! use debt_stats::evolution::{analyze_tree, summarize};
//!
//! let contracts = analyze_tree("debt_data/contracts")?;
//! let summary = summarize(&contracts, "debt_data/contracts")?;
//! println!("removal occurrence: {:.1}%", summary.removal_occurrence_pct);
//! ```

mod snapshot;
mod walker;

// Public API exports
pub use snapshot::{diff_snapshots, load_snapshot, multiset_total, SnapshotDiff};
pub use walker::{analyze_tree, summarize};

// Error type
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvolutionError {
    #[error("invalid snapshot file name {0:?}: stem before the first '.' is not numeric")]
    InvalidSnapshotName(String),

    #[error("no leaf directory under {0} holds two or more snapshots")]
    NoContractsAnalyzed(String),

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

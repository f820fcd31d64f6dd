//! debt-stats
//!
//! Dataset statistics and evolution analysis for smart-contract
//! technical-debt measurements.
//!
//! The `stats` pipeline reads a comma-delimited dataset where each row is
//! one contract's version history and derives aggregate statistics
//! (dataset size, version-count histogram, average and weighted median of
//! the initial debt metric), optionally rendering the histogram as a
//! cumulative-distribution plot. The `evolution` pipeline walks a tree of
//! per-contract snapshot files and diffs consecutive versions to count
//! added and removed debt items.
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install debt-stats
//! debt-stats stats --input total_debt.csv --plot
//! ```

pub mod aggregator;
pub mod commands;
pub mod evolution;
pub mod output;
pub mod parser;
pub mod plot;
pub mod utils;

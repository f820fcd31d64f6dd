//! Output writers for report data.
//!
//! This module handles writing results to their destinations:
//! - JSON report artifacts
//! - Plain-text reports for stdout

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, write_evolution_summary, write_report};
pub use text::{render_evolution_summary, render_stats_report};

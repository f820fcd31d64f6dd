//! CDF plot rendering for the version-count histogram.

pub mod cdf;

// Re-export main types and functions
pub use cdf::{cumulative_points, render_cdf, CdfConfig};

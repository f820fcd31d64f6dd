//! Configuration and constants for the CLI.

/// Identifier marker character a row must start with to be counted
pub const VALIDITY_MARKER: char = '0';

/// Version-count threshold above which a record is anomalous
pub const VERSION_ANOMALY_THRESHOLD: u32 = 100;

/// Version counts above this value are excluded from the CDF plot
pub const CDF_VERSION_CAP: u32 = 100;

/// Current output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default output filename for the version-count CDF plot
pub const DEFAULT_CDF_FILENAME: &str = "version_num_cdf.png";

// Plot canvas defaults (PNG)
pub const DEFAULT_PLOT_WIDTH: u32 = 1200;
pub const DEFAULT_PLOT_HEIGHT: u32 = 800;

// Bounds for user-supplied plot widths
pub const MIN_PLOT_WIDTH: u32 = 100;
pub const MAX_PLOT_WIDTH: u32 = 10_000;

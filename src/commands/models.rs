//! Argument structs for the CLI commands.

use crate::utils::config::DEFAULT_PLOT_WIDTH;
use std::path::PathBuf;

/// Arguments for the stats command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct StatsArgs {
    /// Path to the dataset CSV file
    pub input: PathBuf,

    /// Output path for the JSON report (None = no artifact)
    pub output_json: Option<PathBuf>,

    /// Output path for the CDF plot PNG (None = no plot)
    pub output_plot: Option<PathBuf>,

    /// Plot title (None = no caption)
    pub plot_title: Option<String>,

    /// Plot width in pixels
    pub plot_width: u32,
}

impl Default for StatsArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_json: None,
            output_plot: None,
            plot_title: None,
            plot_width: DEFAULT_PLOT_WIDTH,
        }
    }
}

/// Arguments for the evolution command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct EvolutionArgs {
    /// Root of the snapshot directory tree
    pub root: PathBuf,

    /// Output path for the JSON summary (None = no artifact)
    pub output_json: Option<PathBuf>,
}

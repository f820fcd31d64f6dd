//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod evolution;
pub mod models;
pub mod stats;
pub mod utils;

// Re-export main command functions
pub use evolution::{execute_evolution, validate_evolution_args};
pub use models::{EvolutionArgs, StatsArgs};
pub use stats::{execute_stats, validate_stats_args};
pub use utils::{display_version, validate_report_file};

//! Plain-text report rendering for stdout.

use crate::parser::schema::{EvolutionSummary, StatsReport};
use std::fmt::Write;

/// Render the dataset statistics report as printable text
///
/// **Public** - the stats command prints this to stdout
///
/// The histogram is listed ascending by version count, one
/// `version_count: occurrences` line per entry; anomalous contracts are
/// listed as `<id> <label>`.
pub fn render_stats_report(report: &StatsReport) -> String {
    let mut out = String::new();
    let banner = "=".repeat(80);

    writeln!(out, "{}", banner).ok();
    writeln!(out, "DATASET STATISTICS").ok();
    writeln!(out, "{}", banner).ok();
    writeln!(out, "Source:       {}", report.source).ok();
    writeln!(out, "Dataset size: {}", report.dataset_size).ok();
    writeln!(out).ok();

    writeln!(out, "Contract versions:").ok();
    for (version_count, occurrences) in &report.version_histogram {
        writeln!(out, "  {}: {}", version_count, occurrences).ok();
    }
    writeln!(out).ok();

    writeln!(out, "Anomalous contracts:").ok();
    if report.anomalous_contracts.is_empty() {
        writeln!(out, "  (none)").ok();
    } else {
        for entry in &report.anomalous_contracts {
            writeln!(out, "  {} {}", entry.identifier, entry.label).ok();
        }
    }
    writeln!(out).ok();

    writeln!(out, "Average initial debt: {}", report.average_initial_debt).ok();
    writeln!(out, "Median version count: {}", report.median_version_count).ok();
    writeln!(out, "{}", banner).ok();

    out
}

/// Render the evolution summary as printable text
///
/// **Public** - the evolution command prints this to stdout
pub fn render_evolution_summary(summary: &EvolutionSummary) -> String {
    let mut out = String::new();
    let banner = "=".repeat(80);

    writeln!(out, "{}", banner).ok();
    writeln!(out, "DEBT EVOLUTION SUMMARY").ok();
    writeln!(out, "{}", banner).ok();
    writeln!(out, "Root:                   {}", summary.root).ok();
    writeln!(out, "Contracts analyzed:     {}", summary.contracts_analyzed).ok();
    writeln!(out, "Contracts with removal: {}", summary.contracts_with_removal).ok();
    writeln!(
        out,
        "Occurrence of debt removal: {:.2}%",
        summary.removal_occurrence_pct
    )
    .ok();
    writeln!(out, "Total items added:      {}", summary.total_added).ok();
    writeln!(out, "Total items removed:    {}", summary.total_removed).ok();
    writeln!(out, "{}", banner).ok();

    out
}

//! Snapshot loading and multiset diffing.
//!
//! A snapshot is a single-column CSV file listing one debt item per row;
//! the same item may occur more than once. Snapshots are compared as
//! multisets (item -> occurrence count).

use super::EvolutionError;
use log::trace;
use std::collections::HashMap;
use std::path::Path;

/// Added/removed item counts between two consecutive snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotDiff {
    /// Occurrences present in the later snapshot but not the earlier one
    pub added: u64,

    /// Occurrences present in the earlier snapshot but not the later one
    pub removed: u64,
}

/// Load one snapshot file into a multiset of debt items
///
/// **Public** - called per snapshot by the walker
///
/// # Arguments
/// * `path` - Path to a `<version>.csv` snapshot file
///
/// # Returns
/// Item -> occurrence count; rows with an empty first field are ignored
///
/// # Errors
/// * `EvolutionError::Csv` - CSV-level read failure
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<HashMap<String, u64>, EvolutionError> {
    let path = path.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut items: HashMap<String, u64> = HashMap::new();

    for result in reader.records() {
        let row = result?;
        let item = row.get(0).unwrap_or("");
        if item.is_empty() {
            continue;
        }
        *items.entry(item.to_string()).or_insert(0) += 1;
    }

    trace!(
        "Loaded snapshot {}: {} distinct items",
        path.display(),
        items.len()
    );

    Ok(items)
}

/// Diff two snapshot multisets
///
/// **Public** - pure function
///
/// # Arguments
/// * `before` - Earlier snapshot's multiset
/// * `after` - Later snapshot's multiset
///
/// # Returns
/// Per-item positive differences summed in each direction:
/// `added = sum(max(after - before, 0))`, `removed = sum(max(before - after, 0))`
pub fn diff_snapshots(
    before: &HashMap<String, u64>,
    after: &HashMap<String, u64>,
) -> SnapshotDiff {
    let mut diff = SnapshotDiff::default();

    for (item, &count_after) in after {
        let count_before = before.get(item).copied().unwrap_or(0);
        diff.added += count_after.saturating_sub(count_before);
    }

    for (item, &count_before) in before {
        let count_after = after.get(item).copied().unwrap_or(0);
        diff.removed += count_before.saturating_sub(count_after);
    }

    diff
}

/// Total occurrence count of a multiset
pub fn multiset_total(items: &HashMap<String, u64>) -> u64 {
    items.values().sum()
}

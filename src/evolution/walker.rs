//! Directory tree walking and per-contract evolution tallies.
//!
//! Each leaf directory (no subdirectories) holds one contract's snapshot
//! files, named `<version>.csv` and ordered by the integer value of the
//! file-name stem. Consecutive snapshots are diffed; a leaf with fewer
//! than two snapshots contributes nothing.

use super::snapshot::{diff_snapshots, load_snapshot, multiset_total};
use super::EvolutionError;
use crate::parser::schema::{ContractDelta, EvolutionSummary};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use log::{debug, info};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Analyze every leaf directory under `root`
///
/// **Public** - main entry point for the evolution pipeline
///
/// # Arguments
/// * `root` - Root of the snapshot directory tree
///
/// # Returns
/// One tally per leaf directory holding at least two snapshots, in
/// walk order (sorted by path for deterministic reports).
///
/// # Errors
/// * `EvolutionError::InvalidSnapshotName` - non-numeric file-name stem
/// * `EvolutionError::Walk` / `Io` / `Csv` - traversal and read failures
pub fn analyze_tree(root: impl AsRef<Path>) -> Result<Vec<ContractDelta>, EvolutionError> {
    let root = root.as_ref();

    info!("Walking snapshot tree: {}", root.display());

    let mut contracts = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }

        let snapshots = match leaf_snapshots(entry.path())? {
            Some(files) => files,
            None => continue,
        };

        if snapshots.len() < 2 {
            debug!(
                "Skipping {}: {} snapshot(s), need at least 2",
                entry.path().display(),
                snapshots.len()
            );
            continue;
        }

        contracts.push(analyze_contract(entry.path(), &snapshots)?);
    }

    info!("Analyzed {} contracts", contracts.len());

    Ok(contracts)
}

/// Collect a directory's snapshot files if it is a leaf
///
/// **Private** - returns `None` for directories with subdirectories;
/// files are sorted by numeric stem
fn leaf_snapshots(dir: &Path) -> Result<Option<Vec<PathBuf>>, EvolutionError> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            return Ok(None);
        }
        files.push(entry.path());
    }

    let mut keyed: Vec<(u64, PathBuf)> = files
        .into_iter()
        .map(|path| snapshot_version(&path).map(|version| (version, path)))
        .collect::<Result<_, _>>()?;

    keyed.sort_by_key(|&(version, _)| version);

    Ok(Some(keyed.into_iter().map(|(_, path)| path).collect()))
}

/// Parse the integer stem before the first `.` of a snapshot file name
///
/// **Private** - `3.csv` -> 3; anything non-numeric is fatal
fn snapshot_version(path: &Path) -> Result<u64, EvolutionError> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("");

    name.split('.')
        .next()
        .and_then(|stem| stem.parse::<u64>().ok())
        .ok_or_else(|| EvolutionError::InvalidSnapshotName(name.to_string()))
}

/// Diff one contract's consecutive snapshot pairs
///
/// **Private** - snapshots are already sorted; the first snapshot's
/// item total becomes the contract's initial item count
fn analyze_contract(dir: &Path, snapshots: &[PathBuf]) -> Result<ContractDelta, EvolutionError> {
    let mut before = load_snapshot(&snapshots[0])?;

    let mut delta = ContractDelta {
        contract: dir.display().to_string(),
        initial_items: multiset_total(&before),
        added: 0,
        removed: 0,
    };

    for path in &snapshots[1..] {
        let after = load_snapshot(path)?;
        let diff = diff_snapshots(&before, &after);
        delta.added += diff.added;
        delta.removed += diff.removed;
        before = after;
    }

    debug!(
        "{}: {} initial, +{} -{} across {} versions",
        delta.contract,
        delta.initial_items,
        delta.added,
        delta.removed,
        snapshots.len()
    );

    Ok(delta)
}

/// Summarize per-contract tallies into the final report
///
/// **Public** - computes the debt-removal occurrence percentage
///
/// # Errors
/// * `EvolutionError::NoContractsAnalyzed` - zero analyzed contracts; the
///   occurrence percentage is undefined and the condition must surface
pub fn summarize(
    contracts: &[ContractDelta],
    root: impl AsRef<Path>,
) -> Result<EvolutionSummary, EvolutionError> {
    let root = root.as_ref();

    if contracts.is_empty() {
        return Err(EvolutionError::NoContractsAnalyzed(
            root.display().to_string(),
        ));
    }

    let contracts_analyzed = contracts.len() as u64;
    let contracts_with_removal = contracts.iter().filter(|c| c.removed > 0).count() as u64;

    Ok(EvolutionSummary {
        version: SCHEMA_VERSION.to_string(),
        root: root.display().to_string(),
        contracts_analyzed,
        contracts_with_removal,
        removal_occurrence_pct: contracts_with_removal as f64 * 100.0 / contracts_analyzed as f64,
        total_added: contracts.iter().map(|c| c.added).sum(),
        total_removed: contracts.iter().map(|c| c.removed).sum(),
        contracts: contracts.to_vec(),
        generated_at: Utc::now().to_rfc3339(),
    })
}

use debt_stats::evolution::{analyze_tree, diff_snapshots, load_snapshot, summarize, EvolutionError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write one snapshot file, one debt item per line
fn write_snapshot(dir: &Path, name: &str, items: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), items.join("\n")).unwrap();
}

#[test]
fn test_load_snapshot_builds_multiset() {
    let tree = TempDir::new().unwrap();
    write_snapshot(tree.path(), "1.csv", &["a", "a", "b"]);

    let items = load_snapshot(tree.path().join("1.csv")).unwrap();

    assert_eq!(items.get("a"), Some(&2));
    assert_eq!(items.get("b"), Some(&1));
    assert_eq!(items.len(), 2);
}

#[test]
fn test_consecutive_diff_counts() {
    let tree = TempDir::new().unwrap();
    let contract = tree.path().join("contract_a");
    write_snapshot(&contract, "1.csv", &["a", "a", "b"]);
    write_snapshot(&contract, "2.csv", &["a", "b", "c", "c", "c"]);

    let contracts = analyze_tree(tree.path()).unwrap();

    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0].initial_items, 3);
    assert_eq!(contracts[0].added, 3);
    assert_eq!(contracts[0].removed, 1);
}

#[test]
fn test_tallies_accumulate_across_pairs() {
    let tree = TempDir::new().unwrap();
    let contract = tree.path().join("contract_a");
    write_snapshot(&contract, "1.csv", &["a", "b"]);
    write_snapshot(&contract, "2.csv", &["a", "b", "c"]);
    write_snapshot(&contract, "3.csv", &["a"]);

    let contracts = analyze_tree(tree.path()).unwrap();

    assert_eq!(contracts[0].initial_items, 2);
    assert_eq!(contracts[0].added, 1);
    assert_eq!(contracts[0].removed, 2);
}

#[test]
fn test_snapshots_ordered_by_numeric_stem() {
    let tree = TempDir::new().unwrap();
    let contract = tree.path().join("contract_a");
    // Lexicographic order would put 10.csv before 2.csv
    write_snapshot(&contract, "2.csv", &["a", "b"]);
    write_snapshot(&contract, "10.csv", &["a"]);
    write_snapshot(&contract, "1.csv", &["a"]);

    let contracts = analyze_tree(tree.path()).unwrap();

    // 1 -> 2 adds b, 2 -> 10 removes b
    assert_eq!(contracts[0].initial_items, 1);
    assert_eq!(contracts[0].added, 1);
    assert_eq!(contracts[0].removed, 1);
}

#[test]
fn test_single_snapshot_leaf_is_not_analyzed() {
    let tree = TempDir::new().unwrap();
    write_snapshot(&tree.path().join("contract_a"), "1.csv", &["a"]);
    let contract_b = tree.path().join("contract_b");
    write_snapshot(&contract_b, "1.csv", &["a"]);
    write_snapshot(&contract_b, "2.csv", &["a", "b"]);

    let contracts = analyze_tree(tree.path()).unwrap();

    assert_eq!(contracts.len(), 1);
    assert!(contracts[0].contract.ends_with("contract_b"));
}

#[test]
fn test_nested_leaf_directories_found() {
    let tree = TempDir::new().unwrap();
    let nested = tree.path().join("group/sub/contract_a");
    write_snapshot(&nested, "1.csv", &["a"]);
    write_snapshot(&nested, "2.csv", &["b"]);

    let contracts = analyze_tree(tree.path()).unwrap();

    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0].added, 1);
    assert_eq!(contracts[0].removed, 1);
}

#[test]
fn test_non_numeric_snapshot_name_is_fatal() {
    let tree = TempDir::new().unwrap();
    let contract = tree.path().join("contract_a");
    write_snapshot(&contract, "notes.csv", &["a"]);
    write_snapshot(&contract, "2.csv", &["a"]);

    let result = analyze_tree(tree.path());
    assert!(matches!(
        result,
        Err(EvolutionError::InvalidSnapshotName(_))
    ));
}

#[test]
fn test_summarize_removal_occurrence() {
    let tree = TempDir::new().unwrap();
    // contract_a removes an item at some point
    let contract_a = tree.path().join("contract_a");
    write_snapshot(&contract_a, "1.csv", &["a", "b"]);
    write_snapshot(&contract_a, "2.csv", &["a"]);
    // contract_b only adds
    let contract_b = tree.path().join("contract_b");
    write_snapshot(&contract_b, "1.csv", &["a"]);
    write_snapshot(&contract_b, "2.csv", &["a", "b"]);

    let contracts = analyze_tree(tree.path()).unwrap();
    let summary = summarize(&contracts, tree.path()).unwrap();

    assert_eq!(summary.contracts_analyzed, 2);
    assert_eq!(summary.contracts_with_removal, 1);
    assert_eq!(summary.removal_occurrence_pct, 50.0);
    assert_eq!(summary.total_added, 1);
    assert_eq!(summary.total_removed, 1);
}

#[test]
fn test_summarize_zero_contracts_is_fatal() {
    let tree = TempDir::new().unwrap();
    write_snapshot(&tree.path().join("contract_a"), "1.csv", &["a"]);

    let contracts = analyze_tree(tree.path()).unwrap();
    assert!(contracts.is_empty());

    let result = summarize(&contracts, tree.path());
    assert!(matches!(result, Err(EvolutionError::NoContractsAnalyzed(_))));
}

#[test]
fn test_diff_snapshots_mixed_changes() {
    let before: HashMap<String, u64> = [("a".to_string(), 2), ("b".to_string(), 1)]
        .into_iter()
        .collect();
    let after: HashMap<String, u64> = [
        ("a".to_string(), 1),
        ("b".to_string(), 1),
        ("c".to_string(), 3),
    ]
    .into_iter()
    .collect();

    let diff = diff_snapshots(&before, &after);
    assert_eq!(diff.added, 3);
    assert_eq!(diff.removed, 1);
}

use debt_stats::commands::{
    execute_evolution, execute_stats, validate_evolution_args, validate_stats_args, EvolutionArgs,
    StatsArgs,
};
use debt_stats::output::read_report;
use debt_stats::parser::schema::EvolutionSummary;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_validate_stats_args_defaults_invalid() {
    // Default args carry an empty input path
    assert!(validate_stats_args(&StatsArgs::default()).is_err());
}

#[test]
fn test_validate_stats_args_plot_width_bounds() {
    let base = StatsArgs {
        input: PathBuf::from("total_debt.csv"),
        ..Default::default()
    };

    assert!(validate_stats_args(&base).is_ok());

    let narrow = StatsArgs {
        plot_width: 1,
        ..base.clone()
    };
    assert!(validate_stats_args(&narrow).is_err());

    let wide = StatsArgs {
        plot_width: 100_000,
        ..base
    };
    assert!(validate_stats_args(&wide).is_err());
}

#[test]
fn test_validate_evolution_args_empty_root() {
    assert!(validate_evolution_args(&EvolutionArgs::default()).is_err());
}

#[test]
fn test_execute_stats_writes_json_report() {
    let mut input = NamedTempFile::new().unwrap();
    write!(
        input,
        "0xaaa,alice,10\n0xbbb,bob,20,1\n0xccc,dave,30,1,2\n"
    )
    .unwrap();
    input.flush().unwrap();

    let out_dir = TempDir::new().unwrap();
    let json_path = out_dir.path().join("report.json");

    let args = StatsArgs {
        input: input.path().to_path_buf(),
        output_json: Some(json_path.clone()),
        ..Default::default()
    };

    validate_stats_args(&args).unwrap();
    execute_stats(args).unwrap();

    let report = read_report(&json_path).unwrap();
    assert_eq!(report.dataset_size, 3);
    assert_eq!(report.average_initial_debt, 20.0);
    assert_eq!(report.median_version_count, 2.0);
}

#[test]
fn test_execute_stats_fails_on_empty_dataset() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "1xyz,carol,30\n").unwrap();
    input.flush().unwrap();

    let args = StatsArgs {
        input: input.path().to_path_buf(),
        ..Default::default()
    };

    assert!(execute_stats(args).is_err());
}

#[test]
fn test_execute_evolution_writes_json_summary() {
    let tree = TempDir::new().unwrap();
    let contract = tree.path().join("contract_a");
    fs::create_dir_all(&contract).unwrap();
    fs::write(contract.join("1.csv"), "a\nb").unwrap();
    fs::write(contract.join("2.csv"), "a").unwrap();

    let out_dir = TempDir::new().unwrap();
    let json_path = out_dir.path().join("summary.json");

    let args = EvolutionArgs {
        root: tree.path().to_path_buf(),
        output_json: Some(json_path.clone()),
    };

    validate_evolution_args(&args).unwrap();
    execute_evolution(args).unwrap();

    let file = fs::File::open(&json_path).unwrap();
    let summary: EvolutionSummary = serde_json::from_reader(file).unwrap();
    assert_eq!(summary.contracts_analyzed, 1);
    assert_eq!(summary.contracts_with_removal, 1);
    assert_eq!(summary.removal_occurrence_pct, 100.0);
}

#[test]
fn test_execute_evolution_fails_without_analyzable_contracts() {
    let tree = TempDir::new().unwrap();
    let contract = tree.path().join("contract_a");
    fs::create_dir_all(&contract).unwrap();
    fs::write(contract.join("1.csv"), "a").unwrap();

    let args = EvolutionArgs {
        root: tree.path().to_path_buf(),
        output_json: None,
    };

    assert!(execute_evolution(args).is_err());
}

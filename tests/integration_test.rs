//! Integration tests for ip-cidr-aggregate
//!
//! These tests verify the complete workflow from reading an input file to
//! rendering the generated CIDRs.

use ip_cidr_aggregate::{
    aggregate_file,
    output::{render, OutputFormat},
    processing::aggregate_texts,
    AggregateError, Config,
};
use std::path::PathBuf;

fn config_for(input: &str) -> Config {
    Config {
        input: PathBuf::from(input),
        ..Config::default()
    }
}

#[test]
fn test_full_workflow_with_csv() {
    let summary = aggregate_file(&config_for("src/tests/test_data/iplist_01.csv"))
        .expect("Failed to aggregate csv");

    assert_eq!(
        summary.formatted(),
        vec![
            "10.0.0.0/30",
            "172.16.0.6/31",
            "192.168.1.5/32",
            "192.168.1.10/32"
        ]
    );
    assert_eq!(summary.parsed, 9, "Expected 9 parsed addresses");
    assert_eq!(summary.skipped, 2, "Header and broken row are skipped");
    assert_eq!(summary.distinct, 8);
    assert_eq!(summary.runs, 4);
}

#[test]
fn test_full_workflow_with_workbook() {
    let summary = aggregate_file(&config_for("src/tests/test_data/iplist_02.xlsx"))
        .expect("Failed to aggregate workbook");

    assert_eq!(
        summary.formatted(),
        vec!["10.0.0.0/30", "192.168.1.5/32", "192.168.1.10/32"]
    );

    let rendered = render(&summary.blocks, OutputFormat::Quoted).unwrap();
    assert_eq!(
        rendered,
        concat!(
            "Generated CIDRs:\n",
            "    \"10.0.0.0/30\",\n",
            "    \"192.168.1.5/32\",\n",
            "    \"192.168.1.10/32\",\n",
        )
    );
}

#[test]
fn test_workbook_other_sheet() {
    let config = Config {
        sheet_name: "other".to_string(),
        ..config_for("src/tests/test_data/iplist_02.xlsx")
    };
    let summary = aggregate_file(&config).expect("Failed to aggregate workbook");
    assert_eq!(summary.formatted(), vec!["172.16.0.1/32"]);
}

#[test]
fn test_workbook_missing_sheet() {
    let config = Config {
        sheet_name: "missing".to_string(),
        ..config_for("src/tests/test_data/iplist_02.xlsx")
    };
    let err = aggregate_file(&config).unwrap_err();
    assert!(matches!(err, AggregateError::Sheet(_)), "got {err:?}");
}

#[test]
fn test_missing_input_file() {
    let err = aggregate_file(&config_for("src/tests/test_data/does_not_exist.xlsx")).unwrap_err();
    assert!(matches!(err, AggregateError::Io { .. }), "got {err:?}");
    assert!(err.to_string().contains("does_not_exist.xlsx"));
}

#[test]
fn test_strict_rejects_header() {
    let config = Config {
        strict: true,
        ..config_for("src/tests/test_data/iplist_01.csv")
    };
    let err = aggregate_file(&config).unwrap_err();
    assert!(
        matches!(&err, AggregateError::InvalidAddress(t) if t == "ip_address"),
        "got {err:?}"
    );
}

#[test]
fn test_scenarios() {
    let scenarios: Vec<(Vec<&str>, Vec<&str>)> = vec![
        (vec!["10.0.0.1"], vec!["10.0.0.1/32"]),
        (
            vec!["10.0.0.0", "10.0.0.1", "10.0.0.2", "10.0.0.3"],
            vec!["10.0.0.0/30"],
        ),
        (
            vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"],
            vec!["10.0.0.1/32", "10.0.0.2/31"],
        ),
        (
            vec!["192.168.1.5", "192.168.1.10"],
            vec!["192.168.1.5/32", "192.168.1.10/32"],
        ),
        (vec![], vec![]),
    ];

    for (input, expected) in scenarios {
        assert_eq!(
            aggregate_texts(&input).formatted(),
            expected,
            "input {input:?}"
        );
    }
}

#[test]
fn test_json_output() {
    let summary = aggregate_texts(["10.0.0.3", "10.0.0.2"]);
    let json = render(&summary.blocks, OutputFormat::Json).unwrap();
    let values: Vec<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(values, vec!["10.0.0.2/31"]);
}

#[test]
fn test_latin1_csv_keeps_addresses() {
    let summary = aggregate_file(&config_for("src/tests/test_data/iplist_03_latin1.csv"))
        .expect("Latin-1 hostname must not make the file fatal");
    assert_eq!(summary.formatted(), vec!["10.0.0.1/31"]);
    assert_eq!(summary.skipped, 1, "Only the header is skipped");
}

#[test]
fn test_bom_csv_keeps_first_address() {
    let summary = aggregate_file(&config_for("src/tests/test_data/iplist_04_bom.csv"))
        .expect("Failed to aggregate csv");
    assert_eq!(summary.formatted(), vec!["10.0.0.0/31"]);
    assert_eq!(summary.skipped, 0);
}

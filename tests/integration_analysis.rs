//! Integration tests for the full analysis workflow.
//!
//! These tests run the complete pipeline on a fixture workbook and verify
//! the end-to-end results and artifacts.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use je_audit::analyser::logic::{
    ColumnOutcome, SkipReason, load_workbook, run_benford_analysis, run_profile,
};
use je_audit::report;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from("testdata/je_samples.csv")
}

#[test]
fn test_analyze_sample_workbook() {
    let workbook = load_workbook(&fixture_path()).expect("fixture should load");
    assert_eq!(workbook.sheets.len(), 1);
    assert_eq!(workbook.sheets[0].name, "je_samples");

    let response = run_benford_analysis(&workbook, 10).expect("analysis should succeed");
    assert_eq!(response.reports.len(), 6, "Every column must be reported");

    let outcome_of = |name: &str| {
        &response
            .reports
            .iter()
            .find(|r| r.column == name)
            .unwrap_or_else(|| panic!("column {name} missing from report"))
            .outcome
    };

    // entry_id and amount are numeric with 30 valid values each.
    for name in ["entry_id", "amount"] {
        match outcome_of(name) {
            ColumnOutcome::Analyzed(result) => {
                assert_eq!(result.sample_count, 30, "{name} should retain all 30 values");
                assert_eq!(result.digits.len(), 9);
            }
            ColumnOutcome::Skipped(reason) => {
                panic!("{name} should be analyzed, got skip: {reason:?}")
            }
        }
    }

    // entry_id runs 1..=30: eleven values lead with 1, eleven with 2.
    if let ColumnOutcome::Analyzed(result) = outcome_of("entry_id") {
        assert_eq!(result.digits[0].count, 11);
        assert_eq!(result.digits[1].count, 11);
        assert_eq!(result.digits[2].count, 2);
    }

    // Text, boolean and date columns are skipped with their kind.
    assert!(matches!(
        outcome_of("memo"),
        ColumnOutcome::Skipped(SkipReason::NotNumeric(_))
    ));
    assert!(matches!(
        outcome_of("debit_credit"),
        ColumnOutcome::Skipped(SkipReason::NotNumeric(_))
    ));
    assert!(matches!(
        outcome_of("approved"),
        ColumnOutcome::Skipped(SkipReason::NotNumeric(_))
    ));
    assert!(matches!(
        outcome_of("posted_date"),
        ColumnOutcome::Skipped(SkipReason::NotNumeric(_))
    ));

    assert_eq!(response.summary.analyzed, 2);
    assert_eq!(response.summary.skipped, 4);
}

#[test]
fn test_high_threshold_skips_numeric_columns() {
    let workbook = load_workbook(&fixture_path()).expect("fixture should load");
    let response = run_benford_analysis(&workbook, 50).expect("analysis should succeed");

    assert_eq!(response.summary.analyzed, 0);
    for report in &response.reports {
        if report.column == "amount" {
            assert!(
                matches!(
                    report.outcome,
                    ColumnOutcome::Skipped(SkipReason::InsufficientSamples {
                        valid: 30,
                        required: 50,
                    })
                ),
                "amount has 30 valid values, below a threshold of 50"
            );
        }
    }
}

#[test]
fn test_artifacts_are_written_and_reproducible() {
    let workbook = load_workbook(&fixture_path()).expect("fixture should load");
    let response = run_benford_analysis(&workbook, 10).expect("analysis should succeed");

    let dir = tempfile::tempdir().expect("temp dir");
    let first = dir.path().join("first");
    let second = dir.path().join("second");
    report::write_benford_artifacts(&response, &first, 10).expect("first write");
    report::write_benford_artifacts(&response, &second, 10).expect("second write");

    for name in ["benford_report.md", "benford_summary.csv", "benford_detail.csv"] {
        let a = std::fs::read(first.join(name)).expect("first artifact");
        let b = std::fs::read(second.join(name)).expect("second artifact");
        assert_eq!(a, b, "{name} must be byte-identical across runs");
        assert!(!a.is_empty());
    }

    let markdown = std::fs::read_to_string(first.join("benford_report.md")).expect("report");
    assert!(markdown.contains("# Benford Analysis Report"));
    assert!(markdown.contains("- Columns analyzed: 2"));
    assert!(markdown.contains("posted_date"), "Skipped columns must be listed");

    let summary_csv =
        std::fs::read_to_string(first.join("benford_summary.csv")).expect("summary csv");
    assert_eq!(
        summary_csv.lines().count(),
        7,
        "Header plus one row per column"
    );
    assert!(summary_csv.contains("analyzed"));
    assert!(summary_csv.contains("skipped"));

    let detail_csv =
        std::fs::read_to_string(first.join("benford_detail.csv")).expect("detail csv");
    assert_eq!(
        detail_csv.lines().count(),
        1 + 2 * 9,
        "Header plus nine digit rows per analyzed column"
    );
}

#[test]
fn test_profile_report_covers_all_columns() {
    let workbook = load_workbook(&fixture_path()).expect("fixture should load");
    let profile = run_profile(&workbook).expect("profile should succeed");

    assert_eq!(profile.sheets.len(), 1);
    let sheet = &profile.sheets[0];
    assert_eq!(sheet.row_count, 30);
    assert_eq!(sheet.columns.len(), 6);

    let dir = tempfile::tempdir().expect("temp dir");
    report::write_profile_artifacts(&profile, dir.path()).expect("profile write");
    let markdown =
        std::fs::read_to_string(dir.path().join("column_stats.md")).expect("stats report");
    assert!(markdown.contains("# Column Statistics Report"));
    assert!(markdown.contains("`je_samples`"));
    for column in ["entry_id", "amount", "debit_credit", "posted_date", "approved", "memo"] {
        assert!(markdown.contains(column), "{column} missing from stats report");
    }
}

//! Report artifact writing.
//!
//! Renders analysis results into the Markdown and CSV files the CI job
//! publishes. Artifacts are regenerated from scratch each run and contain
//! no timestamps, so identical input produces byte-identical output.

use crate::analyser::logic::summary::top_deviations;
use crate::analyser::logic::types::{
    BenfordResponse, ColumnOutcome, ColumnReport, ColumnStats, ProfileResponse,
};
use crate::error::{Result, ResultExt as _};
use crate::utils::{fmt_f64, fmt_opt};
use polars::prelude::*;
use std::path::Path;

/// Writes `benford_report.md`, `benford_summary.csv` and
/// `benford_detail.csv` into `output_dir`, creating it if needed.
pub fn write_benford_artifacts(
    response: &BenfordResponse,
    output_dir: &Path,
    top_limit: usize,
) -> Result<()> {
    std::fs::create_dir_all(output_dir).context("Failed to create output directory")?;

    let markdown = benford_markdown(response, top_limit);
    std::fs::write(output_dir.join("benford_report.md"), markdown)
        .context("Failed to write benford_report.md")?;

    let mut summary = summary_frame(&response.reports)?;
    write_csv(&mut summary, &output_dir.join("benford_summary.csv"))?;

    let mut detail = detail_frame(&response.reports)?;
    write_csv(&mut detail, &output_dir.join("benford_detail.csv"))?;

    tracing::info!(
        "Benford artifacts written to {} ({} columns analyzed, {} skipped)",
        output_dir.display(),
        response.summary.analyzed,
        response.summary.skipped
    );
    Ok(())
}

/// Writes `column_stats.md` into `output_dir`, creating it if needed.
pub fn write_profile_artifacts(profile: &ProfileResponse, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir).context("Failed to create output directory")?;
    std::fs::write(output_dir.join("column_stats.md"), profile_markdown(profile))
        .context("Failed to write column_stats.md")?;
    Ok(())
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).context("Failed to create CSV file")?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .context("Failed to write CSV file")?;
    Ok(())
}

/// One row per column: status, sample count, chi-square, MAD, conformity.
fn summary_frame(reports: &[ColumnReport]) -> Result<DataFrame> {
    let mut sheets = Vec::new();
    let mut columns = Vec::new();
    let mut statuses = Vec::new();
    let mut valid_values: Vec<i64> = Vec::new();
    let mut chi_squares: Vec<Option<f64>> = Vec::new();
    let mut mads: Vec<Option<f64>> = Vec::new();
    let mut conformities: Vec<Option<String>> = Vec::new();
    let mut notes: Vec<Option<String>> = Vec::new();

    for report in reports {
        sheets.push(report.sheet.clone());
        columns.push(report.column.clone());
        match &report.outcome {
            ColumnOutcome::Analyzed(result) => {
                statuses.push("analyzed".to_owned());
                valid_values.push(result.sample_count as i64);
                chi_squares.push(Some(result.chi_square));
                mads.push(Some(result.mad));
                conformities.push(Some(result.conformity.as_str().to_owned()));
                notes.push(None);
            }
            ColumnOutcome::Skipped(reason) => {
                statuses.push("skipped".to_owned());
                valid_values.push(0);
                chi_squares.push(None);
                mads.push(None);
                conformities.push(None);
                notes.push(Some(reason.describe()));
            }
        }
    }

    let df = DataFrame::new(vec![
        Column::new("sheet".into(), sheets),
        Column::new("column".into(), columns),
        Column::new("status".into(), statuses),
        Column::new("valid_values".into(), valid_values),
        Column::new("chi_square".into(), chi_squares),
        Column::new("mad".into(), mads),
        Column::new("conformity".into(), conformities),
        Column::new("note".into(), notes),
    ])?;
    Ok(df)
}

/// One row per (analyzed column, digit): observed vs expected.
fn detail_frame(reports: &[ColumnReport]) -> Result<DataFrame> {
    let mut sheets = Vec::new();
    let mut columns = Vec::new();
    let mut digits: Vec<i64> = Vec::new();
    let mut counts: Vec<i64> = Vec::new();
    let mut proportions: Vec<f64> = Vec::new();
    let mut expected: Vec<f64> = Vec::new();
    let mut differences: Vec<f64> = Vec::new();

    for report in reports {
        if let ColumnOutcome::Analyzed(result) = &report.outcome {
            for stat in &result.digits {
                sheets.push(report.sheet.clone());
                columns.push(report.column.clone());
                digits.push(i64::from(stat.digit));
                counts.push(stat.count as i64);
                proportions.push(stat.proportion);
                expected.push(stat.expected_proportion);
                differences.push(stat.difference);
            }
        }
    }

    let df = DataFrame::new(vec![
        Column::new("sheet".into(), sheets),
        Column::new("column".into(), columns),
        Column::new("digit".into(), digits),
        Column::new("count".into(), counts),
        Column::new("proportion".into(), proportions),
        Column::new("expected_proportion".into(), expected),
        Column::new("difference".into(), differences),
    ])?;
    Ok(df)
}

pub fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let header_line = format!("| {} |", headers.join(" | "));
    let separator_line = format!("| {} |", vec!["---"; headers.len()].join(" | "));
    let mut lines = vec![header_line, separator_line];
    for row in rows {
        lines.push(format!("| {} |", row.join(" | ")));
    }
    lines.join("\n")
}

/// Renders the full Markdown report for one run.
pub fn benford_markdown(response: &BenfordResponse, top_limit: usize) -> String {
    let summary = &response.summary;

    let top_rows: Vec<Vec<String>> = top_deviations(&response.reports, top_limit)
        .iter()
        .filter_map(|report| match &report.outcome {
            ColumnOutcome::Analyzed(result) => Some(vec![
                report.sheet.clone(),
                report.column.clone(),
                result.sample_count.to_string(),
                fmt_f64(result.chi_square),
                fmt_f64(result.mad),
                result.conformity.as_str().to_owned(),
            ]),
            ColumnOutcome::Skipped(_) => None,
        })
        .collect();

    let mut detail_rows = Vec::new();
    let mut skipped_rows = Vec::new();
    for report in &response.reports {
        match &report.outcome {
            ColumnOutcome::Analyzed(result) => {
                for stat in &result.digits {
                    detail_rows.push(vec![
                        report.sheet.clone(),
                        report.column.clone(),
                        stat.digit.to_string(),
                        stat.count.to_string(),
                        fmt_f64(stat.proportion),
                        fmt_f64(stat.expected_proportion),
                        fmt_f64(stat.difference),
                    ]);
                }
            }
            ColumnOutcome::Skipped(reason) => {
                skipped_rows.push(vec![
                    report.sheet.clone(),
                    report.column.clone(),
                    reason.describe(),
                ]);
            }
        }
    }

    let report_lines = vec![
        "# Benford Analysis Report".to_owned(),
        String::new(),
        format!("Input file: `{}`", response.path),
        String::new(),
        "## What this report is".to_owned(),
        "Benford's Law describes how often each leading digit (1 through 9) appears in many real-world datasets.".to_owned(),
        "For example, a leading digit of **1** is expected about **30.1%** of the time, while **9** is expected about **4.6%**.".to_owned(),
        "Large deviations from these expected rates can indicate unusual patterns worth reviewing.".to_owned(),
        String::new(),
        "## How to read the results".to_owned(),
        "- **Leading digit**: the first non-zero digit of a number (e.g., 0.045 → 4, 1200 → 1).".to_owned(),
        "- **Observed proportion**: how often that digit appears in the data.".to_owned(),
        "- **Expected proportion**: Benford's Law expectation for that digit.".to_owned(),
        "- **Difference**: observed minus expected (positive means the digit appears more than expected).".to_owned(),
        "- **MAD (Mean Absolute Deviation)**: average absolute difference across digits; higher values mean larger overall deviation.".to_owned(),
        "- **Chi-square**: goodness-of-fit across the nine digit counts (8 degrees of freedom); higher values suggest larger differences from expectations.".to_owned(),
        "- **Conformity**: MAD classified with the Nigrini cutoffs (close < 0.006, acceptable ≤ 0.012, marginal ≤ 0.015, otherwise nonconformity).".to_owned(),
        String::new(),
        "## Run summary".to_owned(),
        format!("- Sheets: {}", response.sheet_count),
        format!("- Columns analyzed: {}", summary.analyzed),
        format!("- Columns skipped: {}", summary.skipped),
        format!("- Close conformity: {}", summary.close),
        format!("- Acceptable conformity: {}", summary.acceptable),
        format!("- Marginal conformity: {}", summary.marginal),
        format!("- Nonconformity: {}", summary.nonconforming),
        String::new(),
        "## Top columns by deviation (MAD)".to_owned(),
        if top_rows.is_empty() {
            "No numeric data available.".to_owned()
        } else {
            markdown_table(
                &["sheet", "column", "values", "chi_square", "mad", "conformity"],
                &top_rows,
            )
        },
        String::new(),
        "## Detailed digit breakdown".to_owned(),
        if detail_rows.is_empty() {
            "No numeric data available.".to_owned()
        } else {
            markdown_table(
                &[
                    "sheet",
                    "column",
                    "digit",
                    "count",
                    "proportion",
                    "expected_proportion",
                    "difference",
                ],
                &detail_rows,
            )
        },
        String::new(),
        "## Skipped columns".to_owned(),
        if skipped_rows.is_empty() {
            "None.".to_owned()
        } else {
            markdown_table(&["sheet", "column", "reason"], &skipped_rows)
        },
        String::new(),
        "Report generated by `je-audit benford`.".to_owned(),
    ];

    report_lines.join("\n")
}

/// Renders the descriptive-statistics report.
pub fn profile_markdown(profile: &ProfileResponse) -> String {
    let mut lines = vec![
        "# Column Statistics Report".to_owned(),
        String::new(),
        format!("Input file: `{}`", profile.path),
    ];

    for sheet in &profile.sheets {
        lines.push(String::new());
        lines.push(format!("## Sheet `{}` ({} rows)", sheet.sheet, sheet.row_count));
        lines.push(String::new());

        let rows: Vec<Vec<String>> = sheet
            .columns
            .iter()
            .map(|col| {
                let (min, max, mean, median, std_dev, distinct, notes) = match &col.stats {
                    ColumnStats::Numeric(s) => (
                        fmt_opt(s.min),
                        fmt_opt(s.max),
                        fmt_opt(s.mean),
                        fmt_opt(s.median),
                        fmt_opt(s.std_dev),
                        s.distinct_count.to_string(),
                        numeric_notes(s),
                    ),
                    ColumnStats::Temporal(s) => (
                        s.min.clone().unwrap_or_else(|| "—".to_owned()),
                        s.max.clone().unwrap_or_else(|| "—".to_owned()),
                        "—".to_owned(),
                        "—".to_owned(),
                        "—".to_owned(),
                        s.distinct_count.to_string(),
                        String::new(),
                    ),
                    ColumnStats::Boolean(s) => (
                        "—".to_owned(),
                        "—".to_owned(),
                        "—".to_owned(),
                        "—".to_owned(),
                        "—".to_owned(),
                        "—".to_owned(),
                        format!("true={}, false={}", s.true_count, s.false_count),
                    ),
                    ColumnStats::Text(s) => (
                        "—".to_owned(),
                        "—".to_owned(),
                        "—".to_owned(),
                        "—".to_owned(),
                        "—".to_owned(),
                        s.distinct_count.to_string(),
                        text_notes(s),
                    ),
                };
                vec![
                    col.name.clone(),
                    col.kind.as_str().to_owned(),
                    col.count.to_string(),
                    format!("{} ({:.1}%)", col.nulls, col.null_pct()),
                    min,
                    max,
                    mean,
                    median,
                    std_dev,
                    distinct,
                    notes,
                ]
            })
            .collect();

        lines.push(markdown_table(
            &[
                "column", "kind", "count", "nulls", "min", "max", "mean", "median", "std dev",
                "distinct", "notes",
            ],
            &rows,
        ));
    }

    lines.push(String::new());
    lines.push("Report generated by `je-audit stats`.".to_owned());
    lines.join("\n")
}

fn numeric_notes(s: &crate::analyser::logic::types::NumericStats) -> String {
    let mut notes = Vec::new();
    if s.is_integer {
        notes.push("integer-valued".to_owned());
    }
    if s.zero_count > 0 {
        notes.push(format!("{} zeros", s.zero_count));
    }
    if s.negative_count > 0 {
        notes.push(format!("{} negatives", s.negative_count));
    }
    notes.join(", ")
}

fn text_notes(s: &crate::analyser::logic::types::TextStats) -> String {
    let lengths = format!(
        "lengths {}–{} (avg {:.1})",
        s.min_length, s.max_length, s.avg_length
    );
    match &s.top_value {
        Some((value, count)) => format!("top value '{value}' ({count}×), {lengths}"),
        None => lengths,
    }
}

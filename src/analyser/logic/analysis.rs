use super::benford;
use super::io::Workbook;
use super::profiling;
use super::summary;
use super::types::{
    BenfordResponse, ColumnKind, ColumnOutcome, ColumnReport, ProfileResponse, SheetProfile,
    SkipReason,
};
use anyhow::{Context as _, Result};
use polars::prelude::*;

/// Runs the Benford pass over every sheet of a workbook. Sheets and columns
/// are processed in source order so the output is deterministic.
pub fn run_benford_analysis(workbook: &Workbook, min_samples: usize) -> Result<BenfordResponse> {
    let mut reports = Vec::new();
    for sheet in &workbook.sheets {
        let sheet_reports = analyse_sheet(&sheet.name, &sheet.data, min_samples)
            .with_context(|| format!("Benford analysis failed for sheet '{}'", sheet.name))?;
        reports.extend(sheet_reports);
    }
    let summary = summary::summarize_run(&reports);

    Ok(BenfordResponse {
        file_name: workbook.file_name.clone(),
        path: workbook.path.clone(),
        sheet_count: workbook.sheets.len(),
        reports,
        summary,
    })
}

/// Analyzes every column of one sheet. Numeric columns go through digit
/// extraction; anything else is reported as skipped with its kind.
pub fn analyse_sheet(sheet: &str, df: &DataFrame, min_samples: usize) -> Result<Vec<ColumnReport>> {
    let mut reports = Vec::new();

    for col in df.get_columns() {
        let name = col.name().to_string();
        let outcome = if col.dtype().is_numeric() {
            let series = col.as_materialized_series();
            let ca = series
                .cast(&DataType::Float64)
                .map_err(|e| anyhow::anyhow!(e))?;
            let ca = ca.f64().map_err(|e| anyhow::anyhow!(e))?;
            benford::analyse_column(ca.into_iter().flatten(), min_samples)
        } else {
            ColumnOutcome::Skipped(SkipReason::NotNumeric(column_kind(col.dtype())))
        };
        reports.push(ColumnReport {
            sheet: sheet.to_owned(),
            column: name,
            outcome,
        });
    }

    Ok(reports)
}

pub fn column_kind(dtype: &DataType) -> ColumnKind {
    if dtype.is_numeric() {
        ColumnKind::Numeric
    } else if dtype.is_temporal() {
        ColumnKind::Temporal
    } else if dtype.is_bool() {
        ColumnKind::Boolean
    } else {
        ColumnKind::Text
    }
}

/// Builds the descriptive profile of every sheet in the workbook.
pub fn run_profile(workbook: &Workbook) -> Result<ProfileResponse> {
    let mut sheets = Vec::new();
    for sheet in &workbook.sheets {
        let columns = profiling::profile_df(&sheet.data)
            .with_context(|| format!("Profiling failed for sheet '{}'", sheet.name))?;
        sheets.push(SheetProfile {
            sheet: sheet.name.clone(),
            row_count: sheet.data.height(),
            columns,
        });
    }

    Ok(ProfileResponse {
        file_name: workbook.file_name.clone(),
        path: workbook.path.clone(),
        sheets,
    })
}

//! Workbook loading.
//!
//! Input may be a multi-sheet spreadsheet (read with calamine) or a single
//! CSV/Parquet table (read with Polars); either way the rest of the crate
//! sees a [`Workbook`] of named sheets, each one a `DataFrame`.

use anyhow::{Context as _, Result};
use calamine::{Data, Reader as _, open_workbook_auto};
use polars::prelude::*;
use std::path::Path;

/// One sheet's table plus its name.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub name: String,
    pub data: DataFrame,
}

/// A loaded workbook: one or more named sheets in source order.
#[derive(Clone, Debug)]
pub struct Workbook {
    pub path: String,
    pub file_name: String,
    pub sheets: Vec<Sheet>,
}

pub fn load_workbook(path: &Path) -> Result<Workbook> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let sheets = match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_spreadsheet(path)?,
        "csv" => vec![Sheet {
            name: sheet_name_from(path),
            data: load_csv(path)?,
        }],
        "parquet" => vec![Sheet {
            name: sheet_name_from(path),
            data: load_parquet(path)?,
        }],
        _ => return Err(anyhow::anyhow!("Unsupported file extension: {ext}")),
    };

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("Unknown")
        .to_owned();

    Ok(Workbook {
        path: path.display().to_string(),
        file_name,
        sheets,
    })
}

fn load_csv(path: &Path) -> Result<DataFrame> {
    LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_has_header(true)
        .with_try_parse_dates(true)
        .finish()?
        .collect()
        .context("Failed to read CSV")
}

fn load_parquet(path: &Path) -> Result<DataFrame> {
    ParquetReader::new(std::fs::File::open(path)?)
        .finish()
        .context("Failed to read Parquet")
}

fn load_spreadsheet(path: &Path) -> Result<Vec<Sheet>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook {}", path.display()))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .with_context(|| format!("Failed to read sheet '{name}'"))?;
        let data = range_to_dataframe(&range)?;
        sheets.push(Sheet { name, data });
    }
    Ok(sheets)
}

/// Single-table formats become a one-sheet workbook named after the file.
fn sheet_name_from(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Sheet1")
        .to_owned()
}

/// Cell content after collapsing the spreadsheet cell types we care about.
/// Formula errors read as empty, the same as missing values.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Bool(bool),
    /// Milliseconds since the Unix epoch.
    DateTime(i64),
    Text(String),
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|naive| CellValue::DateTime(naive.and_utc().timestamp_millis()))
            .unwrap_or(CellValue::Empty),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                CellValue::Empty
            } else {
                CellValue::Text(trimmed.to_owned())
            }
        }
    }
}

/// Converts a calamine cell range into a `DataFrame`. The first row is the
/// header row; unnamed header cells fall back to positional names.
pub fn range_to_dataframe(range: &calamine::Range<Data>) -> Result<DataFrame> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(DataFrame::default());
    };

    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Data::String(s) if !s.trim().is_empty() => s.trim().to_owned(),
            Data::Empty => format!("column_{}", i + 1),
            other => other.to_string(),
        })
        .collect();

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(column) = cells.get_mut(i) {
                column.push(cell_value(cell));
            }
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(&cells)
        .map(|(name, values)| Column::from(column_series(name, values)))
        .collect();
    DataFrame::new(columns).map_err(|e| anyhow::anyhow!(e))
}

/// Builds a typed series from raw cells. A column is numeric, boolean or
/// datetime only when every non-empty cell agrees; mixed content falls back
/// to strings, and a wholly empty column becomes all-null Float64 so the
/// Benford pass reports it as lacking data rather than as non-numeric.
pub fn column_series(name: &str, cells: &[CellValue]) -> Series {
    let mut any = false;
    let mut all_number = true;
    let mut all_bool = true;
    let mut all_datetime = true;
    for cell in cells {
        match cell {
            CellValue::Empty => {}
            CellValue::Number(_) => {
                any = true;
                all_bool = false;
                all_datetime = false;
            }
            CellValue::Bool(_) => {
                any = true;
                all_number = false;
                all_datetime = false;
            }
            CellValue::DateTime(_) => {
                any = true;
                all_number = false;
                all_bool = false;
            }
            CellValue::Text(_) => {
                any = true;
                all_number = false;
                all_bool = false;
                all_datetime = false;
            }
        }
    }

    if !any {
        return Series::full_null(name.into(), cells.len(), &DataType::Float64);
    }

    if all_number {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|c| match c {
                CellValue::Number(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values);
    }

    if all_bool {
        let values: Vec<Option<bool>> = cells
            .iter()
            .map(|c| match c {
                CellValue::Bool(v) => Some(*v),
                _ => None,
            })
            .collect();
        return Series::new(name.into(), values);
    }

    if all_datetime {
        let values: Vec<Option<i64>> = cells
            .iter()
            .map(|c| match c {
                CellValue::DateTime(ms) => Some(*ms),
                _ => None,
            })
            .collect();
        let series = Series::new(name.into(), values);
        return match series.cast(&DataType::Datetime(TimeUnit::Milliseconds, None)) {
            Ok(casted) => casted,
            Err(_) => series,
        };
    }

    let values: Vec<Option<String>> = cells
        .iter()
        .map(|c| match c {
            CellValue::Empty => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(v) => Some(v.to_string()),
            CellValue::Bool(v) => Some(v.to_string()),
            CellValue::DateTime(ms) => Some(ms.to_string()),
        })
        .collect();
    Series::new(name.into(), values)
}

//! Descriptive statistical profiling for workbook columns.
//!
//! Produces the per-column summaries behind the column-statistics report:
//! central tendency and spread for numeric columns, date ranges for
//! temporal columns, frequency counts for boolean and text columns.

use super::types::{
    BooleanStats, ColumnKind, ColumnStats, ColumnSummary, NumericStats, TemporalStats, TextStats,
};
use anyhow::{Context as _, Result};
use polars::prelude::*;
use std::collections::HashMap;

pub fn profile_df(df: &DataFrame) -> Result<Vec<ColumnSummary>> {
    let row_count = df.height();
    let mut summaries = Vec::new();

    for col in df.get_columns() {
        let name = col.name().to_string();
        let nulls = col.null_count();
        let dtype = col.dtype();

        let (kind, stats) = if dtype.is_bool() {
            profile_boolean(col)
                .with_context(|| format!("Profiling failed for boolean column '{name}'"))?
        } else if dtype.is_numeric() {
            profile_numeric(col)
                .with_context(|| format!("Profiling failed for numeric column '{name}'"))?
        } else if dtype.is_temporal() {
            profile_temporal(col)
                .with_context(|| format!("Profiling failed for temporal column '{name}'"))?
        } else {
            profile_text(col)
                .with_context(|| format!("Profiling failed for text column '{name}'"))?
        };

        summaries.push(ColumnSummary {
            name,
            kind,
            count: row_count,
            nulls,
            stats,
        });
    }

    Ok(summaries)
}

pub fn profile_numeric(col: &Column) -> Result<(ColumnKind, ColumnStats)> {
    let series = col.as_materialized_series();
    let ca = series
        .cast(&DataType::Float64)
        .map_err(|e| anyhow::anyhow!(e))?;
    let ca = ca.f64().map_err(|e| anyhow::anyhow!(e))?;

    let distinct_count = series.n_unique().unwrap_or(0);
    let zero_count = ca.into_iter().flatten().filter(|&v| v == 0.0).count();
    let negative_count = ca.into_iter().flatten().filter(|&v| v < 0.0).count();
    let is_integer = ca.into_iter().flatten().all(|v| v == v.floor());

    Ok((
        ColumnKind::Numeric,
        ColumnStats::Numeric(NumericStats {
            min: ca.min(),
            max: ca.max(),
            mean: ca.mean(),
            median: ca.median(),
            std_dev: ca.std(1),
            distinct_count,
            zero_count,
            negative_count,
            is_integer,
        }),
    ))
}

pub fn profile_temporal(col: &Column) -> Result<(ColumnKind, ColumnStats)> {
    let series = col.as_materialized_series();
    let ca = series
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .map_err(|e| anyhow::anyhow!(e))?;
    let ca = ca.datetime().map_err(|e| anyhow::anyhow!(e))?;

    Ok((
        ColumnKind::Temporal,
        ColumnStats::Temporal(TemporalStats {
            min: ca.min().and_then(format_timestamp_ms),
            max: ca.max().and_then(format_timestamp_ms),
            distinct_count: series.n_unique().unwrap_or(0),
        }),
    ))
}

pub fn profile_boolean(col: &Column) -> Result<(ColumnKind, ColumnStats)> {
    let series = col.as_materialized_series();
    let ca = series.bool().map_err(|e| anyhow::anyhow!(e))?;
    let true_count = ca.sum().unwrap_or(0) as usize;
    let false_count = (ca.len() - ca.null_count()) - true_count;

    Ok((
        ColumnKind::Boolean,
        ColumnStats::Boolean(BooleanStats {
            true_count,
            false_count,
        }),
    ))
}

pub fn profile_text(col: &Column) -> Result<(ColumnKind, ColumnStats)> {
    let series = col.as_materialized_series();
    let s = if series.dtype() == &DataType::String {
        series.clone()
    } else {
        series
            .cast(&DataType::String)
            .map_err(|e| anyhow::anyhow!(e))?
    };
    let ca = s.str().map_err(|e| anyhow::anyhow!(e))?;

    let lengths = ca.str_len_chars();
    let min_length = lengths.min().unwrap_or(0) as usize;
    let max_length = lengths.max().unwrap_or(0) as usize;
    let avg_length = lengths.mean().unwrap_or(0.0);

    Ok((
        ColumnKind::Text,
        ColumnStats::Text(TextStats {
            distinct_count: series.n_unique().unwrap_or(0),
            top_value: top_value(ca),
            min_length,
            max_length,
            avg_length,
        }),
    ))
}

/// Most frequent non-null value; ties resolve to the lexically smallest
/// value so repeated runs report the same winner.
fn top_value(ca: &StringChunked) -> Option<(String, usize)> {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for value in ca.into_iter().flatten() {
        *freq.entry(value).or_insert(0) += 1;
    }
    freq.into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(value, count)| (value.to_owned(), count))
}

fn format_timestamp_ms(ms: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

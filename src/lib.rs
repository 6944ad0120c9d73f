//! # je-audit
//!
//! `je-audit` analyzes workbooks of journal-entry samples and writes audit
//! report artifacts: a Benford's-Law leading-digit analysis per numeric
//! column and a descriptive-statistics profile per column.
//!
//! ## Quick Start
//!
//! ```no_run
//! use je_audit::analyser::logic::{load_workbook, run_benford_analysis};
//!
//! # fn example() -> anyhow::Result<()> {
//! let workbook = load_workbook("je_samples.xlsx".as_ref())?;
//! let response = run_benford_analysis(&workbook, 10)?;
//!
//! for report in &response.reports {
//!     println!("{} / {}: {:?}", report.sheet, report.column, report.outcome);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`analyser::logic::benford`]: leading-digit extraction, expected
//!   distribution, chi-square, MAD and conformity classification
//! - [`analyser::logic::profiling`]: descriptive per-column statistics
//! - [`analyser::logic::io`]: workbook loading (XLSX via calamine, CSV and
//!   Parquet via Polars)
//! - [`report`]: Markdown/CSV artifact rendering
//! - [`config`]: run configuration with JSON override
//! - [`error`]: error types and handling utilities
//!
//! ## Determinism
//!
//! Sheets and columns are processed in source order and digits are always
//! reported 1 through 9, so repeated runs over identical input produce
//! byte-identical artifacts. Report files carry no timestamps.

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod utils;

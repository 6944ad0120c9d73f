//! Centralized error handling.
//!
//! A single error enum covers the failure categories the tool can hit, so
//! callers can pattern match instead of parsing strings:
//!
//! ```
//! use je_audit::error::AuditError;
//!
//! fn handle_error(err: AuditError) {
//!     match err {
//!         AuditError::Io(e) => eprintln!("I/O error: {e}"),
//!         AuditError::DataProcessing(msg) => eprintln!("Data error: {msg}"),
//!         _ => eprintln!("Other error: {err}"),
//!     }
//! }
//! ```
//!
//! `From` impls let `?` convert library errors automatically, and the
//! [`ResultExt`] trait adds a `.context()` method for attaching a message
//! to any error on its way up.

use std::fmt;

/// Main error type for audit operations.
#[derive(Debug)]
pub enum AuditError {
    /// I/O errors (file operations, directory creation).
    Io(std::io::Error),

    /// Tabular data errors (Polars, frame assembly).
    DataProcessing(String),

    /// Spreadsheet reading errors.
    Workbook(String),

    /// Configuration errors (unreadable or invalid config file).
    Config(String),

    /// File not found or invalid path.
    InvalidPath(String),

    /// Generic error with context.
    Other(String),
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Workbook(msg) => write!(f, "Workbook error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::prelude::PolarsError> for AuditError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<calamine::Error> for AuditError {
    fn from(err: calamine::Error) -> Self {
        Self::Workbook(err.to_string())
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Adds `.context()` to any `Result` whose error converts into
/// [`AuditError`].
pub trait ResultExt<T> {
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<AuditError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            AuditError::Other(format!("{msg}: {inner}"))
        })
    }
}

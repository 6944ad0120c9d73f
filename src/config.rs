//! Run configuration.
//!
//! A small JSON file can override the defaults; CLI flags in turn override
//! the file. Everything has a default so the tool runs with no config at
//! all.

use crate::analyser::logic::benford::DEFAULT_MIN_SAMPLES;
use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum number of valid values a column needs to be analyzed.
    pub min_sample_size: usize,
    /// Directory the report artifacts are written into.
    pub output_dir: PathBuf,
    /// How many columns the top-deviations table lists.
    pub top_deviations: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_sample_size: DEFAULT_MIN_SAMPLES,
            output_dir: PathBuf::from("benford_output"),
            top_deviations: 10,
        }
    }
}

pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    if !path.exists() {
        return Err(AuditError::InvalidPath(format!(
            "Config file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

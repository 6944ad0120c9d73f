use serde::{Deserialize, Serialize};

/// Broad classification of a column's content, derived from its dtype.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    Temporal,
    Boolean,
    Text,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Numeric => "Numeric",
            Self::Temporal => "Temporal",
            Self::Boolean => "Boolean",
            Self::Text => "Text",
        }
    }
}

/// Conformity classes derived from MAD, using the Nigrini cutoffs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conformity {
    Close,
    Acceptable,
    Marginal,
    Nonconformity,
}

impl Conformity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Close => "close conformity",
            Self::Acceptable => "acceptable conformity",
            Self::Marginal => "marginal conformity",
            Self::Nonconformity => "nonconformity",
        }
    }
}

/// One row of the per-digit breakdown for a single column.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DigitStat {
    pub digit: u8,
    pub count: usize,
    pub proportion: f64,
    pub expected_proportion: f64,
    /// Observed minus expected proportion; positive means the digit appears
    /// more often than Benford's Law predicts.
    pub difference: f64,
}

/// Full leading-digit analysis of one numeric column.
///
/// `digits` always holds nine entries in ascending digit order, so the
/// report output is stable across runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenfordResult {
    /// Values that survived filtering (nulls, non-finite and zeros removed).
    pub sample_count: usize,
    pub digits: Vec<DigitStat>,
    /// Goodness-of-fit over the nine digit categories (8 degrees of
    /// freedom). NaN when no values were retained.
    pub chi_square: f64,
    pub mad: f64,
    pub conformity: Conformity,
}

/// Why a column was excluded from the Benford analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    NotNumeric(ColumnKind),
    InsufficientSamples { valid: usize, required: usize },
}

impl SkipReason {
    pub fn describe(&self) -> String {
        match self {
            Self::NotNumeric(kind) => format!("not numeric ({})", kind.as_str()),
            Self::InsufficientSamples { valid, required } => {
                format!("insufficient data ({valid} valid values, {required} required)")
            }
        }
    }
}

/// Per-column result of the Benford pass. Skipped columns carry their
/// reason so the report never drops a column silently.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ColumnOutcome {
    Analyzed(BenfordResult),
    Skipped(SkipReason),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnReport {
    pub sheet: String,
    pub column: String,
    pub outcome: ColumnOutcome,
}

impl ColumnReport {
    /// MAD when analyzed, used for ranking the deviation table.
    pub fn mad(&self) -> Option<f64> {
        match &self.outcome {
            ColumnOutcome::Analyzed(result) => Some(result.mad),
            ColumnOutcome::Skipped(_) => None,
        }
    }
}

/// Aggregate counts over a whole run, consumed by the Markdown summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub analyzed: usize,
    pub skipped: usize,
    pub close: usize,
    pub acceptable: usize,
    pub marginal: usize,
    pub nonconforming: usize,
}

/// Everything the Benford report writer needs for one input workbook.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenfordResponse {
    pub file_name: String,
    pub path: String,
    pub sheet_count: usize,
    pub reports: Vec<ColumnReport>,
    pub summary: RunSummary,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NumericStats {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std_dev: Option<f64>,
    pub distinct_count: usize,
    pub zero_count: usize,
    pub negative_count: usize,
    pub is_integer: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemporalStats {
    pub min: Option<String>,
    pub max: Option<String>,
    pub distinct_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BooleanStats {
    pub true_count: usize,
    pub false_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextStats {
    pub distinct_count: usize,
    pub top_value: Option<(String, usize)>,
    pub min_length: usize,
    pub max_length: usize,
    pub avg_length: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Temporal(TemporalStats),
    Boolean(BooleanStats),
    Text(TextStats),
}

/// Descriptive profile of one column.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub kind: ColumnKind,
    pub count: usize,
    pub nulls: usize,
    pub stats: ColumnStats,
}

impl ColumnSummary {
    pub fn null_pct(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.nulls as f64 / self.count as f64) * 100.0
        }
    }
}

/// Descriptive profile of one sheet.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SheetProfile {
    pub sheet: String,
    pub row_count: usize,
    pub columns: Vec<ColumnSummary>,
}

/// Everything the descriptive-statistics report writer needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub file_name: String,
    pub path: String,
    pub sheets: Vec<SheetProfile>,
}

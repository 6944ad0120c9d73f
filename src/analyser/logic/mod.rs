pub mod analysis;
pub mod benford;
pub mod io;
pub mod profiling;
pub mod summary;
pub mod types;

pub use analysis::{analyse_sheet, column_kind, run_benford_analysis, run_profile};
pub use benford::{
    DEFAULT_MIN_SAMPLES, EXPECTED_PROPORTIONS, analyse_column, digit_distribution, leading_digit,
};
pub use io::{Sheet, Workbook, load_workbook};
pub use summary::{summarize_run, top_deviations};
pub use types::{
    BenfordResponse, BenfordResult, ColumnKind, ColumnOutcome, ColumnReport, ColumnStats,
    ColumnSummary, Conformity, DigitStat, ProfileResponse, RunSummary, SheetProfile, SkipReason,
};

use super::types::{ColumnOutcome, ColumnReport, Conformity, RunSummary};

pub fn summarize_run(reports: &[ColumnReport]) -> RunSummary {
    let mut summary = RunSummary::default();

    for report in reports {
        match &report.outcome {
            ColumnOutcome::Analyzed(result) => {
                summary.analyzed += 1;
                match result.conformity {
                    Conformity::Close => summary.close += 1,
                    Conformity::Acceptable => summary.acceptable += 1,
                    Conformity::Marginal => summary.marginal += 1,
                    Conformity::Nonconformity => summary.nonconforming += 1,
                }
            }
            ColumnOutcome::Skipped(_) => summary.skipped += 1,
        }
    }

    summary
}

/// Analyzed columns ranked by MAD descending. The sort is stable, so ties
/// keep their source order and repeated runs produce identical tables.
pub fn top_deviations(reports: &[ColumnReport], limit: usize) -> Vec<&ColumnReport> {
    let mut ranked: Vec<&ColumnReport> = reports
        .iter()
        .filter(|report| report.mad().is_some())
        .collect();
    ranked.sort_by(|a, b| {
        b.mad()
            .partial_cmp(&a.mad())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

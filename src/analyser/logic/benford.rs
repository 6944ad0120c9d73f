//! Leading-digit distribution analysis under Benford's Law.
//!
//! Benford's Law predicts that the first significant digit d of many
//! naturally occurring datasets appears with probability log10(1 + 1/d).
//! Journal-entry amounts that deviate strongly from this distribution are
//! flagged for review. The analysis here is pure computation: values in,
//! a [`ColumnOutcome`] out, no I/O.

use std::sync::LazyLock;

use super::types::{BenfordResult, ColumnOutcome, Conformity, DigitStat, SkipReason};

/// Columns with fewer valid values than this are skipped rather than
/// analyzed; chi-square on a handful of values is noise.
pub const DEFAULT_MIN_SAMPLES: usize = 10;

/// Nigrini MAD cutoffs for the conformity classes.
pub const MAD_CLOSE: f64 = 0.006;
pub const MAD_ACCEPTABLE: f64 = 0.012;
pub const MAD_MARGINAL: f64 = 0.015;

/// Expected proportions log10(1 + 1/d) for d in 1..=9, computed once.
/// The nine entries sum to 1.0.
pub static EXPECTED_PROPORTIONS: LazyLock<[f64; 9]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        let digit = (i + 1) as f64;
        (1.0 + 1.0 / digit).log10()
    })
});

impl Conformity {
    pub fn from_mad(mad: f64) -> Self {
        if mad < MAD_CLOSE {
            Self::Close
        } else if mad <= MAD_ACCEPTABLE {
            Self::Acceptable
        } else if mad <= MAD_MARGINAL {
            Self::Marginal
        } else {
            Self::Nonconformity
        }
    }
}

/// First significant decimal digit of `value`, or `None` when there is no
/// leading digit to speak of (zero, NaN, infinity). Sign is ignored.
///
/// Extracted from the fractional part of log10 rather than by repeated
/// scaling, so the result is independent of magnitude. `log10` of an exact
/// power of ten can land one ulp off, which leaves the normalized value a
/// hair under 10; such values are leading digit 1.
pub fn leading_digit(value: f64) -> Option<u8> {
    if !value.is_finite() || value == 0.0 {
        return None;
    }
    let log = value.abs().log10();
    let fraction = log - log.floor();
    let scaled = 10f64.powf(fraction);
    if scaled >= 10.0 - 1e-9 {
        return Some(1);
    }
    Some((scaled as u8).clamp(1, 9))
}

/// Runs the full leading-digit analysis over one column's values.
///
/// Null, non-finite and zero entries are dropped and signs are ignored
/// before digits are counted. Columns left with fewer than `min_samples`
/// values are reported as skipped, never analyzed.
pub fn analyse_column(
    values: impl IntoIterator<Item = f64>,
    min_samples: usize,
) -> ColumnOutcome {
    let digits: Vec<u8> = values.into_iter().filter_map(leading_digit).collect();
    if digits.len() < min_samples {
        return ColumnOutcome::Skipped(SkipReason::InsufficientSamples {
            valid: digits.len(),
            required: min_samples,
        });
    }
    ColumnOutcome::Analyzed(digit_distribution(&digits))
}

/// Observed-vs-expected distribution, chi-square and MAD for a set of
/// already-extracted leading digits.
pub fn digit_distribution(digits: &[u8]) -> BenfordResult {
    let total = digits.len();
    let mut counts = [0usize; 9];
    for &digit in digits {
        if (1..=9).contains(&digit) {
            counts[usize::from(digit) - 1] += 1;
        }
    }

    let mut chi_square = 0.0;
    let mut abs_dev_sum = 0.0;
    let mut table = Vec::with_capacity(9);
    for (i, &count) in counts.iter().enumerate() {
        let expected_proportion = EXPECTED_PROPORTIONS[i];
        let proportion = if total > 0 {
            count as f64 / total as f64
        } else {
            0.0
        };
        let expected_count = expected_proportion * total as f64;
        chi_square += if expected_count > 0.0 {
            let diff = count as f64 - expected_count;
            diff * diff / expected_count
        } else {
            f64::NAN
        };
        abs_dev_sum += (proportion - expected_proportion).abs();
        table.push(DigitStat {
            digit: (i + 1) as u8,
            count,
            proportion,
            expected_proportion,
            difference: proportion - expected_proportion,
        });
    }
    let mad = abs_dev_sum / 9.0;

    BenfordResult {
        sample_count: total,
        digits: table,
        chi_square,
        mad,
        conformity: Conformity::from_mad(mad),
    }
}

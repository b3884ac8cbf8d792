//! Descriptive statistics over emission value slices
//!
//! Every function here is total: empty input yields the documented
//! sentinel instead of NaN or an error, so callers displaying the value
//! need no special-case branch.

use crate::constants::EMPTY_AGGREGATE;

/// Arithmetic mean; `0.0` for empty input
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return EMPTY_AGGREGATE;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of the values; `0.0` for empty input
///
/// Values are sorted ascending; odd counts return the middle element,
/// even counts the mean of the two middle elements.
pub fn median(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return EMPTY_AGGREGATE;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value, or `None` when every value occurs exactly once
///
/// Frequency uses exact floating-point equality. When several values tie
/// for the highest count, the lowest of them is returned; grouping works
/// over the sorted values, so the tie-break is deterministic.
pub fn mode(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut best_value = sorted[0];
    let mut best_count = 1;
    let mut run_value = sorted[0];
    let mut run_count = 1;

    for &value in &sorted[1..] {
        if value == run_value {
            run_count += 1;
        } else {
            run_value = value;
            run_count = 1;
        }
        if run_count > best_count {
            best_count = run_count;
            best_value = run_value;
        }
    }

    if best_count > 1 { Some(best_value) } else { None }
}

/// Population standard deviation (`/N`) around the supplied mean
///
/// `0.0` when fewer than two values are present.
pub fn std_deviation(values: &[f64], mean: f64) -> f64 {
    let n = values.len();
    if n <= 1 {
        return 0.0;
    }

    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    variance.sqrt()
}

/// Minimum and maximum values; `(0.0, 0.0)` for empty input
///
/// The empty-input sentinel differs from the mathematically undefined
/// min/max of an empty set by design.
pub fn min_max(values: &[f64]) -> (f64, f64) {
    let mut iter = values.iter();
    let Some(&first) = iter.next() else {
        return (EMPTY_AGGREGATE, EMPTY_AGGREGATE);
    };

    iter.fold((first, first), |(min, max), &value| {
        (min.min(value), max.max(value))
    })
}

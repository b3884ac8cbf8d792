//! Two-country comparison over a shared year range

use serde::{Deserialize, Serialize};

use crate::app::models::{EmissionRecord, YearRange};

/// A country's maximum emission and the first year it occurred
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionPeak {
    /// Maximum emission value among the matching records
    pub value: f64,

    /// Earliest year at which the maximum occurs
    pub year: i32,
}

/// Result bundle of comparing two countries
///
/// `percent_difference` is `None` when the second country's average is
/// exactly zero: the percentage is mathematically undefined there, and an
/// explicit absence is returned instead of letting an infinite or NaN
/// value reach the caller. Peaks are `None` for a country with no
/// matching records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryComparison {
    /// First country, as queried
    pub country_a: String,

    /// Second country (the comparison baseline), as queried
    pub country_b: String,

    /// Year range the comparison was restricted to, if any
    pub range: Option<YearRange>,

    /// Average emission of the first country over the range
    pub average_a: f64,

    /// Average emission of the second country over the range
    pub average_b: f64,

    /// Signed percentage difference `(avg_a - avg_b) / avg_b * 100`,
    /// or `None` when `avg_b` is zero
    pub percent_difference: Option<f64>,

    /// Peak emission of the first country
    pub peak_a: Option<EmissionPeak>,

    /// Peak emission of the second country
    pub peak_b: Option<EmissionPeak>,
}

/// Find the maximum emission among records, earliest year among ties
pub fn peak(records: &[&EmissionRecord]) -> Option<EmissionPeak> {
    let mut best: Option<EmissionPeak> = None;

    for record in records {
        match &mut best {
            None => {
                best = Some(EmissionPeak {
                    value: record.emission,
                    year: record.year,
                });
            }
            Some(peak) => {
                if record.emission > peak.value
                    || (record.emission == peak.value && record.year < peak.year)
                {
                    peak.value = record.emission;
                    peak.year = record.year;
                }
            }
        }
    }

    best
}

/// Signed percentage difference of `a` against baseline `b`
///
/// `None` when the baseline is exactly zero.
pub fn percent_difference(avg_a: f64, avg_b: f64) -> Option<f64> {
    if avg_b == 0.0 {
        None
    } else {
        Some((avg_a - avg_b) / avg_b * 100.0)
    }
}

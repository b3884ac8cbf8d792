//! Tests for two-country comparison

use super::{analyser_for, record, sample_dataset};
use crate::app::models::{Dataset, YearRange};

#[test]
fn test_percentage_difference_signed() {
    let analyser = analyser_for(sample_dataset());
    let result = analyser.compare("Australia", "Brazil", None);

    assert_eq!(result.average_a, 13.5);
    assert_eq!(result.average_b, 2.0);
    // (13.5 - 2.0) / 2.0 * 100
    assert_eq!(result.percent_difference, Some(575.0));

    let reversed = analyser.compare("Brazil", "Australia", None);
    assert!(reversed.percent_difference.unwrap() < 0.0);
}

#[test]
fn test_zero_average_baseline_is_undefined() {
    let analyser = analyser_for(Dataset::new(
        Vec::new(),
        vec![record("A", 2000, 5.0), record("B", 2000, 0.0)],
    ));
    let result = analyser.compare("A", "B", None);

    assert_eq!(result.average_a, 5.0);
    assert_eq!(result.average_b, 0.0);
    // Explicitly undefined, never Infinity or NaN
    assert_eq!(result.percent_difference, None);
}

#[test]
fn test_missing_country_baseline_is_undefined() {
    let analyser = analyser_for(sample_dataset());
    let result = analyser.compare("Australia", "Nonexistent", None);

    assert_eq!(result.average_b, 0.0);
    assert_eq!(result.percent_difference, None);
    assert_eq!(result.peak_b, None);
}

#[test]
fn test_peaks_reported_per_country() {
    let analyser = analyser_for(sample_dataset());
    let result = analyser.compare("Australia", "Brazil", None);

    let peak_a = result.peak_a.unwrap();
    assert_eq!(peak_a.value, 15.0);
    assert_eq!(peak_a.year, 2000);

    let peak_b = result.peak_b.unwrap();
    assert_eq!(peak_b.value, 2.0);
    assert_eq!(peak_b.year, 2000);
}

#[test]
fn test_peak_tie_takes_earliest_year() {
    let analyser = analyser_for(Dataset::new(
        Vec::new(),
        vec![
            record("A", 2010, 7.0),
            record("A", 2000, 7.0),
            record("A", 2005, 3.0),
            record("B", 2000, 1.0),
        ],
    ));
    let peak = analyser.compare("A", "B", None).peak_a.unwrap();

    assert_eq!(peak.value, 7.0);
    assert_eq!(peak.year, 2000);
}

#[test]
fn test_comparison_respects_year_range() {
    let analyser = analyser_for(sample_dataset());
    let range = Some(YearRange::new(1995, 2005));
    let result = analyser.compare("Australia", "Brazil", range);

    // Only the 2000 observations are in range
    assert_eq!(result.average_a, 15.0);
    assert_eq!(result.average_b, 2.0);
    assert_eq!(result.range, range);
    assert_eq!(result.peak_a.unwrap().year, 2000);
}

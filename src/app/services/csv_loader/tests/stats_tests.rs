//! Tests for loading statistics

use crate::app::services::csv_loader::LoadStats;

#[test]
fn test_new_stats_are_empty() {
    let stats = LoadStats::new();
    assert_eq!(stats.total_rows, 0);
    assert_eq!(stats.rows_parsed, 0);
    assert_eq!(stats.rows_skipped, 0);
    assert!(stats.errors.is_empty());
}

#[test]
fn test_success_rate_with_rows() {
    let stats = LoadStats {
        total_rows: 4,
        rows_parsed: 3,
        rows_skipped: 1,
        errors: vec!["Row 2: bad year".to_string()],
    };
    assert_eq!(stats.success_rate(), 75.0);
    assert!(!stats.is_successful());
}

#[test]
fn test_success_rate_empty_is_full() {
    // Header-only input has nothing to reject
    let stats = LoadStats::new();
    assert_eq!(stats.success_rate(), 100.0);
    assert!(stats.is_successful());
}

#[test]
fn test_summary_mentions_counts() {
    let stats = LoadStats {
        total_rows: 10,
        rows_parsed: 9,
        rows_skipped: 1,
        errors: Vec::new(),
    };
    let summary = stats.summary();
    assert!(summary.contains("10 rows"));
    assert!(summary.contains("9 records"));
    assert!(summary.contains("Skipped: 1"));
}

#[test]
fn test_stats_serde_round_trip() {
    let stats = LoadStats {
        total_rows: 2,
        rows_parsed: 1,
        rows_skipped: 1,
        errors: vec!["Row 1: too short".to_string()],
    };
    let json = serde_json::to_string(&stats).unwrap();
    let deserialized: LoadStats = serde_json::from_str(&json).unwrap();
    assert_eq!(stats, deserialized);
}

//! Loading statistics and result structures for CSV dataset loading
//!
//! This module provides types for tracking row acceptance, skip counts,
//! and organising the loaded dataset for downstream analysis.

use crate::app::models::Dataset;

/// Loading result with the parsed dataset and basic statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// The dataset built from accepted rows
    pub dataset: Dataset,

    /// Basic loading statistics
    pub stats: LoadStats,
}

impl LoadResult {
    /// Number of records in the loaded dataset
    pub fn record_count(&self) -> usize {
        self.dataset.len()
    }

    /// Summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}

/// Simple loading statistics
///
/// Malformed rows never abort a load; they are counted here so callers
/// (and tests) can assert exactly how many rows were skipped and why.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoadStats {
    /// Total number of data rows encountered (header excluded)
    pub total_rows: usize,

    /// Number of rows accepted into the dataset
    pub rows_parsed: usize,

    /// Number of rows skipped (wrong field count or unparseable field)
    pub rows_skipped: usize,

    /// Sampled skip reasons for debugging, capped by the loader config
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            rows_parsed: 0,
            rows_skipped: 0,
            errors: Vec::new(),
        }
    }

    /// Calculate acceptance rate as a percentage
    ///
    /// A header-only file has no rows to accept and counts as fully
    /// successful.
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            100.0
        } else {
            (self.rows_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Check if loading was mostly successful (>90% acceptance rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// Summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Load summary: {} rows -> {} records ({:.1}% accepted) | Skipped: {}",
            self.total_rows,
            self.rows_parsed,
            self.success_rate(),
            self.rows_skipped
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

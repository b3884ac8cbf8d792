//! Core CSV loader implementation
//!
//! This module provides the main loader orchestration: file reading, the
//! empty-input check, and the row loop that applies the skip-and-count
//! policy.

use std::path::Path;
use tracing::{debug, info};

use super::record_parser::parse_emission_record;
use super::stats::{LoadResult, LoadStats};
use crate::app::models::Dataset;
use crate::config::LoaderConfig;
use crate::{Error, Result};

/// CSV loader for emission dataset files
///
/// The loader focuses on essential functionality:
/// - Positional `Country,Year,Emission` extraction with type conversion
/// - Skip-and-count handling of malformed rows (never fatal)
/// - A fresh owned [`Dataset`] per load, so callers replace their prior
///   dataset atomically and never observe a partial one
#[derive(Debug, Default)]
pub struct CsvLoader {
    config: LoaderConfig,
}

impl CsvLoader {
    /// Create a loader with a validated configuration
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parse an emission CSV file and return the dataset with statistics
    ///
    /// Safe to invoke off the caller's primary thread; the result (or
    /// failure) is delivered as a single completion, never as partial
    /// output. Fails with [`Error::EmptyInput`] when the file contains no
    /// lines at all; a header-only file yields an empty dataset without
    /// error.
    pub async fn parse_file(&self, file_path: &Path) -> Result<LoadResult> {
        info!("Loading emission CSV file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        let result = self.parse_str(&content, &file_path.display().to_string())?;
        info!("{}", result.summary());
        Ok(result)
    }

    /// Parse emission CSV content from an in-memory string
    ///
    /// `source_label` names the source in errors and logs (a path for
    /// files, any label for synthetic input).
    pub fn parse_str(&self, content: &str, source_label: &str) -> Result<LoadResult> {
        if content.lines().next().is_none() {
            return Err(Error::empty_input(source_label));
        }

        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        // First line defines the field names; recorded verbatim, not
        // interpreted (canonical layout is positional)
        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| Error::csv_parsing("Failed to read CSV header line", Some(e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        debug!("Header columns: {:?}", headers);

        for result in csv_reader.records() {
            stats.total_rows += 1;

            match result {
                Ok(record) => match parse_emission_record(&record, &self.config) {
                    Ok(emission_record) => {
                        records.push(emission_record);
                        stats.rows_parsed += 1;
                    }
                    Err(e) => {
                        let message = format!("Row {}: {}", stats.total_rows, e);
                        self.record_skip(&mut stats, message);
                    }
                },
                Err(e) => {
                    let message =
                        format!("CSV decode error at row {}: {}", stats.total_rows, e);
                    self.record_skip(&mut stats, message);
                }
            }
        }

        Ok(LoadResult {
            dataset: Dataset::new(headers, records),
            stats,
        })
    }

    /// Count a skipped row, retaining the reason up to the configured cap
    fn record_skip(&self, stats: &mut LoadStats, message: String) {
        stats.rows_skipped += 1;
        debug!("Skipped row: {}", message);
        if stats.errors.len() < self.config.max_error_samples {
            stats.errors.push(message);
        }
    }
}

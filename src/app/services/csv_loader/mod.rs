//! CSV loader for per-country emission datasets
//!
//! This module provides a loader for comma-separated emission files:
//! a header line followed by `Country,Year,Emission` data rows, read
//! positionally. Rows with too few fields or unparseable numeric fields
//! are skipped and counted, never fatal to the load; only whole-file
//! failures (empty input, unreadable file) surface as errors.
//!
//! ## Architecture
//!
//! - [`loader`] - Core loading orchestration and file handling
//! - [`record_parser`] - Individual CSV row processing
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use emissions_analyser::{CsvLoader, LoaderConfig};
//!
//! # async fn example() -> emissions_analyser::Result<()> {
//! let loader = CsvLoader::new(LoaderConfig::default())?;
//! let result = loader.parse_file(std::path::Path::new("emissions.csv")).await?;
//!
//! println!("Loaded {} records from {} rows",
//!          result.stats.rows_parsed,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use loader::CsvLoader;
pub use stats::{LoadResult, LoadStats};

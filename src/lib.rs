//! Emissions Analyser Library
//!
//! A Rust library for loading per-country CO₂ emission datasets from CSV
//! files and computing descriptive statistics over them.
//!
//! This library provides tools for:
//! - Parsing `Country,Year,Emission` CSV files into typed records with
//!   skip-and-count handling of malformed rows
//! - Querying the loaded dataset (distinct countries, per-country series,
//!   year bounds)
//! - Computing per-country statistics (mean, median, mode, min/max,
//!   population standard deviation, total change) over an optional
//!   inclusive year range
//! - Comparing two countries (percentage difference, peak value and year)
//! - Read-through caching of summary bundles, invalidated on reload
//!
//! The graphical front end (charts, selection widgets, export buttons) is
//! an external consumer of this crate and is not part of it.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analysis;
        pub mod csv_loader;
    }
}

// Re-export commonly used types
pub use app::models::{Dataset, EmissionRecord, YearRange};
pub use app::services::analysis::{Analyser, CountryComparison, CountrySummary};
pub use app::services::csv_loader::{CsvLoader, LoadResult, LoadStats};
pub use config::LoaderConfig;

/// Result type alias for the emissions analyser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dataset loading operations
///
/// Only whole-file failures are represented here. Malformed rows are
/// absorbed into [`LoadStats`] during loading, and every statistics
/// operation is total (defined for empty input), so the analysis service
/// never produces an `Error`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source contained no lines at all (not even a header)
    #[error("Empty input: '{path}' contains no lines")]
    EmptyInput { path: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error outside the per-row skip policy
    #[error("CSV parsing error: {message}")]
    CsvParsing {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an empty-input error for a source path or label
    pub fn empty_input(path: impl Into<String>) -> Self {
        Self::EmptyInput { path: path.into() }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::CsvParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

//! Test utilities and fixtures for CSV loader testing
//!
//! This module provides common fixture builders and helper functions used
//! across the loader test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::config::LoaderConfig;
use crate::app::services::csv_loader::CsvLoader;

mod record_parser_tests;
mod stats_tests;

/// Helper to create a loader with default configuration
pub fn default_loader() -> CsvLoader {
    CsvLoader::new(LoaderConfig::default()).unwrap()
}

/// Helper to create a well-formed test CSV document
pub fn create_test_csv() -> String {
    "Country,Year,Emission\n\
     Australia,2000,15.0\n\
     Australia,2010,12.0\n\
     Brazil,2000,2.0\n"
        .to_string()
}

/// Helper to create a CSV document with malformed rows mixed in
///
/// Three rows are broken (short row, bad year, bad emission); the three
/// well-formed rows around them must survive.
pub fn create_malformed_csv() -> String {
    "Country,Year,Emission\n\
     Australia,2000,15.0\n\
     Australia,2005\n\
     Australia,year?,13.0\n\
     Brazil,2000,n/a\n\
     Australia,2010,12.0\n\
     Brazil,2010,2.5\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

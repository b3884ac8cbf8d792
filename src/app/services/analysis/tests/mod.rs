//! Test utilities and fixtures for the statistics engine

use std::sync::Arc;

use crate::app::models::{Dataset, EmissionRecord};
use crate::app::services::analysis::Analyser;

mod comparison_tests;

/// Helper to build a record without the Result ceremony
pub fn record(country: &str, year: i32, emission: f64) -> EmissionRecord {
    EmissionRecord::new(country.to_string(), year, emission).unwrap()
}

/// The reference scenario: two Australia observations, one Brazil
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        vec![
            "Country".to_string(),
            "Year".to_string(),
            "Emission".to_string(),
        ],
        vec![
            record("Australia", 2000, 15.0),
            record("Australia", 2010, 12.0),
            record("Brazil", 2000, 2.0),
        ],
    )
}

/// Helper to build an analyser over a dataset
pub fn analyser_for(dataset: Dataset) -> Analyser {
    Analyser::new(Arc::new(dataset))
}

//! Data models for emission datasets
//!
//! This module contains the core data structures for representing
//! per-country, per-year CO₂ emission observations and the in-memory
//! dataset produced by one load operation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Error, Result};

// =============================================================================
// Emission Record
// =============================================================================

/// A single emission observation: one country, one year, one value
///
/// Records are immutable once constructed. The country field holds the
/// display form read from the file (case preserved); all filtering
/// comparisons are case-insensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    /// Country name as it appeared in the source file
    pub country: String,

    /// Observation year. No bounds are enforced; historical datasets may
    /// reach back before 1900.
    pub year: i32,

    /// Per-capita CO₂ emission value. Any finite value is accepted so
    /// malformed but parseable input never aborts a load.
    pub emission: f64,
}

impl EmissionRecord {
    /// Create a new record with validation
    pub fn new(country: String, year: i32, emission: f64) -> Result<Self> {
        let record = Self {
            country,
            year,
            emission,
        };
        record.validate()?;
        Ok(record)
    }

    /// Validate record data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.country.trim().is_empty() {
            return Err(Error::data_validation(
                "Country name cannot be empty".to_string(),
            ));
        }
        if !self.emission.is_finite() {
            return Err(Error::data_validation(format!(
                "Emission value must be finite, got {}",
                self.emission
            )));
        }
        Ok(())
    }

    /// Case-insensitive match against a country name
    pub fn matches_country(&self, name: &str) -> bool {
        self.country.to_lowercase() == name.to_lowercase()
    }
}

// =============================================================================
// Year Range
// =============================================================================

/// An inclusive `[min, max]` year filter applied before aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    /// First year included in the range
    pub min: i32,

    /// Last year included in the range
    pub max: i32,
}

impl YearRange {
    /// Create a range; reversed bounds are normalised
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Whether a year falls within the range (inclusive on both ends)
    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// The full in-memory dataset produced by one load operation
///
/// Holds every accepted record in file order (duplicates by country and
/// year are preserved) plus the column header names read from the first
/// line of input. A new load builds a fresh `Dataset`; there is no merge
/// or append mode, so callers never observe a partially replaced dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Column header names from the first input line, in file order
    pub headers: Vec<String>,

    /// Accepted records in file order
    pub records: Vec<EmissionRecord>,
}

impl Dataset {
    /// Create a dataset from parsed headers and records
    pub fn new(headers: Vec<String>, records: Vec<EmissionRecord>) -> Self {
        Self { headers, records }
    }

    /// Create an empty dataset (no headers, no records)
    pub fn empty() -> Self {
        Self {
            headers: Vec::new(),
            records: Vec::new(),
        }
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct country names in ascending lexicographic order
    ///
    /// Countries are deduplicated case-insensitively; the display form of
    /// the first occurrence wins. The deterministic order keeps selection
    /// widgets stable and testable.
    pub fn countries(&self) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut names: Vec<String> = Vec::new();

        for record in &self.records {
            if seen.insert(record.country.to_lowercase()) {
                names.push(record.country.clone());
            }
        }

        names.sort();
        names
    }

    /// All records for a country, case-insensitive exact match, file order
    ///
    /// Returns an empty vector (not an error) when no record matches.
    /// Records are not sorted by year; callers sort when they need a
    /// chronological series.
    pub fn records_for_country(&self, name: &str) -> Vec<&EmissionRecord> {
        let name_lower = name.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.country.to_lowercase() == name_lower)
            .collect()
    }

    /// All records for a given year across every country, file order
    pub fn records_in_year(&self, year: i32) -> Vec<&EmissionRecord> {
        self.records
            .iter()
            .filter(|record| record.year == year)
            .collect()
    }

    /// Minimum and maximum year among matching records
    ///
    /// With `Some(country)` only that country's records are considered,
    /// otherwise the whole dataset. `None` is the sentinel for "no
    /// matching records"; range-selection UIs use it to disable their
    /// controls rather than show a fabricated span.
    pub fn year_bounds(&self, country: Option<&str>) -> Option<(i32, i32)> {
        let country_lower = country.map(str::to_lowercase);
        let years = self.records.iter().filter_map(|record| {
            match &country_lower {
                Some(name) if record.country.to_lowercase() != *name => None,
                _ => Some(record.year),
            }
        });

        years.fold(None, |bounds, year| match bounds {
            None => Some((year, year)),
            Some((min, max)) => Some((min.min(year), max.max(year))),
        })
    }

    /// Render a country's series back to canonical CSV
    ///
    /// Produces a `Country,Year,Emission` document sorted by year (file
    /// order preserved within a duplicated year), restricted to the given
    /// range when one is supplied. Used by the export affordance of the
    /// GUI collaborator.
    pub fn to_csv_string(&self, country: &str, range: Option<YearRange>) -> String {
        let mut records = self.records_for_country(country);
        if let Some(range) = range {
            records.retain(|record| range.contains(record.year));
        }
        records.sort_by_key(|record| record.year);

        let mut out = String::from("Country,Year,Emission\n");
        for record in records {
            out.push_str(&format!(
                "{},{},{}\n",
                record.country, record.year, record.emission
            ));
        }
        out
    }
}

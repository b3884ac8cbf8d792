//! Statistics engine for loaded emission datasets
//!
//! This module computes aggregate and comparative statistics over the
//! records a [`Dataset`](crate::Dataset) exposes, optionally restricted
//! by an inclusive year range. Every operation is total: empty or
//! non-matching selections return documented sentinels (`0.0`, `None`)
//! instead of NaN, infinity, or errors.
//!
//! ## Architecture
//!
//! - [`descriptive`] - Total statistics functions over value slices
//! - [`analyser`] - Per-country operations and the cached summary bundle
//! - [`comparison`] - Two-country comparison result types
//! - [`cache`] - Structured-key read-through summary cache
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use emissions_analyser::{Analyser, Dataset, YearRange};
//!
//! let analyser = Analyser::new(Arc::new(Dataset::empty()));
//! let avg = analyser.average_emission("Australia", Some(YearRange::new(2000, 2010)));
//! assert_eq!(avg, 0.0); // no records: sentinel, not NaN
//! ```

pub mod analyser;
pub mod cache;
pub mod comparison;
pub mod descriptive;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use analyser::{Analyser, CountrySummary};
pub use cache::{StatsCache, StatsKey};
pub use comparison::{CountryComparison, EmissionPeak};

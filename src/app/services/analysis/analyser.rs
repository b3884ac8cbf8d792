//! Statistics engine over a loaded dataset snapshot
//!
//! The analyser holds an `Arc` snapshot of the dataset it was built
//! against and computes every statistic from that snapshot. Replacing
//! the snapshot after a reload clears the summary cache in the same
//! call, so no stale per-country statistics survive.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cache::{StatsCache, StatsKey};
use super::comparison::{self, CountryComparison};
use super::descriptive;
use crate::app::models::{Dataset, EmissionRecord, YearRange};
use crate::constants::EMPTY_AGGREGATE;

/// Per-country statistics bundle for the stats panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    /// Country as queried
    pub country: String,

    /// Year range the summary was restricted to, if any
    pub range: Option<YearRange>,

    /// Number of matching records
    pub count: usize,

    /// Arithmetic mean emission
    pub mean: f64,

    /// Median emission
    pub median: f64,

    /// Most frequent emission value; `None` when nothing repeats
    pub mode: Option<f64>,

    /// Minimum emission
    pub min: f64,

    /// Maximum emission
    pub max: f64,

    /// Population standard deviation
    pub std_deviation: f64,

    /// First and last year among the matching records
    pub year_span: Option<(i32, i32)>,

    /// Last value minus first value of the year-sorted series;
    /// `0.0` with fewer than two records
    pub total_change: f64,
}

/// Statistics engine over one dataset snapshot
#[derive(Debug)]
pub struct Analyser {
    dataset: Arc<Dataset>,
    cache: StatsCache,
}

impl Analyser {
    /// Create an analyser over a dataset snapshot
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            cache: StatsCache::new(),
        }
    }

    /// The dataset snapshot currently being analysed
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Swap in a freshly loaded dataset and invalidate the whole cache
    pub fn replace_dataset(&mut self, dataset: Arc<Dataset>) {
        debug!(
            "Replacing dataset snapshot ({} -> {} records), clearing {} cached summaries",
            self.dataset.len(),
            dataset.len(),
            self.cache.len()
        );
        self.dataset = dataset;
        self.cache.clear();
    }

    /// Matching records for a country, range-filtered, in file order
    fn filtered_records(&self, country: &str, range: Option<YearRange>) -> Vec<&EmissionRecord> {
        let mut records = self.dataset.records_for_country(country);
        if let Some(range) = range {
            records.retain(|record| range.contains(record.year));
        }
        records
    }

    /// Emission values for a country, range-filtered, in file order
    pub fn emissions_for(&self, country: &str, range: Option<YearRange>) -> Vec<f64> {
        self.filtered_records(country, range)
            .iter()
            .map(|record| record.emission)
            .collect()
    }

    /// Arithmetic mean emission; `0.0` when no records match
    pub fn average_emission(&self, country: &str, range: Option<YearRange>) -> f64 {
        descriptive::mean(&self.emissions_for(country, range))
    }

    /// Emission in an exact year; `0.0` when no record matches
    ///
    /// With duplicate records for the same country and year, the first in
    /// file order wins.
    pub fn emission_in_year(&self, country: &str, year: i32) -> f64 {
        self.dataset
            .records_for_country(country)
            .iter()
            .find(|record| record.year == year)
            .map(|record| record.emission)
            .unwrap_or(EMPTY_AGGREGATE)
    }

    /// Minimum and maximum emission; `(0.0, 0.0)` when no records match
    pub fn min_max_emission(&self, country: &str, range: Option<YearRange>) -> (f64, f64) {
        descriptive::min_max(&self.emissions_for(country, range))
    }

    /// Year bounds for a country, or the whole dataset with `None`
    pub fn year_bounds(&self, country: Option<&str>) -> Option<(i32, i32)> {
        self.dataset.year_bounds(country)
    }

    /// Mean emission per country across the whole dataset, ascending by
    /// country name
    pub fn average_by_country(&self) -> BTreeMap<String, f64> {
        self.dataset
            .countries()
            .into_iter()
            .map(|country| {
                let average = self.average_emission(&country, None);
                (country, average)
            })
            .collect()
    }

    /// Per-country summary bundle, read-through cached by selection
    ///
    /// On a cache miss the summary is computed and stored; hits return
    /// the stored bundle unchanged. The cache is invalidated in full by
    /// [`replace_dataset`](Self::replace_dataset).
    pub fn summary(&mut self, country: &str, range: Option<YearRange>) -> CountrySummary {
        let key = StatsKey::new(country, range);
        if let Some(summary) = self.cache.get(&key) {
            return summary.clone();
        }

        let summary = self.compute_summary(country, range);
        self.cache.insert(key, summary.clone());
        summary
    }

    /// Compute a summary bundle without touching the cache
    pub fn compute_summary(&self, country: &str, range: Option<YearRange>) -> CountrySummary {
        let mut records = self.filtered_records(country, range);
        // Stable sort: file order is preserved within a duplicated year
        records.sort_by_key(|record| record.year);

        let values: Vec<f64> = records.iter().map(|record| record.emission).collect();
        let mean = descriptive::mean(&values);
        let (min, max) = descriptive::min_max(&values);

        let year_span = records
            .first()
            .zip(records.last())
            .map(|(first, last)| (first.year, last.year));
        let total_change = match (records.first(), records.last()) {
            (Some(first), Some(last)) if records.len() > 1 => last.emission - first.emission,
            _ => 0.0,
        };

        CountrySummary {
            country: country.to_string(),
            range,
            count: values.len(),
            mean,
            median: descriptive::median(&values),
            mode: descriptive::mode(&values),
            min,
            max,
            std_deviation: descriptive::std_deviation(&values, mean),
            year_span,
            total_change,
        }
    }

    /// Compare two countries over an optional shared year range
    ///
    /// Total function: a zero-average baseline yields
    /// `percent_difference: None` rather than an error or infinity.
    pub fn compare(
        &self,
        country_a: &str,
        country_b: &str,
        range: Option<YearRange>,
    ) -> CountryComparison {
        let records_a = self.filtered_records(country_a, range);
        let records_b = self.filtered_records(country_b, range);

        let values_a: Vec<f64> = records_a.iter().map(|record| record.emission).collect();
        let values_b: Vec<f64> = records_b.iter().map(|record| record.emission).collect();

        let average_a = descriptive::mean(&values_a);
        let average_b = descriptive::mean(&values_b);

        CountryComparison {
            country_a: country_a.to_string(),
            country_b: country_b.to_string(),
            range,
            average_a,
            average_b,
            percent_difference: comparison::percent_difference(average_a, average_b),
            peak_a: comparison::peak(&records_a),
            peak_b: comparison::peak(&records_b),
        }
    }

    /// Number of summaries currently cached (diagnostic)
    pub fn cached_summaries(&self) -> usize {
        self.cache.len()
    }
}

//! Read-through cache for per-country summary bundles
//!
//! Keys are structured (country plus optional year range) rather than
//! concatenated strings, so distinct selections can never collide. The
//! cache has no eviction policy; it is cleared wholesale whenever the
//! analyser's dataset snapshot is replaced, so stale statistics never
//! survive a reload.

use std::collections::HashMap;

use super::analyser::CountrySummary;
use crate::app::models::YearRange;

/// Composite cache key: lowercased country name plus optional year range
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsKey {
    country: String,
    range: Option<YearRange>,
}

impl StatsKey {
    /// Build a key; the country is lowercased so case-insensitive queries
    /// share one entry
    pub fn new(country: &str, range: Option<YearRange>) -> Self {
        Self {
            country: country.to_lowercase(),
            range,
        }
    }
}

/// Cache of computed summary bundles, keyed by selection
#[derive(Debug, Default)]
pub struct StatsCache {
    entries: HashMap<StatsKey, CountrySummary>,
}

impl StatsCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored summary
    pub fn get(&self, key: &StatsKey) -> Option<&CountrySummary> {
        self.entries.get(key)
    }

    /// Store a computed summary
    pub fn insert(&mut self, key: StatsKey, summary: CountrySummary) {
        self.entries.insert(key, summary);
    }

    /// Drop every entry (full invalidation on dataset replacement)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

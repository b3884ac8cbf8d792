//! Application constants for the emissions analyser
//!
//! This module contains the canonical column layout, default values, and
//! sentinels used throughout the loader and analysis services.

// =============================================================================
// Canonical CSV Layout
// =============================================================================

/// Canonical column layout: `Country,Year,Emission`, read positionally.
/// The header line is recorded but not interpreted; any columns beyond the
/// third are ignored.
pub mod columns {
    /// Country name column index
    pub const COUNTRY: usize = 0;

    /// Observation year column index
    pub const YEAR: usize = 1;

    /// Per-capita emission value column index
    pub const EMISSION: usize = 2;
}

/// Minimum number of fields a data row must have to be accepted
pub const MIN_FIELDS: usize = 3;

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

// =============================================================================
// Loader Defaults
// =============================================================================

/// Default cap on the number of skip-reason samples retained in
/// [`LoadStats`](crate::LoadStats). Skips beyond the cap are still
/// counted, only their messages are dropped.
pub const DEFAULT_MAX_ERROR_SAMPLES: usize = 100;

// =============================================================================
// Statistical Sentinels
// =============================================================================

/// Sentinel returned by numeric aggregates when no records match.
/// Chosen so every statistics operation is total (never NaN, never an
/// error) for empty input.
pub const EMPTY_AGGREGATE: f64 = 0.0;

//! Configuration management and validation.
//!
//! Provides the configuration structure for the CSV loader: delimiter,
//! row-acceptance threshold, and the cap on retained skip-reason samples.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_MAX_ERROR_SAMPLES, MIN_FIELDS};
use crate::{Error, Result};

/// Configuration for [`CsvLoader`](crate::CsvLoader)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Field delimiter (comma for the canonical layout)
    pub delimiter: u8,

    /// Minimum number of fields a data row must have to be accepted;
    /// rows with fewer fields are skipped and counted
    pub min_fields: usize,

    /// Maximum number of skip-reason messages retained in
    /// [`LoadStats`](crate::LoadStats); skips past the cap are counted
    /// without a message
    pub max_error_samples: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            min_fields: MIN_FIELDS,
            max_error_samples: DEFAULT_MAX_ERROR_SAMPLES,
        }
    }
}

impl LoaderConfig {
    /// Create configuration with a custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Create configuration with a custom error-sample cap
    pub fn with_max_error_samples(mut self, max_error_samples: usize) -> Self {
        self.max_error_samples = max_error_samples;
        self
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_fields < MIN_FIELDS {
            return Err(Error::configuration(format!(
                "min_fields must be at least {} to cover the Country,Year,Emission layout (got {})",
                MIN_FIELDS, self.min_fields
            )));
        }
        Ok(())
    }
}

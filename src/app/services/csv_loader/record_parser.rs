//! Individual CSV row parsing for emission datasets
//!
//! This module handles conversion of a single CSV row into a typed
//! [`EmissionRecord`], with proper error reporting for the loader's
//! skip-and-count policy.

use csv::StringRecord;

use crate::app::models::EmissionRecord;
use crate::config::LoaderConfig;
use crate::constants::columns;
use crate::{Error, Result};

/// Parse a single emission record from a CSV row
///
/// Applies the canonical positional layout: country in the first field,
/// year in the second, emission in the third. Fields beyond the third are
/// ignored. Any `Err` returned here is a per-row skip, never fatal to the
/// whole load.
pub fn parse_emission_record(record: &StringRecord, config: &LoaderConfig) -> Result<EmissionRecord> {
    if record.len() < config.min_fields {
        return Err(Error::data_validation(format!(
            "Row has {} fields, expected at least {}",
            record.len(),
            config.min_fields
        )));
    }

    let country = get_required_field(record, columns::COUNTRY, "country")?;
    let year = parse_year(record, columns::YEAR)?;
    let emission = parse_emission(record, columns::EMISSION)?;

    EmissionRecord::new(country.to_string(), year, emission)
}

/// Parse the year field as an integer
fn parse_year(record: &StringRecord, index: usize) -> Result<i32> {
    let value_str = get_required_field(record, index, "year")?;

    value_str.parse::<i32>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid integer format for year: '{}' ({})",
            value_str, e
        ))
    })
}

/// Parse the emission field as a floating-point number
fn parse_emission(record: &StringRecord, index: usize) -> Result<f64> {
    let value_str = get_required_field(record, index, "emission")?;

    value_str.parse::<f64>().map_err(|e| {
        Error::data_validation(format!(
            "Invalid number format for emission: '{}' ({})",
            value_str, e
        ))
    })
}

/// Get a required field value from a CSV row, trimmed of surrounding
/// whitespace
fn get_required_field<'a>(
    record: &'a StringRecord,
    index: usize,
    field_name: &str,
) -> Result<&'a str> {
    let value = record.get(index).ok_or_else(|| {
        Error::data_validation(format!("No value for required column '{}'", field_name))
    })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::data_validation(format!(
            "Empty value for required column '{}'",
            field_name
        )));
    }

    Ok(trimmed)
}

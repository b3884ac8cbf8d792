//! Tests for individual row parsing

use csv::StringRecord;

use crate::config::LoaderConfig;
use crate::app::services::csv_loader::record_parser::parse_emission_record;

fn row(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

fn config() -> LoaderConfig {
    LoaderConfig::default()
}

#[test]
fn test_well_formed_row() {
    let record = parse_emission_record(&row(&["Australia", "2000", "15.0"]), &config()).unwrap();
    assert_eq!(record.country, "Australia");
    assert_eq!(record.year, 2000);
    assert_eq!(record.emission, 15.0);
}

#[test]
fn test_row_with_extra_fields_accepted() {
    let record =
        parse_emission_record(&row(&["Brazil", "1990", "1.4", "OWID", "x"]), &config()).unwrap();
    assert_eq!(record.country, "Brazil");
    assert_eq!(record.year, 1990);
}

#[test]
fn test_too_few_fields_rejected() {
    let err = parse_emission_record(&row(&["Australia", "2000"]), &config()).unwrap_err();
    assert!(err.to_string().contains("expected at least 3"));
}

#[test]
fn test_unparseable_year_rejected() {
    let err = parse_emission_record(&row(&["Australia", "MMXX", "15.0"]), &config()).unwrap_err();
    assert!(err.to_string().contains("year"));
}

#[test]
fn test_unparseable_emission_rejected() {
    // Skip-on-parse-failure: a bad emission never becomes 0 in aggregates
    let err = parse_emission_record(&row(&["Australia", "2000", "n/a"]), &config()).unwrap_err();
    assert!(err.to_string().contains("emission"));
}

#[test]
fn test_empty_country_rejected() {
    let err = parse_emission_record(&row(&["  ", "2000", "15.0"]), &config()).unwrap_err();
    assert!(err.to_string().contains("country"));
}

#[test]
fn test_negative_year_accepted() {
    let record = parse_emission_record(&row(&["Rome", "-44", "0.0"]), &config()).unwrap();
    assert_eq!(record.year, -44);
}

#[test]
fn test_fields_are_trimmed() {
    let record =
        parse_emission_record(&row(&[" Australia ", " 2000 ", " 15.0 "]), &config()).unwrap();
    assert_eq!(record.country, "Australia");
    assert_eq!(record.year, 2000);
    assert_eq!(record.emission, 15.0);
}

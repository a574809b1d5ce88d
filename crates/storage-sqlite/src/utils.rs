//! Conversion helpers shared by the storage models.
//!
//! Decimals and domain dates are stored as TEXT. Values written by this
//! crate always parse back; the tolerant fallbacks only matter for rows
//! edited out-of-band.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a stored decimal column, falling back to zero on garbage.
pub fn parse_decimal_text(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(e) => {
            log::error!(
                "Failed to parse {} '{}' as Decimal (err: {}). Falling back to ZERO.",
                field_name,
                value,
                e
            );
            Decimal::ZERO
        }
    }
}

pub fn decimal_to_text(value: Decimal) -> String {
    value.to_string()
}

/// Parses a stored date column, falling back to the epoch date on garbage.
pub fn parse_date_text(value: &str, field_name: &str) -> NaiveDate {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(d) => d,
        Err(e) => {
            log::error!(
                "Failed to parse {} '{}' as date (err: {}). Falling back to epoch.",
                field_name,
                value,
                e
            );
            NaiveDate::default()
        }
    }
}

pub fn parse_optional_date_text(value: Option<&str>, field_name: &str) -> Option<NaiveDate> {
    value.map(|v| parse_date_text(v, field_name))
}

pub fn date_to_text(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn optional_date_to_text(value: Option<NaiveDate>) -> Option<String> {
    value.map(date_to_text)
}

//! Date handling shared by every backend.
//!
//! Dates arrive as free-form strings. Anything that parses as a calendar date
//! is reformatted; anything else (`"Present"`, `"Spring 2021"`) is kept as-is.

use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

/// Default output format, e.g. `01 Aug 1970`.
pub const DEFAULT_DATE_FORMAT: &str = "%d %b %Y";

const FULL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %B %Y", "%d %b %Y", "%B %d, %Y"];

/// Parses a calendar date. `YYYY-MM` resolves to the first of the month.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    FULL_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", input), "%Y-%m-%d").ok())
}

/// Reformats `input` with `format` when it parses as a date, otherwise returns it unchanged.
///
/// An invalid `format` also falls back to the input text.
pub fn format_date(input: &str, format: &str) -> String {
    let Some(date) = parse_date(input) else {
        return input.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        log::warn!("Invalid date output format '{}'; keeping '{}'.", format, input);
        return input.to_string();
    }
    out
}

/// The year used to group records chronologically.
///
/// Accepts full dates, `YYYY-MM` and bare four-digit years.
pub fn extract_year(input: &str) -> Option<i32> {
    if let Some(date) = parse_date(input) {
        return Some(date.year());
    }
    let trimmed = input.trim();
    if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed.parse().ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_date("1970-08-01", DEFAULT_DATE_FORMAT), "01 Aug 1970");
    }

    #[test]
    fn test_unparseable_date_is_kept() {
        assert_eq!(format_date("Present", DEFAULT_DATE_FORMAT), "Present");
        assert_eq!(format_date("2021", DEFAULT_DATE_FORMAT), "2021");
    }

    #[test]
    fn test_month_precision() {
        assert_eq!(format_date("2021-03", "%B %Y"), "March 2021");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        assert_eq!(format_date("2021-03-04", "%Q"), "2021-03-04");
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("2020-05-17"), Some(2020));
        assert_eq!(extract_year("2019"), Some(2019));
        assert_eq!(extract_year(" 2018 "), Some(2018));
        assert_eq!(extract_year("17 May 2020"), Some(2020));
        assert_eq!(extract_year("soon"), None);
        assert_eq!(extract_year("20201"), None);
    }
}

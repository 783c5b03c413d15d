//! Value normalization for raw export cells.
//!
//! Contracts Finder daily exports carry dates in several regional
//! formats and money with currency symbols and thousands separators.
//! The release schema expects ISO 8601 date strings and plain decimal
//! amounts.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%d %B %Y",
];

/// Whether a canonical path holds a date value.
pub fn is_date_path(path: &str) -> bool {
    path == "date" || path.ends_with("/date") || path.ends_with("Date")
}

/// Whether a canonical path holds a monetary amount.
pub fn is_amount_path(path: &str) -> bool {
    path.ends_with("value/amount")
}

/// Normalizes a date cell to ISO 8601, `None` when unparseable.
///
/// Inputs carrying a time of day keep it (as UTC); date-only inputs
/// stay date-only rather than gaining a fabricated midnight.
pub fn normalize_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.to_utc().format("%Y-%m-%dT%H:%M:%SZ").to_string());
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    None
}

/// Normalizes an amount cell to a plain decimal, `None` when
/// unparseable. Currency symbols, thousands separators and stray
/// whitespace are stripped before parsing.
pub fn normalize_amount(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '£' | '$' | '€' | ',' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.to_string())
}

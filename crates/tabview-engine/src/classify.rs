//! Pure type predicates over scalar values.
//!
//! These never fail and never allocate beyond the parse itself; the formatter
//! and sorter lean on them for per-cell decisions.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use tabview_model::Value;

/// True for a finite number, or a string whose trimmed form parses entirely
/// as a finite number. Null, booleans, NaN, and infinities are not numeric.
pub fn is_numeric(value: &Value) -> bool {
    numeric_value(value).is_some()
}

/// The numeric reading of a value, when it has one.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) if n.is_finite() => Some(*n),
        Value::Text(s) => parse_f64(s),
        _ => None,
    }
}

/// Parses a trimmed string as a finite number. The textual `inf`/`NaN`
/// spellings the standard parser accepts do not count.
pub fn parse_f64(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// True for a string parseable into a valid calendar date. Numbers are never
/// date-like; epoch guessing is deliberately not done.
pub fn is_date_like(value: &Value) -> bool {
    match value {
        Value::Text(s) => parse_date(s).is_some(),
        _ => false,
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Extracts the calendar date from a date or datetime string. Accepts ISO
/// dates, slash-separated dates, ISO datetimes with an optional fractional
/// part, and RFC 3339 timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Host-style truthiness, used by boolean-typed columns to coerce non-boolean
/// cells: null, zero, and the empty string are false, everything else true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => *n != 0.0 && !n.is_nan(),
        Value::Text(s) => !s.is_empty(),
    }
}

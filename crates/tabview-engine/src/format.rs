//! Type-driven cell formatting.
//!
//! Formatting is presentation-only: it never feeds back into filtering or
//! sorting, and it never fails. Unparseable values degrade to their raw
//! string form.

use tabview_model::{Column, ColumnType, DisplayCell, Record, Tone, Value};

use crate::classify::{numeric_value, parse_date, truthy};

/// Localizable label text for boolean and status cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub yes: String,
    pub no: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub info: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            yes: "Yes".to_string(),
            no: "No".to_string(),
            success: "Success".to_string(),
            warning: "Warning".to_string(),
            danger: "Danger".to_string(),
            info: "Info".to_string(),
        }
    }
}

/// Formatting configuration shared by the display and export passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub currency_symbol: String,
    pub labels: Labels,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "¥".to_string(),
            labels: Labels::default(),
        }
    }
}

/// Re-renders a date-like value as an ISO calendar date (`YYYY-MM-DD`). When
/// parsing fails the raw text comes back unchanged.
pub fn format_date(value: &Value) -> String {
    let raw = value.to_text();
    match parse_date(&raw) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => raw,
    }
}

/// Currency rendering: symbol, thousands separators, exactly two decimals
/// (50000 -> `¥50,000.00`). Null renders empty; a non-numeric value falls
/// back to its raw text.
pub fn format_currency(value: &Value, symbol: &str) -> String {
    if value.is_null() {
        return String::new();
    }
    match numeric_value(value) {
        Some(n) => format!("{symbol}{}", group_thousands(&format!("{n:.2}"))),
        None => value.to_text(),
    }
}

/// Inserts thousands separators into a plain decimal rendering.
fn group_thousands(formatted: &str) -> String {
    let (number, fraction) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3 + 1);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = fraction {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Maps a status key to its configured label; unknown keys pass through
/// verbatim with no fallback.
pub fn status_label(key: &str, labels: &Labels) -> String {
    match key {
        "success" => labels.success.clone(),
        "warning" => labels.warning.clone(),
        "danger" => labels.danger.clone(),
        "info" => labels.info.clone(),
        other => other.to_string(),
    }
}

fn status_tone(key: &str) -> Option<Tone> {
    match key {
        "success" => Some(Tone::Success),
        "warning" => Some(Tone::Warning),
        "danger" => Some(Tone::Danger),
        "info" => Some(Tone::Info),
        _ => None,
    }
}

/// Formats one cell of a record for display.
///
/// Precedence: the column's injected renderer, then the declared type, then
/// the raw string form. A field absent from the record formats as an empty
/// cell.
pub fn format_cell(column: &Column, record: &Record, options: &FormatOptions) -> DisplayCell {
    let value = match record.get(&column.key) {
        Some(value) => value,
        None => &Value::Null,
    };
    if let Some(render) = &column.render {
        return DisplayCell::plain(render.render(value, record));
    }
    match column.column_type {
        Some(ColumnType::Date) => DisplayCell::plain(format_date(value)),
        Some(ColumnType::Currency) => {
            DisplayCell::plain(format_currency(value, &options.currency_symbol))
        }
        Some(ColumnType::Boolean) => {
            if truthy(value) {
                DisplayCell::toned(options.labels.yes.clone(), Tone::Success)
            } else {
                DisplayCell::toned(options.labels.no.clone(), Tone::Danger)
            }
        }
        Some(ColumnType::Status) => {
            let key = value.to_text();
            match status_tone(&key) {
                Some(tone) => DisplayCell::toned(status_label(&key, &options.labels), tone),
                None => DisplayCell::plain(key),
            }
        }
        Some(ColumnType::Numeric | ColumnType::Text) | None => {
            DisplayCell::plain(value.to_text())
        }
    }
}

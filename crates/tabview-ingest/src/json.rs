//! JSON record-set loading.
//!
//! Record sets arrive as a JSON array of objects. Anything else is malformed
//! input: it is reported once through a tracing warning and degraded to an
//! empty (or partial) set, so the engine never sees an invalid shape. A file
//! that does not parse as JSON at all is a real error and surfaces to the
//! caller.

use std::fs;
use std::path::Path;

use tracing::warn;

use tabview_model::{Record, Value};

use crate::error::Result;

/// Maps one JSON value onto a scalar cell value. Arrays and objects are not
/// scalars; they degrade to their compact JSON text.
pub fn value_from_json(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::Text(s.clone()),
        other => Value::Text(other.to_string()),
    }
}

pub fn record_from_json(object: &serde_json::Map<String, serde_json::Value>) -> Record {
    let mut record = Record::new();
    for (key, value) in object {
        record.fields.insert(key.clone(), value_from_json(value));
    }
    record
}

/// Converts a parsed JSON document into a record set.
///
/// A non-array document yields an empty set; non-object entries inside an
/// array are skipped. Both degradations are observable as warnings but never
/// fail.
pub fn records_from_json(value: &serde_json::Value) -> Vec<Record> {
    let serde_json::Value::Array(entries) = value else {
        warn!(
            found = value_kind(value),
            "record set is not an array, treating as empty"
        );
        return Vec::new();
    };

    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = 0_usize;
    for entry in entries {
        match entry {
            serde_json::Value::Object(object) => records.push(record_from_json(object)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(
            skipped,
            kept = records.len(),
            "record set contained non-object entries, skipped"
        );
    }
    records
}

pub fn records_from_str(raw: &str) -> Result<Vec<Record>> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(records_from_json(&value))
}

pub fn records_from_path(path: &Path) -> Result<Vec<Record>> {
    let raw = fs::read_to_string(path)?;
    records_from_str(&raw)
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

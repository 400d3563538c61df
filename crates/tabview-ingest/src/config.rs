//! Table configuration as supplied by the hosting layer.
//!
//! The config mirrors the host-side component props: a column schema plus the
//! feature flags gating search, pagination, and export. Field names use the
//! host's camelCase spelling on the wire.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use tabview_model::{Column, DEFAULT_PAGE_SIZE, Record};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    pub title: Option<String>,
    /// Text shown when a view renders zero rows.
    pub empty_text: String,
    pub columns: Vec<Column>,
    pub searchable: bool,
    pub pagination: bool,
    pub page_size: usize,
    pub exportable: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: None,
            empty_text: default_empty_text(),
            columns: Vec::new(),
            searchable: true,
            pagination: true,
            page_size: DEFAULT_PAGE_SIZE,
            exportable: true,
        }
    }
}

fn default_empty_text() -> String {
    "No data".to_string()
}

impl TableConfig {
    pub fn new(columns: Vec<Column>) -> Self {
        let mut config = Self {
            columns,
            ..Self::default()
        };
        dedupe_columns(&mut config.columns);
        config
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

/// Parses a config document and enforces the schema invariants (unique
/// column keys, positive page size).
pub fn config_from_str(raw: &str) -> Result<TableConfig> {
    let mut config: TableConfig = serde_json::from_str(raw)?;
    dedupe_columns(&mut config.columns);
    if config.page_size == 0 {
        warn!("pageSize of 0 snapped to 1");
        config.page_size = 1;
    }
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<TableConfig> {
    let raw = fs::read_to_string(path)?;
    config_from_str(&raw)
}

/// Column keys must be unique within a schema; the first occurrence wins.
fn dedupe_columns(columns: &mut Vec<Column>) {
    let mut seen = Vec::with_capacity(columns.len());
    columns.retain(|column| {
        if seen.contains(&column.key) {
            warn!(key = %column.key, "duplicate column key, keeping first occurrence");
            false
        } else {
            seen.push(column.key.clone());
            true
        }
    });
}

/// Derives a schema from the records themselves: the union of field names in
/// first-seen order, each titled from its key, sortable, type auto.
pub fn derive_columns(records: &[Record]) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    for record in records {
        for name in record.field_names() {
            if !columns.iter().any(|column| column.key == name) {
                columns.push(Column::new(name, title_from_key(name)));
            }
        }
    }
    columns
}

/// Turns a field key into a display title: separators become spaces and each
/// word is capitalized (`unit_price` -> `Unit Price`).
fn title_from_key(key: &str) -> String {
    let mut title = String::with_capacity(key.len());
    for (i, word) in key.split(['_', '-', ' ']).filter(|w| !w.is_empty()).enumerate() {
        if i > 0 {
            title.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            title.extend(first.to_uppercase());
            title.push_str(chars.as_str());
        }
    }
    title
}

//! CSV export payload builder.
//!
//! Serializes the filtered/sorted rows of a view into CSV text: one header
//! line of column titles, then one line per record of formatted cell values.
//! The whole filtered set is written regardless of pagination.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use csv::WriterBuilder;
use tabview_engine::{FormatOptions, TableView, format_cell};
use tabview_model::{Column, Record};

use crate::error::Result;

/// Base file name used when no table title is configured.
pub const DEFAULT_EXPORT_BASE: &str = "export";

/// A named in-memory export payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name, derived from the table title and export date.
    pub file_name: String,
    /// UTF-8 CSV text, header row first.
    pub content: String,
}

impl ExportFile {
    /// Persists the payload under `dir`, returning the full path written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Builds the export payload for the view's current filtered/sorted rows.
///
/// Every row that survives the active filter and sort is serialized, not
/// just the visible page. The file name is stamped with today's date.
pub fn export_view(view: &TableView, title: Option<&str>) -> Result<ExportFile> {
    export_view_on(view, title, Local::now().date_naive())
}

/// Same as [`export_view`] with an explicit date for the file name.
pub fn export_view_on(
    view: &TableView,
    title: Option<&str>,
    date: NaiveDate,
) -> Result<ExportFile> {
    let records = view.filtered_records();
    let content = csv_content(view.columns(), &records, view.format_options())?;
    Ok(ExportFile {
        file_name: export_file_name(title, date),
        content,
    })
}

/// Serializes column titles plus one formatted line per record as CSV.
///
/// Cells go through the same formatting rules as the visible table, custom
/// renderers included, so the payload matches what the user sees rather
/// than the raw field values. Fields containing commas, quotes, or line
/// breaks are quoted with internal quotes doubled.
pub fn csv_content(
    columns: &[Column],
    records: &[&Record],
    options: &FormatOptions,
) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new().from_writer(&mut buffer);
        writer.write_record(columns.iter().map(|column| column.title.as_str()))?;
        for record in records {
            let cells: Vec<String> = columns
                .iter()
                .map(|column| format_cell(column, record, options).text)
                .collect();
            writer.write_record(&cells)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Derives the suggested export file name for a given date.
///
/// The title is slugified: lowercased, with alphanumeric runs joined by a
/// single `-`. A missing or unusable title falls back to the fixed base.
pub fn export_file_name(title: Option<&str>, date: NaiveDate) -> String {
    let base = title
        .and_then(slug)
        .unwrap_or_else(|| DEFAULT_EXPORT_BASE.to_string());
    format!("{base}_{}.csv", date.format("%Y%m%d"))
}

fn slug(title: &str) -> Option<String> {
    let mut out = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

//! View assembly pipeline for the CLI.
//!
//! Stages, in order: load the record set and table configuration from disk,
//! resolve the schema (configured or derived), validate the requested sort
//! target, then apply the query/sort/page transitions to a fresh view. The
//! finished view is handed to rendering or export.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use tabview_engine::TableView;
use tabview_ingest::{TableConfig, derive_columns, load_config, records_from_path};
use tabview_model::{Record, SortDirection};

/// Requested view shape, straight from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    /// Substring filter applied before anything else.
    pub query: Option<String>,
    /// Column key to sort by.
    pub sort: Option<String>,
    /// Direction for the requested sort.
    pub direction: SortDirection,
    /// Page to display (clamped into range).
    pub page: Option<usize>,
    /// Page size override.
    pub page_size: Option<usize>,
    /// Disable pagination for this invocation.
    pub no_pagination: bool,
}

/// Record set and configuration loaded from disk.
#[derive(Debug)]
pub struct LoadedTable {
    pub config: TableConfig,
    pub records: Vec<Record>,
}

/// Loads the record set and resolves the table configuration.
///
/// Without a config file the schema is derived from the records: the union
/// of field names in first-seen order, title-cased, all sortable.
pub fn load_table(data: &Path, config: Option<&Path>) -> Result<LoadedTable> {
    let span = info_span!("load", data = %data.display());
    let _guard = span.enter();
    let records =
        records_from_path(data).with_context(|| format!("read data file {}", data.display()))?;
    let config = match config {
        Some(path) => {
            load_config(path).with_context(|| format!("read config file {}", path.display()))?
        }
        None => TableConfig::new(derive_columns(&records)),
    };
    info!(
        records = records.len(),
        columns = config.columns.len(),
        "table loaded"
    );
    Ok(LoadedTable { config, records })
}

/// Builds the view, applying config flags and the requested transitions.
///
/// Sort targets are validated against the schema here; the engine itself
/// accepts any key, so unknown or non-sortable columns are refused at this
/// boundary.
pub fn build_view(
    config: &TableConfig,
    records: Vec<Record>,
    request: &ViewRequest,
) -> Result<TableView> {
    if let Some(key) = request.sort.as_deref() {
        let Some(column) = config.columns.iter().find(|column| column.key == key) else {
            bail!("unknown sort column: {key}");
        };
        if !column.sortable {
            bail!("column is not sortable: {key}");
        }
    }
    if request.query.is_some() && !config.searchable {
        warn!("search is disabled by the table configuration; --query has no effect");
    }
    let mut view = TableView::new(config.columns.clone(), records)
        .with_page_size(request.page_size.unwrap_or(config.page_size))
        .with_searchable(config.searchable)
        .with_pagination(config.pagination && !request.no_pagination);
    if let Some(query) = &request.query {
        view.search(query);
    }
    if let Some(key) = request.sort.as_deref() {
        view.set_sort(key, request.direction);
    }
    if let Some(page) = request.page {
        view.change_page(page);
    }
    Ok(view)
}

/// Refuses export when the configuration disables it.
pub fn ensure_exportable(config: &TableConfig) -> Result<()> {
    if !config.exportable {
        bail!("export is disabled by the table configuration");
    }
    Ok(())
}

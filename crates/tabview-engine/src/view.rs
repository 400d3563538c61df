//! The view state machine composing filter, sort, and pagination.

use tracing::debug;

use tabview_model::{Column, DisplayRow, Record, SortDirection, ViewState};

use crate::filter::filter_indices;
use crate::format::{FormatOptions, format_cell};
use crate::page;
use crate::sort::sort_indices;

/// A live view over one record set and one column schema.
///
/// The view owns its copies of the schema and records plus the single
/// `ViewState` instance, and mutates that state only through the transition
/// methods below. Derived data (`display_rows`, `page_records`,
/// `filtered_records`) is recomputed from scratch on every call; nothing is
/// cached between state changes.
///
/// Transitions never fail: out-of-range pages clamp, unknown sort keys
/// compare every record as null, and a query over a schema-less view simply
/// matches nothing.
#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<Column>,
    records: Vec<Record>,
    state: ViewState,
    searchable: bool,
    pagination: bool,
    format: FormatOptions,
}

impl TableView {
    pub fn new(columns: Vec<Column>, records: Vec<Record>) -> Self {
        Self {
            columns,
            records,
            state: ViewState::default(),
            searchable: true,
            pagination: true,
            format: FormatOptions::default(),
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.state.page_size = page_size.max(1);
        self
    }

    /// Gates the filter stage. A view that is not searchable displays the
    /// full set regardless of the stored query.
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Gates the pagination stage. Without pagination every display pass
    /// returns the full filtered/sorted set and the page count is 1.
    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn format_options(&self) -> &FormatOptions {
        &self.format
    }

    /// Updates the search query and snaps back to the first page.
    pub fn search(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.current_page = 1;
        debug!(query = %self.state.search_query, "search query applied");
    }

    /// Sorts by `key`: a new column starts ascending, the current column
    /// toggles direction. The page stays where it is.
    pub fn sort_by(&mut self, key: &str) {
        let direction = match self.state.sort_column.as_deref() {
            Some(current) if current == key => self.state.sort_direction.toggled(),
            _ => SortDirection::Asc,
        };
        self.set_sort(key, direction);
    }

    /// Sets the sort column and direction explicitly, for hosts that cannot
    /// express the toggle (one-shot invocations).
    pub fn set_sort(&mut self, key: &str, direction: SortDirection) {
        self.state.sort_column = Some(key.to_string());
        self.state.sort_direction = direction;
        debug!(column = key, direction = %direction, "sort updated");
    }

    /// Moves to `page`, clamped into `[1, total_pages]`.
    pub fn change_page(&mut self, page: usize) {
        self.state.current_page = page::clamp_page(page, self.total_pages());
    }

    /// Changes the page size, keeping the current page inside the new range.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.page_size = page_size.max(1);
        self.state.current_page =
            page::clamp_page(self.state.current_page, self.total_pages());
    }

    /// Replaces the record set wholesale and snaps back to the first page,
    /// even when the old page would still be in range. Query and sort are
    /// preserved.
    pub fn replace_data(&mut self, records: Vec<Record>) {
        debug!(count = records.len(), "record set replaced");
        self.records = records;
        self.state.current_page = 1;
    }

    /// Replaces the column schema wholesale. View state is untouched.
    pub fn replace_schema(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    pub fn filtered_len(&self) -> usize {
        self.view_indices().len()
    }

    pub fn total_pages(&self) -> usize {
        if !self.pagination {
            return 1;
        }
        page::total_pages(self.filtered_len(), self.state.page_size)
    }

    /// The full filtered/sorted set, in view order. This is what an export
    /// consumes; pagination plays no part.
    pub fn filtered_records(&self) -> Vec<&Record> {
        self.view_indices()
            .into_iter()
            .map(|index| &self.records[index])
            .collect()
    }

    /// The records of the current page, or the full filtered/sorted set when
    /// pagination is disabled.
    pub fn page_records(&self) -> Vec<&Record> {
        let indices = self.view_indices();
        if !self.pagination {
            return indices.into_iter().map(|index| &self.records[index]).collect();
        }
        let (start, end) =
            page::page_bounds(indices.len(), self.state.current_page, self.state.page_size);
        indices[start..end]
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// The current page with every cell formatted, ready for rendering.
    pub fn display_rows(&self) -> Vec<DisplayRow<'_>> {
        self.page_records()
            .into_iter()
            .map(|record| {
                let cells = self
                    .columns
                    .iter()
                    .map(|column| format_cell(column, record, &self.format))
                    .collect();
                DisplayRow::new(record, cells)
            })
            .collect()
    }

    fn view_indices(&self) -> Vec<usize> {
        let query = if self.searchable {
            self.state.search_query.as_str()
        } else {
            ""
        };
        let mut indices = filter_indices(&self.records, &self.columns, query);
        if let Some(key) = &self.state.sort_column {
            sort_indices(&self.records, &mut indices, key, self.state.sort_direction);
        }
        indices
    }
}

//! Terminal table rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabview_engine::TableView;
use tabview_model::{Column, ColumnType, DisplayCell, Tone};

/// Renders the current page of the view as a styled table.
///
/// Cell tones map to terminal colors; number-like columns are right
/// aligned. Styling degrades to plain text when stdout is not a terminal.
pub fn view_table(view: &TableView) -> Table {
    let mut table = Table::new();
    table.set_header(
        view.columns()
            .iter()
            .map(|column| header_cell(&column.title))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, column) in view.columns().iter().enumerate() {
        if matches!(
            column.column_type,
            Some(ColumnType::Numeric | ColumnType::Currency)
        ) {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in view.display_rows() {
        table.add_row(row.cells.iter().map(value_cell).collect::<Vec<_>>());
    }
    table
}

/// Renders the resolved column schema, one row per column.
pub fn schema_table(columns: &[Column]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Title"),
        header_cell("Type"),
        header_cell("Sortable"),
    ]);
    apply_table_style(&mut table);
    for column in columns {
        let type_label = column
            .column_type
            .map_or("auto", |column_type| column_type.as_str());
        table.add_row(vec![
            Cell::new(&column.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&column.title),
            Cell::new(type_label),
            sortable_cell(column.sortable),
        ]);
    }
    table
}

/// One-line footer with page position and record counts.
pub fn page_footer(view: &TableView) -> String {
    let total = view.records().len();
    let filtered = view.filtered_len();
    let shown = view.page_records().len();
    let mut footer = format!(
        "Page {}/{} (showing {} of {} record{})",
        view.state().current_page,
        view.total_pages(),
        shown,
        filtered,
        if filtered == 1 { "" } else { "s" },
    );
    if filtered < total {
        footer.push_str(&format!(", filtered from {total}"));
    }
    footer
}

fn value_cell(cell: &DisplayCell) -> Cell {
    match cell.tone {
        Some(tone) => Cell::new(&cell.text).fg(tone_color(tone)),
        None => Cell::new(&cell.text),
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
        Tone::Info => Color::Cyan,
    }
}

fn sortable_cell(sortable: bool) -> Cell {
    if sortable {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::DarkGrey)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

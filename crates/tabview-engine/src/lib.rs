pub mod classify;
pub mod filter;
pub mod format;
pub mod page;
pub mod sort;
pub mod view;

pub use classify::{is_date_like, is_numeric, numeric_value, parse_date, parse_f64, truthy};
pub use filter::{filter_indices, matches_query};
pub use format::{FormatOptions, Labels, format_cell, format_currency, format_date, status_label};
pub use page::{clamp_page, page_bounds, total_pages};
pub use sort::{compare_values, sort_indices};
pub use view::TableView;

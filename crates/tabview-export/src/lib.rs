//! CSV export payloads for table views.
//!
//! Turns the filtered/sorted rows of a `TableView` into a named in-memory
//! CSV payload. Cells are formatted with the same rules as the rendered
//! table, pagination is bypassed, and the suggested file name derives from
//! the table title plus the export date. Writing the payload to disk is the
//! host's job; [`ExportFile::write_to`] covers the common case.

mod error;
mod writer;

pub use error::{ExportError, Result};
pub use writer::{
    DEFAULT_EXPORT_BASE, ExportFile, csv_content, export_file_name, export_view, export_view_on,
};

pub mod column;
pub mod display;
pub mod record;
pub mod state;
pub mod value;

pub use column::{CellRender, Column, ColumnType};
pub use display::{DisplayCell, DisplayRow, Tone};
pub use record::Record;
pub use state::{DEFAULT_PAGE_SIZE, SortDirection, ViewState};
pub use value::Value;

pub mod config;
pub mod error;
pub mod json;

pub use config::{TableConfig, config_from_str, derive_columns, load_config};
pub use error::{IngestError, Result};
pub use json::{record_from_json, records_from_json, records_from_path, records_from_str, value_from_json};

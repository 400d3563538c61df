//! Error types for export operations.

use thiserror::Error;

/// Errors that can occur when building or persisting an export payload.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while persisting a payload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

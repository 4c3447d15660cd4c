//! Error types for pipegrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pipegrid-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid reference address format
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (rows: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (cols: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// IO error reading the source file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

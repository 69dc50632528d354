//! Error types for grid building and filling

use thiserror::Error;

/// Result type alias for grid operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, reshaping or filling a grid
///
/// Lookups of cells that do not exist are deliberately absent from this list:
/// painting a missing cell is a silent no-op everywhere.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A table needs at least one row and one column
    #[error("Invalid grid dimension: {rows} rows x {columns} columns")]
    InvalidDimension { rows: usize, columns: usize },

    /// More distinct cells were requested than the grid holds
    #[error("Cannot paint {requested} distinct cells in a grid of {available}")]
    OverAllocation { requested: usize, available: usize },

    /// Ratio filling needs a non-zero total weight
    #[error("Color spec has no weight to distribute")]
    EmptyColorSpec,

    /// A color spec could not be parsed
    #[error("Invalid color spec: {0}")]
    InvalidColorSpec(String),

    /// A cell identifier could not be parsed
    #[error("Invalid cell identifier: {0}")]
    InvalidCellId(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Snapshot (de)serialization failed
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Error types for the expansion pipeline and row filters.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpandError {
    /// The input CSV does not exist. Reported to the operator; no output is written.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// A filter needs a column the input header does not carry.
    #[error("{} has no '{column}' column", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("checkpoint serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExpandError>;

impl From<tempfile::PersistError> for ExpandError {
    fn from(err: tempfile::PersistError) -> Self {
        ExpandError::Io(err.error)
    }
}

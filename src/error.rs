//! Loader failure kinds.
//!
//! Exactly two things can go wrong when loading the directory, and callers
//! need to tell them apart from each other and from a legitimate empty
//! result set. The query engine itself is total and never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The underlying fetch or read failed: missing file, network error,
    /// non-success HTTP status, or timeout.
    #[error("data source error: {0}")]
    DataSource(String),

    /// The payload was fetched but did not parse as a JSON array of
    /// provider records.
    #[error("schema error: {0}")]
    Schema(String),
}

impl DirectoryError {
    /// Stable machine-readable code, used by the HTTP error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryError::DataSource(_) => "data_source",
            DirectoryError::Schema(_) => "schema",
        }
    }
}

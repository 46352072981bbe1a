use thiserror::Error;

/// Errors from the flat-file store.
///
/// A file that exists but does not parse is reported distinctly from a file
/// that cannot be read at all; both surface to clients as server errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid JSON in data file")]
    Corrupt(#[source] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

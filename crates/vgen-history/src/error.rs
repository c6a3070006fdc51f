//! History store error types.

use thiserror::Error;

pub type HistoryResult<T> = Result<T, HistoryError>;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("No history entry with id {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("History file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

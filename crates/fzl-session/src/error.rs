//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] fzl_storage::StorageError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized session data: {0}")]
    UnrecognizedSchema(String),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u64),
}

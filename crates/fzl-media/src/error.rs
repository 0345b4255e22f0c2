//! Media error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("File size {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("Unsupported media type: {0}")]
    UnsupportedType(String),

    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),
}

impl MediaError {
    /// Message suitable for a user-facing alert
    pub fn user_message(&self) -> String {
        match self {
            MediaError::TooLarge { limit, .. } => {
                format!("File size exceeds {}MB limit", limit / (1024 * 1024))
            }
            MediaError::UnsupportedType(_) => "Only image files can be uploaded".to_string(),
            MediaError::Read(_) => "Failed to read file".to_string(),
        }
    }
}

//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] fzl_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] fzl_tabs::TabError),

    #[error("Session error: {0}")]
    Session(#[from] fzl_session::SessionError),

    #[error("{}", .0.user_message())]
    Media(#[from] fzl_media::MediaError),

    #[error("Pane not found: {0}")]
    PaneNotFound(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Board not initialized")]
    NotInitialized,
}

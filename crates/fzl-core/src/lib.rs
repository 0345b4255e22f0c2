//! FZL Splits Core
//!
//! Central coordination layer for the reference board.
//! The [`Board`] owns the workspace and every store; the shell only
//! forwards user intent and renders what the board reports back.

mod board;
mod color;
mod config;
mod error;
mod platform;

pub use board::{Board, ClipboardPayload};
pub use color::{Color, ColorFormat, ColorHistory, MAX_COLOR_HISTORY};
pub use config::Config;
pub use error::CoreError;
pub use platform::{Clipboard, EyeDropper, Fullscreen};

// Re-export core components
pub use fzl_media::{
    assume_transparent, resolve, MediaError, MediaKind, MediaResolution, UploadPolicy,
};
pub use fzl_pane::{PaneView, Point, Transform};
pub use fzl_session::{LastActivity, RestoreMode, SessionError};
pub use fzl_storage::{Database, StorageError};
pub use fzl_tabs::{Action, Layout, Split, Tab, TabError, MAX_SPLITS_PER_TAB, MAX_TABS};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

//! Tauri IPC Commands
//!
//! These commands bridge the frontend to the board.
//! The webview keeps no state of its own; every reply carries what it
//! needs to redraw.

pub mod colors;
pub mod diagnostics;
pub mod panes;
pub mod sessions;
pub mod settings;
pub mod tabs;
pub mod windows;

pub fn ui_webview_label(window_label: &str) -> String {
    format!("ui-{window_label}")
}

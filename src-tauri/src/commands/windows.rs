//! Window presentation commands
use tauri::Window;

use fzl_core::{CoreError, Fullscreen};

use super::tabs::CommandResult;
use crate::state::AppState;

struct WindowFullscreen<'a>(&'a Window);

impl Fullscreen for WindowFullscreen<'_> {
    fn is_fullscreen(&self) -> fzl_core::Result<bool> {
        self.0
            .is_fullscreen()
            .map_err(|e| CoreError::Platform(e.to_string()))
    }

    fn set_fullscreen(&self, fullscreen: bool) -> fzl_core::Result<()> {
        self.0
            .set_fullscreen(fullscreen)
            .map_err(|e| CoreError::Platform(e.to_string()))
    }
}

#[tauri::command]
pub fn toggle_fullscreen(window: Window, state: tauri::State<AppState>) -> CommandResult<bool> {
    state
        .with_board(|board| board.toggle_fullscreen(&WindowFullscreen(&window)))
        .into()
}

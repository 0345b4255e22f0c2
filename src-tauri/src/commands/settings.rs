//! Theme and toolbar commands

use tauri::{AppHandle, State, Theme, Window};

use super::tabs::{CommandResult, WorkspaceInfo};
use crate::state::AppState;

pub(crate) fn platform_theme_for(is_dark: bool) -> Option<Theme> {
    // On Windows, the native title bar theme appears inverted relative to the requested theme.
    // Swap it so the window chrome matches the app theme.
    #[cfg(windows)]
    {
        Some(if is_dark { Theme::Light } else { Theme::Dark })
    }

    #[cfg(not(windows))]
    {
        Some(if is_dark { Theme::Dark } else { Theme::Light })
    }
}

fn apply_platform_theme(app: &AppHandle, window: &Window, is_dark: bool) {
    let platform_theme = platform_theme_for(is_dark);
    app.set_theme(platform_theme);
    let _ = window.set_theme(platform_theme);
}

#[tauri::command]
pub fn toggle_dark_mode(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
) -> CommandResult<WorkspaceInfo> {
    state
        .with_board(|board| {
            let is_dark = board.toggle_dark_mode();
            apply_platform_theme(&app, &window, is_dark);
            Ok(WorkspaceInfo::of(board))
        })
        .into()
}

#[tauri::command]
pub fn set_theme(
    app: AppHandle,
    window: Window,
    state: State<AppState>,
    theme: String,
) -> CommandResult<WorkspaceInfo> {
    let is_dark = match theme.to_lowercase().as_str() {
        "dark" => true,
        "light" => false,
        _ => return CommandResult::err("Unsupported theme".to_string()),
    };

    state
        .with_board(|board| {
            board.set_dark_mode(is_dark);
            apply_platform_theme(&app, &window, is_dark);
            Ok(WorkspaceInfo::of(board))
        })
        .into()
}

#[tauri::command]
pub fn toggle_controls(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    state
        .with_board(|board| {
            board.toggle_controls();
            Ok(WorkspaceInfo::of(board))
        })
        .into()
}

#[tauri::command]
pub fn set_controls_visible(
    state: State<AppState>,
    visible: bool,
) -> CommandResult<WorkspaceInfo> {
    state
        .with_board(|board| {
            board.set_controls_visible(visible);
            Ok(WorkspaceInfo::of(board))
        })
        .into()
}

//! Pane gesture and media input commands
use tauri::{AppHandle, State};
use tauri_plugin_opener::OpenerExt;

use fzl_core::{Board, ClipboardPayload, PaneView, Point};

use super::tabs::{mutate, CommandResult, WorkspaceInfo};
use crate::state::AppState;

fn pane_view_after<F, T>(state: &AppState, split_id: &str, f: F) -> CommandResult<PaneView>
where
    F: FnOnce(&Board) -> fzl_core::Result<T>,
{
    state
        .with_board(|board| {
            f(board)?;
            board.pane_view(split_id)
        })
        .into()
}

#[tauri::command]
pub fn get_pane_views(state: State<AppState>) -> CommandResult<Vec<PaneView>> {
    state.with_board(|board| Ok(board.pane_views())).into()
}

#[tauri::command]
pub fn pane_drag_start(
    state: State<AppState>,
    split_id: String,
    x: f64,
    y: f64,
) -> CommandResult<PaneView> {
    pane_view_after(&state, &split_id, |board| {
        board.pane_drag_start(&split_id, Point::new(x, y))
    })
}

#[tauri::command]
pub fn pane_drag_move(
    state: State<AppState>,
    split_id: String,
    x: f64,
    y: f64,
) -> CommandResult<PaneView> {
    pane_view_after(&state, &split_id, |board| {
        board.pane_drag_move(&split_id, Point::new(x, y))
    })
}

#[tauri::command]
pub fn pane_drag_end(state: State<AppState>, split_id: String) -> CommandResult<PaneView> {
    pane_view_after(&state, &split_id, |board| board.pane_drag_end(&split_id))
}

#[tauri::command]
pub fn pane_zoom_in(state: State<AppState>, split_id: String) -> CommandResult<PaneView> {
    pane_view_after(&state, &split_id, |board| board.pane_zoom_in(&split_id))
}

#[tauri::command]
pub fn pane_zoom_out(state: State<AppState>, split_id: String) -> CommandResult<PaneView> {
    pane_view_after(&state, &split_id, |board| board.pane_zoom_out(&split_id))
}

#[tauri::command]
pub fn report_media_error(state: State<AppState>, split_id: String) -> CommandResult<PaneView> {
    pane_view_after(&state, &split_id, |board| {
        board.report_media_error(&split_id)
    })
}

#[tauri::command]
pub fn submit_url(
    state: State<AppState>,
    split_id: String,
    input: String,
) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| board.submit_url(&split_id, &input))
}

#[tauri::command]
pub fn clear_split_media(state: State<AppState>, split_id: String) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| board.clear_split_media(&split_id))
}

#[tauri::command]
pub fn paste_text(
    state: State<AppState>,
    split_id: String,
    text: String,
) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| {
        board.paste(&split_id, ClipboardPayload::Text(text))
    })
}

#[tauri::command]
pub fn paste_image(
    state: State<AppState>,
    split_id: String,
    mime: String,
    bytes: Vec<u8>,
) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| {
        board.paste(&split_id, ClipboardPayload::Image { mime, bytes })
    })
}

/// Load a chosen or dropped file. Errors carry the message to alert with.
#[tauri::command]
pub async fn upload_file(
    state: State<'_, AppState>,
    split_id: String,
    path: String,
) -> Result<WorkspaceInfo, String> {
    let board = state.board().map_err(|e| e.to_string())?;

    board
        .upload_file(&split_id, &path)
        .await
        .map_err(|e| e.to_string())?;

    Ok(WorkspaceInfo::of(&board))
}

/// Open a reference the board cannot render in the system browser
#[tauri::command]
pub fn open_external(app: AppHandle, url: String) -> CommandResult<()> {
    match app.opener().open_url(url, None::<&str>) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

use tauri::State;

use super::tabs::{CommandResult, WorkspaceInfo};
use crate::state::AppState;

/// First call from the page once its scripts are loaded
#[tauri::command]
pub fn frontend_ready(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    tracing::info!("Frontend ready");
    state.with_board(|board| Ok(WorkspaceInfo::of(board))).into()
}

#[tauri::command]
pub fn log_frontend_error(message: String) -> CommandResult<()> {
    tracing::error!(message = %message, "Frontend error");
    CommandResult::ok(())
}

//! Last-activity restore prompt commands
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tauri::State;

use fzl_core::LastActivity;

use super::tabs::{mutate, CommandResult, WorkspaceInfo};
use crate::state::AppState;

/// Summary shown in the restore dialog
#[derive(Debug, Serialize, Deserialize)]
pub struct PendingRestoreInfo {
    pub tab_count: usize,
    pub split_count: usize,
    pub is_dark: bool,
    pub timestamp: DateTime<Utc>,
}

impl From<LastActivity> for PendingRestoreInfo {
    fn from(record: LastActivity) -> Self {
        Self {
            tab_count: record.tabs.len(),
            split_count: record.tabs.iter().map(|tab| tab.splits.len()).sum(),
            is_dark: record.is_dark,
            timestamp: record.timestamp,
        }
    }
}

#[tauri::command]
pub fn get_pending_restore(state: State<AppState>) -> CommandResult<Option<PendingRestoreInfo>> {
    state
        .with_board(|board| Ok(board.pending_restore().map(PendingRestoreInfo::from)))
        .into()
}

#[tauri::command]
pub fn restore_last_activity(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| Ok(board.restore_last_activity()))
}

#[tauri::command]
pub fn discard_last_activity(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| {
        board.discard_last_activity()?;
        Ok(true)
    })
}

//! Tab and split commands
use serde::{Deserialize, Serialize};
use tauri::State;

use fzl_core::{assume_transparent, Action, Board, Layout, MediaKind, Result, Split, Tab};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct SplitInfo {
    pub id: String,
    pub media: Option<String>,
    /// Render branch for the media, absent when the split is empty
    pub kind: Option<MediaKind>,
    pub transparent: bool,
}

impl From<&Split> for SplitInfo {
    fn from(split: &Split) -> Self {
        Self {
            id: split.id.clone(),
            media: split.media.clone(),
            kind: split.media.as_deref().map(MediaKind::of),
            transparent: split.media.as_deref().is_some_and(assume_transparent),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub name: String,
    pub splits: Vec<SplitInfo>,
}

impl From<&Tab> for TabInfo {
    fn from(tab: &Tab) -> Self {
        Self {
            id: tab.id.clone(),
            name: tab.name.clone(),
            splits: tab.splits.iter().map(SplitInfo::from).collect(),
        }
    }
}

/// Everything the toolbar and the split grid need to draw
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    pub tabs: Vec<TabInfo>,
    pub active_tab: usize,
    pub layout: Layout,
    pub can_add_tab: bool,
    pub can_remove_tab: bool,
    pub can_add_split: bool,
    pub can_remove_split: bool,
    pub is_dark: bool,
    pub controls_visible: bool,
}

impl WorkspaceInfo {
    pub fn of(board: &Board) -> Self {
        let (tabs, active_tab, layout) = board.with_workspace(|ws| {
            (
                ws.tabs().iter().map(TabInfo::from).collect(),
                ws.active_tab_index(),
                ws.layout(),
            )
        });

        Self {
            tabs,
            active_tab,
            layout,
            can_add_tab: board.can_add_tab(),
            can_remove_tab: board.can_remove_tab(),
            can_add_split: board.can_add_split(),
            can_remove_split: board.can_remove_split(),
            is_dark: board.is_dark(),
            controls_visible: board.controls_visible(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T> From<Result<T>> for CommandResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => CommandResult::ok(data),
            Err(e) => CommandResult::err(e.to_string()),
        }
    }
}

/// Run a board mutation and answer with the resulting workspace
pub(crate) fn mutate<F>(state: &AppState, f: F) -> CommandResult<WorkspaceInfo>
where
    F: FnOnce(&Board) -> Result<bool>,
{
    state
        .with_board(|board| {
            f(board)?;
            Ok(WorkspaceInfo::of(board))
        })
        .into()
}

#[tauri::command]
pub fn get_workspace(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    state.with_board(|board| Ok(WorkspaceInfo::of(board))).into()
}

#[tauri::command]
pub fn dispatch_action(state: State<AppState>, action: Action) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| board.dispatch(action))
}

#[tauri::command]
pub fn add_tab(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    mutate(&state, Board::add_tab)
}

#[tauri::command]
pub fn remove_tab(state: State<AppState>, index: usize) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| board.remove_tab(index))
}

#[tauri::command]
pub fn select_tab(state: State<AppState>, index: usize) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| board.select_tab(index))
}

#[tauri::command]
pub fn rename_tab(
    state: State<AppState>,
    index: usize,
    name: String,
) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| board.rename_tab(index, name))
}

#[tauri::command]
pub fn add_split(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    mutate(&state, Board::add_split)
}

#[tauri::command]
pub fn remove_split(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    mutate(&state, Board::remove_split)
}

#[tauri::command]
pub fn reset_splits(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    mutate(&state, Board::reset_splits)
}

#[tauri::command]
pub fn create_grid_layout(state: State<AppState>) -> CommandResult<WorkspaceInfo> {
    mutate(&state, Board::create_grid_layout)
}

#[tauri::command]
pub fn set_layout(state: State<AppState>, layout: Layout) -> CommandResult<WorkspaceInfo> {
    mutate(&state, |board| board.set_layout(layout))
}

//! Color picker commands
use serde::{Deserialize, Serialize};
use tauri::{State, Webview};

use fzl_core::{Clipboard, Color, ColorFormat, CoreError};

use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: String,
    pub rgba: String,
}

impl From<Color> for ColorInfo {
    fn from(color: Color) -> Self {
        Self {
            hex: color.hex(),
            rgb: color.rgb(),
            rgba: color.rgba(1.0),
        }
    }
}

/// Writes through the page's async clipboard API
struct WebviewClipboard<'a>(&'a Webview);

impl Clipboard for WebviewClipboard<'_> {
    fn write_text(&self, text: &str) -> fzl_core::Result<()> {
        let literal =
            serde_json::to_string(text).map_err(|e| CoreError::Platform(e.to_string()))?;
        self.0
            .eval(&format!("navigator.clipboard.writeText({literal})"))
            .map_err(|e| CoreError::Platform(e.to_string()))
    }
}

fn history(state: &AppState) -> fzl_core::Result<Vec<ColorInfo>> {
    state.with_board(|board| {
        Ok(board
            .color_history()
            .into_iter()
            .map(ColorInfo::from)
            .collect())
    })
}

/// Add a color chosen in the picker or sampled by the page's eyedropper
#[tauri::command]
pub fn pick_color(state: State<AppState>, color: String) -> CommandResult<Vec<ColorInfo>> {
    let result = color.parse::<Color>().and_then(|color| {
        state.with_board(|board| Ok(board.pick_color(color)))?;
        history(&state)
    });
    result.into()
}

#[tauri::command]
pub fn get_color_history(state: State<AppState>) -> CommandResult<Vec<ColorInfo>> {
    history(&state).into()
}

#[tauri::command]
pub fn remove_color(state: State<AppState>, color: String) -> CommandResult<Vec<ColorInfo>> {
    let result = color.parse::<Color>().and_then(|color| {
        state.with_board(|board| Ok(board.remove_color(&color)))?;
        history(&state)
    });
    result.into()
}

#[tauri::command]
pub fn copy_color(
    webview: Webview,
    state: State<AppState>,
    color: String,
    format: ColorFormat,
) -> CommandResult<String> {
    let clipboard = WebviewClipboard(&webview);
    let result = color
        .parse::<Color>()
        .and_then(|color| state.with_board(|board| board.copy_color(&clipboard, &color, format)));
    result.into()
}

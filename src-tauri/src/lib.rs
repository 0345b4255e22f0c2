//! FZL Splits - Tauri Application
//!
//! - The board in Rust owns all state
//! - The webview draws what command replies describe
//! - The native window follows the board's theme

mod commands;
mod state;

use state::AppState;
use tauri::webview::WebviewBuilder;
use tauri::window::WindowBuilder;
use tauri::{Emitter, LogicalPosition, LogicalSize, Manager, WebviewUrl};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    fzl_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            // Initialize board state
            let state = AppState::new()?;
            state.initialize()?;

            // Theme changes made anywhere reach the native chrome and the page
            let handle = app.handle().clone();
            state.with_board(|board| {
                board.set_theme_listener(move |is_dark| {
                    handle.set_theme(commands::settings::platform_theme_for(is_dark));
                    let _ = handle.emit("theme-changed", is_dark);
                });
                Ok(())
            })?;

            // Store state in Tauri
            app.manage(state);

            let window_label = "main";

            let window = WindowBuilder::new(app, window_label)
                .title("FZLSplits")
                .inner_size(1280.0, 800.0)
                .min_inner_size(640.0, 480.0)
                .center()
                .build()?;

            let ui_webview = WebviewBuilder::new(
                commands::ui_webview_label(window_label),
                WebviewUrl::App("index.html".into()),
            )
            .auto_resize()
            .enable_clipboard_access();

            let ui_webview = window.add_child(
                ui_webview,
                LogicalPosition::new(0.0, 0.0),
                LogicalSize::new(1280.0, 800.0),
            )?;
            let _ = ui_webview.show();

            tracing::info!("FZL Splits started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            commands::diagnostics::log_frontend_error,
            // Window commands
            commands::windows::toggle_fullscreen,
            // Tab commands
            commands::tabs::get_workspace,
            commands::tabs::dispatch_action,
            commands::tabs::add_tab,
            commands::tabs::remove_tab,
            commands::tabs::select_tab,
            commands::tabs::rename_tab,
            commands::tabs::add_split,
            commands::tabs::remove_split,
            commands::tabs::reset_splits,
            commands::tabs::create_grid_layout,
            commands::tabs::set_layout,
            // Pane commands
            commands::panes::get_pane_views,
            commands::panes::pane_drag_start,
            commands::panes::pane_drag_move,
            commands::panes::pane_drag_end,
            commands::panes::pane_zoom_in,
            commands::panes::pane_zoom_out,
            commands::panes::report_media_error,
            commands::panes::submit_url,
            commands::panes::clear_split_media,
            commands::panes::paste_text,
            commands::panes::paste_image,
            commands::panes::upload_file,
            commands::panes::open_external,
            // Session commands
            commands::sessions::get_pending_restore,
            commands::sessions::restore_last_activity,
            commands::sessions::discard_last_activity,
            // Settings commands
            commands::settings::toggle_dark_mode,
            commands::settings::set_theme,
            commands::settings::toggle_controls,
            commands::settings::set_controls_visible,
            // Color commands
            commands::colors::pick_color,
            commands::colors::get_color_history,
            commands::colors::remove_color,
            commands::colors::copy_color,
        ])
        .run(tauri::generate_context!())
        .expect("error while running FZL Splits");
}

//! Main board state container
//!
//! The board owns the live workspace, one pane controller per split, and
//! every store. Persistence is an observed effect: after each change the
//! board compares revisions and writes only when something moved.

use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use fzl_media::{encode_data_uri, read_upload, resolve, MediaResolution, UploadPolicy};
use fzl_pane::{CaptureRegistry, PaneController, PaneView, Point, Transform};
use fzl_session::{LastActivity, LastActivityStore, Preferences, RestoreMode, SessionStore};
use fzl_storage::Database;
use fzl_tabs::{Action, Layout, Tab, Workspace};

use crate::color::{Color, ColorFormat, ColorHistory};
use crate::config::Config;
use crate::error::CoreError;
use crate::platform::{Clipboard, EyeDropper, Fullscreen};
use crate::Result;

type ThemeListener = Box<dyn Fn(bool) + Send + Sync>;

/// What the system clipboard handed over on paste
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    Image { mime: String, bytes: Vec<u8> },
    Text(String),
}

pub struct Board {
    config: Config,
    session_store: SessionStore,
    preferences: Preferences,
    last_activity: LastActivityStore,
    upload_policy: UploadPolicy,
    workspace: Arc<RwLock<Workspace>>,
    /// Pane controllers keyed by split id
    panes: Arc<RwLock<HashMap<String, PaneController>>>,
    captures: CaptureRegistry,
    is_dark: Arc<RwLock<bool>>,
    controls_visible: Arc<RwLock<bool>>,
    /// Record awaiting the user's restore/delete decision
    pending_restore: Arc<RwLock<Option<LastActivity>>>,
    color_history: Arc<RwLock<ColorHistory>>,
    theme_listener: Arc<RwLock<Option<ThemeListener>>>,
}

impl Board {
    /// Open the database named by `config` and build a board on it
    pub fn new(config: Config) -> Result<Self> {
        let db = Database::open(&config.database_path)?;
        Ok(Self::with_database(config, db))
    }

    pub fn with_database(config: Config, db: Database) -> Self {
        let ttl = Duration::hours(config.last_activity_ttl_hours);

        Self {
            session_store: SessionStore::new(db.clone()),
            preferences: Preferences::new(db.clone()),
            last_activity: LastActivityStore::new(db, ttl),
            upload_policy: UploadPolicy::new(config.max_upload_bytes),
            config,
            workspace: Arc::new(RwLock::new(Workspace::new())),
            panes: Arc::new(RwLock::new(HashMap::new())),
            captures: CaptureRegistry::new(),
            is_dark: Arc::new(RwLock::new(false)),
            controls_visible: Arc::new(RwLock::new(true)),
            pending_restore: Arc::new(RwLock::new(None)),
            color_history: Arc::new(RwLock::new(ColorHistory::new())),
            theme_listener: Arc::new(RwLock::new(None)),
        }
    }

    /// Load preferences and bring back the stored workspace
    pub fn initialize(&self) -> Result<()> {
        let is_dark = self.preferences.load_theme().unwrap_or(false);
        *self.is_dark.write() = is_dark;
        *self.controls_visible.write() = self.preferences.load_controls_visible();

        let workspace = match self.config.restore_mode {
            RestoreMode::Silent => self.session_store.hydrate(),
            RestoreMode::Prompt => {
                let pending = self.last_activity.pending(Utc::now());
                if let Some(record) = &pending {
                    tracing::info!(
                        tab_count = record.tabs.len(),
                        timestamp = %record.timestamp,
                        "Last activity available for restore"
                    );
                }
                *self.pending_restore.write() = pending;
                Workspace::new()
            }
        };

        self.replace_workspace(workspace);
        self.notify_theme(is_dark);

        tracing::info!(
            restore_mode = ?self.config.restore_mode,
            tab_count = self.workspace.read().tabs().len(),
            is_dark,
            "Board initialized"
        );

        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Workspace ===

    /// Apply a user action. `Ok(false)` means nothing changed.
    pub fn dispatch(&self, action: Action) -> Result<bool> {
        let changed = self.workspace.write().apply(action)?;
        if changed {
            self.after_change();
        }
        Ok(changed)
    }

    pub fn add_tab(&self) -> Result<bool> {
        self.dispatch(Action::AddTab)
    }

    pub fn remove_tab(&self, index: usize) -> Result<bool> {
        self.dispatch(Action::RemoveTab { index })
    }

    pub fn select_tab(&self, index: usize) -> Result<bool> {
        self.dispatch(Action::SelectTab { index })
    }

    pub fn rename_tab(&self, index: usize, name: String) -> Result<bool> {
        self.dispatch(Action::RenameTab { index, name })
    }

    pub fn add_split(&self) -> Result<bool> {
        self.dispatch(Action::AddSplit)
    }

    pub fn remove_split(&self) -> Result<bool> {
        self.dispatch(Action::RemoveSplit)
    }

    pub fn reset_splits(&self) -> Result<bool> {
        self.dispatch(Action::ResetSplits)
    }

    pub fn create_grid_layout(&self) -> Result<bool> {
        self.dispatch(Action::CreateGridLayout)
    }

    pub fn set_layout(&self, layout: Layout) -> Result<bool> {
        self.dispatch(Action::SetLayout { layout })
    }

    pub fn update_split_media(&self, split_id: &str, media: String) -> Result<bool> {
        self.dispatch(Action::UpdateSplitMedia {
            split_id: split_id.to_string(),
            media,
        })
    }

    pub fn clear_split_media(&self, split_id: &str) -> Result<bool> {
        self.update_split_media(split_id, String::new())
    }

    pub fn with_workspace<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Workspace) -> T,
    {
        f(&*self.workspace.read())
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.workspace.read().tabs().to_vec()
    }

    pub fn active_tab_index(&self) -> usize {
        self.workspace.read().active_tab_index()
    }

    pub fn layout(&self) -> Layout {
        self.workspace.read().layout()
    }

    pub fn revision(&self) -> u64 {
        self.workspace.read().revision()
    }

    pub fn can_add_tab(&self) -> bool {
        self.workspace.read().can_add_tab()
    }

    pub fn can_remove_tab(&self) -> bool {
        self.workspace.read().can_remove_tab()
    }

    pub fn can_add_split(&self) -> bool {
        self.workspace.read().active_tab().can_add_split()
    }

    pub fn can_remove_split(&self) -> bool {
        self.workspace.read().active_tab().can_remove_split()
    }

    fn after_change(&self) {
        let workspace = self.workspace.read();

        if let Err(e) = self.session_store.observe(&workspace) {
            tracing::error!(error = %e, "Failed to persist workspace");
        }
        self.record_activity(&workspace);
        self.sync_panes(&workspace);
    }

    /// Swap in a whole new tree and write it out unconditionally; its
    /// revision counter is unrelated to the one it replaces.
    fn replace_workspace(&self, workspace: Workspace) {
        *self.workspace.write() = workspace;
        let workspace = self.workspace.read();

        if let Err(e) = self.session_store.persist(&workspace) {
            tracing::error!(error = %e, "Failed to persist workspace");
        }
        self.record_activity(&workspace);
        self.sync_panes(&workspace);
    }

    fn record_activity(&self, workspace: &Workspace) {
        // Keep the old record intact until the user has decided on it
        if self.config.restore_mode != RestoreMode::Prompt || self.pending_restore.read().is_some()
        {
            return;
        }

        if let Err(e) = self.last_activity.record(workspace, *self.is_dark.read()) {
            tracing::error!(error = %e, "Failed to record last activity");
        }
    }

    /// Drop controllers for splits that are gone and point the rest at
    /// their split's current media
    fn sync_panes(&self, workspace: &Workspace) {
        let mut panes = self.panes.write();
        panes.retain(|split_id, _| workspace.find_split(split_id).is_some());

        for split in workspace.tabs().iter().flat_map(|tab| tab.splits.iter()) {
            panes
                .entry(split.id.clone())
                .or_insert_with(|| PaneController::new(split.id.clone(), split.media.clone()))
                .set_media(split.media.as_deref());
        }
    }

    // === Theme and controls ===

    pub fn is_dark(&self) -> bool {
        *self.is_dark.read()
    }

    pub fn set_dark_mode(&self, is_dark: bool) -> bool {
        {
            let mut current = self.is_dark.write();
            if *current == is_dark {
                return false;
            }
            *current = is_dark;
        }

        if let Err(e) = self.preferences.save_theme(is_dark) {
            tracing::error!(error = %e, "Failed to save theme preference");
        }
        self.record_activity(&self.workspace.read());
        self.notify_theme(is_dark);

        tracing::info!(is_dark, "Theme changed");
        true
    }

    /// Flip the theme and return the new value
    pub fn toggle_dark_mode(&self) -> bool {
        let next = !self.is_dark();
        self.set_dark_mode(next);
        next
    }

    /// Register the callback that applies the theme to the host. It is
    /// invoked right away with the current theme.
    pub fn set_theme_listener<F>(&self, listener: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        listener(self.is_dark());
        *self.theme_listener.write() = Some(Box::new(listener));
    }

    fn notify_theme(&self, is_dark: bool) {
        if let Some(listener) = self.theme_listener.read().as_ref() {
            listener(is_dark);
        }
    }

    pub fn controls_visible(&self) -> bool {
        *self.controls_visible.read()
    }

    pub fn set_controls_visible(&self, visible: bool) -> bool {
        {
            let mut current = self.controls_visible.write();
            if *current == visible {
                return false;
            }
            *current = visible;
        }

        if let Err(e) = self.preferences.save_controls_visible(visible) {
            tracing::error!(error = %e, "Failed to save controls visibility");
        }
        true
    }

    pub fn toggle_controls(&self) -> bool {
        let next = !self.controls_visible();
        self.set_controls_visible(next);
        next
    }

    // === Last activity ===

    pub fn pending_restore(&self) -> Option<LastActivity> {
        self.pending_restore.read().clone()
    }

    /// Replace the workspace with the pending record. Returns `false` if
    /// there was nothing to restore.
    pub fn restore_last_activity(&self) -> bool {
        let pending = self.pending_restore.write().take();
        let Some(record) = pending else {
            return false;
        };

        let is_dark = record.is_dark;
        tracing::info!(tab_count = record.tabs.len(), "Restoring last activity");

        self.replace_workspace(record.into_workspace());
        self.set_dark_mode(is_dark);
        true
    }

    /// Delete the pending record and resume recording
    pub fn discard_last_activity(&self) -> Result<()> {
        self.pending_restore.write().take();
        self.last_activity.discard()?;
        self.record_activity(&self.workspace.read());

        tracing::info!("Discarded last activity");
        Ok(())
    }

    // === Panes ===

    fn with_pane<F, T>(&self, split_id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut PaneController) -> T,
    {
        let mut panes = self.panes.write();
        let pane = panes
            .get_mut(split_id)
            .ok_or_else(|| CoreError::PaneNotFound(split_id.to_string()))?;
        Ok(f(pane))
    }

    pub fn pane_drag_start(&self, split_id: &str, pointer: Point) -> Result<bool> {
        self.with_pane(split_id, |pane| pane.drag_start(pointer, &self.captures))
    }

    pub fn pane_drag_move(&self, split_id: &str, pointer: Point) -> Result<Option<Transform>> {
        self.with_pane(split_id, |pane| pane.drag_move(pointer))
    }

    pub fn pane_drag_end(&self, split_id: &str) -> Result<Option<Transform>> {
        self.with_pane(split_id, PaneController::drag_end)
    }

    pub fn pane_zoom_in(&self, split_id: &str) -> Result<f64> {
        self.with_pane(split_id, PaneController::zoom_in)
    }

    pub fn pane_zoom_out(&self, split_id: &str) -> Result<f64> {
        self.with_pane(split_id, PaneController::zoom_out)
    }

    pub fn pane_view(&self, split_id: &str) -> Result<PaneView> {
        self.with_pane(split_id, |pane| pane.view())
    }

    /// Views for the active tab's panes, in split order
    pub fn pane_views(&self) -> Vec<PaneView> {
        let workspace = self.workspace.read();
        let panes = self.panes.read();

        workspace
            .active_tab()
            .splits
            .iter()
            .filter_map(|split| panes.get(&split.id).map(PaneController::view))
            .collect()
    }

    /// Panes currently holding a pointer capture
    pub fn captured_panes(&self) -> Vec<String> {
        self.captures.captured_panes()
    }

    /// The renderer could not load a pane's media. Only that pane's error
    /// flag changes; the split keeps its reference.
    pub fn report_media_error(&self, split_id: &str) -> Result<()> {
        self.with_pane(split_id, PaneController::mark_media_error)?;
        tracing::warn!(split_id, "Media failed to load");
        Ok(())
    }

    // === Media input ===

    /// Read an image file from disk into the split.
    ///
    /// The pane shows a loading state for the duration. Rejected or
    /// unreadable files leave the split untouched and the error is
    /// returned for the host to alert.
    pub async fn upload_file(&self, split_id: &str, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();

        if !self.with_pane(split_id, PaneController::begin_upload)? {
            tracing::debug!(split_id, "Upload already in progress");
            return Ok(false);
        }

        let outcome = match read_upload(path, &self.upload_policy).await {
            Ok(upload) => {
                tracing::info!(
                    split_id,
                    mime = %upload.mime,
                    size = upload.size,
                    "Upload accepted"
                );
                self.update_split_media(split_id, upload.data_uri)
            }
            Err(e) => {
                tracing::warn!(
                    split_id,
                    path = %path.display(),
                    error = %e,
                    "Upload rejected"
                );
                Err(e.into())
            }
        };

        // The split may have been removed while the file was read
        self.with_pane(split_id, PaneController::finish_upload).ok();

        outcome
    }

    pub fn paste(&self, split_id: &str, payload: ClipboardPayload) -> Result<bool> {
        match payload {
            ClipboardPayload::Image { mime, bytes } => {
                let upload = encode_data_uri(&mime, &bytes, &self.upload_policy).map_err(|e| {
                    tracing::warn!(split_id, error = %e, "Pasted image rejected");
                    e
                })?;
                self.update_split_media(split_id, upload.data_uri)
            }
            ClipboardPayload::Text(text) => self.submit_url(split_id, &text),
        }
    }

    /// Load typed or pasted text into the split. YouTube links are stored
    /// as their embed URL; blank input does nothing.
    pub fn submit_url(&self, split_id: &str, input: &str) -> Result<bool> {
        let resolution = resolve(input);
        if let MediaResolution::YouTube { video_id, .. } = &resolution {
            tracing::debug!(split_id, video_id = %video_id, "Resolved YouTube link");
        }

        match resolution.into_media() {
            Some(media) => self.update_split_media(split_id, media),
            None => Ok(false),
        }
    }

    // === Colors ===

    /// Record a picked color. Panes and tabs are not affected.
    pub fn pick_color(&self, color: Color) -> bool {
        tracing::info!(color = %color, "Color picked");
        self.color_history.write().push(color)
    }

    pub fn color_history(&self) -> Vec<Color> {
        self.color_history.read().colors().to_vec()
    }

    pub fn remove_color(&self, color: &Color) -> bool {
        self.color_history.write().remove(color)
    }

    /// Sample a screen pixel through the platform eyedropper
    pub async fn sample_color<E: EyeDropper>(&self, dropper: &E) -> Result<Color> {
        if !dropper.is_supported() {
            return Err(CoreError::Unsupported("EyeDropper"));
        }

        let hex = match dropper.open().await {
            Ok(hex) => hex,
            Err(e) => {
                tracing::warn!(error = %e, "Color sampling failed");
                return Err(match e {
                    CoreError::Platform(_) => e,
                    other => CoreError::Platform(other.to_string()),
                });
            }
        };

        let color: Color = hex.parse()?;
        self.pick_color(color);
        Ok(color)
    }

    /// Copy a color to the clipboard in the given format
    pub fn copy_color<C: Clipboard>(
        &self,
        clipboard: &C,
        color: &Color,
        format: ColorFormat,
    ) -> Result<String> {
        let text = color.format(format);
        clipboard.write_text(&text)?;
        tracing::debug!(text = %text, "Copied color");
        Ok(text)
    }

    pub fn toggle_fullscreen<F: Fullscreen>(&self, port: &F) -> Result<bool> {
        let next = !port.is_fullscreen()?;
        port.set_fullscreen(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fzl_media::MediaError;
    use fzl_session::{LAST_ACTIVITY_KEY, SNAPSHOT_KEY, THEME_KEY};
    use fzl_tabs::MAX_TABS;
    use parking_lot::Mutex;
    use std::path::PathBuf;

    fn config(mode: RestoreMode) -> Config {
        let mut config = Config::new(PathBuf::from("/unused"));
        config.restore_mode = mode;
        config
    }

    fn board_on(db: &Database, mode: RestoreMode) -> Board {
        let board = Board::with_database(config(mode), db.clone());
        board.initialize().unwrap();
        board
    }

    fn board() -> (Database, Board) {
        let db = Database::open_in_memory().unwrap();
        let board = board_on(&db, RestoreMode::Silent);
        (db, board)
    }

    fn first_split(board: &Board) -> String {
        board.with_workspace(|ws| ws.active_tab().splits[0].id.clone())
    }

    fn media_of(board: &Board, split_id: &str) -> Option<String> {
        board.with_workspace(|ws| ws.find_split(split_id).and_then(|s| s.media.clone()))
    }

    fn temp_image(name: &str, size: usize) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fzl-core-{}-{name}", std::process::id()));
        std::fs::write(&path, vec![0u8; size]).unwrap();
        path
    }

    #[test]
    fn test_fresh_board() {
        let (_, board) = board();
        let tabs = board.tabs();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].name, "Tab 1");
        assert_eq!(tabs[0].splits.len(), 1);
        assert!(board.can_add_tab());
        assert!(!board.can_remove_tab());
        assert!(board.controls_visible());
        assert!(!board.is_dark());
    }

    #[test]
    fn test_workspace_survives_restart() {
        let (db, board) = board();
        let id = first_split(&board);
        board
            .update_split_media(&id, "https://example.com/a.png".to_string())
            .unwrap();
        board.rename_tab(0, "Anatomy".to_string()).unwrap();
        assert!(db.contains_key(SNAPSHOT_KEY).unwrap());

        let restarted = board_on(&db, RestoreMode::Silent);
        let tabs = restarted.tabs();
        assert_eq!(tabs[0].name, "Anatomy");
        assert_eq!(tabs[0].splits[0].id, id);
        assert_eq!(
            media_of(&restarted, &id).as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[test]
    fn test_capped_actions_are_noops() {
        let (_, board) = board();
        for _ in 0..10 {
            board.add_tab().unwrap();
        }
        assert_eq!(board.tabs().len(), MAX_TABS);
        assert!(!board.add_tab().unwrap());
        assert_eq!(board.active_tab_index(), MAX_TABS - 1);

        for _ in 0..10 {
            board.add_split().unwrap();
        }
        assert!(!board.can_add_split());
        assert!(!board.add_split().unwrap());
    }

    #[test]
    fn test_unknown_split_is_an_error() {
        let (_, board) = board();
        let revision = board.revision();
        assert!(board
            .update_split_media("missing", "https://example.com/a.png".to_string())
            .is_err());
        assert!(matches!(
            board.pane_zoom_in("missing"),
            Err(CoreError::PaneNotFound(_))
        ));
        assert_eq!(board.revision(), revision);
    }

    #[test]
    fn test_theme_toggle_persists_and_notifies() {
        let (db, board) = board();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        board.set_theme_listener(move |is_dark| sink.lock().push(is_dark));

        assert!(board.toggle_dark_mode());
        assert_eq!(db.get_item(THEME_KEY).unwrap().as_deref(), Some("true"));
        assert!(!board.toggle_dark_mode());
        assert_eq!(*seen.lock(), vec![false, true, false]);
    }

    #[test]
    fn test_theme_applied_at_startup() {
        let db = Database::open_in_memory().unwrap();
        db.set_item(THEME_KEY, "true").unwrap();

        let board = board_on(&db, RestoreMode::Silent);
        assert!(board.is_dark());

        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        board.set_theme_listener(move |is_dark| *sink.lock() = Some(is_dark));
        assert_eq!(*seen.lock(), Some(true));
    }

    #[test]
    fn test_controls_visibility_persisted() {
        let (db, board) = board();
        assert!(!board.toggle_controls());
        assert!(!board_on(&db, RestoreMode::Silent).controls_visible());
    }

    #[test]
    fn test_media_change_resets_pane() {
        let (_, board) = board();
        let id = first_split(&board);
        board
            .submit_url(&id, "https://example.com/a.png")
            .unwrap();

        board.pane_zoom_in(&id).unwrap();
        board.pane_drag_start(&id, Point::new(10.0, 10.0)).unwrap();
        board.pane_drag_move(&id, Point::new(30.0, 50.0)).unwrap();
        let committed = board.pane_drag_end(&id).unwrap().unwrap();
        assert_eq!(committed.offset, Point::new(20.0, 40.0));

        board
            .submit_url(&id, "https://example.com/b.jpg")
            .unwrap();
        let view = board.pane_view(&id).unwrap();
        assert!(view.transform.is_identity());
        assert_eq!(view.zoom_percent, 100);
    }

    #[test]
    fn test_drag_does_not_touch_workspace() {
        let (_, board) = board();
        let id = first_split(&board);
        board.submit_url(&id, "https://example.com/a.png").unwrap();
        let revision = board.revision();

        board.pane_drag_start(&id, Point::ORIGIN).unwrap();
        for step in 1..50 {
            board
                .pane_drag_move(&id, Point::new(step as f64, 0.0))
                .unwrap();
        }
        board.pane_drag_end(&id).unwrap();

        assert_eq!(board.revision(), revision);
    }

    #[test]
    fn test_removed_split_releases_capture() {
        let (_, board) = board();
        board.add_split().unwrap();
        let last = board.with_workspace(|ws| ws.active_tab().splits[1].id.clone());
        board.submit_url(&last, "https://example.com/a.png").unwrap();

        assert!(board.pane_drag_start(&last, Point::ORIGIN).unwrap());
        assert_eq!(board.captured_panes(), vec![last.clone()]);

        board.remove_split().unwrap();
        assert!(board.captured_panes().is_empty());
        assert!(board.pane_view(&last).is_err());
    }

    #[test]
    fn test_media_error_is_pane_local() {
        let (_, board) = board();
        board.add_split().unwrap();
        let ids: Vec<String> =
            board.with_workspace(|ws| ws.active_tab().splits.iter().map(|s| s.id.clone()).collect());
        board.submit_url(&ids[0], "https://example.com/a.png").unwrap();
        let revision = board.revision();

        board.report_media_error(&ids[0]).unwrap();

        assert!(board.pane_view(&ids[0]).unwrap().media_error);
        assert!(!board.pane_view(&ids[1]).unwrap().media_error);
        assert_eq!(board.revision(), revision);
        assert!(media_of(&board, &ids[0]).is_some());
    }

    #[test]
    fn test_paste_youtube_link() {
        let (_, board) = board();
        let id = first_split(&board);
        let changed = board
            .paste(
                &id,
                ClipboardPayload::Text("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
            )
            .unwrap();

        assert!(changed);
        assert_eq!(
            media_of(&board, &id).as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_paste_image_bytes() {
        let (db, board) = board();
        let id = first_split(&board);
        board
            .paste(
                &id,
                ClipboardPayload::Image {
                    mime: "image/png".to_string(),
                    bytes: vec![137, 80, 78, 71],
                },
            )
            .unwrap();

        let media = media_of(&board, &id).unwrap();
        assert!(media.starts_with("data:image/png;base64,"));
        assert!(db.contains_key(SNAPSHOT_KEY).unwrap());
    }

    #[test]
    fn test_blank_input_is_noop() {
        let (_, board) = board();
        let id = first_split(&board);
        assert!(!board.submit_url(&id, "   ").unwrap());
        assert!(media_of(&board, &id).is_none());
    }

    #[tokio::test]
    async fn test_upload_png() {
        let (_, board) = board();
        let id = first_split(&board);
        let path = temp_image("drop.png", 2 * 1024 * 1024);
        assert!(board.submit_url(&id, "https://example.com/a.png").unwrap());
        board.pane_zoom_in(&id).unwrap();
        board.pane_drag_start(&id, Point::new(0.0, 0.0)).unwrap();
        board.pane_drag_move(&id, Point::new(30.0, 15.0)).unwrap();
        board.pane_drag_end(&id).unwrap();
        assert!(!board.pane_view(&id).unwrap().transform.is_identity());

        assert!(board.upload_file(&id, &path).await.unwrap());

        let media = media_of(&board, &id).unwrap();
        assert!(media.starts_with("data:image/png;base64,"));
        let view = board.pane_view(&id).unwrap();
        assert!(!view.loading);
        assert!(view.transform.is_identity());
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_upload_too_large() {
        let (_, board) = board();
        let id = first_split(&board);
        let path = temp_image("huge.png", 12 * 1024 * 1024);
        let revision = board.revision();

        let result = board.upload_file(&id, &path).await;
        assert!(matches!(
            result,
            Err(CoreError::Media(MediaError::TooLarge { .. }))
        ));
        assert!(media_of(&board, &id).is_none());
        assert!(!board.pane_view(&id).unwrap().loading);
        assert_eq!(board.revision(), revision);
        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_upload_missing_file() {
        let (_, board) = board();
        let id = first_split(&board);
        let path = std::env::temp_dir().join("fzl-core-does-not-exist.png");

        let result = board.upload_file(&id, &path).await;
        assert!(matches!(result, Err(CoreError::Media(MediaError::Read(_)))));
        assert!(!board.pane_view(&id).unwrap().loading);
    }

    #[test]
    fn test_prompt_restore() {
        let db = Database::open_in_memory().unwrap();
        let board = board_on(&db, RestoreMode::Prompt);
        let id = first_split(&board);
        board.submit_url(&id, "https://example.com/a.png").unwrap();
        board.toggle_dark_mode();
        assert!(db.contains_key(LAST_ACTIVITY_KEY).unwrap());

        let restarted = board_on(&db, RestoreMode::Prompt);
        assert!(restarted.pending_restore().is_some());
        assert!(media_of(&restarted, &id).is_none());

        assert!(restarted.restore_last_activity());
        assert!(restarted.pending_restore().is_none());
        assert!(restarted.is_dark());
        assert_eq!(
            media_of(&restarted, &id).as_deref(),
            Some("https://example.com/a.png")
        );
        assert!(!restarted.restore_last_activity());
    }

    #[test]
    fn test_prompt_discard() {
        let db = Database::open_in_memory().unwrap();
        let board = board_on(&db, RestoreMode::Prompt);
        let id = first_split(&board);
        board.submit_url(&id, "https://example.com/a.png").unwrap();

        let restarted = board_on(&db, RestoreMode::Prompt);
        assert!(restarted.pending_restore().is_some());
        restarted.discard_last_activity().unwrap();

        assert!(restarted.pending_restore().is_none());
        assert!(!db.contains_key(LAST_ACTIVITY_KEY).unwrap());
        assert!(board_on(&db, RestoreMode::Prompt).pending_restore().is_none());
    }

    #[test]
    fn test_pending_record_kept_until_decision() {
        let db = Database::open_in_memory().unwrap();
        let board = board_on(&db, RestoreMode::Prompt);
        let id = first_split(&board);
        board.submit_url(&id, "https://example.com/a.png").unwrap();

        let restarted = board_on(&db, RestoreMode::Prompt);
        restarted.add_tab().unwrap();

        let pending = restarted.pending_restore().unwrap();
        assert_eq!(pending.tabs.len(), 1);
        assert!(db.contains_key(LAST_ACTIVITY_KEY).unwrap());
    }

    #[test]
    fn test_pick_color_leaves_workspace_alone() {
        let (_, board) = board();
        let revision = board.revision();

        let red: Color = "#ff0000".parse().unwrap();
        assert!(board.pick_color(red));
        assert!(!board.pick_color(red));
        assert_eq!(board.color_history(), vec![red]);
        assert_eq!(board.revision(), revision);

        assert!(board.remove_color(&red));
        assert!(board.color_history().is_empty());
    }

    struct FakeDropper {
        supported: bool,
        result: std::result::Result<&'static str, &'static str>,
    }

    impl EyeDropper for FakeDropper {
        fn is_supported(&self) -> bool {
            self.supported
        }

        async fn open(&self) -> Result<String> {
            self.result
                .map(str::to_string)
                .map_err(|e| CoreError::Platform(e.to_string()))
        }
    }

    #[tokio::test]
    async fn test_sample_color() {
        let (_, board) = board();
        let dropper = FakeDropper {
            supported: true,
            result: Ok("#336699"),
        };

        let color = board.sample_color(&dropper).await.unwrap();
        assert_eq!(color.rgb(), "rgb(51, 102, 153)");
        assert_eq!(board.color_history(), vec![color]);
    }

    #[tokio::test]
    async fn test_sample_color_unsupported() {
        let (_, board) = board();
        let dropper = FakeDropper {
            supported: false,
            result: Ok("#336699"),
        };

        assert!(matches!(
            board.sample_color(&dropper).await,
            Err(CoreError::Unsupported(_))
        ));
        assert!(board.color_history().is_empty());
    }

    #[tokio::test]
    async fn test_sample_color_cancelled() {
        let (_, board) = board();
        let dropper = FakeDropper {
            supported: true,
            result: Err("cancelled"),
        };

        assert!(matches!(
            board.sample_color(&dropper).await,
            Err(CoreError::Platform(_))
        ));
        assert!(board.color_history().is_empty());
    }

    #[derive(Default)]
    struct FakeClipboard {
        written: Mutex<Vec<String>>,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            self.written.lock().push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_color_formats() {
        let (_, board) = board();
        let clipboard = FakeClipboard::default();
        let color = Color::new(255, 128, 0);

        board.copy_color(&clipboard, &color, ColorFormat::Hex).unwrap();
        board.copy_color(&clipboard, &color, ColorFormat::Rgb).unwrap();
        board
            .copy_color(&clipboard, &color, ColorFormat::Rgba { alpha: 1.0 })
            .unwrap();

        assert_eq!(
            *clipboard.written.lock(),
            vec!["#ff8000", "rgb(255, 128, 0)", "rgba(255, 128, 0, 1)"]
        );
    }

    #[derive(Default)]
    struct FakeWindow {
        fullscreen: Mutex<bool>,
    }

    impl Fullscreen for FakeWindow {
        fn is_fullscreen(&self) -> Result<bool> {
            Ok(*self.fullscreen.lock())
        }

        fn set_fullscreen(&self, fullscreen: bool) -> Result<()> {
            *self.fullscreen.lock() = fullscreen;
            Ok(())
        }
    }

    #[test]
    fn test_toggle_fullscreen() {
        let (_, board) = board();
        let window = FakeWindow::default();
        assert!(board.toggle_fullscreen(&window).unwrap());
        assert!(!board.toggle_fullscreen(&window).unwrap());
    }
}

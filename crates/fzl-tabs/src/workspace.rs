//! Workspace: the live tab/split tree
//!
//! Holds the tabs, the active tab index and the layout mode. Each
//! successful mutation bumps `revision`; observers compare revisions to
//! decide when to persist.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

use crate::action::Action;
use crate::error::TabError;
use crate::layout::Layout;
use crate::split::Split;
use crate::tab::{Tab, MAX_SPLITS_PER_TAB};
use crate::Result;

pub const MAX_TABS: usize = 5;
pub const GRID_SPLITS: usize = 4;

#[derive(Debug, Clone)]
pub struct Workspace {
    tabs: Vec<Tab>,
    active_tab: usize,
    layout: Layout,
    revision: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Workspace {
    pub fn new() -> Self {
        let now = Utc::now();

        Self {
            tabs: vec![Tab::new(default_tab_name(0))],
            active_tab: 0,
            layout: Layout::default(),
            revision: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a workspace from previously stored tabs, normalizing them so
    /// every invariant holds regardless of what was stored.
    pub fn restore(tabs: Vec<Tab>, active_tab: usize) -> Self {
        let tabs = normalize_tabs(tabs);
        if tabs.is_empty() {
            return Self::new();
        }

        let active_tab = active_tab.min(tabs.len() - 1);
        let mut workspace = Self::new();
        workspace.tabs = tabs;
        workspace.active_tab = active_tab;
        workspace
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    // === Accessors ===

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn active_tab_index(&self) -> usize {
        self.active_tab
    }

    pub fn active_tab(&self) -> &Tab {
        // active_tab is kept in range by every mutator
        &self.tabs[self.active_tab]
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn can_add_tab(&self) -> bool {
        self.tabs.len() < MAX_TABS
    }

    pub fn can_remove_tab(&self) -> bool {
        self.tabs.len() > 1
    }

    /// Look up a split anywhere in the tree
    pub fn find_split(&self, split_id: &str) -> Option<&Split> {
        self.tabs.iter().find_map(|tab| tab.split(split_id))
    }

    pub fn split_ids(&self) -> impl Iterator<Item = &str> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.splits.iter().map(|s| s.id.as_str()))
    }

    // === Mutations ===

    pub fn apply(&mut self, action: Action) -> Result<bool> {
        let name = action.name();
        let changed = match action {
            Action::AddTab => self.add_tab(),
            Action::RemoveTab { index } => self.remove_tab(index)?,
            Action::SelectTab { index } => self.select_tab(index)?,
            Action::RenameTab { index, name } => self.rename_tab(index, &name)?,
            Action::AddSplit => self.add_split(),
            Action::RemoveSplit => self.remove_split(),
            Action::ResetSplits => self.reset_splits(),
            Action::CreateGridLayout => self.create_grid_layout(),
            Action::SetLayout { layout } => self.set_layout(layout),
            Action::UpdateSplitMedia { split_id, media } => {
                self.update_split_media(&split_id, media)?
            }
        };

        tracing::debug!(
            action = name,
            changed,
            revision = self.revision,
            "Applied workspace action"
        );

        Ok(changed)
    }

    pub fn add_tab(&mut self) -> bool {
        if !self.can_add_tab() {
            return false;
        }

        let tab = Tab::new(default_tab_name(self.tabs.len()));
        tracing::info!(tab_id = %tab.id, name = %tab.name, "Created tab");

        self.tabs.push(tab);
        self.active_tab = self.tabs.len() - 1;
        self.touch();
        true
    }

    pub fn remove_tab(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        if !self.can_remove_tab() {
            return Ok(false);
        }

        let tab = self.tabs.remove(index);
        self.active_tab = self.active_tab.min(self.tabs.len() - 1);
        tracing::info!(tab_id = %tab.id, "Removed tab");

        self.touch();
        Ok(true)
    }

    pub fn select_tab(&mut self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        if self.active_tab == index {
            return Ok(false);
        }

        self.active_tab = index;
        self.touch();
        Ok(true)
    }

    pub fn rename_tab(&mut self, index: usize, name: &str) -> Result<bool> {
        self.check_index(index)?;
        if !self.tabs[index].rename(name) {
            return Ok(false);
        }

        self.touch();
        Ok(true)
    }

    pub fn add_split(&mut self) -> bool {
        let changed = self.active_tab_mut().add_split();
        if changed {
            self.touch();
        }
        changed
    }

    /// Drop the last split of the active tab. A tab never goes below one split.
    pub fn remove_split(&mut self) -> bool {
        let changed = self.active_tab_mut().remove_last_split();
        if changed {
            self.touch();
        }
        changed
    }

    pub fn reset_splits(&mut self) -> bool {
        self.active_tab_mut().replace_splits(1);
        self.touch();
        true
    }

    pub fn create_grid_layout(&mut self) -> bool {
        self.active_tab_mut().replace_splits(GRID_SPLITS);
        self.layout = Layout::Grid;
        self.touch();
        true
    }

    pub fn set_layout(&mut self, layout: Layout) -> bool {
        if self.layout == layout {
            return false;
        }

        self.layout = layout;
        self.touch();
        true
    }

    /// Set (or clear, with an empty string) the media of a split in the active tab
    pub fn update_split_media(&mut self, split_id: &str, media: String) -> Result<bool> {
        let split = self
            .active_tab_mut()
            .split_mut(split_id)
            .ok_or_else(|| TabError::SplitNotFound(split_id.to_string()))?;

        if !split.set_media(media) {
            return Ok(false);
        }

        self.touch();
        Ok(true)
    }

    fn active_tab_mut(&mut self) -> &mut Tab {
        &mut self.tabs[self.active_tab]
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tabs.len() {
            return Err(TabError::IndexOutOfRange {
                index,
                count: self.tabs.len(),
            });
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.updated_at = Utc::now();
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

fn default_tab_name(index: usize) -> String {
    format!("Tab {}", index + 1)
}

/// Clamp stored tabs into the tree invariants: tab and split caps, at least
/// one split per tab, unique ids and non-blank names.
fn normalize_tabs(mut tabs: Vec<Tab>) -> Vec<Tab> {
    if tabs.len() > MAX_TABS {
        tracing::warn!(count = tabs.len(), "Dropping tabs beyond the limit");
        tabs.truncate(MAX_TABS);
    }

    let mut tab_ids = HashSet::new();
    let mut split_ids = HashSet::new();

    for (index, tab) in tabs.iter_mut().enumerate() {
        if tab.id.is_empty() || !tab_ids.insert(tab.id.clone()) {
            tab.id = Uuid::new_v4().to_string();
            tab_ids.insert(tab.id.clone());
        }
        if tab.name.trim().is_empty() {
            tab.name = default_tab_name(index);
        }

        if tab.splits.len() > MAX_SPLITS_PER_TAB {
            tracing::warn!(tab_id = %tab.id, count = tab.splits.len(), "Dropping splits beyond the limit");
            tab.splits.truncate(MAX_SPLITS_PER_TAB);
        }
        for split in tab.splits.iter_mut() {
            if split.id.is_empty() || !split_ids.insert(split.id.clone()) {
                split.id = Uuid::new_v4().to_string();
                split_ids.insert(split.id.clone());
            }
        }
        if tab.splits.is_empty() {
            tab.splits.push(Split::new());
        }
    }

    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workspace() {
        let ws = Workspace::new();
        assert_eq!(ws.tabs().len(), 1);
        assert_eq!(ws.active_tab().name, "Tab 1");
        assert_eq!(ws.active_tab().split_count(), 1);
        assert_eq!(ws.revision(), 0);
    }

    #[test]
    fn test_add_tab_caps_at_five() {
        let mut ws = Workspace::new();
        for expected in 2..=MAX_TABS {
            assert!(ws.add_tab());
            assert_eq!(ws.tabs().len(), expected);
            assert_eq!(ws.active_tab_index(), expected - 1);
        }

        let revision = ws.revision();
        assert!(!ws.add_tab());
        assert_eq!(ws.tabs().len(), MAX_TABS);
        assert_eq!(ws.revision(), revision);
    }

    #[test]
    fn test_remove_last_tab_is_noop() {
        let mut ws = Workspace::new();
        assert!(!ws.remove_tab(0).unwrap());
        assert_eq!(ws.tabs().len(), 1);
    }

    #[test]
    fn test_remove_tab_clamps_active() {
        let mut ws = Workspace::new();
        ws.add_tab();
        ws.add_tab();
        assert_eq!(ws.active_tab_index(), 2);

        assert!(ws.remove_tab(2).unwrap());
        assert_eq!(ws.active_tab_index(), 1);

        ws.select_tab(0).unwrap();
        assert!(ws.remove_tab(1).unwrap());
        assert_eq!(ws.active_tab_index(), 0);
    }

    #[test]
    fn test_remove_tab_out_of_range() {
        let mut ws = Workspace::new();
        ws.add_tab();
        assert_eq!(
            ws.remove_tab(7),
            Err(TabError::IndexOutOfRange { index: 7, count: 2 })
        );
    }

    #[test]
    fn test_rename_tab() {
        let mut ws = Workspace::new();
        assert!(!ws.rename_tab(0, " ").unwrap());
        assert!(ws.rename_tab(0, "Moodboard").unwrap());
        assert_eq!(ws.active_tab().name, "Moodboard");
    }

    #[test]
    fn test_add_split_caps_at_six() {
        let mut ws = Workspace::new();
        for _ in 0..MAX_SPLITS_PER_TAB + 3 {
            ws.add_split();
        }
        assert_eq!(ws.active_tab().split_count(), MAX_SPLITS_PER_TAB);
        assert!(!ws.add_split());
    }

    #[test]
    fn test_remove_split_keeps_one() {
        let mut ws = Workspace::new();
        ws.add_split();
        assert!(ws.remove_split());
        assert!(!ws.remove_split());
        assert_eq!(ws.active_tab().split_count(), 1);
    }

    #[test]
    fn test_reset_splits_generates_fresh_id() {
        let mut ws = Workspace::new();
        ws.add_split();
        ws.add_split();
        let before: Vec<String> = ws.split_ids().map(str::to_string).collect();

        assert!(ws.reset_splits());
        let tab = ws.active_tab();
        assert_eq!(tab.split_count(), 1);
        assert!(!before.contains(&tab.splits[0].id));
    }

    #[test]
    fn test_create_grid_layout() {
        let mut ws = Workspace::new();
        ws.set_layout(Layout::Rows);
        assert!(ws.create_grid_layout());
        assert_eq!(ws.active_tab().split_count(), GRID_SPLITS);
        assert_eq!(ws.layout(), Layout::Grid);
    }

    #[test]
    fn test_update_split_media() {
        let mut ws = Workspace::new();
        let split_id = ws.active_tab().splits[0].id.clone();

        assert!(ws
            .update_split_media(&split_id, "https://example.com/a.png".to_string())
            .unwrap());
        assert_eq!(
            ws.find_split(&split_id).unwrap().media.as_deref(),
            Some("https://example.com/a.png")
        );

        assert!(ws.update_split_media(&split_id, String::new()).unwrap());
        assert_eq!(ws.find_split(&split_id).unwrap().media, None);
    }

    #[test]
    fn test_update_media_only_targets_active_tab() {
        let mut ws = Workspace::new();
        let first_split = ws.active_tab().splits[0].id.clone();
        ws.add_tab();

        assert_eq!(
            ws.update_split_media(&first_split, "https://example.com/a.png".to_string()),
            Err(TabError::SplitNotFound(first_split))
        );
    }

    #[test]
    fn test_apply_bumps_revision_only_on_change() {
        let mut ws = Workspace::new();
        assert!(ws.apply(Action::AddSplit).unwrap());
        assert_eq!(ws.revision(), 1);

        assert!(!ws
            .apply(Action::RenameTab {
                index: 0,
                name: String::new()
            })
            .unwrap());
        assert_eq!(ws.revision(), 1);
    }

    #[test]
    fn test_restore_normalizes() {
        let mut crowded = Tab::new("Crowded");
        crowded.splits = (0..9).map(|_| Split::new()).collect();
        let mut empty = Tab::new("");
        empty.splits.clear();
        let duplicate = crowded.clone();

        let ws = Workspace::restore(vec![crowded, empty, duplicate], 10);
        assert_eq!(ws.tabs().len(), 3);
        assert_eq!(ws.active_tab_index(), 2);
        assert_eq!(ws.tabs()[0].split_count(), MAX_SPLITS_PER_TAB);
        assert_eq!(ws.tabs()[1].split_count(), 1);
        assert_eq!(ws.tabs()[1].name, "Tab 2");

        let ids: HashSet<&str> = ws.split_ids().collect();
        assert_eq!(ids.len(), ws.split_ids().count());
        assert_ne!(ws.tabs()[0].id, ws.tabs()[2].id);
    }

    #[test]
    fn test_restore_empty_yields_default() {
        let ws = Workspace::restore(Vec::new(), 0);
        assert_eq!(ws.tabs().len(), 1);
    }
}

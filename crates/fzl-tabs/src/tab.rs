//! Tab data structure
//!
//! A tab is a named, ordered collection of splits. It always holds at
//! least one split and never more than [`MAX_SPLITS_PER_TAB`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::split::Split;

pub const MAX_SPLITS_PER_TAB: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered panes
    pub splits: Vec<Split>,
}

impl Tab {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            splits: vec![Split::new()],
        }
    }

    /// Rename the tab. Names that trim to nothing are ignored.
    pub fn rename(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == self.name {
            return false;
        }

        self.name = name.to_string();
        true
    }

    pub fn can_add_split(&self) -> bool {
        self.splits.len() < MAX_SPLITS_PER_TAB
    }

    pub fn can_remove_split(&self) -> bool {
        self.splits.len() > 1
    }

    pub fn add_split(&mut self) -> bool {
        if !self.can_add_split() {
            return false;
        }

        self.splits.push(Split::new());
        true
    }

    /// Drop the last split, keeping at least one
    pub fn remove_last_split(&mut self) -> bool {
        if !self.can_remove_split() {
            return false;
        }

        self.splits.pop();
        true
    }

    /// Replace all splits with `count` fresh ones
    pub fn replace_splits(&mut self, count: usize) {
        let count = count.clamp(1, MAX_SPLITS_PER_TAB);
        self.splits = (0..count).map(|_| Split::new()).collect();
    }

    pub fn split(&self, split_id: &str) -> Option<&Split> {
        self.splits.iter().find(|s| s.id == split_id)
    }

    pub fn split_mut(&mut self, split_id: &str) -> Option<&mut Split> {
        self.splits.iter_mut().find(|s| s.id == split_id)
    }

    pub fn split_count(&self) -> usize {
        self.splits.len()
    }

    /// Number of splits currently showing something
    pub fn media_count(&self) -> usize {
        self.splits.iter().filter(|s| s.has_media()).count()
    }
}

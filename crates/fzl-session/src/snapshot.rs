//! Persisted snapshot of the tab tree

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fzl_media::{is_durable, is_transient};
use fzl_tabs::{Split, Tab, Workspace};

pub const SNAPSHOT_VERSION: u64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotSplit {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotTab {
    pub id: String,
    pub name: String,
    pub splits: Vec<SnapshotSplit>,
}

/// Current (v2) on-disk envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u64,
    pub tabs: Vec<SnapshotTab>,
    /// Creation time of the workspace, so an unchanged tree always
    /// serializes to the same JSON
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    /// Project the workspace down to what is worth keeping: splits with
    /// durable media, and tabs that still have splits after that.
    ///
    /// Returns `None` when nothing survives the filter.
    pub fn capture(workspace: &Workspace) -> Option<Self> {
        let tabs: Vec<SnapshotTab> = workspace
            .tabs()
            .iter()
            .filter_map(SnapshotTab::durable_from)
            .collect();

        if tabs.is_empty() {
            return None;
        }

        Some(Self {
            version: SNAPSHOT_VERSION,
            tabs,
            timestamp: workspace.created_at(),
        })
    }
}

impl SnapshotTab {
    pub fn durable_from(tab: &Tab) -> Option<Self> {
        let splits: Vec<SnapshotSplit> = tab
            .splits
            .iter()
            .filter(|split| split.media.as_deref().is_some_and(is_durable))
            .map(SnapshotSplit::from)
            .collect();

        if splits.is_empty() {
            return None;
        }

        Some(Self {
            id: tab.id.clone(),
            name: tab.name.clone(),
            splits,
        })
    }

    /// Keep every split but drop media that cannot outlive this session
    pub fn structural_from(tab: &Tab) -> Self {
        Self {
            id: tab.id.clone(),
            name: tab.name.clone(),
            splits: tab
                .splits
                .iter()
                .map(|split| SnapshotSplit {
                    id: split.id.clone(),
                    media: split.media.clone().filter(|m| is_durable(m)),
                })
                .collect(),
        }
    }
}

impl From<&Split> for SnapshotSplit {
    fn from(split: &Split) -> Self {
        Self {
            id: split.id.clone(),
            media: split.media.clone(),
        }
    }
}

impl From<SnapshotSplit> for Split {
    /// Blob references never survive a reload, so they are cleared here
    fn from(split: SnapshotSplit) -> Self {
        let media = match split.media {
            Some(media) if is_transient(&media) => {
                tracing::debug!(split_id = %split.id, "Clearing transient media reference");
                None
            }
            other => other,
        };

        Split {
            id: split.id,
            media,
        }
    }
}

impl From<SnapshotTab> for Tab {
    fn from(tab: SnapshotTab) -> Self {
        Tab {
            id: tab.id,
            name: tab.name,
            splits: tab.splits.into_iter().map(Split::from).collect(),
        }
    }
}

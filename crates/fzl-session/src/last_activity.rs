//! Last-activity record for prompted restore
//!
//! In [`RestoreMode::Prompt`] the board keeps a single record of the most
//! recent workspace. At startup a fresh record is offered to the user, who
//! either restores it or deletes it. Records older than the TTL are dropped
//! without asking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use fzl_media::is_durable;
use fzl_storage::Database;
use fzl_tabs::{Tab, Workspace};

use crate::keys::LAST_ACTIVITY_KEY;
use crate::schema::{decode_value, parse_timestamp};
use crate::snapshot::SnapshotTab;
use crate::Result;

pub const DEFAULT_TTL_HOURS: i64 = 24;

/// How the workspace comes back at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestoreMode {
    /// Hydrate from the snapshot without asking
    #[default]
    Silent,
    /// Offer the last-activity record and let the user decide
    Prompt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastActivity {
    pub tabs: Vec<SnapshotTab>,
    pub active_tab: usize,
    pub is_dark: bool,
    pub timestamp: DateTime<Utc>,
}

impl LastActivity {
    pub fn capture(workspace: &Workspace, is_dark: bool) -> Self {
        Self {
            tabs: workspace
                .tabs()
                .iter()
                .map(SnapshotTab::structural_from)
                .collect(),
            active_tab: workspace.active_tab_index(),
            is_dark,
            timestamp: workspace.updated_at(),
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.timestamp
    }

    pub fn into_workspace(self) -> Workspace {
        let tabs: Vec<Tab> = self.tabs.into_iter().map(Tab::from).collect();
        Workspace::restore(tabs, self.active_tab)
    }
}

pub struct LastActivityStore {
    db: Database,
    ttl: Duration,
}

impl LastActivityStore {
    pub fn new(db: Database, ttl: Duration) -> Self {
        Self { db, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Record the workspace, or drop the record if it holds no media
    pub fn record(&self, workspace: &Workspace, is_dark: bool) -> Result<()> {
        let has_media = workspace
            .tabs()
            .iter()
            .flat_map(|tab| tab.splits.iter())
            .any(|split| split.media.as_deref().is_some_and(is_durable));

        if !has_media {
            self.db.remove_item(LAST_ACTIVITY_KEY)?;
            return Ok(());
        }

        let record = LastActivity::capture(workspace, is_dark);
        self.db.set_json(LAST_ACTIVITY_KEY, &record)?;
        tracing::debug!(
            tab_count = record.tabs.len(),
            active_tab = record.active_tab,
            "Recorded last activity"
        );
        Ok(())
    }

    /// Record worth offering for restore at `now`.
    ///
    /// Stale and unreadable records are removed.
    pub fn pending(&self, now: DateTime<Utc>) -> Option<LastActivity> {
        let raw = match self.db.get_item(LAST_ACTIVITY_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read last activity");
                return None;
            }
        };

        let record = match parse_record(&raw) {
            Some(record) => record,
            None => {
                tracing::warn!("Discarding unreadable last activity record");
                self.discard_quietly();
                return None;
            }
        };

        let age = record.age(now);
        if age > self.ttl {
            tracing::info!(
                age_hours = age.num_hours(),
                "Last activity expired, discarding"
            );
            self.discard_quietly();
            return None;
        }

        Some(record)
    }

    pub fn discard(&self) -> Result<()> {
        self.db.remove_item(LAST_ACTIVITY_KEY)?;
        Ok(())
    }

    fn discard_quietly(&self) {
        if let Err(e) = self.discard() {
            tracing::warn!(error = %e, "Failed to remove last activity record");
        }
    }
}

impl Clone for LastActivityStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            ttl: self.ttl,
        }
    }
}

/// Accepts both the current record and the older `splits` shape
fn parse_record(raw: &str) -> Option<LastActivity> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let timestamp = parse_timestamp(value.get("timestamp")?)?;
    let is_dark = value.get("isDark").and_then(Value::as_bool).unwrap_or(false);
    let decoded = decode_value(value).ok()?;

    Some(LastActivity {
        tabs: decoded.tabs,
        active_tab: decoded.active_tab,
        is_dark,
        timestamp,
    })
}

//! Snapshot persistence for the live workspace

use parking_lot::Mutex;
use std::sync::Arc;

use fzl_storage::Database;
use fzl_tabs::{Tab, Workspace};

use crate::keys::SNAPSHOT_KEY;
use crate::schema::decode;
use crate::snapshot::Snapshot;
use crate::Result;

pub struct SessionStore {
    db: Database,
    /// Revision of the workspace last written, if any
    persisted_revision: Arc<Mutex<Option<u64>>>,
}

impl SessionStore {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            persisted_revision: Arc::new(Mutex::new(None)),
        }
    }

    /// Write the durable projection of the workspace, or clear the key
    /// when nothing durable is left.
    pub fn persist(&self, workspace: &Workspace) -> Result<()> {
        match Snapshot::capture(workspace) {
            Some(snapshot) => {
                self.db.set_json(SNAPSHOT_KEY, &snapshot)?;
                tracing::debug!(
                    revision = workspace.revision(),
                    tab_count = snapshot.tabs.len(),
                    "Persisted workspace snapshot"
                );
            }
            None => {
                self.db.remove_item(SNAPSHOT_KEY)?;
                tracing::debug!(
                    revision = workspace.revision(),
                    "No durable media, cleared snapshot"
                );
            }
        }

        *self.persisted_revision.lock() = Some(workspace.revision());
        Ok(())
    }

    /// Persist only if the workspace changed since the last write.
    /// Returns whether a write happened.
    pub fn observe(&self, workspace: &Workspace) -> Result<bool> {
        if *self.persisted_revision.lock() == Some(workspace.revision()) {
            return Ok(false);
        }

        self.persist(workspace)?;
        Ok(true)
    }

    /// Read and migrate the stored snapshot.
    ///
    /// Returns `None` when nothing is stored or the stored data cannot be
    /// understood; the latter is logged and otherwise ignored.
    pub fn load(&self) -> Option<Workspace> {
        let raw = match self.db.get_item(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored snapshot");
                return None;
            }
        };

        let decoded = match decode(&raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable snapshot");
                return None;
            }
        };

        if decoded.tabs.is_empty() {
            return None;
        }

        let tabs: Vec<Tab> = decoded.tabs.into_iter().map(Tab::from).collect();
        let mut workspace = Workspace::restore(tabs, decoded.active_tab);
        if let Some(created_at) = decoded.created_at {
            workspace = workspace.with_created_at(created_at);
        }

        tracing::info!(
            schema = ?decoded.schema,
            tab_count = workspace.tabs().len(),
            "Loaded stored workspace"
        );

        Some(workspace)
    }

    /// Stored workspace, or a fresh one with a single tab
    pub fn hydrate(&self) -> Workspace {
        self.load().unwrap_or_default()
    }

    pub fn clear(&self) -> Result<()> {
        self.db.remove_item(SNAPSHOT_KEY)?;
        *self.persisted_revision.lock() = None;
        Ok(())
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            persisted_revision: self.persisted_revision.clone(),
        }
    }
}

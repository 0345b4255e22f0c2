//! Theme and toolbar preferences

use fzl_storage::Database;

use crate::keys::{CONTROLS_KEY, THEME_KEY};
use crate::Result;

pub struct Preferences {
    db: Database,
}

impl Preferences {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Stored dark mode flag, `None` if never saved
    pub fn load_theme(&self) -> Option<bool> {
        self.load_bool(THEME_KEY)
    }

    pub fn save_theme(&self, is_dark: bool) -> Result<()> {
        self.db.set_json(THEME_KEY, &is_dark)?;
        Ok(())
    }

    /// Toolbar visibility, shown unless explicitly hidden
    pub fn load_controls_visible(&self) -> bool {
        self.load_bool(CONTROLS_KEY).unwrap_or(true)
    }

    pub fn save_controls_visible(&self, visible: bool) -> Result<()> {
        self.db.set_json(CONTROLS_KEY, &visible)?;
        Ok(())
    }

    fn load_bool(&self, key: &str) -> Option<bool> {
        let raw = match self.db.get_item(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read preference");
                return None;
            }
        };

        match serde_json::from_str::<bool>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, value = %raw, error = %e, "Ignoring malformed preference");
                None
            }
        }
    }
}

impl Clone for Preferences {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

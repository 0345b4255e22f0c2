//! Split (pane) data structure

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    /// Unique identifier, never derived from content
    pub id: String,
    /// Data URI, http(s) URL, YouTube embed URL or transient blob reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl Split {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            media: None,
        }
    }

    pub fn with_media(media: impl Into<String>) -> Self {
        let mut split = Self::new();
        split.set_media(media.into());
        split
    }

    /// Replace the media reference. An empty string clears it.
    ///
    /// Returns `true` when the stored reference actually changed.
    pub fn set_media(&mut self, media: String) -> bool {
        let next = if media.is_empty() { None } else { Some(media) };
        if self.media == next {
            return false;
        }
        self.media = next;
        true
    }

    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }
}

impl Default for Split {
    fn default() -> Self {
        Self::new()
    }
}

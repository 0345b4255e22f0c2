//! Scoped pointer capture
//!
//! While a drag is armed the host forwards global pointer-move and
//! pointer-up events to the pane. Each armed pane holds a
//! [`PointerCapture`]; dropping it unregisters the pane, so a torn-down
//! controller can never leave listeners behind.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CaptureRegistry {
    active: Arc<Mutex<HashSet<String>>>,
}

impl CaptureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, pane_id: &str) -> PointerCapture {
        self.active.lock().insert(pane_id.to_string());
        tracing::trace!(pane_id = %pane_id, "Pointer captured");

        PointerCapture {
            pane_id: pane_id.to_string(),
            active: Arc::clone(&self.active),
        }
    }

    pub fn is_captured(&self, pane_id: &str) -> bool {
        self.active.lock().contains(pane_id)
    }

    /// Panes currently receiving global pointer events
    pub fn captured_panes(&self) -> Vec<String> {
        self.active.lock().iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active.lock().is_empty()
    }
}

#[derive(Debug)]
pub struct PointerCapture {
    pane_id: String,
    active: Arc<Mutex<HashSet<String>>>,
}

impl PointerCapture {
    pub fn pane_id(&self) -> &str {
        &self.pane_id
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        self.active.lock().remove(&self.pane_id);
        tracing::trace!(pane_id = %self.pane_id, "Pointer released");
    }
}

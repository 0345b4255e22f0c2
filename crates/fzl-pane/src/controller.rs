//! Pane interaction controller

use serde::Serialize;

use crate::capture::{CaptureRegistry, PointerCapture};
use crate::transform::{Point, Transform};

/// An armed drag gesture
#[derive(Debug)]
struct Drag {
    /// Pointer position at gesture start minus the committed offset
    anchor: Point,
    /// Latest offset computed from pointer movement
    live: Option<Point>,
    _capture: PointerCapture,
}

#[derive(Debug)]
pub struct PaneController {
    pane_id: String,
    media: Option<String>,
    committed: Transform,
    drag: Option<Drag>,
    loading: bool,
    media_error: bool,
}

/// Render state handed to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaneView {
    pub pane_id: String,
    pub transform: Transform,
    pub css_transform: String,
    pub zoom_percent: u32,
    pub dragging: bool,
    pub loading: bool,
    pub media_error: bool,
}

impl PaneController {
    pub fn new(pane_id: impl Into<String>, media: Option<String>) -> Self {
        Self {
            pane_id: pane_id.into(),
            media,
            committed: Transform::identity(),
            drag: None,
            loading: false,
            media_error: false,
        }
    }

    pub fn pane_id(&self) -> &str {
        &self.pane_id
    }

    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    /// Transform as of the last finished gesture
    pub fn committed(&self) -> Transform {
        self.committed
    }

    /// Transform to draw right now, including an in-flight drag
    pub fn current_transform(&self) -> Transform {
        match self.drag.as_ref().and_then(|d| d.live) {
            Some(live) => self.committed.with_offset(live),
            None => self.committed,
        }
    }

    /// CSS `transform` value for the current transform
    pub fn css_transform(&self) -> String {
        self.current_transform().css()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_media_error(&self) -> bool {
        self.media_error
    }

    /// Point the pane at a new media reference.
    ///
    /// Any change resets zoom and offset, abandons an in-flight drag and
    /// clears the load error.
    pub fn set_media(&mut self, media: Option<&str>) -> bool {
        if self.media.as_deref() == media {
            return false;
        }

        self.media = media.map(str::to_string);
        self.committed = Transform::identity();
        self.drag = None;
        self.media_error = false;

        tracing::debug!(pane_id = %self.pane_id, has_media = self.media.is_some(), "Pane media changed");
        true
    }

    /// Arm a drag. Only panes showing media and not mid-upload can be dragged.
    pub fn drag_start(&mut self, pointer: Point, registry: &CaptureRegistry) -> bool {
        if self.media.is_none() || self.loading {
            return false;
        }

        // Re-arming replaces the old guard, which releases its capture first
        self.drag = None;
        self.drag = Some(Drag {
            anchor: pointer - self.committed.offset,
            live: None,
            _capture: registry.acquire(&self.pane_id),
        });

        true
    }

    /// Fast path for pointer movement: updates only the live offset
    pub fn drag_move(&mut self, pointer: Point) -> Option<Transform> {
        let drag = self.drag.as_mut()?;
        let delta = pointer - drag.anchor;
        drag.live = Some(delta);

        Some(self.committed.with_offset(delta))
    }

    /// Finish the gesture, committing the last live offset
    pub fn drag_end(&mut self) -> Option<Transform> {
        let drag = self.drag.take()?;
        if let Some(live) = drag.live {
            self.committed.offset = live;
        }

        tracing::debug!(
            pane_id = %self.pane_id,
            x = self.committed.offset.x,
            y = self.committed.offset.y,
            "Pane drag committed"
        );

        Some(self.committed)
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.zoom_by(1)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.zoom_by(-1)
    }

    fn zoom_by(&mut self, steps: i32) -> f64 {
        if !self.loading {
            self.committed.scale = self.committed.zoomed(steps);
        }
        self.committed.scale
    }

    /// Mark an upload as in flight. Returns `false` if one already is.
    pub fn begin_upload(&mut self) -> bool {
        if self.loading {
            return false;
        }

        self.loading = true;
        self.drag = None;
        true
    }

    pub fn finish_upload(&mut self) {
        self.loading = false;
    }

    /// The renderer failed to load the media; affects this pane only
    pub fn mark_media_error(&mut self) {
        self.media_error = true;
    }

    pub fn view(&self) -> PaneView {
        let transform = self.current_transform();
        PaneView {
            pane_id: self.pane_id.clone(),
            css_transform: transform.css(),
            zoom_percent: transform.percent(),
            transform,
            dragging: self.is_dragging(),
            loading: self.loading,
            media_error: self.media_error,
        }
    }
}

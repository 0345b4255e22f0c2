//! FZL Splits Pane Interaction
//!
//! Per-pane pan and zoom state driven by pointer and touch gestures.
//!
//! Transforms are split in two tiers:
//! - a live offset updated on every pointer move while a drag is armed
//! - a committed offset written only when the gesture ends
//!
//! Pointer-move/up listeners exist only while a drag is armed; they are
//! modelled as [`PointerCapture`] guards released on drop.

mod capture;
mod controller;
mod transform;

pub use capture::{CaptureRegistry, PointerCapture};
pub use controller::{PaneController, PaneView};
pub use transform::{Point, Transform, DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, ZOOM_STEP};

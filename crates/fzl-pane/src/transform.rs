//! Pan offset and zoom scale

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 2.0;
pub const DEFAULT_SCALE: f64 = 1.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Pointer position or pixel offset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Zoom factor in [`MIN_SCALE`, `MAX_SCALE`]
    pub scale: f64,
    /// Translation in pixels
    pub offset: Point,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset: Point::ORIGIN,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Scale after `steps` zoom clicks (negative zooms out)
    pub fn zoomed(&self, steps: i32) -> f64 {
        let raw = self.scale + ZOOM_STEP * f64::from(steps);
        // Snap to one decimal so repeated clicks do not accumulate drift
        ((raw * 10.0).round() / 10.0).clamp(MIN_SCALE, MAX_SCALE)
    }

    pub fn with_offset(&self, offset: Point) -> Self {
        Self {
            scale: self.scale,
            offset,
        }
    }

    /// CSS transform string for the renderer
    pub fn css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }

    /// Zoom level as a whole percentage, e.g. `120`
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

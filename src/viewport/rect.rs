//! Axis-aligned rectangles in world units.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its min and max corners.
///
/// No ordering is enforced: a rectangle built from inverted corners keeps
/// them as given and reports a negative width or height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    /// Rectangle spanning `[origin, origin + size]`.
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive point containment.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Rectangle constraining where a following viewport may place its origin.
///
/// The default is unbounded on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl WorldBounds {
    pub const UNBOUNDED: Self = Self {
        min_x: f32::NEG_INFINITY,
        min_y: f32::NEG_INFINITY,
        max_x: f32::INFINITY,
        max_y: f32::INFINITY,
    };

    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }

    /// Clamp an origin so that a viewport of `size` stays inside the bounds.
    ///
    /// Each axis is clamped on its own: below the minimum snaps to the
    /// minimum, otherwise above `max - size` snaps to `max - size`. When the
    /// bounds are narrower than the viewport, `max - size < min` and the
    /// result may land outside `[min, max]`; the first matching branch wins.
    pub fn clamp_origin(&self, origin: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(origin.x, self.min_x, self.max_x, size.x),
            clamp_axis(origin.y, self.min_y, self.max_y, size.y),
        )
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

fn clamp_axis(value: f32, min: f32, max: f32, size: f32) -> f32 {
    if value < min {
        min
    } else if value > max - size {
        max - size
    } else {
        value
    }
}

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::viewport::rect::Rect;

/// Axis-aligned extent of an entity, relative to its [`MapPosition`].
///
/// Only the extent is used here; no collision is resolved from it.
///
/// [`MapPosition`]: super::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Modify BoxCollider with given size and offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// World-space AABB as a [`Rect`].
    pub fn world_rect(&self, position: Vec2) -> Rect {
        let (min, max) = self.aabb(position);
        Rect { min, max }
    }
}

//! World-space position component.
//!
//! [`MapPosition`] is the authoritative position (pivot) of an entity in
//! world units. Movement and gameplay systems write it; the
//! [`publish_tracked_positions`](crate::systems::tracking::publish_tracked_positions)
//! system forwards changes to the entity's observable
//! [`TrackedPosition`](super::tracked::TrackedPosition), if it has one.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn from_vec(pos: Vec2) -> Self {
        Self { pos }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Translate by delta.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }
}

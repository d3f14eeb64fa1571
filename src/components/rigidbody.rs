//! Kinematic body component.
//!
//! [`RigidBody`] stores a velocity that the
//! [`movement`](crate::systems::movement::movement) system integrates into
//! [`MapPosition`](super::mapposition::MapPosition) each tick. The `frozen`
//! flag pauses integration without losing the velocity.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
    /// When true, the movement system skips this entity.
    pub frozen: bool,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            frozen: false,
        }
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

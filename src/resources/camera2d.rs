//! Shared 2D camera resource.
//!
//! Renderers read [`Camera2DRes`] to agree on a single world/screen
//! transform. It is written by
//! [`sync_camera_from_viewport`](crate::systems::camera::sync_camera_from_viewport)
//! from the active [`Viewport`](crate::viewport::Viewport); do not edit it
//! directly while a viewport resource is present.

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::Serialize;

/// Camera parameters in the layout 2D render backends expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Camera2D {
    /// Screen-space point the target is drawn at.
    pub offset: Vec2,
    /// World-space point drawn at `offset`.
    pub target: Vec2,
    /// Rotation in degrees.
    pub rotation: f32,
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            target: Vec2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

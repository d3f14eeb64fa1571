//! Observable capabilities an entity may expose to the camera.
//!
//! Entities opt in to camera tracking by carrying one or both of:
//!
//! - [`TrackedPosition`] – the entity's position as one observable point;
//!   required by [`Viewport::bind_to_entity`]
//! - [`TrackedBounds`] – the entity's world-space AABB as one observable
//!   rectangle; entities without it are skipped by [`Viewport::bind_to_fit`]
//!
//! Both are handles: cloning one shares the same underlying observables, so
//! the ECS component and any viewport binding stay connected. The
//! [`tracking`](crate::systems::tracking) systems keep them in sync with
//! [`MapPosition`] and [`BoxCollider`].
//!
//! [`Viewport::bind_to_entity`]: crate::viewport::Viewport::bind_to_entity
//! [`Viewport::bind_to_fit`]: crate::viewport::Viewport::bind_to_fit

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::reactive::{Observable, Source};
use crate::viewport::rect::Rect;

/// Position capability: observable world position.
///
/// Both axes live in one observable, so moving on x and y at once is a
/// single change for every binding downstream.
#[derive(Component, Clone, Debug, Default)]
pub struct TrackedPosition {
    pos: Observable<Vec2>,
}

impl TrackedPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Observable::new(Vec2::new(x, y)),
        }
    }

    pub fn from_map_position(position: &MapPosition) -> Self {
        Self::new(position.pos.x, position.pos.y)
    }

    pub fn get(&self) -> Vec2 {
        self.pos.get()
    }

    pub fn x(&self) -> f32 {
        self.pos.with(|p| p.x)
    }

    pub fn y(&self) -> f32 {
        self.pos.with(|p| p.y)
    }

    /// Publish a new position. Notifies once, and only if it changed.
    pub fn set(&self, pos: Vec2) {
        self.pos.set(pos);
    }

    pub fn set_x(&self, x: f32) {
        self.pos.update(|p| p.x = x);
    }

    pub fn set_y(&self, y: f32) {
        self.pos.update(|p| p.y = y);
    }

    /// Underlying observable, for subscribers and bindings.
    pub fn observable(&self) -> &Observable<Vec2> {
        &self.pos
    }

    pub fn source(&self) -> &dyn Source {
        &self.pos
    }
}

/// Bounding-box capability: observable world-space AABB.
#[derive(Component, Clone, Debug)]
pub struct TrackedBounds {
    rect: Observable<Rect>,
}

impl TrackedBounds {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Observable::new(rect),
        }
    }

    pub fn from_collider(collider: &BoxCollider, position: &MapPosition) -> Self {
        Self::new(collider.world_rect(position.pos))
    }

    pub fn get(&self) -> Rect {
        self.rect.get()
    }

    pub fn min_x(&self) -> f32 {
        self.rect.with(|r| r.min.x)
    }

    pub fn min_y(&self) -> f32 {
        self.rect.with(|r| r.min.y)
    }

    pub fn max_x(&self) -> f32 {
        self.rect.with(|r| r.max.x)
    }

    pub fn max_y(&self) -> f32 {
        self.rect.with(|r| r.max.y)
    }

    /// Publish a new box as one change.
    pub fn set(&self, rect: Rect) {
        self.rect.set(rect);
    }

    /// Edit some sides in place; still a single change.
    pub fn update(&self, f: impl FnOnce(&mut Rect)) {
        self.rect.update(f);
    }

    pub fn observable(&self) -> &Observable<Rect> {
        &self.rect
    }

    pub fn source(&self) -> &dyn Source {
        &self.rect
    }
}

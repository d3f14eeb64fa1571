//! Publish ECS entity state into observable camera capabilities.
//!
//! [`MapPosition`] and [`BoxCollider`] are plain components written by
//! gameplay systems. These systems forward their changes to the entity's
//! [`TrackedPosition`] / [`TrackedBounds`], which in turn push the change
//! through any viewport binding attached to them. Run them after movement
//! and before anything that reads the camera.
//!
//! Only entities whose source components changed since the last run are
//! visited, and the observables themselves ignore writes of equal values.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::tracked::{TrackedBounds, TrackedPosition};

pub fn publish_tracked_positions(
    query: Query<(&MapPosition, &TrackedPosition), Changed<MapPosition>>,
) {
    for (position, tracked) in query.iter() {
        tracked.set(position.pos);
    }
}

pub fn publish_tracked_bounds(
    query: Query<
        (&MapPosition, &BoxCollider, &TrackedBounds),
        Or<(Changed<MapPosition>, Changed<BoxCollider>)>,
    >,
) {
    for (position, collider, tracked) in query.iter() {
        tracked.set(collider.world_rect(position.pos));
    }
}

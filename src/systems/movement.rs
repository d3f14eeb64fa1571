use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate [`RigidBody`] velocities into [`MapPosition`].
///
/// Entities with zero velocity or a frozen body are not touched, so their
/// `MapPosition` does not get flagged as changed.
pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.frozen || rigidbody.velocity == glam::Vec2::ZERO {
            continue;
        }
        position.pos += rigidbody.velocity * time.delta;
    }
}

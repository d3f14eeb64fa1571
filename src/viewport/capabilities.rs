//! Typed capability lookup.
//!
//! The viewport never inspects entity storage directly. It asks a
//! [`Capabilities`] implementation whether an entity exposes a given facet
//! and gets back a present/absent answer.

use bevy_ecs::prelude::{Entity, World};

use crate::components::tracked::{TrackedBounds, TrackedPosition};

pub trait Capabilities {
    /// Position capability, if the entity exposes one.
    fn position(&self, entity: Entity) -> Option<TrackedPosition>;

    /// Bounding-box capability, if the entity exposes one.
    fn bounding_box(&self, entity: Entity) -> Option<TrackedBounds>;
}

/// Looks the capabilities up as components. Despawned entities expose none.
impl Capabilities for World {
    fn position(&self, entity: Entity) -> Option<TrackedPosition> {
        self.get::<TrackedPosition>(entity).cloned()
    }

    fn bounding_box(&self, entity: Entity) -> Option<TrackedBounds> {
        self.get::<TrackedBounds>(entity).cloned()
    }
}

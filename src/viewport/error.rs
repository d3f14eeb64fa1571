use std::fmt;

use bevy_ecs::prelude::Entity;

use super::ViewportMode;

/// Capability an entity must expose for a viewport operation.
///
/// Only following requires one; fitting skips entities without a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Position,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Position => f.write_str("position"),
        }
    }
}

/// Errors reported synchronously by [`Viewport`](super::Viewport) commands.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportError {
    /// The entity does not expose the capability the operation needs.
    /// No binding was established.
    MissingCapability {
        entity: Entity,
        capability: Capability,
    },
    /// The origin or zoom is driven by a binding; call `unbind` first.
    Bound { mode: ViewportMode },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::MissingCapability { entity, capability } => {
                write!(f, "entity {entity} has no {capability} capability")
            }
            ViewportError::Bound { mode } => {
                write!(f, "viewport is {mode}; unbind before setting origin or zoom")
            }
        }
    }
}

impl std::error::Error for ViewportError {}

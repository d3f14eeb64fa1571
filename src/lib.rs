//! Aberred Camera library.
//!
//! A reactive 2D viewport for bevy_ecs worlds. The viewport follows one
//! entity or frames a group of entities by binding its origin and zoom to
//! observable entity data. This module exposes the viewport, the reactive
//! primitives it is built on, and the ECS components, resources and
//! systems that connect it to a world.

pub mod components;
pub mod reactive;
pub mod resources;
pub mod systems;
pub mod viewport;

//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned extent of an entity relative to its position
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`tracked`] – observable position and bounding-box capabilities the
//!   viewport binds to

pub mod boxcollider;
pub mod mapposition;
pub mod rigidbody;
pub mod tracked;

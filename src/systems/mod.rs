//! Engine systems.
//!
//! Submodules overview
//! - [`camera`] – copy the viewport transform into the shared camera resource
//! - [`movement`] – integrate positions from rigid body velocities and time
//! - [`time`] – update simulation time and delta
//! - [`tracking`] – publish positions and extents into tracked capabilities
//!
//! Typical per-tick order: `time` → `movement` → `tracking` → `camera`.

pub mod camera;
pub mod movement;
pub mod time;
pub mod tracking;

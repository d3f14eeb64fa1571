//! ECS resources made available to systems.
//!
//! Overview
//! - `camera2d` – shared 2D camera read by renderers
//! - `viewport` – the active reactive viewport
//! - `viewportconfig` – camera settings loaded from an INI file
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod viewport;
pub mod viewportconfig;
pub mod worldtime;

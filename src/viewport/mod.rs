//! Reactive 2D viewport.
//!
//! A [`Viewport`] describes which rectangle of the world is visible: a
//! fixed `width`/`height`, an origin (top-left corner, world units) and a
//! zoom factor. Origin and zoom are either set directly or driven by a
//! binding:
//!
//! - [`Viewport::bind_to_entity`] follows one entity at a fixed offset,
//!   clamped to optional [`WorldBounds`]
//! - [`Viewport::bind_to_fit`] frames a set of entities with a margin,
//!   zooming so that all of them fit
//! - [`Viewport::unbind`] freezes the last computed values and returns to
//!   free mode
//!
//! Origin and zoom live in a single [`ViewTransform`] observable, and each
//! tracked capability is a single observable too. One upstream change
//! therefore publishes exactly one transform: a subscriber never sees a new
//! x paired with an old y, or an origin from one change with a zoom from
//! another.
//!
//! # Example
//!
//! ```
//! use aberredcamera::components::tracked::TrackedPosition;
//! use aberredcamera::viewport::Viewport;
//! use bevy_ecs::prelude::World;
//!
//! let mut world = World::new();
//! let player = world.spawn(TrackedPosition::new(1000.0, 500.0)).id();
//!
//! let mut viewport = Viewport::new(800.0, 600.0);
//! viewport.set_bounds(0.0, 0.0, 2000.0, 1200.0);
//! viewport.bind_to_entity(&world, player, 400.0, 300.0).unwrap();
//! assert_eq!((viewport.x(), viewport.y()), (600.0, 200.0));
//!
//! world.get::<TrackedPosition>(player).unwrap().set_x(50.0);
//! assert_eq!(viewport.x(), 0.0);
//! ```

pub mod capabilities;
pub mod error;
pub mod fit;
pub mod rect;

use std::fmt;

use bevy_ecs::prelude::Entity;
use glam::Vec2;
use log::debug;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::reactive::{Binding, Derived, Observable, ReadOnly, Source};

pub use capabilities::Capabilities;
pub use error::{Capability, ViewportError};
pub use fit::{FitFrame, fit_frame};
pub use rect::{Rect, WorldBounds};

/// Origin and zoom published together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    /// World-space top-left corner of the visible area.
    pub origin: Vec2,
    pub zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

/// What currently drives origin and zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Origin and zoom are set directly by callers.
    Free,
    /// Origin follows this entity's position.
    BoundToEntity(Entity),
    /// Origin and zoom frame this many entities.
    BoundToFit { entities: usize },
}

impl fmt::Display for ViewportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportMode::Free => f.write_str("free"),
            ViewportMode::BoundToEntity(entity) => write!(f, "bound to entity {entity}"),
            ViewportMode::BoundToFit { entities } => write!(f, "bound to fit {entities} entities"),
        }
    }
}

/// Rectangular view into the world with an optional follow/fit binding.
#[derive(Debug)]
pub struct Viewport {
    width: f32,
    height: f32,
    transform: Observable<ViewTransform>,
    bounds: Observable<WorldBounds>,
    mode: ViewportMode,
    binding: Option<Binding>,
}

impl Viewport {
    /// Free viewport at origin `(0, 0)` with zoom `1.0` and no bounds.
    ///
    /// `width` and `height` are expected to be positive.
    pub fn new(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "viewport size must be positive");
        Self {
            width,
            height,
            transform: Observable::new(ViewTransform::default()),
            bounds: Observable::new(WorldBounds::UNBOUNDED),
            mode: ViewportMode::Free,
            binding: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn x(&self) -> f32 {
        self.transform.with(|t| t.origin.x)
    }

    pub fn y(&self) -> f32 {
        self.transform.with(|t| t.origin.y)
    }

    pub fn zoom(&self) -> f32 {
        self.transform.with(|t| t.zoom)
    }

    /// Current origin as a point.
    pub fn origin(&self) -> Vec2 {
        self.transform.with(|t| t.origin)
    }

    pub fn view_transform(&self) -> ViewTransform {
        self.transform.get()
    }

    /// Subscribe-only handle to the live transform, for renderers.
    ///
    /// Writes go through the setters so a bound viewport stays read-only.
    pub fn transform(&self) -> ReadOnly<ViewTransform> {
        self.transform.read_only()
    }

    /// `[x, x + width] × [y, y + height]`, computed from the current origin.
    pub fn visible_area(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size())
    }

    /// Visible area as a derived observable that follows every origin change.
    pub fn watch_visible_area(&self) -> Derived<Rect> {
        let size = self.size();
        self.transform
            .map(move |t| Rect::from_origin_size(t.origin, size))
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds.get()
    }

    /// Store the clamp rectangle used while following an entity.
    ///
    /// Does not move a free or fit-bound viewport. An active entity binding
    /// recomputes immediately. Min/max ordering is not validated.
    pub fn set_bounds(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
        debug!("viewport bounds set to ({min_x}, {min_y})-({max_x}, {max_y})");
        self.bounds.set(WorldBounds::new(min_x, min_y, max_x, max_y));
    }

    /// Remove the clamp rectangle.
    pub fn clear_bounds(&mut self) {
        self.bounds.set(WorldBounds::UNBOUNDED);
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn is_bound(&self) -> bool {
        self.mode != ViewportMode::Free
    }

    fn ensure_free(&self) -> Result<(), ViewportError> {
        if self.is_bound() {
            return Err(ViewportError::Bound { mode: self.mode });
        }
        Ok(())
    }

    pub fn set_x(&mut self, x: f32) -> Result<(), ViewportError> {
        self.ensure_free()?;
        self.transform.update(|t| t.origin.x = x);
        Ok(())
    }

    pub fn set_y(&mut self, y: f32) -> Result<(), ViewportError> {
        self.ensure_free()?;
        self.transform.update(|t| t.origin.y = y);
        Ok(())
    }

    pub fn set_origin(&mut self, origin: Vec2) -> Result<(), ViewportError> {
        self.ensure_free()?;
        self.transform.update(|t| t.origin = origin);
        Ok(())
    }

    pub fn set_zoom(&mut self, zoom: f32) -> Result<(), ViewportError> {
        self.ensure_free()?;
        self.transform.update(|t| t.zoom = zoom);
        Ok(())
    }

    /// Follow `entity` so that the origin sits at its position minus
    /// `(dist_x, dist_y)`, clamped to the current bounds.
    ///
    /// The origin is recomputed whenever the entity's position or the
    /// bounds change. Zoom is left as is. Replaces any previous binding.
    ///
    /// # Errors
    ///
    /// [`ViewportError::MissingCapability`] if the entity has no position
    /// capability. The viewport is left untouched in that case.
    pub fn bind_to_entity<C>(
        &mut self,
        capabilities: &C,
        entity: Entity,
        dist_x: f32,
        dist_y: f32,
    ) -> Result<(), ViewportError>
    where
        C: Capabilities + ?Sized,
    {
        let position = capabilities
            .position(entity)
            .ok_or(ViewportError::MissingCapability {
                entity,
                capability: Capability::Position,
            })?;
        self.unbind();

        let dist = Vec2::new(dist_x, dist_y);
        let size = self.size();
        let transform = self.transform.clone();
        let bounds = self.bounds.clone();
        let tracked = position.observable().clone();

        let binding = Binding::new(&[position.source(), &self.bounds], move || {
            let unclamped = tracked.get() - dist;
            let origin = bounds.with(|b| b.clamp_origin(unclamped, size));
            transform.update(|t| t.origin = origin);
        });

        debug!("viewport following entity {entity} at offset ({dist_x}, {dist_y})");
        self.binding = Some(binding);
        self.mode = ViewportMode::BoundToEntity(entity);
        Ok(())
    }

    /// Frame every entity in `entities` that exposes a bounding box, with
    /// `x_margin`/`y_margin` around the aggregate box.
    ///
    /// Origin and zoom are recomputed whenever any included box changes.
    /// Entities without a bounding box are skipped, duplicates are counted
    /// once. Returns the number of entities framed.
    ///
    /// With nothing to frame the binding still takes effect and produces
    /// the degenerate frame described in [`fit_frame`].
    pub fn bind_to_fit<C>(
        &mut self,
        capabilities: &C,
        x_margin: f32,
        y_margin: f32,
        entities: &[Entity],
    ) -> usize
    where
        C: Capabilities + ?Sized,
    {
        let mut seen = FxHashSet::default();
        let boxes: Vec<_> = entities
            .iter()
            .filter(|e| seen.insert(**e))
            .filter_map(|e| capabilities.bounding_box(*e))
            .collect();
        self.unbind();

        let count = boxes.len();
        if count == 0 {
            debug!("bind_to_fit: none of {} entities has a bounding box", entities.len());
        }

        let margin = Vec2::new(x_margin, y_margin);
        let size = self.size();
        let transform = self.transform.clone();
        let sources: Vec<&dyn Source> = boxes.iter().map(|b| b.source()).collect();
        let tracked = boxes.clone();

        let binding = Binding::new(&sources, move || {
            let frame = fit_frame(tracked.iter().map(|b| b.get()), margin, size);
            transform.set(ViewTransform {
                origin: frame.area.min,
                zoom: frame.zoom,
            });
        });

        debug!("viewport fitting {count} entities with margin ({x_margin}, {y_margin})");
        self.binding = Some(binding);
        self.mode = ViewportMode::BoundToFit { entities: count };
        count
    }

    /// Release the active binding and keep the last computed origin and
    /// zoom. No-op on a free viewport.
    pub fn unbind(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.release();
            debug!("viewport released from {}", self.mode);
        }
        self.mode = ViewportMode::Free;
    }

    /// Map a world-space point to screen space.
    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        let t = self.view_transform();
        (point - t.origin) * t.zoom
    }

    /// Map a screen-space point back to world space.
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        let t = self.view_transform();
        point / t.zoom + t.origin
    }
}

//! Viewport resource.
//!
//! Wraps the active [`Viewport`] so that systems and the host loop share
//! one camera. Bindings are made through the inner value, passing the
//! world as the capability lookup:
//!
//! ```ignore
//! world.resource_scope(|world, mut viewport: Mut<ViewportRes>| {
//!     viewport.0.bind_to_entity(&*world, player, 400.0, 300.0)
//! })?;
//! ```

use bevy_ecs::prelude::Resource;

use crate::viewport::Viewport;

#[derive(Resource, Debug)]
pub struct ViewportRes(pub Viewport);

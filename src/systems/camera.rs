//! Camera synchronization system.

use bevy_ecs::prelude::*;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::viewport::ViewportRes;

/// Copy the viewport's transform into [`Camera2DRes`].
///
/// The viewport origin is the top-left corner of the visible area, so it
/// becomes the camera target with a zero screen offset. The resource is
/// only written when the viewport transform changed since the last run.
pub fn sync_camera_from_viewport(
    viewport: Res<ViewportRes>,
    mut camera: ResMut<Camera2DRes>,
    mut last_version: Local<Option<u64>>,
) {
    let transform = viewport.0.transform();
    let version = transform.version();
    if *last_version == Some(version) {
        return;
    }
    *last_version = Some(version);

    let t = transform.get();
    camera.0.target = t.origin;
    camera.0.zoom = t.zoom;
}

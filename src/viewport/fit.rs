//! Framing math for [`Viewport::bind_to_fit`](super::Viewport::bind_to_fit).

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;

/// Origin area and zoom that frame a set of boxes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitFrame {
    /// Aggregate box including margins. `area.min` becomes the origin.
    pub area: Rect,
    pub zoom: f32,
}

/// Fold `boxes` into one framing box and the zoom that fits it in
/// `viewport_size`.
///
/// The fold starts from sentinels (`f32::MAX` for the minimum, `f32::MIN`
/// for the maximum), so an empty input yields an inverted box of infinite
/// negative size and a zoom of `-0.0`. The caller gets that degenerate
/// frame as is.
///
/// The zoom is the smaller of the two axis ratios, so both axes fit.
pub fn fit_frame(boxes: impl IntoIterator<Item = Rect>, margin: Vec2, viewport_size: Vec2) -> FitFrame {
    let (min, max) = boxes.into_iter().fold(
        (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
        |(min, max), b| (min.min(b.min), max.max(b.max)),
    );
    let area = Rect {
        min: min - margin,
        max: max + margin,
    };
    let zoom = (viewport_size.x / area.width()).min(viewport_size.y / area.height());
    FitFrame { area, zoom }
}

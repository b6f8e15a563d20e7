//! Fit-to-viewport transform: the uniform scale and centering offsets that
//! map a source view box into a target drawing size, preserving aspect
//! ratio (letterboxing allowed). Cheap enough to recompute per render call.

use crate::data::ViewBox;
use crate::geometry::{Point, Size};

/// A uniform scale plus x/y offsets. Together with a source string this is
/// the cache key for compiled geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewportTransform {
    pub const IDENTITY: ViewportTransform = ViewportTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub const fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        ViewportTransform {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Computes the transform that fits `view_box` into `target`, centered
    /// on both axes. Degenerate sizes are not special-cased; they simply
    /// produce degenerate geometry downstream.
    pub fn fit(view_box: &ViewBox, target: Size) -> Self {
        let scale = (target.width / view_box.size.width).min(target.height / view_box.size.height);
        let offset_x =
            (target.width - view_box.size.width * scale) / 2.0 - view_box.origin.x * scale;
        let offset_y =
            (target.height - view_box.size.height * scale) / 2.0 - view_box.origin.y * scale;
        ViewportTransform {
            scale,
            offset_x,
            offset_y,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale + self.offset_x,
            p.y * self.scale + self.offset_y,
        )
    }
}

//! Painting tree geometry onto surfaces

use crate::geometry::engine::{SegmentSink, generate_into};
use crate::geometry::params::TreeParameters;
use crate::geometry::segment::{Branch, Point, Segment};
use crate::io::configuration::ORIGIN_BOTTOM_MARGIN;
use crate::render::surface::Surface;

/// Origin of a tree on a surface: centered horizontally, just above the bottom
pub fn tree_origin(width: u32, height: u32) -> Point {
    Point::new(
        f64::from(width) / 2.0,
        f64::from(height) - ORIGIN_BOTTOM_MARGIN,
    )
}

/// Stroke each segment in order
///
/// Does not clear; callers wipe the surface before a full redraw. A missing
/// surface makes this a no-op.
pub fn render_segments<S>(surface: Option<&mut S>, segments: &[Segment])
where
    S: Surface + ?Sized,
{
    let Some(surface) = surface else {
        return;
    };
    for segment in segments {
        surface.stroke_line(segment);
    }
}

/// Clear the surface and draw the tree described by `params`
///
/// Segments are stroked as they are generated rather than collected first.
pub fn render_tree<S>(surface: Option<&mut S>, params: &TreeParameters)
where
    S: Surface + ?Sized,
{
    let Some(surface) = surface else {
        return;
    };
    surface.clear();
    let origin = tree_origin(surface.width(), surface.height());
    let mut sink = SurfaceSink { surface };
    generate_into(params, origin, &mut sink);
}

/// Adapter that strokes branches straight onto a surface
pub struct SurfaceSink<'a, S: Surface + ?Sized> {
    /// Target surface
    pub surface: &'a mut S,
}

impl<S: Surface + ?Sized> SegmentSink for SurfaceSink<'_, S> {
    fn accept(&mut self, branch: &Branch) {
        self.surface.stroke_line(&branch.segment);
    }
}

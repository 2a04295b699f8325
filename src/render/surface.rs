//! Drawable raster targets
//!
//! [`Surface`] is the only thing the renderer needs: a size, a way to wipe the
//! pixels and a way to stroke one segment. [`RasterSurface`] implements it on
//! an in-memory RGBA image with one fixed stroke color.

use crate::geometry::segment::{Point, Segment};
use crate::io::configuration::{BACKGROUND_COLOR, STROKE_COLOR};
use image::{Rgba, RgbaImage};

/// A 2D raster target that can be cleared and stroked
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Reset every pixel to the background
    fn clear(&mut self);

    /// Draw a line from the segment's start to its end
    fn stroke_line(&mut self, segment: &Segment);
}

/// RGBA image surface with a transparent background and a solid stroke
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    stroke: Rgba<u8>,
}

impl RasterSurface {
    /// Create a cleared surface of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR)),
            stroke: Rgba(STROKE_COLOR),
        }
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Number of pixels that differ from the background
    pub fn painted_pixels(&self) -> usize {
        self.image
            .pixels()
            .filter(|pixel| pixel.0 != BACKGROUND_COLOR)
            .count()
    }

    fn plot(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, self.stroke);
    }

    // Bresenham between two pixel centres already clipped to the surface
    fn draw_clipped(&mut self, start: Point, end: Point) {
        let x0 = start.x.round() as i64;
        let y0 = start.y.round() as i64;
        let x1 = end.x.round() as i64;
        let y1 = end.y.round() as i64;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(BACKGROUND_COLOR);
        }
    }

    fn stroke_line(&mut self, segment: &Segment) {
        if self.width() == 0 || self.height() == 0 {
            return;
        }
        let max_x = f64::from(self.width() - 1);
        let max_y = f64::from(self.height() - 1);

        if let Some((start, end)) = clip_to_box(segment, max_x, max_y) {
            self.draw_clipped(start, end);
        }
    }
}

/// Clip a segment to `[0, max_x] x [0, max_y]` (Liang-Barsky)
///
/// Returns `None` when the segment lies entirely outside the box or has a
/// non-finite coordinate.
pub fn clip_to_box(segment: &Segment, max_x: f64, max_y: f64) -> Option<(Point, Point)> {
    let coordinates = [segment.x1, segment.y1, segment.x2, segment.y2];
    if coordinates.iter().any(|value| !value.is_finite()) {
        return None;
    }

    let dx = segment.x2 - segment.x1;
    let dy = segment.y2 - segment.y1;
    let edges = [
        (-dx, segment.x1),
        (dx, max_x - segment.x1),
        (-dy, segment.y1),
        (dy, max_y - segment.y1),
    ];

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge: inside or wholly outside
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t_enter = t_enter.max(t);
        } else {
            t_exit = t_exit.min(t);
        }
        if t_enter > t_exit {
            return None;
        }
    }

    Some((segment.point_at(t_enter), segment.point_at(t_exit)))
}

//! Geometric primitives produced by the branch generator

use crate::math::heading::lerp;

/// A position in surface coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight line from `(x1, y1)` to `(x2, y2)` in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start x
    pub x1: f64,
    /// Start y
    pub y1: f64,
    /// End x
    pub x2: f64,
    /// End y
    pub y2: f64,
}

impl Segment {
    /// Create a segment between two points
    pub const fn new(start: Point, end: Point) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }

    /// Start point
    pub const fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// End point
    pub const fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }

    /// Point at fraction `t` of the way from start to end
    pub fn point_at(&self, t: f64) -> Point {
        let (x, y) = lerp((self.x1, self.y1), (self.x2, self.y2), t);
        Point::new(x, y)
    }
}

/// A generated segment tagged with the recursion level that produced it
///
/// The trunk has depth 0; its three children have depth 1, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    /// Segment geometry
    pub segment: Segment,
    /// Recursion level
    pub depth: u32,
    /// Nominal length before any floating-point drift in the endpoints
    pub length: f64,
}

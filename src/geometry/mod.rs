//! Fractal tree geometry
//!
//! Pure mapping from a [`TreeParameters`] record and an origin to line
//! segments. Nothing here knows about surfaces or storage.

/// Recursive branch generator
pub mod engine;
/// Tree parameter record
pub mod params;
/// Points, segments and depth-tagged branches
pub mod segment;

pub use engine::{SegmentSink, generate_branches, generate_into, generate_tree};
pub use params::TreeParameters;
pub use segment::{Branch, Point, Segment};

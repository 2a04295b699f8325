//! Rasterisation of tree geometry

/// Segment and tree rendering onto surfaces
pub mod renderer;
/// Surface abstraction and the RGBA raster implementation
pub mod surface;

pub use renderer::{render_segments, render_tree, tree_origin};
pub use surface::{RasterSurface, Surface};

//! Parametric fractal tree generation with a persistent, grid-bounded gallery
//!
//! A [`TreeParameters`] record deterministically expands into line segments by
//! bounded three-way recursion. Segments are stroked onto raster surfaces, and
//! a capacity-bounded gallery keeps submitted parameter sets across sessions,
//! redrawing each into its own cell.

#![forbid(unsafe_code)]

/// Persisted gallery store, storage backends and grid layout
pub mod gallery;
/// Branch generation from tree parameters
pub mod geometry;
/// Command-line shell, configuration, errors and export
pub mod io;
/// Angle and interpolation helpers
pub mod math;
/// Surfaces and the segment renderer
pub mod render;

pub use geometry::{Point, Segment, TreeParameters};
pub use io::error::{Result, TreeError};

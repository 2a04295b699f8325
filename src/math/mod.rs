//! Mathematical utilities for branch geometry

/// Heading displacement and interpolation on a downward-y plane
pub mod heading;

//! Tree parameter record and its persisted JSON shape

use crate::geometry::segment::Point;
use crate::io::configuration::{
    DEFAULT_BRANCH_ANGLE_DEG, DEFAULT_MAX_DEPTH, DEFAULT_MIN_SEGMENT_LENGTH,
    DEFAULT_SHRINK_FRACTION, DEFAULT_TRUNK_LENGTH,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Parameters that fully determine the geometry of one fractal tree
///
/// Field names on disk follow the gallery's storage layout:
/// `{length, fraction, angle, threshold, maxDepth}`. Inputs are accepted as-is;
/// degenerate values only shorten the generated tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParameters {
    /// Length of the trunk segment
    #[serde(rename = "length", deserialize_with = "number_or_nan")]
    pub trunk_length: f64,
    /// Per-level length factor, also the attachment point of child branches
    #[serde(rename = "fraction", deserialize_with = "number_or_nan")]
    pub shrink_fraction: f64,
    /// Angular offset in degrees between a branch and its left/right children
    #[serde(rename = "angle", deserialize_with = "number_or_nan")]
    pub branch_angle_deg: f64,
    /// Branches shorter than this are never emitted
    #[serde(rename = "threshold", deserialize_with = "number_or_nan")]
    pub min_segment_length: f64,
    /// Depth ceiling; branches at this depth or deeper are never emitted
    #[serde(rename = "maxDepth", deserialize_with = "depth_from_number")]
    pub max_depth: u32,
}

impl Default for TreeParameters {
    fn default() -> Self {
        Self {
            trunk_length: DEFAULT_TRUNK_LENGTH,
            shrink_fraction: DEFAULT_SHRINK_FRACTION,
            branch_angle_deg: DEFAULT_BRANCH_ANGLE_DEG,
            min_segment_length: DEFAULT_MIN_SEGMENT_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl TreeParameters {
    /// Create a parameter record from its five components
    pub const fn new(
        trunk_length: f64,
        shrink_fraction: f64,
        branch_angle_deg: f64,
        min_segment_length: f64,
        max_depth: u32,
    ) -> Self {
        Self {
            trunk_length,
            shrink_fraction,
            branch_angle_deg,
            min_segment_length,
            max_depth,
        }
    }

    /// Length of the children spawned by a branch of `length`
    pub const fn child_length(&self, length: f64) -> f64 {
        length * self.shrink_fraction
    }

    /// Point on a parent branch from which its children grow
    pub fn branch_origin(&self, start: Point, end: Point) -> Point {
        crate::geometry::segment::Segment::new(start, end).point_at(self.shrink_fraction)
    }

    /// Upper bound on the number of segments these parameters can produce
    pub fn segment_bound(&self) -> u64 {
        crate::geometry::engine::segment_count_bound(self.max_depth)
    }
}

// Non-finite numbers are written as `null` by serde_json; read them back as NaN
// so a single odd entry does not invalidate the whole gallery.
fn number_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Whole-number depth ceiling equivalent to a fractional one
///
/// Branch depths are integers, so `depth >= value` holds exactly when
/// `depth >= value.ceil()`. Negative and NaN values become 0; huge values
/// saturate.
pub fn depth_ceiling(value: f64) -> u32 {
    value.ceil() as u32
}

// Form input parses every field as a float, so the stored depth may be fractional
fn depth_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    number_or_nan(deserializer).map(depth_ceiling)
}

//! Recursive three-way branch generation
//!
//! Starting from a vertical trunk, every emitted branch spawns a left, right
//! and straight child from the point `shrink_fraction` of the way along it.
//! Children are expanded depth-first in that order, so the output sequence is
//! fully reproducible from the parameters and the origin alone.

use crate::geometry::params::TreeParameters;
use crate::geometry::segment::{Branch, Point, Segment};
use crate::math::heading::displacement;

/// Heading of the trunk in degrees (straight up on a downward-y surface)
pub const BASE_HEADING_DEG: f64 = 90.0;

/// Receiver for branches as the generator emits them
///
/// Lets callers stream geometry into a collection or straight onto a surface
/// without materialising the whole tree first.
pub trait SegmentSink {
    /// Accept the next branch in depth-first order
    fn accept(&mut self, branch: &Branch);
}

impl SegmentSink for Vec<Segment> {
    fn accept(&mut self, branch: &Branch) {
        self.push(branch.segment);
    }
}

impl SegmentSink for Vec<Branch> {
    fn accept(&mut self, branch: &Branch) {
        self.push(*branch);
    }
}

/// Generate the segments of a tree rooted at `origin`
pub fn generate_tree(params: &TreeParameters, origin: Point) -> Vec<Segment> {
    let mut segments = Vec::new();
    generate_into(params, origin, &mut segments);
    segments
}

/// Generate the tree as depth-tagged branches
pub fn generate_branches(params: &TreeParameters, origin: Point) -> Vec<Branch> {
    let mut branches = Vec::new();
    generate_into(params, origin, &mut branches);
    branches
}

/// Stream every branch of the tree into `sink`, trunk first
///
/// The trunk is emitted unconditionally. First-level children are only
/// spawned when their length reaches `min_segment_length`; a NaN threshold
/// therefore yields a bare trunk.
pub fn generate_into<K>(params: &TreeParameters, origin: Point, sink: &mut K)
where
    K: SegmentSink + ?Sized,
{
    let trunk = step(origin, params.trunk_length, BASE_HEADING_DEG);
    sink.accept(&Branch {
        segment: trunk,
        depth: 0,
        length: params.trunk_length,
    });

    let child_length = params.child_length(params.trunk_length);
    if child_length >= params.min_segment_length {
        spawn_children(params, &trunk, child_length, BASE_HEADING_DEG, 1, sink);
    }
}

/// Maximum number of segments a tree with this depth ceiling can contain
///
/// Levels `0..max_depth` hold at most `3^level` branches each, and the trunk
/// is always present, giving `(3^max_depth - 1) / 2` with a floor of one.
/// Saturates at `u64::MAX`.
pub fn segment_count_bound(max_depth: u32) -> u64 {
    let mut total: u64 = 0;
    let mut level_size: u64 = 1;

    for _ in 0..max_depth.max(1) {
        total = total.saturating_add(level_size);
        if total == u64::MAX {
            break;
        }
        level_size = level_size.saturating_mul(3);
    }

    total
}

fn step(start: Point, length: f64, heading_deg: f64) -> Segment {
    let (dx, dy) = displacement(length, heading_deg);
    Segment::new(start, Point::new(start.x + dx, start.y + dy))
}

fn spawn_children<K>(
    params: &TreeParameters,
    parent: &Segment,
    child_length: f64,
    heading_deg: f64,
    depth: u32,
    sink: &mut K,
) where
    K: SegmentSink + ?Sized,
{
    let origin = params.branch_origin(parent.start(), parent.end());
    let headings = [
        heading_deg + params.branch_angle_deg,
        heading_deg - params.branch_angle_deg,
        heading_deg,
    ];

    for child_heading in headings {
        grow_branch(params, origin, child_length, child_heading, depth, sink);
    }
}

fn grow_branch<K>(
    params: &TreeParameters,
    start: Point,
    length: f64,
    heading_deg: f64,
    depth: u32,
    sink: &mut K,
) where
    K: SegmentSink + ?Sized,
{
    if length < params.min_segment_length || depth >= params.max_depth {
        return;
    }

    let segment = step(start, length, heading_deg);
    sink.accept(&Branch {
        segment,
        depth,
        length,
    });

    // Stops one level early: a node whose children would be too short is a leaf
    let child_length = params.child_length(length);
    if child_length < params.min_segment_length {
        return;
    }

    spawn_children(params, &segment, child_length, heading_deg, depth + 1, sink);
}

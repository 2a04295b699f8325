//! Tests for recursive branch generation, ordering and termination

#[cfg(test)]
mod tests {
    use fractree::geometry::engine::{
        SegmentSink, generate_branches, generate_into, generate_tree, segment_count_bound,
    };
    use fractree::geometry::{Branch, Point, Segment, TreeParameters};

    const TOLERANCE: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn full_tree(max_depth: u32) -> TreeParameters {
        TreeParameters::new(60.0, 0.7, 30.0, 0.0, max_depth)
    }

    // Tests trunk end and first child origin for the default form values
    // Verified by attaching children at the trunk end instead of 70% along
    #[test]
    fn test_default_tree_trunk_and_first_children() {
        let params = TreeParameters::default();
        let segments = generate_tree(&params, Point::new(140.0, 270.0));

        let trunk = segments[0];
        assert!(close(trunk.x1, 140.0) && close(trunk.y1, 270.0));
        assert!(close(trunk.x2, 140.0) && close(trunk.y2, 210.0));

        let first_child = segments[1];
        assert!(close(first_child.x1, 140.0), "got {}", first_child.x1);
        assert!(close(first_child.y1, 228.0), "got {}", first_child.y1);
    }

    // Tests the trunk is always the first segment pointing straight up
    // Verified by flipping the vertical sign
    #[test]
    fn test_trunk_points_up_from_origin() {
        let params = TreeParameters::new(25.0, 0.5, 45.0, 3.0, 4);
        let segments = generate_tree(&params, Point::new(10.0, 50.0));

        assert!(close(segments[0].x2, 10.0));
        assert!(close(segments[0].y2, 25.0));
    }

    // Tests repeated generation yields identical sequences
    // Verified by perturbing angles with a counter
    #[test]
    fn test_generation_is_deterministic() {
        let params = TreeParameters::new(80.0, 0.65, 22.5, 0.5, 8);
        let origin = Point::new(140.0, 270.0);

        assert_eq!(generate_tree(&params, origin), generate_tree(&params, origin));
    }

    // Tests a zero depth ceiling still draws the trunk
    // Verified by checking depth before emitting the trunk
    #[test]
    fn test_max_depth_zero_draws_trunk_only() {
        let mut params = TreeParameters::default();
        params.max_depth = 0;
        assert_eq!(generate_tree(&params, Point::new(0.0, 0.0)).len(), 1);

        params.max_depth = 1;
        assert_eq!(generate_tree(&params, Point::new(0.0, 0.0)).len(), 1);
    }

    // Tests the threshold comparison is exclusive: children exactly at the threshold are drawn
    // Verified by switching the comparison to less-or-equal
    #[test]
    fn test_threshold_boundary_is_exclusive() {
        let params = TreeParameters::new(2.0, 0.5, 30.0, 1.0, 10);
        let branches = generate_branches(&params, Point::new(0.0, 0.0));

        let depths: Vec<u32> = branches.iter().map(|branch| branch.depth).collect();
        assert_eq!(depths, vec![0, 1, 1, 1]);
    }

    // Tests the trunk survives a threshold above its own length
    // Verified by applying the threshold check to the trunk
    #[test]
    fn test_trunk_drawn_below_threshold() {
        let params = TreeParameters::new(5.0, 0.7, 30.0, 10.0, 10);
        assert_eq!(generate_tree(&params, Point::new(0.0, 0.0)).len(), 1);
    }

    // Tests degenerate shrink fraction terminates after the trunk
    // Verified by removing the child length check on the trunk
    #[test]
    fn test_zero_fraction_draws_trunk_only() {
        let params = TreeParameters::new(60.0, 0.0, 30.0, 1.0, 10);
        assert_eq!(generate_tree(&params, Point::new(0.0, 0.0)).len(), 1);
    }

    // Tests a NaN threshold never lets first-level children through
    // Verified by rewriting the trunk check as a negated less-than
    #[test]
    fn test_nan_threshold_draws_trunk_only() {
        let params = TreeParameters::new(60.0, 0.7, 30.0, f64::NAN, 10);
        assert_eq!(generate_tree(&params, Point::new(0.0, 0.0)).len(), 1);
    }

    // Tests every branch stays under the depth ceiling
    // Verified by comparing depth with greater-than instead of greater-or-equal
    #[test]
    fn test_depth_bound() {
        let params = full_tree(5);
        let branches = generate_branches(&params, Point::new(0.0, 0.0));

        assert!(branches.iter().all(|branch| branch.depth < params.max_depth));
        assert_eq!(branches.iter().filter(|b| b.depth == 4).count(), 81);
    }

    // Tests no branch except the trunk is shorter than the threshold
    // Verified by dropping the pre-emission length check
    #[test]
    fn test_threshold_bound() {
        let params = TreeParameters::new(60.0, 0.7, 30.0, 4.0, 20);
        let branches = generate_branches(&params, Point::new(0.0, 0.0));

        assert!(branches.len() > 1);
        for branch in branches.iter().skip(1) {
            assert!(branch.length >= params.min_segment_length);
            assert!((branch.segment.length() - branch.length).abs() < 1e-6);
        }
    }

    // Tests an unpruned tree reaches the geometric series bound exactly
    // Verified by dropping the straight child
    #[test]
    fn test_unpruned_tree_matches_count_bound() {
        let params = full_tree(6);
        let segments = generate_tree(&params, Point::new(0.0, 0.0));

        assert_eq!(segments.len() as u64, segment_count_bound(6));
        assert_eq!(segments.len(), 364);
    }

    // Tests the threshold cuts the count strictly below the bound
    // Verified by ignoring the threshold entirely
    #[test]
    fn test_threshold_prunes_below_bound() {
        let params = TreeParameters::new(60.0, 0.7, 30.0, 4.0, 10);
        let segments = generate_tree(&params, Point::new(0.0, 0.0));

        assert!((segments.len() as u64) < params.segment_bound());
    }

    // Tests depth-first order: left, right, straight, each fully expanded first
    // Verified by expanding siblings breadth-first
    #[test]
    fn test_children_order_is_left_right_straight_depth_first() {
        let params = full_tree(3);
        let branches = generate_branches(&params, Point::new(0.0, 0.0));

        let depths: Vec<u32> = branches.iter().map(|branch| branch.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 2, 1, 2, 2, 2, 1, 2, 2, 2]);

        let left = branches[1].segment;
        let right = branches[5].segment;
        let straight = branches[9].segment;
        assert!(left.x2 < left.x1);
        assert!(right.x2 > right.x1);
        assert!(close(straight.x2, straight.x1));
    }

    // Tests children attach at the shrink fraction along their parent
    // Verified by attaching at the parent midpoint
    #[test]
    fn test_children_attach_at_fraction_of_parent() {
        let params = full_tree(3);
        let branches = generate_branches(&params, Point::new(0.0, 0.0));

        let parent = branches[1].segment;
        let expected = parent.point_at(params.shrink_fraction);
        for child in &branches[2..5] {
            assert!(close(child.segment.x1, expected.x));
            assert!(close(child.segment.y1, expected.y));
            assert!(close(child.length, parent.length() * 0.7));
        }
    }

    // Tests the bound formula including the trunk floor and saturation
    // Verified by starting the series at 3 instead of 1
    #[test]
    fn test_segment_count_bound() {
        assert_eq!(segment_count_bound(0), 1);
        assert_eq!(segment_count_bound(1), 1);
        assert_eq!(segment_count_bound(2), 4);
        assert_eq!(segment_count_bound(10), 29_524);
        assert_eq!(segment_count_bound(200), u64::MAX);
        assert_eq!(segment_count_bound(u32::MAX), u64::MAX);
    }

    struct CountingSink {
        count: usize,
        deepest: u32,
    }

    impl SegmentSink for CountingSink {
        fn accept(&mut self, branch: &Branch) {
            self.count += 1;
            self.deepest = self.deepest.max(branch.depth);
        }
    }

    // Tests custom sinks observe the same stream as the collected output
    // Verified by skipping the trunk in generate_into
    #[test]
    fn test_generate_into_custom_sink() {
        let params = full_tree(4);
        let mut sink = CountingSink {
            count: 0,
            deepest: 0,
        };
        generate_into(&params, Point::new(0.0, 0.0), &mut sink);

        let collected: Vec<Segment> = generate_tree(&params, Point::new(0.0, 0.0));
        assert_eq!(sink.count, collected.len());
        assert_eq!(sink.deepest, 3);
    }
}

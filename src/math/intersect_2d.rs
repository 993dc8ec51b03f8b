use super::Point2;

/// Result of intersecting two closed segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments share no point.
    Disjoint,
    /// The segments meet in exactly one point.
    Point(Point2),
    /// The segments are collinear and share a stretch of positive length.
    Overlap(Point2, Point2),
}

impl SegmentIntersection {
    /// Returns `true` unless the segments are disjoint.
    #[must_use]
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::Disjoint)
    }
}

/// Exact bounded segment-segment intersection in 2D.
///
/// All decisions are made on cross-product signs, so the result is exact for
/// integer coordinates. When the segments touch at an endpoint, the returned
/// point is that endpoint itself rather than a recomputed approximation.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> SegmentIntersection {
    let da = a1 - a0;
    let db = b1 - b0;

    let o1 = da.perp(&(b0 - a0));
    let o2 = da.perp(&(b1 - a0));
    let o3 = db.perp(&(a0 - b0));
    let o4 = db.perp(&(a1 - b0));

    if o1 == 0.0 && o2 == 0.0 && o3 == 0.0 && o4 == 0.0 {
        return collinear_intersection(a0, a1, b0, b1);
    }

    if same_strict_side(o1, o2) || same_strict_side(o3, o4) {
        return SegmentIntersection::Disjoint;
    }

    // Touching cases return the exact shared point.
    if o1 == 0.0 {
        return SegmentIntersection::Point(*b0);
    }
    if o2 == 0.0 {
        return SegmentIntersection::Point(*b1);
    }
    if o3 == 0.0 {
        return SegmentIntersection::Point(*a0);
    }
    if o4 == 0.0 {
        return SegmentIntersection::Point(*a1);
    }

    let t = (b0 - a0).perp(&db) / da.perp(&db);
    SegmentIntersection::Point(a0 + da * t)
}

fn same_strict_side(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}

/// Intersects four points known to lie on a common line.
///
/// Points are compared along the axis with the larger spread, which keeps
/// the comparison exact and also handles zero-length segments.
fn collinear_intersection(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> SegmentIntersection {
    let pts = [a0, a1, b0, b1];
    let spread = |axis: usize| {
        let (lo, hi) = pts.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[axis]), hi.max(p[axis]))
        });
        hi - lo
    };
    let axis = if spread(0) >= spread(1) { 0 } else { 1 };

    let ordered = |p: &Point2, q: &Point2| if p[axis] <= q[axis] { (*p, *q) } else { (*q, *p) };
    let (a_lo, a_hi) = ordered(a0, a1);
    let (b_lo, b_hi) = ordered(b0, b1);

    let start = if a_lo[axis] >= b_lo[axis] { a_lo } else { b_lo };
    let end = if a_hi[axis] <= b_hi[axis] { a_hi } else { b_hi };

    if start[axis] > end[axis] {
        SegmentIntersection::Disjoint
    } else if start == end || start[axis] == end[axis] {
        SegmentIntersection::Point(start)
    } else {
        SegmentIntersection::Overlap(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_segment_crossing() {
        let hit = segment_segment_intersect_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0));
        assert_eq!(hit, SegmentIntersection::Point(p(1.0, 1.0)));
    }

    #[test]
    fn segment_segment_no_crossing() {
        let hit = segment_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0));
        assert_eq!(hit, SegmentIntersection::Disjoint);
        assert!(!hit.is_some());
    }

    #[test]
    fn lines_cross_but_segments_do_not() {
        let hit = segment_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 1.0), &p(3.0, 0.0), &p(2.0, 1.0));
        assert_eq!(hit, SegmentIntersection::Disjoint);
    }

    #[test]
    fn shared_endpoint_is_reported_exactly() {
        let hit = segment_segment_intersect_2d(&p(0.0, 0.0), &p(3.0, 1.0), &p(3.0, 1.0), &p(7.0, -5.0));
        assert_eq!(hit, SegmentIntersection::Point(p(3.0, 1.0)));
    }

    #[test]
    fn endpoint_touching_interior() {
        let hit = segment_segment_intersect_2d(&p(5.0, 0.0), &p(5.0, 5.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert_eq!(hit, SegmentIntersection::Point(p(5.0, 0.0)));
    }

    #[test]
    fn collinear_overlap() {
        let hit = segment_segment_intersect_2d(&p(0.0, 0.0), &p(4.0, 0.0), &p(6.0, 0.0), &p(2.0, 0.0));
        assert_eq!(hit, SegmentIntersection::Overlap(p(2.0, 0.0), p(4.0, 0.0)));
    }

    #[test]
    fn collinear_touching_and_disjoint() {
        let touch = segment_segment_intersect_2d(&p(0.0, 0.0), &p(0.0, 4.0), &p(0.0, 4.0), &p(0.0, 9.0));
        assert_eq!(touch, SegmentIntersection::Point(p(0.0, 4.0)));

        let apart = segment_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 1.0), &p(2.0, 2.0), &p(3.0, 3.0));
        assert_eq!(apart, SegmentIntersection::Disjoint);
    }

    #[test]
    fn degenerate_segment_on_other() {
        let hit = segment_segment_intersect_2d(&p(2.0, 0.0), &p(2.0, 0.0), &p(0.0, 0.0), &p(4.0, 0.0));
        assert_eq!(hit, SegmentIntersection::Point(p(2.0, 0.0)));

        let miss = segment_segment_intersect_2d(&p(2.0, 1.0), &p(2.0, 1.0), &p(0.0, 0.0), &p(4.0, 0.0));
        assert_eq!(miss, SegmentIntersection::Disjoint);
    }
}

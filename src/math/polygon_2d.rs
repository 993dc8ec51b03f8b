use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the index of the lowest point (smallest y), breaking ties by
/// smallest x. `None` for an empty slice.
///
/// This point is always a convex corner of the polygon, which makes it a
/// safe place to read the winding from.
#[must_use]
pub fn lowest_point_index(points: &[Point2]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
        .map(|(i, _)| i)
}

/// Returns `true` if `a` is above `b` in sweep order (larger y, ties broken
/// by smaller x).
#[must_use]
pub fn is_above(a: &Point2, b: &Point2) -> bool {
    a.y > b.y || (a.y == b.y && a.x < b.x)
}

/// Returns `true` if `r` lies inside the triangle `(a, b, c)` or on its
/// boundary, for either winding of the triangle.
///
/// Each edge is tested with the cross product of the vector from `r` to the
/// edge start against the edge direction. `r` is outside only when the signs
/// disagree strictly.
#[must_use]
pub fn triangle_contains_2d(a: &Point2, b: &Point2, c: &Point2, r: &Point2) -> bool {
    let signs = [
        (b - r).perp(&(c - b)),
        (c - r).perp(&(a - c)),
        (a - r).perp(&(b - a)),
    ];
    let positive = signs.iter().any(|&s| s > 0.0);
    let negative = signs.iter().any(|&s| s < 0.0);
    !(positive && negative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < 1e-12);
        assert!(signed_area_2d(&[]).abs() < 1e-12);
    }

    #[test]
    fn triangle_contains_interior_and_boundary() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 4.0));
        assert!(triangle_contains_2d(&a, &b, &c, &p(1.0, 1.0)));
        assert!(triangle_contains_2d(&a, &c, &b, &p(1.0, 1.0)));
        assert!(triangle_contains_2d(&a, &b, &c, &p(2.0, 2.0)));
        assert!(triangle_contains_2d(&a, &b, &c, &p(2.0, 0.0)));
        assert!(!triangle_contains_2d(&a, &b, &c, &p(3.0, 3.0)));
        assert!(!triangle_contains_2d(&a, &b, &c, &p(6.0, 0.0)));
        assert!(!triangle_contains_2d(&a, &c, &b, &p(-1.0, 2.0)));
    }

    #[test]
    fn lowest_point_breaks_ties_by_x() {
        let pts = [p(3.0, 1.0), p(2.0, 0.0), p(1.0, 0.0), p(0.0, 2.0)];
        assert_eq!(lowest_point_index(&pts), Some(2));
        assert_eq!(lowest_point_index(&[]), None);
    }

    #[test]
    fn above_uses_x_as_tie_break() {
        assert!(is_above(&p(0.0, 2.0), &p(0.0, 1.0)));
        assert!(is_above(&p(0.0, 1.0), &p(1.0, 1.0)));
        assert!(!is_above(&p(1.0, 1.0), &p(0.0, 1.0)));
        assert!(!is_above(&p(1.0, 1.0), &p(1.0, 1.0)));
    }
}

use std::collections::BTreeMap;

use crate::error::{PolygonError, Result};
use crate::math::orientation::turn_at;
use crate::math::polygon_2d::is_above;
use crate::math::Turn;

use super::Polygon;

/// Sweep-line role of a boundary vertex, as used by monotone partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// Both neighbours below, interior angle less than π.
    Start,
    /// Both neighbours above, interior angle less than π.
    End,
    /// Both neighbours below, interior angle greater than π.
    Split,
    /// Both neighbours above, interior angle greater than π.
    Merge,
    /// One neighbour above and one below.
    Regular,
}

/// Classifies every vertex of a closed polygon, keyed by insertion index.
///
/// The result is a separate annotation; the polygon itself is not touched
/// and triangulation does not depend on it.
///
/// # Errors
///
/// Returns `PolygonError::PolygonNotClosed` if the polygon is still open.
pub fn classify_vertices(polygon: &Polygon) -> Result<BTreeMap<usize, VertexKind>> {
    if !polygon.is_closed() {
        return Err(PolygonError::PolygonNotClosed.into());
    }

    let vertices: Vec<_> = polygon.iter_vertexes().map(|(_, v)| v).collect();
    let n = vertices.len();
    let mut kinds = BTreeMap::new();
    for (i, vertex) in vertices.iter().enumerate() {
        let prev = &vertices[(i + n - 1) % n].point;
        let next = &vertices[(i + 1) % n].point;
        let here = &vertex.point;

        let mut turn = turn_at(prev, here, next);
        if polygon.is_clockwise() {
            turn = turn.reversed();
        }
        let convex = turn == Turn::Left;

        let kind = match (is_above(prev, here), is_above(next, here)) {
            (false, false) if convex => VertexKind::Start,
            (false, false) => VertexKind::Split,
            (true, true) if convex => VertexKind::End,
            (true, true) => VertexKind::Merge,
            _ => VertexKind::Regular,
        };
        kinds.insert(vertex.index, kind);
    }
    Ok(kinds)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrigonError;
    use crate::math::Point2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn open_polygon_is_rejected() {
        let mut polygon = Polygon::new();
        polygon.add_vertex(p(0.0, 0.0)).unwrap();
        let err = classify_vertices(&polygon).unwrap_err();
        assert!(matches!(err, TrigonError::Polygon(PolygonError::PolygonNotClosed)));
    }

    #[test]
    fn convex_quad_has_one_start_and_one_end() {
        let polygon =
            Polygon::from_points(&[p(0.0, 0.0), p(10.0, 2.0), p(8.0, 10.0), p(-2.0, 6.0)]).unwrap();
        let kinds = classify_vertices(&polygon).unwrap();
        assert_eq!(kinds[&0], VertexKind::End);
        assert_eq!(kinds[&1], VertexKind::Regular);
        assert_eq!(kinds[&2], VertexKind::Start);
        assert_eq!(kinds[&3], VertexKind::Regular);
    }

    #[test]
    fn upward_notch_is_a_split_vertex() {
        // Upward notch at index 4 between two lower corners.
        let points = [
            p(0.0, 0.0),
            p(5.0, 8.0),
            p(10.0, 10.0),
            p(10.0, 0.0),
            p(5.0, 2.0),
        ];
        // Counter-clockwise order: reverse the input after the first vertex.
        let mut ccw = points.to_vec();
        ccw[1..].reverse();
        let ccw_polygon = Polygon::from_points(&ccw).unwrap();
        let cw_polygon = Polygon::from_points(&points).unwrap();
        assert!(!ccw_polygon.is_clockwise());
        assert!(cw_polygon.is_clockwise());

        let kinds = classify_vertices(&cw_polygon).unwrap();
        assert_eq!(kinds[&0], VertexKind::End);
        assert_eq!(kinds[&1], VertexKind::Regular);
        assert_eq!(kinds[&2], VertexKind::Start);
        assert_eq!(kinds[&3], VertexKind::End);
        assert_eq!(kinds[&4], VertexKind::Split);

        let kinds = classify_vertices(&ccw_polygon).unwrap();
        assert_eq!(kinds[&1], VertexKind::Split);
    }

    #[test]
    fn notches_classify_the_same_in_both_windings() {
        let points = [
            p(0.0, 0.0),
            p(4.0, 3.0),
            p(8.0, 0.0),
            p(8.0, 10.0),
            p(4.0, 6.0),
            p(0.0, 10.0),
        ];
        let forward = Polygon::from_points(&points).unwrap();
        let mut reversed_points = points.to_vec();
        reversed_points[1..].reverse();
        let reversed = Polygon::from_points(&reversed_points).unwrap();

        let a = classify_vertices(&forward).unwrap();
        let b = classify_vertices(&reversed).unwrap();
        assert_eq!(a[&1], VertexKind::Split);
        assert_eq!(a[&4], VertexKind::Merge);
        assert_eq!(a[&0], VertexKind::End);
        assert_eq!(a[&3], VertexKind::Start);
        // Index i in the forward polygon is index n - i in the reversed one.
        for i in 1..points.len() {
            assert_eq!(a[&i], b[&(points.len() - i)]);
        }
        assert_eq!(a[&0], b[&0]);
    }
}

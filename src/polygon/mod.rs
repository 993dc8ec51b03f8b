mod boundary;
mod classify;

pub use classify::{classify_vertices, VertexKind};

use crate::error::Result;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;
use crate::mesh::{FaceId, HalfEdgeMesh, VertexData, VertexId};

/// A diagonal between two non-adjacent boundary vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diagonal {
    /// Vertex the diagonal was recorded from (the ear's previous neighbour).
    pub from: VertexId,
    /// Vertex the diagonal leads to (the ear's next neighbour).
    pub to: VertexId,
}

impl Diagonal {
    /// Creates a diagonal from `from` to `to`.
    #[must_use]
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }

    /// Returns `true` if both diagonals connect the same two vertices,
    /// regardless of direction.
    #[must_use]
    pub fn same_segment(&self, other: &Self) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

/// A triangle of a polygon triangulation, as three boundary vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle(pub [VertexId; 3]);

/// A simple polygon boundary stored as a half-edge cycle.
///
/// The polygon grows one vertex at a time and is closed exactly once. Every
/// mutation keeps the boundary free of self-intersections; a rejected
/// mutation leaves the polygon unchanged.
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    mesh: HalfEdgeMesh,
    order: Vec<VertexId>,
    closed: bool,
    clockwise: bool,
    interior: Option<FaceId>,
    exterior: Option<FaceId>,
    diagonals: Vec<Diagonal>,
    triangles: Vec<Triangle>,
}

impl Polygon {
    /// Creates a new, empty polygon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and closes a polygon from a sequence of points.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`Polygon::add_vertex`] or
    /// [`Polygon::close`].
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        let mut polygon = Self::new();
        for point in points {
            polygon.add_vertex(*point)?;
        }
        polygon.close()?;
        Ok(polygon)
    }

    /// Number of boundary vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Whether [`Polygon::close`] has succeeded.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Winding of the closed boundary. Meaningless while the polygon is open.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    /// The first inserted vertex.
    #[must_use]
    pub fn first(&self) -> Option<VertexId> {
        self.order.first().copied()
    }

    /// The most recently inserted vertex.
    #[must_use]
    pub fn last(&self) -> Option<VertexId> {
        self.order.last().copied()
    }

    /// Returns the vertex inserted at position `index`.
    #[must_use]
    pub fn vertex_id(&self, index: usize) -> Option<VertexId> {
        self.order.get(index).copied()
    }

    /// Returns the data of a vertex of this polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex does not belong to this polygon.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData> {
        Ok(self.mesh.vertex(id)?)
    }

    /// Returns the position of a vertex of this polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex does not belong to this polygon.
    pub fn point(&self, id: VertexId) -> Result<Point2> {
        Ok(self.mesh.point(id)?)
    }

    /// The underlying half-edge mesh.
    #[must_use]
    pub fn mesh(&self) -> &HalfEdgeMesh {
        &self.mesh
    }

    /// Bounded face enclosed by the boundary, once closed.
    #[must_use]
    pub fn interior_face(&self) -> Option<FaceId> {
        self.interior
    }

    /// Unbounded face outside the boundary, once closed.
    #[must_use]
    pub fn exterior_face(&self) -> Option<FaceId> {
        self.exterior
    }

    /// Diagonals found by the most recent [`Polygon::triangulate`] call.
    ///
    /// Empty before the first triangulation and after any vertex move.
    #[must_use]
    pub fn diagonals(&self) -> &[Diagonal] {
        &self.diagonals
    }

    /// Triangles found by the most recent [`Polygon::triangulate`] call.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Walks the boundary vertices in boundary order, starting at the first.
    ///
    /// Every call starts a fresh walk; the walk ends after the last vertex of
    /// an open boundary or before returning to the first of a closed one.
    #[must_use]
    pub fn iter_vertexes(&self) -> VertexIter<'_> {
        VertexIter {
            mesh: &self.mesh,
            first: self.first(),
            current: self.first(),
            remaining: self.order.len(),
        }
    }

    /// Boundary positions in boundary order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.iter_vertexes().map(|(_, v)| v.point).collect()
    }

    /// Signed area of the closed boundary (positive when counter-clockwise).
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.points())
    }

    pub(crate) fn set_triangulation(&mut self, diagonals: Vec<Diagonal>, triangles: Vec<Triangle>) {
        self.diagonals = diagonals;
        self.triangles = triangles;
    }
}

/// Iterator over boundary vertices following the half-edge links.
#[derive(Debug, Clone)]
pub struct VertexIter<'a> {
    mesh: &'a HalfEdgeMesh,
    first: Option<VertexId>,
    current: Option<VertexId>,
    remaining: usize,
}

impl<'a> Iterator for VertexIter<'a> {
    type Item = (VertexId, &'a VertexData);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        let data = self.mesh.vertex(id).ok()?;
        self.remaining -= 1;
        self.current = data
            .outgoing
            .and_then(|he| self.mesh.destination(he).ok())
            .filter(|&next| Some(next) != self.first);
        Some((id, data))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::from_points(&[
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn empty_polygon() {
        let polygon = Polygon::new();
        assert_eq!(polygon.vertex_count(), 0);
        assert!(!polygon.is_closed());
        assert!(polygon.first().is_none());
        assert!(polygon.last().is_none());
        assert_eq!(polygon.iter_vertexes().count(), 0);
        assert!(polygon.diagonals().is_empty());
    }

    #[test]
    fn iter_vertexes_follows_insertion_order() {
        let polygon = square();
        let indices: Vec<usize> = polygon.iter_vertexes().map(|(_, v)| v.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn iter_vertexes_is_restartable() {
        let polygon = square();
        let mut walk = polygon.iter_vertexes();
        walk.next();
        walk.next();
        assert_eq!(polygon.iter_vertexes().count(), 4);
        assert_eq!(walk.clone().count(), 2);
        assert_eq!(walk.count(), 2);
    }

    #[test]
    fn iter_vertexes_on_open_boundary_stops_at_last() {
        let mut polygon = Polygon::new();
        polygon.add_vertex(Point2::new(0.0, 0.0)).unwrap();
        polygon.add_vertex(Point2::new(3.0, 0.0)).unwrap();
        polygon.add_vertex(Point2::new(3.0, 3.0)).unwrap();
        let ids: Vec<VertexId> = polygon.iter_vertexes().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids.last().copied(), polygon.last());
    }

    #[test]
    fn first_last_and_lookup() {
        let polygon = square();
        let first = polygon.first().unwrap();
        let last = polygon.last().unwrap();
        assert_eq!(polygon.point(first).unwrap(), Point2::new(0.0, 0.0));
        assert_eq!(polygon.point(last).unwrap(), Point2::new(0.0, 10.0));
        assert_eq!(polygon.vertex_id(2).map(|id| polygon.vertex(id).unwrap().index), Some(2));
        assert!(polygon.vertex_id(4).is_none());
    }

    #[test]
    fn area_of_square() {
        assert!((square().area() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn diagonal_same_segment_ignores_direction() {
        let polygon = square();
        let a = polygon.vertex_id(0).unwrap();
        let c = polygon.vertex_id(2).unwrap();
        let b = polygon.vertex_id(1).unwrap();
        assert!(Diagonal::new(a, c).same_segment(&Diagonal::new(c, a)));
        assert!(!Diagonal::new(a, c).same_segment(&Diagonal::new(a, b)));
    }
}

use tracing::debug;

use crate::error::{MeshError, PolygonError, Result};
use crate::math::polygon_2d::lowest_point_index;
use crate::math::{
    left_turn, segment_segment_intersect_2d, Point2, Segment2, SegmentIntersection, Turn,
};
use crate::mesh::{FaceData, HalfEdgeId, VertexData, VertexId};

use super::Polygon;

impl Polygon {
    /// Appends a vertex to the open boundary.
    ///
    /// The first vertex is stored on its own; every following one adds the
    /// edge from the previous last vertex to `point`. That edge may touch
    /// the boundary only at the vertex it shares with the previous edge.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::PolygonClosed` if the polygon is closed, or
    /// `PolygonError::SelfIntersection` if the new edge would cross the
    /// boundary or `point` coincides with an existing vertex.
    pub fn add_vertex(&mut self, point: Point2) -> Result<()> {
        if self.closed {
            return Err(PolygonError::PolygonClosed.into());
        }

        let points = self.points();
        if points.contains(&point) {
            debug!(x = point.x, y = point.y, "vertex rejected: duplicate position");
            return Err(PolygonError::SelfIntersection.into());
        }
        if let Some(&last_point) = points.last() {
            let segment = Segment2::new(last_point, point);
            if crosses_boundary(&segment, &open_edges(&points), &points, Touch::SharedEndpoint) {
                debug!(x = point.x, y = point.y, "vertex rejected: self-intersection");
                return Err(PolygonError::SelfIntersection.into());
            }
        }

        let previous = self.last();
        let incoming = self.last_edge()?;

        let id = self
            .mesh
            .add_vertex(VertexData::new(self.order.len(), point));
        if let Some(previous) = previous {
            let (forward, backward) = self.mesh.add_edge_pair(previous, id);
            self.mesh.vertex_mut(previous)?.outgoing = Some(forward);
            if let Some(incoming) = incoming {
                self.mesh.link(incoming, forward)?;
                let incoming_twin = self.mesh.twin(incoming)?;
                self.mesh.link(backward, incoming_twin)?;
            }
        }
        self.order.push(id);
        Ok(())
    }

    /// Closes the boundary with the edge from the last vertex to the first.
    ///
    /// On success both half-edge cycles are complete, the interior and
    /// exterior faces exist, and the winding is known.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::PolygonClosed` if the polygon is already closed,
    /// `PolygonError::NotEnoughVertices` with fewer than 4 vertices, or
    /// `PolygonError::SelfIntersection` if the closing edge would cross the
    /// boundary.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(PolygonError::PolygonClosed.into());
        }
        let count = self.order.len();
        if count < 4 {
            return Err(PolygonError::NotEnoughVertices { count }.into());
        }

        let points = self.points();
        let closing = Segment2::new(points[count - 1], points[0]);
        if crosses_boundary(&closing, &open_edges(&points), &points, Touch::SharedEndpoint) {
            debug!("close rejected: self-intersection");
            return Err(PolygonError::SelfIntersection.into());
        }

        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return Err(PolygonError::NotEnoughVertices { count }.into());
        };
        let first_edge = self
            .mesh
            .vertex(first)?
            .outgoing
            .ok_or(MeshError::BrokenLink("outgoing"))?;
        let last_edge = self.last_edge()?.ok_or(MeshError::BrokenLink("outgoing"))?;
        let first_twin = self.mesh.twin(first_edge)?;
        let last_twin = self.mesh.twin(last_edge)?;

        let (forward, backward) = self.mesh.add_edge_pair(last, first);
        self.mesh.vertex_mut(last)?.outgoing = Some(forward);
        self.mesh.link(last_edge, forward)?;
        self.mesh.link(forward, first_edge)?;
        self.mesh.link(first_twin, backward)?;
        self.mesh.link(backward, last_twin)?;

        let interior = self.mesh.add_face(FaceData::new(forward, true));
        let exterior = self.mesh.add_face(FaceData::new(backward, false));
        let mut he = forward;
        for _ in 0..count {
            self.mesh.half_edge_mut(he)?.face = Some(interior);
            let twin = self.mesh.twin(he)?;
            self.mesh.half_edge_mut(twin)?.face = Some(exterior);
            he = self.mesh.next(he)?;
        }
        self.interior = Some(interior);
        self.exterior = Some(exterior);

        self.closed = true;
        self.clockwise = winds_clockwise(&points);
        debug!(vertices = count, clockwise = self.clockwise, "polygon closed");
        Ok(())
    }

    /// Tests `segment` against every edge of the current boundary.
    ///
    /// With `exclude_vertices`, a single touching point that coincides with
    /// a boundary vertex is not counted, so a segment starting at a vertex
    /// does not intersect the edges meeting there. Collinear overlaps of
    /// positive length always count.
    #[must_use]
    pub fn intersects(&self, segment: &Segment2, exclude_vertices: bool) -> bool {
        let points = self.points();
        let edges = if self.closed {
            closed_edges(&points)
        } else {
            open_edges(&points)
        };
        let touch = if exclude_vertices {
            Touch::AnyVertex(&points)
        } else {
            Touch::Counted
        };
        crosses_boundary(segment, &edges, &points, touch)
    }

    /// Moves the vertex inserted at `index` to `point`.
    ///
    /// Vertex count and topology stay the same. Previously computed
    /// diagonals and triangles are discarded; the winding of a closed
    /// polygon is derived again.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::VertexNotFound` for an unknown index, or
    /// `PolygonError::SelfIntersection` if an edge at the moved vertex would
    /// cross the boundary. The polygon is unchanged on error.
    pub fn move_vertex(&mut self, index: usize, point: Point2) -> Result<()> {
        let id = self
            .vertex_id(index)
            .ok_or(PolygonError::VertexNotFound(index))?;

        let mut points = self.points();
        if points
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && *p == point)
        {
            return Err(PolygonError::SelfIntersection.into());
        }
        points[index] = point;

        let edges = if self.closed {
            closed_edges(&points)
        } else {
            open_edges(&points)
        };
        let incident: Vec<usize> = edges
            .iter()
            .enumerate()
            .filter(|(_, (a, b))| *a == index || *b == index)
            .map(|(i, _)| i)
            .collect();
        let rest: Vec<(usize, usize)> = edges
            .iter()
            .enumerate()
            .filter(|(i, _)| !incident.contains(i))
            .map(|(_, e)| *e)
            .collect();
        for &edge in &incident {
            let (a, b) = edges[edge];
            let segment = Segment2::new(points[a], points[b]);
            if crosses_boundary(&segment, &rest, &points, Touch::SharedEndpoint) {
                debug!(index, "vertex move rejected: self-intersection");
                return Err(PolygonError::SelfIntersection.into());
            }
        }
        if let [first, second] = incident[..] {
            let (a0, a1) = edges[first];
            let (b0, b1) = edges[second];
            let hit = segment_segment_intersect_2d(&points[a0], &points[a1], &points[b0], &points[b1]);
            if matches!(hit, SegmentIntersection::Overlap(..)) {
                debug!(index, "vertex move rejected: edges fold onto each other");
                return Err(PolygonError::SelfIntersection.into());
            }
        }

        self.mesh.vertex_mut(id)?.point = point;
        self.diagonals.clear();
        self.triangles.clear();
        if self.closed {
            self.clockwise = winds_clockwise(&points);
        }
        Ok(())
    }

    /// The boundary half-edge ending at the last vertex, if any.
    fn last_edge(&self) -> Result<Option<HalfEdgeId>> {
        let count = self.order.len();
        if count < 2 {
            return Ok(None);
        }
        let id: VertexId = self.order[count - 2];
        Ok(self.mesh.vertex(id)?.outgoing)
    }
}

/// Edges `i → i + 1` of an open chain, as index pairs.
fn open_edges(points: &[Point2]) -> Vec<(usize, usize)> {
    (1..points.len()).map(|i| (i - 1, i)).collect()
}

/// Edges of the closed cycle through `points`, as index pairs.
fn closed_edges(points: &[Point2]) -> Vec<(usize, usize)> {
    let mut edges = open_edges(points);
    if points.len() > 1 {
        edges.push((points.len() - 1, 0));
    }
    edges
}

/// Which single touching points a crossing test tolerates.
#[derive(Debug, Clone, Copy)]
enum Touch<'a> {
    /// Every common point counts.
    Counted,
    /// A point that is an endpoint of both the segment and the edge, where
    /// consecutive boundary edges meet.
    SharedEndpoint,
    /// Any of the given vertex positions.
    AnyVertex(&'a [Point2]),
}

impl Touch<'_> {
    fn allows(self, hit: &Point2, segment: &Segment2, edge: (&Point2, &Point2)) -> bool {
        match self {
            Self::Counted => false,
            Self::SharedEndpoint => {
                (*hit == segment.start || *hit == segment.end)
                    && (hit == edge.0 || hit == edge.1)
            }
            Self::AnyVertex(vertices) => vertices.contains(hit),
        }
    }
}

/// Tests `segment` against the `edges` (indices into `points`). Collinear
/// overlaps always count.
fn crosses_boundary(
    segment: &Segment2,
    edges: &[(usize, usize)],
    points: &[Point2],
    touch: Touch<'_>,
) -> bool {
    edges.iter().any(|&(a, b)| {
        let edge = (&points[a], &points[b]);
        match segment_segment_intersect_2d(&segment.start, &segment.end, edge.0, edge.1) {
            SegmentIntersection::Disjoint => false,
            SegmentIntersection::Point(hit) => !touch.allows(&hit, segment, edge),
            SegmentIntersection::Overlap(..) => true,
        }
    })
}

/// Reads the winding at the lowest vertex, which is always convex.
fn winds_clockwise(points: &[Point2]) -> bool {
    let Some(i) = lowest_point_index(points) else {
        return false;
    };
    let n = points.len();
    let vertex = points[i];
    let to_next = points[(i + 1) % n] - vertex;
    let to_prev = points[(i + n - 1) % n] - vertex;
    left_turn(&to_next, &to_prev) != Turn::Left
}

use tracing::trace;

use crate::error::{MeshError, PolygonError, Result};
use crate::math::orientation::turn_at;
use crate::math::polygon_2d::triangle_contains_2d;
use crate::math::Turn;
use crate::mesh::{HalfEdgeId, HalfEdgeMesh, VertexId};
use crate::polygon::{Diagonal, Triangle};

/// A boundary vertex together with its neighbours and the two boundary
/// half-edges meeting at it.
#[derive(Debug, Clone, Copy)]
struct Corner {
    prev: VertexId,
    vertex: VertexId,
    next: VertexId,
    incoming: HalfEdgeId,
    outgoing: HalfEdgeId,
}

/// Ear-removal over a disposable copy of a closed boundary.
///
/// The copy shares vertex IDs with the polygon it was taken from, so the
/// recorded diagonals refer directly to the caller's vertices.
#[derive(Debug)]
pub(crate) struct EarClipper {
    mesh: HalfEdgeMesh,
    remaining: usize,
    clockwise: bool,
}

impl EarClipper {
    pub(crate) fn new(mesh: HalfEdgeMesh, vertex_count: usize, clockwise: bool) -> Self {
        Self {
            mesh,
            remaining: vertex_count,
            clockwise,
        }
    }

    /// Clips ears starting at `start` until a single triangle is left.
    ///
    /// The scan always advances counter-clockwise, so the same boundary
    /// entered in either winding from the same first vertex produces the
    /// same set of diagonals.
    pub(crate) fn run(mut self, start: VertexId) -> Result<(Vec<Diagonal>, Vec<Triangle>)> {
        let mut diagonals = Vec::with_capacity(self.remaining.saturating_sub(3));
        let mut triangles = Vec::with_capacity(self.remaining.saturating_sub(2));

        let mut current = start;
        let mut misses = 0;
        while self.remaining > 3 {
            let corner = self.corner(current)?;
            current = if self.clockwise { corner.prev } else { corner.next };

            if self.is_ear(&corner)? {
                trace!(remaining = self.remaining, "clipping ear");
                diagonals.push(Diagonal::new(corner.prev, corner.next));
                triangles.push(Triangle([corner.prev, corner.vertex, corner.next]));
                self.clip(&corner)?;
                misses = 0;
            } else {
                misses += 1;
                if misses >= self.remaining {
                    return Err(PolygonError::NoEarFound.into());
                }
            }
        }

        let last = self.corner(current)?;
        triangles.push(Triangle([last.prev, last.vertex, last.next]));
        Ok((diagonals, triangles))
    }

    fn corner(&self, vertex: VertexId) -> Result<Corner> {
        let outgoing = self
            .mesh
            .vertex(vertex)?
            .outgoing
            .ok_or(MeshError::BrokenLink("outgoing"))?;
        let incoming = self.mesh.prev(outgoing)?;
        Ok(Corner {
            prev: self.mesh.half_edge(incoming)?.origin,
            vertex,
            next: self.mesh.destination(outgoing)?,
            incoming,
            outgoing,
        })
    }

    /// A convex corner whose triangle holds no other remaining vertex, not
    /// even on its boundary.
    fn is_ear(&self, corner: &Corner) -> Result<bool> {
        let p = self.mesh.point(corner.prev)?;
        let v = self.mesh.point(corner.vertex)?;
        let n = self.mesh.point(corner.next)?;

        let mut turn = turn_at(&p, &v, &n);
        if self.clockwise {
            turn = turn.reversed();
        }
        if turn != Turn::Left {
            return Ok(false);
        }

        let blocked = self
            .mesh
            .vertices()
            .filter(|(id, _)| ![corner.prev, corner.vertex, corner.next].contains(id))
            .any(|(_, r)| triangle_contains_2d(&p, &v, &n, &r.point));
        Ok(!blocked)
    }

    /// Replaces `prev → vertex → next` with the diagonal `prev → next` on
    /// both cycles and drops the vertex with its four half-edges.
    fn clip(&mut self, corner: &Corner) -> Result<()> {
        let before = self.mesh.prev(corner.incoming)?;
        let after = self.mesh.next(corner.outgoing)?;
        let incoming_twin = self.mesh.twin(corner.incoming)?;
        let outgoing_twin = self.mesh.twin(corner.outgoing)?;
        let outer_before = self.mesh.prev(outgoing_twin)?;
        let outer_after = self.mesh.next(incoming_twin)?;
        let inner_face = self.mesh.half_edge(corner.incoming)?.face;
        let outer_face = self.mesh.half_edge(incoming_twin)?.face;

        let (diagonal, diagonal_twin) = self.mesh.add_edge_pair(corner.prev, corner.next);
        self.mesh.link(before, diagonal)?;
        self.mesh.link(diagonal, after)?;
        self.mesh.link(outer_before, diagonal_twin)?;
        self.mesh.link(diagonal_twin, outer_after)?;
        self.mesh.half_edge_mut(diagonal)?.face = inner_face;
        self.mesh.half_edge_mut(diagonal_twin)?.face = outer_face;
        self.mesh.vertex_mut(corner.prev)?.outgoing = Some(diagonal);

        if let Some(face) = inner_face {
            self.mesh.face_mut(face)?.boundary = diagonal;
        }
        if let Some(face) = outer_face {
            self.mesh.face_mut(face)?.boundary = diagonal_twin;
        }

        for he in [corner.incoming, corner.outgoing, incoming_twin, outgoing_twin] {
            self.mesh.remove_half_edge(he)?;
        }
        self.mesh.remove_vertex(corner.vertex)?;
        self.remaining -= 1;
        Ok(())
    }

    #[cfg(test)]
    fn boundary_points(&self, start: VertexId) -> Result<Vec<crate::math::Point2>> {
        let mut points = Vec::with_capacity(self.remaining);
        let mut vertex = start;
        for _ in 0..self.remaining {
            points.push(self.mesh.point(vertex)?);
            let outgoing = self
                .mesh
                .vertex(vertex)?
                .outgoing
                .ok_or(MeshError::BrokenLink("outgoing"))?;
            vertex = self.mesh.destination(outgoing)?;
        }
        Ok(points)
    }
}

use crate::math::Point2;

use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the half-edge mesh.
    pub struct VertexId;
}

/// Data associated with a boundary vertex.
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Insertion order of the vertex within its polygon.
    pub index: usize,
    /// The 2D position of the vertex.
    pub point: Point2,
    /// Boundary half-edge leaving this vertex, once the following edge exists.
    pub outgoing: Option<HalfEdgeId>,
}

impl VertexData {
    /// Creates a new, not yet connected vertex.
    #[must_use]
    pub fn new(index: usize, point: Point2) -> Self {
        Self {
            index,
            point,
            outgoing: None,
        }
    }
}

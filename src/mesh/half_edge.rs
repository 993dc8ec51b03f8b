use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the half-edge mesh.
    pub struct HalfEdgeId;
}

/// Data associated with a directed half-edge.
///
/// Every half-edge is created together with its twin, which runs along the
/// same segment in the opposite direction. `next` and `prev` are `None`
/// only while the boundary is still open.
#[derive(Debug, Clone)]
pub struct HalfEdgeData {
    /// Vertex this half-edge starts at.
    pub origin: VertexId,
    /// Opposite half-edge of the same segment.
    pub twin: HalfEdgeId,
    /// Following half-edge along the same cycle.
    pub next: Option<HalfEdgeId>,
    /// Preceding half-edge along the same cycle.
    pub prev: Option<HalfEdgeId>,
    /// Face on the left of this half-edge.
    pub face: Option<FaceId>,
}

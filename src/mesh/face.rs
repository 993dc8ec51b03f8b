use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the half-edge mesh.
    pub struct FaceId;
}

/// Data associated with a face of the mesh.
///
/// A simple polygon has exactly two faces: the bounded interior and the
/// unbounded exterior.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// One half-edge of the cycle bounding this face.
    pub boundary: HalfEdgeId,
    /// `false` for the unbounded outer face.
    pub bounded: bool,
}

impl FaceData {
    /// Creates a face bounded by the cycle through `boundary`.
    #[must_use]
    pub fn new(boundary: HalfEdgeId, bounded: bool) -> Self {
        Self { boundary, bounded }
    }
}

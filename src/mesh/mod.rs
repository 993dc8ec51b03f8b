pub mod face;
pub mod half_edge;
pub mod vertex;

pub use face::{FaceData, FaceId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use vertex::{VertexData, VertexId};

use crate::error::MeshError;
use crate::math::Point2;
use slotmap::SlotMap;

/// Arena that owns every vertex, half-edge and face of a polygon boundary.
///
/// Records reference each other via typed IDs (generational indices), so
/// the `next`/`prev`/`twin` cycles carry no ownership. Cloning the mesh
/// produces an independent deep copy in which every ID stays valid and
/// refers to the copied record.
#[derive(Debug, Clone, Default)]
pub struct HalfEdgeMesh {
    vertices: SlotMap<VertexId, VertexData>,
    half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    faces: SlotMap<FaceId, FaceData>,
}

impl HalfEdgeMesh {
    /// Creates a new, empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, MeshError> {
        self.vertices
            .get(id)
            .ok_or(MeshError::EntityNotFound("vertex"))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, MeshError> {
        self.vertices
            .get_mut(id)
            .ok_or(MeshError::EntityNotFound("vertex"))
    }

    /// Returns the position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn point(&self, id: VertexId) -> Result<Point2, MeshError> {
        Ok(self.vertex(id)?.point)
    }

    /// Removes a vertex from the mesh. Half-edges are not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<VertexData, MeshError> {
        self.vertices
            .remove(id)
            .ok_or(MeshError::EntityNotFound("vertex"))
    }

    /// Iterates over all stored vertices in arena order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Number of vertices stored in the mesh.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Half-edge operations ---

    /// Creates the two half-edges of the segment `origin → destination`.
    ///
    /// Returns `(forward, backward)`, where `forward` starts at `origin` and
    /// `backward` is its twin. Both are unlinked and face-less.
    pub fn add_edge_pair(
        &mut self,
        origin: VertexId,
        destination: VertexId,
    ) -> (HalfEdgeId, HalfEdgeId) {
        let forward = self.half_edges.insert(HalfEdgeData {
            origin,
            twin: HalfEdgeId::default(),
            next: None,
            prev: None,
            face: None,
        });
        let backward = self.half_edges.insert(HalfEdgeData {
            origin: destination,
            twin: forward,
            next: None,
            prev: None,
            face: None,
        });
        if let Some(he) = self.half_edges.get_mut(forward) {
            he.twin = backward;
        }
        (forward, backward)
    }

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, MeshError> {
        self.half_edges
            .get(id)
            .ok_or(MeshError::EntityNotFound("half-edge"))
    }

    /// Returns a mutable reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> Result<&mut HalfEdgeData, MeshError> {
        self.half_edges
            .get_mut(id)
            .ok_or(MeshError::EntityNotFound("half-edge"))
    }

    /// Removes a half-edge from the mesh without touching its neighbours.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn remove_half_edge(&mut self, id: HalfEdgeId) -> Result<HalfEdgeData, MeshError> {
        self.half_edges
            .remove(id)
            .ok_or(MeshError::EntityNotFound("half-edge"))
    }

    /// Makes `to` follow `from` along their common cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if either half-edge is not found in the mesh.
    pub fn link(&mut self, from: HalfEdgeId, to: HalfEdgeId) -> Result<(), MeshError> {
        self.half_edge_mut(from)?.next = Some(to);
        self.half_edge_mut(to)?.prev = Some(from);
        Ok(())
    }

    /// Returns the half-edge following `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is missing or not linked yet.
    pub fn next(&self, id: HalfEdgeId) -> Result<HalfEdgeId, MeshError> {
        self.half_edge(id)?.next.ok_or(MeshError::BrokenLink("next"))
    }

    /// Returns the half-edge preceding `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is missing or not linked yet.
    pub fn prev(&self, id: HalfEdgeId) -> Result<HalfEdgeId, MeshError> {
        self.half_edge(id)?.prev.ok_or(MeshError::BrokenLink("prev"))
    }

    /// Returns the twin of `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge is not found in the mesh.
    pub fn twin(&self, id: HalfEdgeId) -> Result<HalfEdgeId, MeshError> {
        Ok(self.half_edge(id)?.twin)
    }

    /// Returns the vertex the half-edge points to (the origin of its twin).
    ///
    /// # Errors
    ///
    /// Returns an error if the half-edge or its twin is not found in the mesh.
    pub fn destination(&self, id: HalfEdgeId) -> Result<VertexId, MeshError> {
        Ok(self.half_edge(self.twin(id)?)?.origin)
    }

    /// Number of half-edges stored in the mesh.
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    // --- Face operations ---

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, MeshError> {
        self.faces.get(id).ok_or(MeshError::EntityNotFound("face"))
    }

    /// Returns a mutable reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the mesh.
    pub fn face_mut(&mut self, id: FaceId) -> Result<&mut FaceData, MeshError> {
        self.faces
            .get_mut(id)
            .ok_or(MeshError::EntityNotFound("face"))
    }

    /// Number of faces stored in the mesh.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

use thiserror::Error;

/// Top-level error type for the Trigon polygon core.
#[derive(Debug, Error)]
pub enum TrigonError {
    #[error(transparent)]
    Polygon(#[from] PolygonError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Precondition violations reported by polygon construction and triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolygonError {
    #[error("the new edge would cross the existing boundary")]
    SelfIntersection,

    #[error("polygon is already closed")]
    PolygonClosed,

    #[error("polygon is not closed")]
    PolygonNotClosed,

    #[error("at least 4 vertices are required to close a polygon, got {count}")]
    NotEnoughVertices { count: usize },

    #[error("no vertex with index {0}")]
    VertexNotFound(usize),

    #[error("no ear could be clipped from the remaining boundary")]
    NoEarFound,
}

/// Errors raised by the half-edge arena.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("half-edge is missing its {0} link")]
    BrokenLink(&'static str),
}

/// Errors related to random polygon generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid generator parameters: {0}")]
    InvalidParameters(String),

    #[error("no simple polygon found after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}

/// Convenience type alias for results using [`TrigonError`].
pub type Result<T> = std::result::Result<T, TrigonError>;

pub mod intersect_2d;
pub mod orientation;
pub mod polygon_2d;

pub use intersect_2d::{segment_segment_intersect_2d, SegmentIntersection};
pub use orientation::{left_turn, vector_between, Turn};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// A directed line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    /// Start point.
    pub start: Point2,
    /// End point.
    pub end: Point2,
}

impl Segment2 {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Direction vector `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        vector_between(&self.start, &self.end)
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

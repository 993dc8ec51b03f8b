mod ear_clip;

use tracing::debug;

use crate::error::{PolygonError, Result};
use crate::polygon::{Diagonal, Polygon};
use ear_clip::EarClipper;

impl Polygon {
    /// Triangulates the closed boundary by ear removal.
    ///
    /// Works on a copy of the half-edge mesh, so the boundary itself is never
    /// modified. On success the diagonals (exactly `n - 3` of them) and the
    /// `n - 2` triangles replace the previous result. The previous result is
    /// only replaced once the new one is complete, so a failed call leaves it
    /// untouched instead of clearing it up front.
    ///
    /// Vertices lying exactly on a candidate ear's boundary block that ear.
    /// Straight-angle vertices are allowed; they are never ears themselves.
    ///
    /// # Errors
    ///
    /// Returns `PolygonError::PolygonNotClosed` for an open boundary, or
    /// `PolygonError::NoEarFound` if a full lap over the remaining vertices
    /// finds no clippable ear (only possible for degenerate boundaries).
    pub fn triangulate(&mut self) -> Result<&[Diagonal]> {
        if !self.is_closed() {
            return Err(PolygonError::PolygonNotClosed.into());
        }
        let start = self.first().ok_or(PolygonError::PolygonNotClosed)?;

        let clipper = EarClipper::new(self.mesh().clone(), self.vertex_count(), self.is_clockwise());
        let (diagonals, triangles) = clipper.run(start)?;
        debug!(
            vertices = self.vertex_count(),
            diagonals = diagonals.len(),
            "polygon triangulated"
        );

        self.set_triangulation(diagonals, triangles);
        Ok(self.diagonals())
    }
}

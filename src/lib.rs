pub mod error;
pub mod generation;
pub mod math;
pub mod mesh;
pub mod polygon;
pub mod triangulation;

pub use error::{Result, TrigonError};
pub use polygon::{Diagonal, Polygon, Triangle};

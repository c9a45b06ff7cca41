//! Quadtree error types.

use thiserror::Error;

/// Errors raised while building or inserting into a quadtree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadTreeError {
    #[error("Invalid rectangle half-extents: half_width={half_width}, half_height={half_height}")]
    InvalidExtent { half_width: f64, half_height: f64 },

    #[error("Invalid coordinate: ({x}, {y})")]
    InvalidCoordinate { x: f64, y: f64 },

    #[error("Node capacity must be at least 1")]
    ZeroCapacity,

    /// No child quadrant accepted a point that its parent boundary contains.
    #[error("No child quadrant accepted point ({x}, {y}) inside the parent boundary")]
    Unplaced { x: f64, y: f64 },
}

//! Spatial indexing.
//!
//! Points, center/half-extent rectangles and the quadtree built over them.

mod bounds;
mod quadtree;

pub use bounds::{Point, Quadrant, Rectangle};
pub use quadtree::{Points, QuadNode};

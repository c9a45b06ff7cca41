//! Point quadtree over a fixed planar region.
//!
//! Build a root [`QuadNode`] over a [`Rectangle`] with a per-node capacity,
//! [`insert`](QuadNode::insert) points, then run rectangular range
//! [`query`](QuadNode::query) calls that skip every subtree the window
//! cannot reach.
//!
//! The tree has no internal locking. Share it behind an external `RwLock`
//! when several threads need it.

pub mod config;
mod error;
pub mod spatial;

// Re-export commonly used types
pub use config::{BoundaryConfig, TreeConfig};
pub use error::QuadTreeError;
pub use spatial::{Point, Points, QuadNode, Quadrant, Rectangle};

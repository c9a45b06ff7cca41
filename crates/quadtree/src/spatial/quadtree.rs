//! Point quadtree with lazy subdivision.
//!
//! A node keeps up to `capacity` points of its own. The first point that
//! arrives after that splits the node into four quadrants, and every later
//! point for this region goes to a child. Points already stored stay where
//! they are.

use super::bounds::{Point, Quadrant, Rectangle};
use crate::config::TreeConfig;
use crate::error::QuadTreeError;
use std::fmt;
use tracing::{debug, error, trace};

/// A quadtree node. The root is the tree.
pub struct QuadNode {
    /// Region this node indexes. Never changes.
    boundary: Rectangle,
    /// Points stored directly on this node before it splits.
    capacity: usize,
    /// Own points in insertion order.
    points: Vec<Point>,
    /// NE, NW, SE, SW. Created together in one step, never removed.
    children: Option<Box<[QuadNode; 4]>>,
    /// Distance from the root.
    level: u32,
}

impl QuadNode {
    /// Create a root node over `boundary`.
    pub fn new(boundary: Rectangle, capacity: usize) -> Result<Self, QuadTreeError> {
        if capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        Ok(Self::with_level(boundary, capacity, 0))
    }

    /// Create a root node from configuration.
    pub fn from_config(config: &TreeConfig) -> Result<Self, QuadTreeError> {
        Self::new(config.boundary.to_rectangle()?, config.capacity)
    }

    fn with_level(boundary: Rectangle, capacity: usize, level: u32) -> Self {
        Self {
            boundary,
            capacity,
            points: Vec::with_capacity(capacity.min(64)),
            children: None,
            level,
        }
    }

    #[inline]
    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points stored on this node itself, excluding descendants.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Get a child by quadrant, if this node has split.
    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadNode> {
        self.children.as_ref().map(|c| &c[quadrant.index()])
    }

    /// Children in NE, NW, SE, SW order. Empty before the split.
    pub fn children(&self) -> impl Iterator<Item = &QuadNode> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Insert a point.
    ///
    /// Returns `Ok(false)` when the point lies outside this node's boundary.
    /// Quadrants split exactly on the boundary's center lines, so a point
    /// inside the boundary always has one child that takes it.
    /// `Err(Unplaced)` guards that invariant and is not expected in practice.
    pub fn insert(&mut self, point: Point) -> Result<bool, QuadTreeError> {
        if !self.boundary.contains(&point) {
            return Ok(false);
        }

        if self.points.len() < self.capacity {
            self.points.push(point);
            trace!("Stored {} at level {}", point, self.level);
            return Ok(true);
        }

        let (boundary, capacity, level) = (self.boundary, self.capacity, self.level);
        let children = self
            .children
            .get_or_insert_with(|| Self::subdivide(&boundary, capacity, level));

        for child in children.iter_mut() {
            if child.insert(point)? {
                return Ok(true);
            }
        }

        error!("{} inside {} but outside every quadrant", point, boundary);
        Err(QuadTreeError::Unplaced { x: point.x, y: point.y })
    }

    fn subdivide(boundary: &Rectangle, capacity: usize, level: u32) -> Box<[QuadNode; 4]> {
        debug!("Subdividing {} at level {}", boundary, level);
        Box::new(
            Quadrant::ALL.map(|q| Self::with_level(boundary.quadrant(q), capacity, level + 1)),
        )
    }

    /// Find all stored points inside `area`.
    ///
    /// Subtrees whose boundary does not touch `area` are skipped. Result
    /// order follows the traversal and is not otherwise meaningful.
    pub fn query(&self, area: &Rectangle) -> Vec<Point> {
        if !self.boundary.intersects(area) {
            return Vec::new();
        }

        let mut found: Vec<Point> = self
            .points
            .iter()
            .filter(|p| area.contains(p))
            .copied()
            .collect();

        for child in self.children() {
            found.extend(child.query(area));
        }

        found
    }

    /// Total number of points in this subtree.
    pub fn len(&self) -> usize {
        self.points.len() + self.children().map(QuadNode::len).sum::<usize>()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        // Children only exist once this node is full.
        self.points.is_empty()
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(QuadNode::node_count).sum::<usize>()
    }

    /// Height of this subtree. A node without children has depth 0.
    pub fn depth(&self) -> usize {
        self.children()
            .map(QuadNode::depth)
            .max()
            .map_or(0, |d| d + 1)
    }

    /// Iterate over every stored point, pre-order.
    pub fn iter(&self) -> Points<'_> {
        Points {
            stack: vec![self],
            current: Default::default(),
        }
    }
}

impl fmt::Debug for QuadNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadNode")
            .field("capacity", &self.capacity)
            .field("boundary", &self.boundary)
            .field("points", &self.points.len())
            .field("divided", &self.is_divided())
            .finish()
    }
}

impl<'a> IntoIterator for &'a QuadNode {
    type Item = &'a Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a subtree's points.
///
/// Yields a node's own points in insertion order, then the NE, NW, SE and SW
/// subtrees.
pub struct Points<'a> {
    stack: Vec<&'a QuadNode>,
    current: std::slice::Iter<'a, Point>,
}

impl<'a> Iterator for Points<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.current.next() {
                return Some(p);
            }
            let node = self.stack.pop()?;
            self.current = node.points.iter();
            if let Some(children) = &node.children {
                self.stack.extend(children.iter().rev());
            }
        }
    }
}

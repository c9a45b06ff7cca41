//! Points and center/half-extent rectangles.

use crate::error::QuadTreeError;
use glam::DVec2;
use std::fmt;

/// An immutable 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_dvec2()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point(x={}, y={})", self.x, self.y)
    }
}

/// One of the four equal sub-regions of a rectangle.
///
/// "North" is the lower-y half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    /// All quadrants in delegation order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Slot index matching the position in [`Quadrant::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::NorthWest => 1,
            Quadrant::SouthEast => 2,
            Quadrant::SouthWest => 3,
        }
    }
}

/// Axis-aligned rectangle given as a center and half-extents.
///
/// Point containment is half-open, `[x - w, x + w) × [y - h, y + h)`, so
/// sibling quadrants never both claim a point on their shared edge.
/// Rectangle intersection uses closed bounds, so touching edges count.
///
/// Edges are stored rather than recomputed. A quadrant takes two edges from
/// its parent and the other two from the parent's center lines, so the four
/// quadrants tile the parent exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    x: f64,
    y: f64,
    half_width: f64,
    half_height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Rectangle {
    /// Create a rectangle from its center and half-extents.
    pub fn new(x: f64, y: f64, half_width: f64, half_height: f64) -> Result<Self, QuadTreeError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(QuadTreeError::InvalidCoordinate { x, y });
        }
        // Also rejects NaN.
        if !(half_width >= 0.0 && half_height >= 0.0) {
            return Err(QuadTreeError::InvalidExtent { half_width, half_height });
        }

        let rect = Self {
            x,
            y,
            half_width,
            half_height,
            left: x - half_width,
            right: x + half_width,
            top: y - half_height,
            bottom: y + half_height,
        };
        // Infinite extents, or edges that overflow.
        if ![rect.left, rect.right, rect.top, rect.bottom].iter().all(|e| e.is_finite()) {
            return Err(QuadTreeError::InvalidExtent { half_width, half_height });
        }
        Ok(rect)
    }

    /// Create a rectangle from a center and half-extents given as vectors.
    pub fn from_center(center: DVec2, half_extents: DVec2) -> Result<Self, QuadTreeError> {
        Self::new(center.x, center.y, half_extents.x, half_extents.y)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Full width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    /// Full height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.half_height * 2.0
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Lower y edge.
    #[inline]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Upper y edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// Check if a point lies inside the half-open region.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.left
            && point.x < self.right
            && point.y >= self.top
            && point.y < self.bottom
    }

    /// Check if two rectangles overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Rectangle) -> bool {
        !(other.left > self.right
            || other.right < self.left
            || other.top > self.bottom
            || other.bottom < self.top)
    }

    /// Boundary of one quadrant of this rectangle.
    ///
    /// Center and half-extents follow `(x ± w/2, y ± h/2)` with `(w/2, h/2)`.
    /// The split lines are exactly `x` and `y`.
    pub fn quadrant(&self, quadrant: Quadrant) -> Rectangle {
        let half_width = self.half_width / 2.0;
        let half_height = self.half_height / 2.0;
        let (east, north) = match quadrant {
            Quadrant::NorthEast => (true, true),
            Quadrant::NorthWest => (false, true),
            Quadrant::SouthEast => (true, false),
            Quadrant::SouthWest => (false, false),
        };

        let (x, left, right) = if east {
            (self.x + half_width, self.x, self.right)
        } else {
            (self.x - half_width, self.left, self.x)
        };
        let (y, top, bottom) = if north {
            (self.y - half_height, self.top, self.y)
        } else {
            (self.y + half_height, self.y, self.bottom)
        };

        Rectangle { x, y, half_width, half_height, left, right, top, bottom }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rectangle(x={}, y={}, w={}, h={})",
            self.x, self.y, self.half_width, self.half_height
        )
    }
}

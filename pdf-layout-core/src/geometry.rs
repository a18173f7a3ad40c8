//! Basic geometric types for layout
//!
//! Layout positions are expressed in PDF user space (points, origin at the
//! lower-left corner of the page). Elements are placed by their upper-left
//! corner, so a flow cursor moves downwards by decreasing `y`.

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0)
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Lower-left corner
    pub lower_left: Point,
    /// Upper-right corner
    pub upper_right: Point,
}

impl Rectangle {
    /// Create a new rectangle from two points
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// Create the rectangle occupied by something of the given size whose
    /// upper-left corner sits at `upper_left`.
    pub fn from_upper_left(upper_left: Point, width: f64, height: f64) -> Self {
        Self {
            lower_left: Point::new(upper_left.x, upper_left.y - height),
            upper_right: Point::new(upper_left.x + width, upper_left.y),
        }
    }

    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }

    pub fn upper_left(&self) -> Point {
        Point::new(self.lower_left.x, self.upper_right.y)
    }
}

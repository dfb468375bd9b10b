//! Geometric primitives for wireframe layout.
//!
//! This module provides the geometric types used to place shapes on the
//! canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box: a top-left corner and a [`Size`]
//!
//! # Coordinate System
//!
//! The canvas uses the same coordinate system as Excalidraw and SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Screen builders work with absolute coordinates: each screen receives its
//! origin and offsets every shape from it.

/// A 2D point representing a position in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use wireframe_core::geometry::Point;
/// let origin = Point::new(1600.0, 0.0);
/// let card = origin.offset(320.0, 160.0);
/// assert_eq!(card.x(), 1920.0);
/// assert_eq!(card.y(), 160.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns a new point moved by `dx` and `dy`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Treats the point as the top-left corner of a box of the given size.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_top_left(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// A rectangular bounding box.
///
/// The box keeps the size it was built with, so `width()` and `height()`
/// return exactly that size wherever the box sits on the canvas. Maximum
/// coordinates are derived on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    top_left: Point,
    size: Size,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self { top_left, size }
    }

    fn from_extent(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new_from_top_left(
            Point::new(min_x, min_y),
            Size::new(max_x - min_x, max_y - min_y),
        )
    }

    /// Shorthand for a box at `(x, y)` with the given width and height.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wireframe_core::geometry::Bounds;
    /// let card = Bounds::rect(520.0, 250.0, 400.0, 400.0);
    /// assert_eq!(card.max_x(), 920.0);
    /// assert_eq!(card.height(), 400.0);
    /// ```
    pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new_from_top_left(Point::new(x, y), Size::new(width, height))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.top_left.x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.top_left.y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.top_left.x + self.size.width
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.top_left.y + self.size.height
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.size.width
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.size.height
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        self.top_left
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        self.top_left
            .offset(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        self.size
    }

    /// Merges two bounds to create a larger bounds that contains both.
    pub fn merge(&self, other: &Self) -> Self {
        Self::from_extent(
            self.min_x().min(other.min_x()),
            self.min_y().min(other.min_y()),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Returns true if the two boxes share interior area.
    ///
    /// Boxes that only touch along an edge do not intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// # use wireframe_core::geometry::Bounds;
    /// let login = Bounds::rect(0.0, 0.0, 1440.0, 900.0);
    /// let dashboard = Bounds::rect(1600.0, 0.0, 1440.0, 900.0);
    /// assert!(!login.intersects(&dashboard));
    /// assert!(login.intersects(&Bounds::rect(1000.0, 800.0, 100.0, 200.0)));
    /// ```
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Returns true if `other` lies entirely within these bounds.
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x() <= other.min_x()
            && self.min_y() <= other.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }
}

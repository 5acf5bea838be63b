//! Geometric primitives for rasterization.
//!
//! Everything here works on whole pixels: points are integer pairs and
//! rectangles are integer boxes with an inclusive `min` and exclusive `max`.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A pixel coordinate.
///
/// Y grows downward, as on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

/// An axis-aligned integer rectangle.
///
/// `min` is inclusive and `max` is exclusive, so `width()` and `height()` are
/// simply `max - min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner.
    pub min: Point,
    /// Bottom-right corner.
    pub max: Point,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self { min: Point::ORIGIN, max: Point::ORIGIN };

    /// Create a rectangle from two corners, swapping them as needed so that
    /// `min <= max` on both axes.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Create a rectangle from two corner points.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Check if a point is inside the rectangle.
    #[must_use]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Smallest rectangle containing both. Empty rectangles are ignored.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Move the rectangle by `offset`.
    #[must_use]
    pub fn translate(&self, offset: Point) -> Self {
        Self { min: self.min + offset, max: self.max + offset }
    }
}

/// Running min/max of a set of pixels.
///
/// Drawing operations feed every pixel they write through an `Extent` and
/// report the covering rectangle back to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extent {
    bounds: Option<(Point, Point)>,
}

impl Extent {
    /// An extent covering nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Grow the extent to cover `p`.
    pub fn include(&mut self, p: Point) {
        self.bounds = Some(match self.bounds {
            None => (p, p),
            Some((lo, hi)) => (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            ),
        });
    }

    /// Whether no pixel has been included yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// The smallest and largest coordinates seen, if any.
    #[must_use]
    pub const fn span(&self) -> Option<(Point, Point)> {
        self.bounds
    }

    /// Rectangle covering every included pixel (`max` is one past the last
    /// pixel). [`Rect::ZERO`] when nothing was included.
    #[must_use]
    pub fn covering(&self) -> Rect {
        match self.bounds {
            None => Rect::ZERO,
            Some((lo, hi)) => Rect { min: lo, max: Point::new(hi.x + 1, hi.y + 1) },
        }
    }
}

impl Extend<Point> for Extent {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            self.include(p);
        }
    }
}

impl FromIterator<Point> for Extent {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut extent = Self::new();
        extent.extend(iter);
        extent
    }
}

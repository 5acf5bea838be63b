//! Line scan conversion.

use std::collections::HashSet;
use std::fmt;

use crate::color::Rgba;
use crate::geometry::{Extent, Point, Rect};
use crate::surface::Surface;

use super::Composable;

/// Compute the pixels a segment passes through.
///
/// The result does not depend on the order of the endpoints: the segment is
/// always walked from its left end (or top end, when it is steep or
/// vertical). Both endpoints are always included, and `from == to` yields the
/// single point.
///
/// Sloped segments are walked along their major axis, accumulating the slope
/// into the minor coordinate and truncating it toward zero at each step.
#[must_use]
pub fn rasterize(from: Point, to: Point) -> Vec<Point> {
    // Vertical line.
    if from.x == to.x {
        let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
        return (y0..=y1).map(|y| Point::new(from.x, y)).collect();
    }

    // Walk from left to right.
    let (from, to) = if to.x < from.x { (to, from) } else { (from, to) };

    // Horizontal line, no floating point needed.
    if from.y == to.y {
        return (from.x..=to.x).map(|x| Point::new(x, from.y)).collect();
    }

    let rise = f64::from(to.y - from.y);
    let run = f64::from(to.x - from.x);
    let xdelta = run / rise;
    let ydelta = rise / run;

    let mut points = Vec::new();
    if xdelta.abs() < ydelta.abs() {
        // Steep: walk from top to bottom instead.
        let (from, to) = if to.y < from.y { (to, from) } else { (from, to) };
        points.reserve((to.y - from.y + 1) as usize);

        let mut x = f64::from(from.x);
        for y in from.y..to.y {
            points.push(Point::new(x as i32, y));
            x += xdelta;
        }
        points.push(to);
    } else {
        points.reserve((to.x - from.x + 1) as usize);

        let mut y = f64::from(from.y);
        for x in from.x..to.x {
            points.push(Point::new(x, y as i32));
            y += ydelta;
        }
        points.push(to);
    }
    points
}

/// A segment between two points, with its pixels precomputed.
#[derive(Debug, Clone)]
pub struct Line {
    from: Point,
    to: Point,
    color: Rgba,
    points: Vec<Point>,
    lookup: HashSet<Point>,
}

impl Line {
    /// Create a new line between the specified points and precalculate the
    /// points which the line passes through.
    #[must_use]
    pub fn new(from: Point, to: Point, color: Rgba) -> Self {
        let points = rasterize(from, to);
        let lookup = points.iter().copied().collect();
        Self { from, to, color, points, lookup }
    }

    /// Start point, as given.
    #[must_use]
    pub const fn from(&self) -> Point {
        self.from
    }

    /// End point, as given.
    #[must_use]
    pub const fn to(&self) -> Point {
        self.to
    }

    /// Outline color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// The pixels the line passes through.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the line passes through `p`.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        self.lookup.contains(&p)
    }

    /// Whether the line lies along a single row.
    #[must_use]
    pub const fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    /// The endpoint which is not `p`. For a vertex of the line this is the
    /// far end as seen from that vertex.
    #[must_use]
    pub fn other_end(&self, p: Point) -> Point {
        if p == self.from {
            self.to
        } else {
            self.from
        }
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.color == other.color
    }
}

impl Eq for Line {}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

impl Composable for Line {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        let mut touched = Extent::new();
        for &p in &self.points {
            target.set_point(p, self.color);
            touched.include(p);
        }
        touched.covering()
    }

    fn bounds(&self) -> Rect {
        Rect::from_corners(self.from, self.to)
    }
}

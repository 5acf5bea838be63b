//! Circle scan conversion.
//!
//! Circles are found by testing every pixel of a box around the center
//! against its distance from the center. The distance is truncated to a whole
//! number of pixels, so the outline is an annulus roughly one pixel wide
//! rather than a true one-pixel ring.

use crate::color::Rgba;
use crate::geometry::{Extent, Point, Rect};
use crate::surface::Surface;

use super::Composable;

/// Pixels whose truncated distance from `center` equals `radius`.
#[must_use]
pub fn outline(center: Point, radius: u32) -> Vec<Point> {
    scan(center, radius).filter(|&(_, d)| d == radius).map(|(p, _)| p).collect()
}

/// Pixels whose truncated distance from `center` is less than `radius`.
#[must_use]
pub fn interior(center: Point, radius: u32) -> Vec<Point> {
    scan(center, radius).filter(|&(_, d)| d < radius).map(|(p, _)| p).collect()
}

/// Every pixel of the half-open box `center ± (radius + 2)` with its
/// truncated distance from the center. The padding guarantees the whole ring
/// is visited.
fn scan(center: Point, radius: u32) -> impl Iterator<Item = (Point, u32)> {
    let reach = radius as i32 + 2;
    (center.y - reach..center.y + reach).flat_map(move |y| {
        (center.x - reach..center.x + reach).map(move |x| {
            let dx = f64::from(center.x - x);
            let dy = f64::from(center.y - y);
            (Point::new(x, y), (dx * dx + dy * dy).sqrt() as u32)
        })
    })
}

/// Circle outline, defined by a center and a radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point,
    /// Radius in pixels.
    pub radius: u32,
    /// Outline color.
    pub color: Rgba,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: u32, color: Rgba) -> Self {
        Self { center, radius, color }
    }
}

impl Composable for Circle {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        let mut touched = Extent::new();
        for p in outline(self.center, self.radius) {
            target.set_point(p, self.color);
            touched.include(p);
        }
        touched.covering()
    }

    fn bounds(&self) -> Rect {
        square_around(self.center, self.radius)
    }
}

/// Circle with its inside painted in a fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilledCircle {
    /// The outline.
    pub circle: Circle,
    /// Color of the inside.
    pub fill: Rgba,
}

impl FilledCircle {
    /// Create a new circle with the specified radius, filled with `fill`.
    #[must_use]
    pub const fn new(center: Point, radius: u32, outline: Rgba, fill: Rgba) -> Self {
        Self { circle: Circle::new(center, radius, outline), fill }
    }
}

impl Composable for FilledCircle {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        let Circle { center, radius, color } = self.circle;
        let mut touched = Extent::new();
        for (p, distance) in scan(center, radius) {
            if distance == radius {
                target.set_point(p, color);
            } else if distance < radius {
                target.set_point(p, self.fill);
            } else {
                continue;
            }
            touched.include(p);
        }
        touched.covering()
    }

    fn bounds(&self) -> Rect {
        self.circle.bounds()
    }
}

fn square_around(center: Point, radius: u32) -> Rect {
    let r = radius as i32;
    Rect::new(center.x - r, center.y - r, center.x + r, center.y + r)
}

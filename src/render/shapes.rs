//! Ready-made shapes built on [`Polygon`].

use crate::color::Rgba;
use crate::geometry::{Extent, Point, Rect};
use crate::surface::Surface;

use super::polygon::Polygon;
use super::scanline;
use super::Composable;

/// A polygon with its inside painted in a fill color.
///
/// The outline is moved so that its bounding box starts at the origin before
/// it is filled, which keeps truncation in the edge rasterizer identical
/// wherever the polygon is placed.
#[derive(Debug, Clone)]
pub struct FilledPolygon {
    local: Polygon,
    origin: Point,
    interior: Vec<Point>,
    fill: Rgba,
}

impl FilledPolygon {
    /// Create a filled polygon from lines which meet at the provided
    /// vertices.
    ///
    /// # Panics
    ///
    /// Same preconditions as [`Polygon::new`].
    #[must_use]
    pub fn new(vertices: impl IntoIterator<Item = Point>, outline: Rgba, fill: Rgba) -> Self {
        let polygon = Polygon::new(outline, vertices);
        let origin = polygon.bounds().min;
        let local = polygon.translated(-origin);
        let interior = scanline::fill(&local);
        Self { local, origin, interior, fill }
    }

    /// Outline color.
    #[must_use]
    pub const fn outline(&self) -> Rgba {
        self.local.color()
    }

    /// Fill color.
    #[must_use]
    pub const fn fill(&self) -> Rgba {
        self.fill
    }

    /// Where the top-left corner of the bounding box lies.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// The interior pixels, in the polygon's own coordinates.
    #[must_use]
    pub fn interior(&self) -> &[Point] {
        &self.interior
    }
}

impl Composable for FilledPolygon {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        let mut touched = Extent::new();
        for &p in &self.interior {
            let p = p + self.origin;
            target.set_point(p, self.fill);
            touched.include(p);
        }
        let color = self.local.color();
        for p in self.local.outline() {
            let p = p + self.origin;
            target.set_point(p, color);
            touched.include(p);
        }
        touched.covering()
    }

    fn bounds(&self) -> Rect {
        self.local.bounds().translate(self.origin)
    }
}

/// Outline of a square with its top-left corner at `position`.
#[derive(Debug, Clone)]
pub struct Square {
    polygon: Polygon,
}

impl Square {
    /// Create a square with sides `size` pixels long.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(position: Point, size: i32, outline: Rgba) -> Self {
        Self { polygon: Polygon::new(outline, corners(position, size, size)) }
    }
}

impl Composable for Square {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        self.polygon.draw(target)
    }

    fn bounds(&self) -> Rect {
        self.polygon.bounds()
    }
}

/// An axis-aligned rectangle with a fill color.
#[derive(Debug, Clone)]
pub struct FilledRectangle {
    polygon: FilledPolygon,
}

impl FilledRectangle {
    /// Create a rectangle with its top-left corner at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    #[must_use]
    pub fn new(position: Point, width: i32, height: i32, outline: Rgba, fill: Rgba) -> Self {
        Self { polygon: FilledPolygon::new(corners(position, width, height), outline, fill) }
    }
}

impl Composable for FilledRectangle {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        self.polygon.draw(target)
    }

    fn bounds(&self) -> Rect {
        self.polygon.bounds()
    }
}

fn corners(position: Point, width: i32, height: i32) -> [Point; 4] {
    [
        position,
        position + Point::new(width, 0),
        position + Point::new(width, height),
        position + Point::new(0, height),
    ]
}

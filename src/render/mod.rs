//! Rasterization of geometric primitives.
//!
//! Every primitive precomputes or recomputes its pixels on demand and writes
//! them to any [`Surface`]. No anti-aliasing is performed: a pixel is either
//! written in a color or left alone.
//!
//! # Algorithms
//!
//! - **Lines**: walked along the major axis with a floating point slope
//!   accumulator, truncated at every step
//! - **Circles**: every pixel of a bounding box tested against its truncated
//!   distance from the center
//! - **Polygons**: closed loops of lines, filled with an even-odd scanline
//!   pass that counts shared vertices once or twice depending on the shape

mod circle;
mod line;
mod polygon;
mod scanline;
mod shapes;

use crate::geometry::Rect;
use crate::surface::Surface;

pub use circle::{interior as circle_interior, outline as circle_outline, Circle, FilledCircle};
pub use line::{rasterize, Line};
pub use polygon::Polygon;
pub use scanline::{fill, scan_line, Direction, Scanline};
pub use shapes::{FilledPolygon, FilledRectangle, Square};

/// Anything that can draw itself onto a surface.
pub trait Composable {
    /// Draw onto `target` and return the covering rectangle of every pixel
    /// written, or [`Rect::ZERO`] if nothing was.
    fn draw(&self, target: &mut dyn Surface) -> Rect;

    /// The area the drawable occupies in its own coordinates.
    fn bounds(&self) -> Rect;
}

impl<T: Composable + ?Sized> Composable for Box<T> {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        (**self).draw(target)
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

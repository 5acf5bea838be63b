//! The drawing target abstraction.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

/// Anything pixels can be written to and read back from.
///
/// Both the dense [`Framebuffer`](crate::framebuffer::Framebuffer) and the
/// [`SparseImage`](crate::sparse::SparseImage) implement it, which is what
/// lets a composition be drawn into another composition's cache.
pub trait Surface {
    /// Set the pixel at `(x, y)`. Surfaces that cannot hold the pixel ignore
    /// the write.
    fn set(&mut self, x: i32, y: i32, color: Rgba);

    /// Color at `(x, y)`, [`Rgba::TRANSPARENT`] if nothing is there.
    fn at(&self, x: i32, y: i32) -> Rgba;

    /// The nominal area of the surface.
    fn bounds(&self) -> Rect;

    /// Set the pixel at `p`.
    fn set_point(&mut self, p: Point, color: Rgba) {
        self.set(p.x, p.y, color);
    }

    /// Color at `p`.
    fn at_point(&self, p: Point) -> Rgba {
        self.at(p.x, p.y)
    }
}

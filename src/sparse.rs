//! Sparse pixel storage.
//!
//! A [`SparseImage`] keeps written pixels in a map instead of allocating a
//! buffer for the whole area. Compositions use one as their render cache.

use std::collections::hash_map::{self, HashMap};

use crate::color::Rgba;
use crate::geometry::{Extent, Point, Rect};
use crate::surface::Surface;

/// Holds the written pixels in a map.
///
/// The nominal bounds only describe the area the image was created for; any
/// point may be written. Points that were never written read as
/// [`Rgba::TRANSPARENT`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseImage {
    bounds: Rect,
    drawn: HashMap<Point, Rgba>,
}

impl SparseImage {
    /// Create an empty sparse image.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self { bounds, drawn: HashMap::new() }
    }

    /// Set the pixel at `p` to `color`.
    pub fn insert(&mut self, p: Point, color: Rgba) {
        self.drawn.insert(p, color);
    }

    /// Color at `p`, transparent if it was never written.
    #[must_use]
    pub fn get(&self, p: Point) -> Rgba {
        self.drawn.get(&p).copied().unwrap_or(Rgba::TRANSPARENT)
    }

    /// Whether `p` was never written, or was written with the transparent
    /// color.
    #[must_use]
    pub fn is_transparent(&self, p: Point) -> bool {
        self.get(p).is_transparent()
    }

    /// Whether `p` was written, whatever the color.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.drawn.contains_key(&p)
    }

    /// Number of written pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawn.len()
    }

    /// Whether nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }

    /// All written pixels. The order is unspecified.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.drawn.iter() }
    }

    /// Rectangle covering the pixels which were actually written, rather than
    /// the nominal size of the image.
    #[must_use]
    pub fn drawn_bounds(&self) -> Rect {
        self.drawn.keys().copied().collect::<Extent>().covering()
    }
}

impl Surface for SparseImage {
    fn set(&mut self, x: i32, y: i32, color: Rgba) {
        self.insert(Point::new(x, y), color);
    }

    fn at(&self, x: i32, y: i32) -> Rgba {
        self.get(Point::new(x, y))
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Iterator over the pixels of a [`SparseImage`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, Point, Rgba>,
}

impl Iterator for Iter<'_> {
    type Item = (Point, Rgba);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(p, c)| (*p, *c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SparseImage {
    type Item = (Point, Rgba);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

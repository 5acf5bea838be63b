//! Groups of drawables rendered together.
//!
//! A [`Composition`] draws its children once into a private [`SparseImage`]
//! and from then on paints that cache through its transform. Children are
//! laid out in the composition's own coordinates; `position` and `transform`
//! only decide where the cached pixels land on the target.
//!
//! The cache is never invalidated. Changing a child after the first draw has
//! no visible effect.

use std::cell::OnceCell;
use std::fmt;

use crate::affine::Transform;
use crate::geometry::{Extent, Point, Rect};
use crate::render::Composable;
use crate::sparse::SparseImage;
use crate::surface::Surface;

/// A set of drawables positioned and transformed as one unit.
///
/// # Example
///
/// ```
/// use raster::prelude::*;
///
/// let square = Square::new(Point::ORIGIN, 4, Rgba::GREEN);
/// let mut group = Composition::new(Point::new(10, 10), vec![Box::new(square)]);
/// group.transform = Transform::rotate(90.0);
///
/// let mut canvas = Framebuffer::new(20, 20).unwrap();
/// group.draw(&mut canvas);
///
/// assert_eq!(canvas.at(10, 10), Rgba::GREEN);
/// assert_eq!(canvas.at(6, 14), Rgba::GREEN);
/// ```
pub struct Composition {
    /// Where the composition's origin lands on the target.
    pub position: Point,
    /// Applied to every cached pixel before it is moved to `position`.
    pub transform: Transform,
    children: Vec<Box<dyn Composable>>,
    cache: OnceCell<SparseImage>,
}

impl Composition {
    /// Create a composition from drawables laid out in its own coordinates.
    #[must_use]
    pub fn new(position: Point, children: Vec<Box<dyn Composable>>) -> Self {
        Self { position, transform: Transform::IDENTITY, children, cache: OnceCell::new() }
    }

    /// Use `transform` when drawing.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// The drawables, in drawing order.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn Composable>] {
        &self.children
    }

    /// Add a drawable on top of the others.
    ///
    /// Has no visible effect once the composition has been drawn.
    pub fn push(&mut self, child: Box<dyn Composable>) {
        if self.is_cached() {
            log::warn!(
                "child added to a composition at {} which is already cached; it will not be drawn",
                self.position
            );
        }
        self.children.push(child);
    }

    /// Whether the children have been rendered into the cache.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    /// The full transform from cache coordinates to target coordinates.
    #[must_use]
    pub fn effective_transform(&self) -> Transform {
        let offset = Transform::translate(f64::from(self.position.x), f64::from(self.position.y));
        offset.combine(&self.transform)
    }

    fn cache(&self) -> &SparseImage {
        self.cache.get_or_init(|| {
            let mut image = SparseImage::new(self.bounds());
            for child in &self.children {
                child.draw(&mut image);
            }
            log::debug!(
                "cached {} pixels from {} children of the composition at {}",
                image.len(),
                self.children.len(),
                self.position
            );
            image
        })
    }
}

impl Composable for Composition {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        let transform = self.effective_transform();
        let mut touched = Extent::new();
        for (p, color) in self.cache() {
            if color.is_transparent() {
                continue;
            }
            let p = transform.apply(p);
            target.set_point(p, color);
            touched.include(p);
        }
        touched.covering()
    }

    /// One pixel wider and taller than the largest child. Neither the
    /// position nor the transform is taken into account.
    fn bounds(&self) -> Rect {
        let (width, height) = self
            .children
            .iter()
            .map(|child| child.bounds())
            .fold((0, 0), |(w, h), b| (w.max(b.width()), h.max(b.height())));
        Rect::new(0, 0, width + 1, height + 1)
    }
}

impl fmt::Debug for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composition")
            .field("position", &self.position)
            .field("transform", &self.transform)
            .field("children", &self.children.len())
            .field("cached", &self.is_cached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::framebuffer::Framebuffer;
    use crate::render::{Circle, FilledPolygon, Line, Polygon, Square};
    use std::cell::Cell;
    use std::rc::Rc;

    fn diamond() -> Vec<Point> {
        [(0, 5), (5, 0), (10, 5), (5, 10)].map(Point::from).to_vec()
    }

    /// Counts how often it is asked to draw.
    struct Counting {
        draws: Rc<Cell<usize>>,
    }

    impl Composable for Counting {
        fn draw(&self, target: &mut dyn Surface) -> Rect {
            self.draws.set(self.draws.get() + 1);
            target.set(1, 1, Rgba::RED);
            Rect::new(1, 1, 2, 2)
        }

        fn bounds(&self) -> Rect {
            Rect::new(0, 0, 2, 2)
        }
    }

    #[test]
    fn test_identity_draw_copies_children() {
        let line = Line::new(Point::new(0, 0), Point::new(5, 3), Rgba::BLUE);
        let expected: Vec<Point> = line.points().to_vec();
        let group = Composition::new(Point::ORIGIN, vec![Box::new(line)]);

        let mut fb = Framebuffer::new(10, 10).unwrap();
        let touched = group.draw(&mut fb);

        for p in expected {
            assert_eq!(fb.at_point(p), Rgba::BLUE);
        }
        assert_eq!(touched, Rect::new(0, 0, 6, 4));
    }

    #[test]
    fn test_cache_is_populated_once() {
        let draws = Rc::new(Cell::new(0));
        let group = Composition::new(Point::ORIGIN, vec![Box::new(Counting { draws: Rc::clone(&draws) })]);
        assert!(!group.is_cached());

        let mut first = SparseImage::default();
        let mut second = SparseImage::default();
        group.draw(&mut first);
        group.draw(&mut second);

        assert!(group.is_cached());
        assert_eq!(draws.get(), 1);
        assert_eq!(first, second);
        assert_eq!(first.get(Point::new(1, 1)), Rgba::RED);
    }

    #[test]
    fn test_position_offsets_the_drawing() {
        let group = Composition::new(Point::new(20, 10), vec![Box::new(Square::new(Point::ORIGIN, 3, Rgba::WHITE))]);

        let mut img = SparseImage::default();
        let touched = group.draw(&mut img);

        assert_eq!(touched, Rect::new(20, 10, 24, 14));
        assert_eq!(img.get(Point::new(20, 10)), Rgba::WHITE);
        assert_eq!(img.get(Point::new(23, 13)), Rgba::WHITE);
        assert!(img.is_transparent(Point::ORIGIN));
    }

    #[test]
    fn test_rotated_diamond() {
        let group = Composition::new(Point::new(20, 10), vec![Box::new(Polygon::new(Rgba::WHITE, diamond()))])
            .with_transform(Transform::rotate(-45.0));

        let mut fb = Framebuffer::new(40, 40).unwrap();
        group.draw(&mut fb);

        for (x, y) in [(24, 6), (31, 9), (24, 14), (31, 14)] {
            assert_eq!(fb.at(x, y), Rgba::WHITE, "({x}, {y}) should be lit");
        }
        assert!(fb.at(27, 10).is_transparent());
    }

    #[test]
    fn test_transparent_pixels_are_skipped() {
        let group = Composition::new(
            Point::ORIGIN,
            vec![
                Box::new(Square::new(Point::ORIGIN, 2, Rgba::RED)),
                Box::new(Line::new(Point::new(0, 0), Point::new(2, 0), Rgba::TRANSPARENT)),
            ],
        );

        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.clear(Rgba::BLUE);
        let touched = group.draw(&mut fb);

        assert_eq!(fb.at(1, 0), Rgba::BLUE);
        assert_eq!(fb.at(0, 1), Rgba::RED);
        assert_eq!(touched, Rect::new(0, 1, 3, 3));
    }

    #[test]
    fn test_nested_compositions() {
        let inner = Composition::new(Point::new(2, 2), vec![Box::new(Square::new(Point::ORIGIN, 2, Rgba::RED))]);
        let outer = Composition::new(Point::new(10, 0), vec![Box::new(inner)]);

        let mut img = SparseImage::default();
        outer.draw(&mut img);

        assert_eq!(img.get(Point::new(12, 2)), Rgba::RED);
        assert_eq!(img.get(Point::new(14, 4)), Rgba::RED);
        assert_eq!(img.len(), 8);
    }

    #[test]
    fn test_later_children_draw_on_top() {
        let group = Composition::new(
            Point::ORIGIN,
            vec![
                Box::new(FilledPolygon::new(diamond(), Rgba::GREEN, Rgba::GREEN)),
                Box::new(Circle::new(Point::new(5, 5), 2, Rgba::MAROON)),
            ],
        );

        let mut img = SparseImage::default();
        group.draw(&mut img);

        assert_eq!(img.get(Point::new(7, 5)), Rgba::MAROON);
        assert_eq!(img.get(Point::new(5, 1)), Rgba::GREEN);
    }

    #[test]
    fn test_bounds() {
        let group = Composition::new(
            Point::new(100, 100),
            vec![
                Box::new(Square::new(Point::ORIGIN, 10, Rgba::WHITE)),
                Box::new(Line::new(Point::new(0, 0), Point::new(4, 20), Rgba::WHITE)),
            ],
        )
        .with_transform(Transform::rotate(30.0));

        assert_eq!(group.bounds(), Rect::new(0, 0, 11, 21));
        assert_eq!(Composition::new(Point::ORIGIN, Vec::new()).bounds(), Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_empty_composition_draws_nothing() {
        let group = Composition::new(Point::new(3, 3), Vec::new());
        let mut img = SparseImage::default();
        assert_eq!(group.draw(&mut img), Rect::ZERO);
        assert!(img.is_empty());
    }

    #[test]
    fn test_push_after_caching_is_not_drawn() {
        let mut group = Composition::new(Point::ORIGIN, vec![Box::new(Square::new(Point::ORIGIN, 2, Rgba::RED))]);
        group.draw(&mut SparseImage::default());

        group.push(Box::new(Square::new(Point::new(5, 5), 2, Rgba::BLUE)));
        let mut img = SparseImage::default();
        group.draw(&mut img);

        assert_eq!(group.children().len(), 2);
        assert!(img.is_transparent(Point::new(5, 5)));
    }

    #[test]
    fn test_push_before_caching_is_drawn() {
        let mut group = Composition::new(Point::ORIGIN, Vec::new());
        group.push(Box::new(Square::new(Point::new(5, 5), 2, Rgba::BLUE)));

        let mut img = SparseImage::default();
        group.draw(&mut img);

        assert_eq!(img.get(Point::new(5, 5)), Rgba::BLUE);
    }

    #[test]
    fn test_effective_transform_applies_rotation_first() {
        let group = Composition::new(Point::new(10, 0), Vec::new()).with_transform(Transform::rotate(90.0));
        assert_eq!(group.effective_transform().apply(Point::new(5, 0)), Point::new(10, 5));
    }
}

//! Closed polygons built from rasterized edges.

use std::collections::HashMap;

use tinyvec::TinyVec;

use crate::color::Rgba;
use crate::geometry::{Extent, Point, Rect};
use crate::surface::Surface;

use super::line::Line;
use super::scanline::Direction;
use super::Composable;

/// A shape made from lines which meet at its vertices.
///
/// Edge `i` joins vertex `i` to vertex `i + 1`, and the last edge returns to
/// the first vertex, so the outline is always closed.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Line>,
    directions: Vec<Direction>,
    color: Rgba,
    /// Which edges pass through each outline pixel.
    lookup: HashMap<Point, TinyVec<[usize; 2]>>,
    vertex_lookup: HashMap<Point, usize>,
}

impl Polygon {
    /// Create a polygon from lines which meet at the provided vertices.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two vertices are given, or if two consecutive
    /// vertices are equal (which would make a zero-length edge).
    #[must_use]
    pub fn new(color: Rgba, vertices: impl IntoIterator<Item = Point>) -> Self {
        let vertices: Vec<Point> = vertices.into_iter().collect();
        assert!(vertices.len() >= 2, "a polygon needs at least two vertices, got {}", vertices.len());

        let n = vertices.len();
        let edges: Vec<Line> = (0..n)
            .map(|i| {
                let (from, to) = (vertices[i], vertices[(i + 1) % n]);
                assert_ne!(from, to, "polygon vertices {i} and {} are equal, making a zero-length edge", (i + 1) % n);
                Line::new(from, to, color)
            })
            .collect();

        let mut lookup: HashMap<Point, TinyVec<[usize; 2]>> = HashMap::new();
        for (i, edge) in edges.iter().enumerate() {
            for &p in edge.points() {
                lookup.entry(p).or_default().push(i);
            }
        }

        let mut vertex_lookup = HashMap::with_capacity(n);
        for (i, &v) in vertices.iter().enumerate() {
            vertex_lookup.entry(v).or_insert(i);
        }

        let directions = (0..n)
            .map(|i| Direction::classify(vertices[i], vertices[(i + n - 1) % n], vertices[(i + 1) % n]))
            .collect();

        Self { vertices, edges, directions, color, lookup, vertex_lookup }
    }

    /// The vertices, in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The edges, in order.
    #[must_use]
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    /// Outline color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.color
    }

    /// Indices of the edges passing through `p`. Empty if `p` is not on the
    /// outline; a vertex shared by two edges returns both.
    #[must_use]
    pub fn is_edge(&self, p: Point) -> &[usize] {
        self.lookup.get(&p).map_or(&[][..], |edges| edges.as_slice())
    }

    /// Index of the vertex at `p`, if there is one.
    #[must_use]
    pub fn vertex_index(&self, p: Point) -> Option<usize> {
        self.vertex_lookup.get(&p).copied()
    }

    /// The incoming and outgoing edge at vertex `i`.
    #[must_use]
    pub fn corner(&self, i: usize) -> (usize, usize) {
        let n = self.vertices.len();
        ((i + n - 1) % n, i)
    }

    /// How the outline turns at vertex `i`.
    #[must_use]
    pub fn direction(&self, i: usize) -> Direction {
        self.directions[i]
    }

    /// The same polygon moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Point) -> Self {
        Self::new(self.color, self.vertices.iter().map(|&v| v + offset))
    }

    /// Every pixel on the outline, each once.
    pub fn outline(&self) -> impl Iterator<Item = Point> + '_ {
        self.lookup.keys().copied()
    }
}

impl Composable for Polygon {
    fn draw(&self, target: &mut dyn Surface) -> Rect {
        let mut touched = Extent::new();
        for p in self.outline() {
            target.set_point(p, self.color);
            touched.include(p);
        }
        touched.covering()
    }

    /// The box spanning every edge endpoint.
    fn bounds(&self) -> Rect {
        let extent: Extent = self.edges.iter().flat_map(|e| [e.from(), e.to()]).collect();
        extent.span().map_or(Rect::ZERO, |(lo, hi)| Rect::from_corners(lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use std::collections::HashSet;

    fn square(x: i32, y: i32, size: i32) -> Vec<Point> {
        vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ]
    }

    fn drawn(fb: &Framebuffer) -> HashSet<Point> {
        fb.drawn_points().map(|(p, _)| p).collect()
    }

    #[test]
    fn test_bounds() {
        let p = Polygon::new(Rgba::WHITE, square(0, 0, 10));
        assert_eq!(p.bounds(), Rect::new(0, 0, 10, 10));

        let p = Polygon::new(Rgba::WHITE, square(5, 5, 5));
        assert_eq!(p.bounds(), Rect::new(5, 5, 10, 10));
        assert_eq!(p.bounds().width(), 5);
    }

    #[test]
    fn test_edges_form_a_closed_loop() {
        let p = Polygon::new(Rgba::WHITE, square(0, 0, 4));
        let edges = p.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].from(), Point::new(0, 4));
        assert_eq!(edges[3].to(), Point::new(0, 0));
        for pair in edges.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
    }

    #[test]
    fn test_is_edge() {
        let p = Polygon::new(Rgba::WHITE, square(0, 0, 4));

        assert_eq!(p.is_edge(Point::new(2, 0)), &[0]);
        assert_eq!(p.is_edge(Point::new(4, 2)), &[1]);
        assert!(p.is_edge(Point::new(2, 2)).is_empty());

        // Shared vertices belong to both of their edges.
        let mut corner = p.is_edge(Point::new(4, 0)).to_vec();
        corner.sort_unstable();
        assert_eq!(corner, vec![0, 1]);
        let mut corner = p.is_edge(Point::new(0, 0)).to_vec();
        corner.sort_unstable();
        assert_eq!(corner, vec![0, 3]);
    }

    #[test]
    fn test_corner_and_vertex_index() {
        let p = Polygon::new(Rgba::WHITE, square(0, 0, 4));
        assert_eq!(p.vertex_index(Point::new(4, 4)), Some(2));
        assert_eq!(p.vertex_index(Point::new(2, 0)), None);
        assert_eq!(p.corner(0), (3, 0));
        assert_eq!(p.corner(2), (1, 2));
    }

    #[test]
    fn test_draw_line_polygon() {
        let mut fb = Framebuffer::new(3, 3).unwrap();
        let p = Polygon::new(Rgba::RED, [Point::new(0, 0), Point::new(0, 2)]);
        p.draw(&mut fb);

        let expected: HashSet<_> = [(0, 0), (0, 1), (0, 2)].into_iter().map(Point::from).collect();
        assert_eq!(drawn(&fb), expected);
    }

    #[test]
    fn test_draw_square_around_the_edges() {
        let mut fb = Framebuffer::new(3, 3).unwrap();
        let p = Polygon::new(Rgba::RED, square(0, 0, 2));
        let touched = p.draw(&mut fb);

        let expected: HashSet<_> = [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(drawn(&fb), expected);
        assert_eq!(touched, Rect::new(0, 0, 3, 3));
    }

    #[test]
    fn test_translated() {
        let p = Polygon::new(Rgba::WHITE, square(5, 5, 5)).translated(Point::new(-5, -5));
        assert_eq!(p.vertices(), square(0, 0, 5).as_slice());
        assert_eq!(p.bounds(), Rect::new(0, 0, 5, 5));
    }

    #[test]
    #[should_panic(expected = "at least two vertices")]
    fn test_single_vertex_panics() {
        let _ = Polygon::new(Rgba::WHITE, [Point::new(1, 1)]);
    }

    #[test]
    #[should_panic(expected = "zero-length edge")]
    fn test_repeated_vertex_panics() {
        let _ = Polygon::new(Rgba::WHITE, [Point::new(0, 0), Point::new(0, 0), Point::new(3, 3)]);
    }
}

//! Even-odd polygon fill, one row at a time.
//!
//! Each row is scanned left to right, counting how many times the outline has
//! been crossed so far. A pixel off the outline is inside when that count is
//! odd.
//!
//! The difficult pixels are the vertices. A row passing through a vertex
//! touches two edges at once, and whether that is one crossing or two depends
//! on the shape: where the outline carries on through the vertex it is one,
//! where the vertex is a peak or a valley the row only grazes the outline and
//! it is two. Horizontal edges are never crossed by a row; at the ends of a
//! flat run only the edge heading downward counts, which makes a run between a
//! rising and a falling edge count once and a flat bump count twice or not at
//! all.

use crate::geometry::Point;

use super::polygon::Polygon;
use super::Composable;

/// How the outline turns at a vertex, judged from the far ends of its two
/// edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Both neighbours lie above: the vertex is a valley.
    Up,
    /// Both neighbours lie below: the vertex is a peak.
    Down,
    /// The outline passes through, with both neighbours to the left.
    Left,
    /// The outline passes through, with both neighbours to the right.
    Right,
    /// Anything else.
    None,
}

impl Direction {
    /// Classify `vertex` given the vertices before and after it.
    #[must_use]
    pub fn classify(vertex: Point, previous: Point, next: Point) -> Self {
        let above = |p: Point| p.y < vertex.y;
        let below = |p: Point| p.y > vertex.y;

        if above(previous) && above(next) {
            Self::Up
        } else if below(previous) && below(next) {
            Self::Down
        } else if previous.x < vertex.x && next.x < vertex.x {
            Self::Left
        } else if previous.x > vertex.x && next.x > vertex.x {
            Self::Right
        } else {
            Self::None
        }
    }

    /// Whether the vertex is a local minimum or maximum in y.
    #[must_use]
    pub const fn is_extremum(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// The crossing counts of one row of a polygon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanline {
    y: i32,
    min_x: i32,
    columns: Vec<Column>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Column {
    crossings: u32,
    boundary: bool,
}

impl Scanline {
    /// The row.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Crossings counted up to and including column `x`.
    ///
    /// Zero left of the polygon; the total for the row right of it.
    #[must_use]
    pub fn crossings_at(&self, x: i32) -> u32 {
        if x < self.min_x {
            return 0;
        }
        let i = (x - self.min_x) as usize;
        self.columns
            .get(i)
            .or_else(|| self.columns.last())
            .map_or(0, |c| c.crossings)
    }

    /// Whether column `x` lies on the outline.
    #[must_use]
    pub fn is_boundary(&self, x: i32) -> bool {
        x >= self.min_x && self.columns.get((x - self.min_x) as usize).is_some_and(|c| c.boundary)
    }

    /// Pixels of this row strictly inside the polygon.
    pub fn interior(&self) -> impl Iterator<Item = Point> + '_ {
        self.columns.iter().enumerate().filter_map(move |(i, c)| {
            (!c.boundary && c.crossings % 2 == 1).then(|| Point::new(self.min_x + i as i32, self.y))
        })
    }
}

/// Count the crossings along row `y` of `polygon`.
#[must_use]
pub fn scan_line(polygon: &Polygon, y: i32) -> Scanline {
    let bounds = polygon.bounds();
    let (min_x, max_x) = (bounds.min.x, bounds.max.x);

    let mut counter = Counter::new(polygon);
    let columns = (min_x..=max_x)
        .map(|x| {
            let p = Point::new(x, y);
            let edges = polygon.is_edge(p);
            if !edges.is_empty() {
                counter.cross(p, edges);
            }
            Column { crossings: counter.crossings, boundary: !edges.is_empty() }
        })
        .collect();

    Scanline { y, min_x, columns }
}

/// Every pixel strictly inside `polygon`.
#[must_use]
pub fn fill(polygon: &Polygon) -> Vec<Point> {
    let bounds = polygon.bounds();
    let interior: Vec<Point> = (bounds.min.y..=bounds.max.y)
        .flat_map(|y| scan_line(polygon, y).interior().collect::<Vec<_>>())
        .collect();
    log::trace!(
        "filled {} interior pixels of a {}-vertex polygon spanning {}x{}",
        interior.len(),
        polygon.vertices().len(),
        bounds.width() + 1,
        bounds.height() + 1
    );
    interior
}

/// Running crossing count for a single row.
struct Counter<'a> {
    polygon: &'a Polygon,
    crossings: u32,
    /// Edges which have already contributed on this row.
    counted: Vec<bool>,
}

impl<'a> Counter<'a> {
    fn new(polygon: &'a Polygon) -> Self {
        Self { polygon, crossings: 0, counted: vec![false; polygon.edges().len()] }
    }

    fn cross(&mut self, p: Point, edges: &[usize]) {
        let polygon = self.polygon;
        let corner = polygon.vertex_index(p).map(|i| (i, polygon.corner(i)));

        if let Some((i, (incoming, outgoing))) = corner {
            self.cross_vertex(p, i, incoming, outgoing);
        }
        for &edge in edges {
            if corner.is_some_and(|(_, (a, b))| edge == a || edge == b) {
                continue;
            }
            self.cross_edge(edge);
        }
    }

    /// An edge crossed away from its own vertices counts once per row.
    fn cross_edge(&mut self, edge: usize) {
        if self.counted[edge] {
            return;
        }
        self.counted[edge] = true;
        if !self.polygon.edges()[edge].is_horizontal() {
            self.crossings += 1;
        }
    }

    fn cross_vertex(&mut self, vertex: Point, index: usize, incoming: usize, outgoing: usize) {
        let polygon = self.polygon;
        let (a, b) = (&polygon.edges()[incoming], &polygon.edges()[outgoing]);

        if polygon.direction(index).is_extremum() {
            // Peaks and valleys count as two crossings.
            self.cross_edge(incoming);
            self.cross_edge(outgoing);
            return;
        }

        let counted = (self.counted[incoming], self.counted[outgoing]);
        self.counted[incoming] = true;
        self.counted[outgoing] = true;

        match (a.is_horizontal(), b.is_horizontal()) {
            (true, true) => {}
            // At the end of a flat run only an edge heading down counts.
            (true, false) => {
                if !counted.1 && b.other_end(vertex).y > vertex.y {
                    self.crossings += 1;
                }
            }
            (false, true) => {
                if !counted.0 && a.other_end(vertex).y > vertex.y {
                    self.crossings += 1;
                }
            }
            (false, false) => {
                if !counted.0 && !counted.1 {
                    self.crossings += 1;
                }
            }
        }
    }
}

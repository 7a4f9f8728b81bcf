//! Outline extraction.
//!
//! A cell at `p` is the unit square with corners `p`, `p + (0, 1)`,
//! `p + (1, 1)` and `p + (1, 0)`. An edge of that square lies on the
//! outline of a shape exactly when no other cell of the shape shares it.

use std::fmt;

use hashbrown::HashMap;

use crate::{point::Point, polyomino::Polyomino};

/// The amount of cells in a hexomino.
pub const HEXOMINO_SIZE: usize = 6;

/// The corners of the unit cell at the origin, in walking order.
const CORNERS: [Point; 4] = [
    Point::new(0, 0),
    Point::new(0, 1),
    Point::new(1, 1),
    Point::new(1, 0),
];

/// A unit-length segment between two lattice corners.
///
/// The larger corner is always stored first, so an edge is the same value
/// regardless of the direction it was walked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(Point, Point);

impl Edge {
    pub fn new(a: Point, b: Point) -> Self {
        if a < b {
            Edge(b, a)
        } else {
            Edge(a, b)
        }
    }

    /// The larger of the two corners.
    pub fn first(&self) -> Point {
        self.0
    }

    /// The smaller of the two corners.
    pub fn second(&self) -> Point {
        self.1
    }

    pub fn points(&self) -> (Point, Point) {
        (self.0, self.1)
    }
}

/// Errors that can occur while computing outlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderError {
    /// The shape does not have the amount of cells the outline was
    /// requested for.
    WrongCardinality {
        /// The amount of cells the caller asked for.
        expected: usize,
        /// The amount of cells the shape has.
        found: usize,
    },
}

impl fmt::Display for BorderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCardinality { expected, found } => {
                write!(f, "expected a shape of {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for BorderError {}

impl Polyomino {
    /// The edges of this polyomino's outline, in the order they are first
    /// encountered walking the cells.
    ///
    /// For a connected polyomino the edges form a single closed polygon.
    pub fn outline(&self) -> Vec<Edge> {
        let mut order = Vec::with_capacity(self.len() * 4);
        let mut counts: HashMap<Edge, usize> = HashMap::with_capacity(self.len() * 4);

        for cell in self.cells() {
            for i in 0..CORNERS.len() {
                let from = cell + CORNERS[i];
                let to = cell + CORNERS[(i + 1) % CORNERS.len()];
                let edge = Edge::new(from, to);

                let count = counts.entry(edge).or_insert(0);
                if *count == 0 {
                    order.push(edge);
                }
                *count += 1;
            }
        }

        order.retain(|edge| counts[edge] == 1);
        order
    }

    /// The outline of this polyomino, provided it has exactly `expected`
    /// cells.
    pub fn borders(&self, expected: usize) -> Result<Vec<Edge>, BorderError> {
        if self.len() != expected {
            return Err(BorderError::WrongCardinality {
                expected,
                found: self.len(),
            });
        }

        Ok(self.outline())
    }
}

/// The outline of a hexomino.
pub fn hexo_borders(shape: &Polyomino) -> Result<Vec<Edge>, BorderError> {
    shape.borders(HEXOMINO_SIZE)
}

/// Returns whether `edges` form one simple closed polygon: every corner
/// joins exactly two edges, and walking from corner to corner uses up
/// every edge before getting back to the start.
pub fn is_simple_polygon(edges: &[Edge]) -> bool {
    let (start, mut at) = match edges.first() {
        Some(edge) => edge.points(),
        None => return false,
    };

    let mut corners: HashMap<Point, Vec<usize>> = HashMap::with_capacity(edges.len());
    for (i, edge) in edges.iter().enumerate() {
        corners.entry(edge.first()).or_default().push(i);
        corners.entry(edge.second()).or_default().push(i);
    }

    if corners.values().any(|touching| touching.len() != 2) {
        return false;
    }

    let mut previous = 0;
    let mut walked = 1;

    while at != start {
        let next = match corners[&at].iter().find(|i| **i != previous) {
            Some(next) => *next,
            None => return false,
        };

        let (a, b) = edges[next].points();
        at = if a == at { b } else { a };
        previous = next;
        walked += 1;
    }

    walked == edges.len()
}

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use super::{hexo_borders, is_simple_polygon, BorderError, Edge};
    use crate::{point::Point, polyomino::Polyomino};

    fn edge(a: (i32, i32), b: (i32, i32)) -> Edge {
        Edge::new(a.into(), b.into())
    }

    #[test]
    fn edge_is_direction_independent() {
        let a = Point::new(1, 0);
        let b = Point::new(1, 1);

        assert_eq!(Edge::new(a, b), Edge::new(b, a));
        assert_eq!(Edge::new(a, b).first(), b);
        assert_eq!(Edge::new(a, b).second(), a);
    }

    #[test]
    fn unit_cell() {
        let outline = Polyomino::monomino().outline();

        assert_eq!(
            outline,
            vec![
                edge((0, 1), (0, 0)),
                edge((1, 1), (0, 1)),
                edge((1, 1), (1, 0)),
                edge((1, 0), (0, 0)),
            ]
        );
    }

    #[test]
    fn domino_drops_shared_edge() {
        let domino = Polyomino::from([(0, 0), (0, 1)]);

        let outline = domino.outline();

        assert_eq!(outline.len(), 6);
        assert!(!outline.contains(&edge((1, 1), (0, 1))));
    }

    #[test]
    fn straight_hexomino() {
        let borders = hexo_borders(&Polyomino::straight(6)).unwrap();

        // Two long sides of six edges each and the two ends.
        assert_eq!(borders.len(), 14);
        assert!(borders.contains(&edge((1, 0), (0, 0))));
        assert!(borders.contains(&edge((1, 6), (0, 6))));
    }

    #[test]
    fn wrong_cardinality() {
        let pentomino = Polyomino::straight(5);

        assert_eq!(
            hexo_borders(&pentomino),
            Err(BorderError::WrongCardinality {
                expected: 6,
                found: 5
            })
        );
        assert!(Polyomino::monomino().borders(1).is_ok());
    }

    /// Every corner of a simple closed polygon is shared by exactly two of
    /// its edges.
    #[test]
    fn outline_corners_have_degree_two() {
        let s = Polyomino::from([(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2)]);

        let mut degree: HashMap<Point, usize> = HashMap::new();
        for e in hexo_borders(&s).unwrap() {
            *degree.entry(e.first()).or_default() += 1;
            *degree.entry(e.second()).or_default() += 1;
        }

        assert!(degree.values().all(|d| *d == 2));
    }

    #[test]
    fn hexomino_outline_is_simple_polygon() {
        let s = Polyomino::from([(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (3, 2)]);

        assert!(is_simple_polygon(&hexo_borders(&s).unwrap()));
    }

    #[test]
    fn isolated_cells_are_not_one_polygon() {
        let scattered = Polyomino::from([(0, 0), (2, 0), (4, 0), (0, 2), (2, 2), (4, 2)]);

        let outline = hexo_borders(&scattered).unwrap();

        // Four edges per cell, all corners of degree two, but six loops.
        assert_eq!(outline.len(), 24);
        assert!(!is_simple_polygon(&outline));
    }

    #[test]
    fn touching_corners_are_not_a_simple_polygon() {
        let diagonal = Polyomino::from([(0, 0), (1, 1)]);

        assert!(!is_simple_polygon(&diagonal.outline()));
        assert!(!is_simple_polygon(&[]));
        assert!(is_simple_polygon(&Polyomino::monomino().outline()));
    }
}

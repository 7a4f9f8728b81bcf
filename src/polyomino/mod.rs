//! A point-list polyomino representation.

use hashbrown::HashSet;

use crate::point::Point;

mod expander;
mod symmetries;

pub use symmetries::Symmetry;

/// A polyomino, represented as the list of its occupied cells.
///
/// The cells are distinct and edge-connected. Neither is checked on
/// construction: every polyomino this crate produces is grown one
/// adjacent cell at a time from the unit square.
///
/// Equality and hashing are structural over the cell list, so two
/// polyominoes only compare equal if they list the same cells in the
/// same order. Compare [`canonical_form`](Polyomino::canonical_form)s to
/// test whether two placements are the same free polyomino.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Polyomino {
    cells: Vec<Point>,
}

impl From<Vec<Point>> for Polyomino {
    fn from(cells: Vec<Point>) -> Self {
        Self::new(cells)
    }
}

/// Creating a polyomino from coordinate pairs is convenient if/when
/// you're writing them out by hand.
impl From<&[(i32, i32)]> for Polyomino {
    fn from(value: &[(i32, i32)]) -> Self {
        Self::new(value.iter().copied().map(Point::from).collect())
    }
}

impl<const N: usize> From<[(i32, i32); N]> for Polyomino {
    fn from(value: [(i32, i32); N]) -> Self {
        Self::from(&value[..])
    }
}

impl core::fmt::Display for Polyomino {
    // Draw the polyomino as a grid, one row per y value.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (min, max) = match self.bounds() {
            Some(b) => b,
            None => return Ok(()),
        };

        let mut grid = String::new();

        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if self.contains(Point::new(x, y)) {
                    grid.push('#');
                } else {
                    grid.push('.');
                }
            }
            grid.push('\n');
        }

        write!(f, "{}", grid.trim_end())
    }
}

impl Polyomino {
    /// Create a new [`Polyomino`] occupying `cells`.
    pub fn new(cells: Vec<Point>) -> Self {
        debug_assert!(
            cells.iter().collect::<HashSet<_>>().len() == cells.len(),
            "polyomino cells must be distinct"
        );

        Self { cells }
    }

    /// The single cell at the origin.
    pub fn monomino() -> Self {
        Self {
            cells: vec![Point::ORIGIN],
        }
    }

    /// The straight polyomino of `n` cells, in canonical form.
    pub fn straight(n: usize) -> Self {
        Self {
            cells: (0..n as i32).map(|y| Point::new(0, y)).collect(),
        }
    }

    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// The amount of cells in this polyomino.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    /// The component-wise minimum and maximum cell, or `None` if there
    /// are no cells.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.cells.first()?;

        Some(self.cells.iter().fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// Create a new [`Polyomino`] representing `self` with `symmetry` applied
    /// to every cell.
    pub fn transform(&self, symmetry: Symmetry) -> Polyomino {
        Polyomino {
            cells: self.cells.iter().map(|p| symmetry.apply(*p)).collect(),
        }
    }

    /// Create a new [`Polyomino`] representing `self` moved by `offset`.
    pub fn translate(&self, offset: Point) -> Polyomino {
        Polyomino {
            cells: self.cells.iter().map(|p| p + offset).collect(),
        }
    }

    /// Sort the cells and move the polyomino so that its smallest cell
    /// lies on the origin.
    pub fn minimal_repr(&self) -> Polyomino {
        let mut cells = self.cells.clone();
        cells.sort_unstable();

        if let Some(&first) = cells.first() {
            cells.iter_mut().for_each(|p| *p = *p - first);
        }

        Polyomino { cells }
    }

    /// Find the canonical form of this polyomino.
    ///
    /// This is the smallest [`minimal_repr`](Polyomino::minimal_repr) among
    /// the images under all eight symmetries of the square, compared as
    /// sorted cell lists. Every placement of the same free polyomino has
    /// the same canonical form.
    pub fn canonical_form(&self) -> Polyomino {
        self.all_symmetries()
            .map(|image| image.minimal_repr())
            .min()
            .unwrap_or_else(|| self.clone())
    }

    /// Returns whether this polyomino is its own canonical form.
    pub fn is_canonical(&self) -> bool {
        &self.canonical_form() == self
    }

    /// Returns whether every cell can be reached from every other cell by
    /// moving between edge-adjacent cells.
    pub fn is_connected(&self) -> bool {
        let first = match self.cells.first() {
            Some(p) => *p,
            None => return true,
        };

        let mut seen = HashSet::with_capacity(self.cells.len());
        let mut stack = vec![first];
        seen.insert(first);

        while let Some(p) = stack.pop() {
            for q in Point::NEIGHBOURS.iter().map(|d| p + d) {
                if self.contains(q) && seen.insert(q) {
                    stack.push(q);
                }
            }
        }

        seen.len() == self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Polyomino;
    use crate::point::Point;

    #[test]
    fn display() {
        let l = Polyomino::from([(0, 0), (0, 1), (0, 2), (1, 2)]);

        assert_eq!(format!("{l}"), "#.\n#.\n##");
    }

    #[test]
    fn minimal_repr_moves_smallest_cell_to_origin() {
        let shape = Polyomino::from([(5, 3), (4, 4), (4, 3)]);

        let expected = Polyomino::from([(0, 0), (0, 1), (1, 0)]);

        assert_eq!(shape.minimal_repr(), expected);
    }

    #[test]
    fn canonical_domino_is_vertical() {
        let horizontal = Polyomino::from([(7, -2), (8, -2)]);

        assert_eq!(
            horizontal.canonical_form(),
            Polyomino::from([(0, 0), (0, 1)])
        );
    }

    #[test]
    fn straight_is_canonical() {
        for n in 1..8 {
            assert!(Polyomino::straight(n).is_canonical());
        }
    }

    #[test]
    fn connectivity() {
        let connected = Polyomino::from([(0, 0), (1, 0), (1, 1), (2, 1)]);
        let diagonal = Polyomino::from([(0, 0), (1, 1)]);

        assert!(connected.is_connected());
        assert!(!diagonal.is_connected());
        assert!(Polyomino::monomino().is_connected());
    }

    #[test]
    fn bounds() {
        let shape = Polyomino::from([(1, -1), (0, 0), (2, 0), (1, 0)]);

        assert_eq!(
            shape.bounds(),
            Some((Point::new(0, -1), Point::new(2, 0)))
        );
        assert_eq!(Polyomino::new(Vec::new()).bounds(), None);
    }
}

//! This module implements an iterator that provides all N + 1 expansions
//! for a polyomino of N.

use super::Polyomino;
use crate::point::Point;

type Sides = std::array::IntoIter<Point, 4>;

#[derive(Clone)]
struct ExpansionIterator<'a> {
    base: &'a Polyomino,
    next_cell: usize,
    iterating_cell: Option<Sides>,
}

impl ExpansionIterator<'_> {
    fn sides(cell: Point) -> Sides {
        Point::NEIGHBOURS.map(|d| cell + d).into_iter()
    }
}

impl Iterator for ExpansionIterator<'_> {
    type Item = Polyomino;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.iterating_cell.is_none() {
                let cell = *self.base.cells.get(self.next_cell)?;
                self.next_cell += 1;
                self.iterating_cell = Some(Self::sides(cell));
            }

            let sides = self.iterating_cell.as_mut()?;

            let side = match sides.next() {
                Some(side) => side,
                None => {
                    self.iterating_cell.take();
                    continue;
                }
            };

            // If the cell is already occupied, skip this side
            if self.base.contains(side) {
                continue;
            }

            let mut cells = Vec::with_capacity(self.base.len() + 1);
            cells.extend_from_slice(&self.base.cells);
            cells.push(side);

            return Some(Polyomino { cells });
        }
    }
}

impl Polyomino {
    /// Obtain an iterator over every polyomino that can be made by adding
    /// one cell next to a cell of `self`.
    ///
    /// The results are not canonicalized, and the same shape can be
    /// yielded more than once when it touches several existing cells.
    pub fn expand(&self) -> impl Iterator<Item = Polyomino> + Clone + '_ {
        ExpansionIterator {
            base: self,
            next_cell: 0,
            iterating_cell: None,
        }
    }
}

//! This module implements an iterator that yields all of the images of a
//! polyomino under the symmetries of the square.

use std::iter::FusedIterator;

use super::Polyomino;
use crate::point::Point;

/// One of the eight symmetries of the square: `rotations` quarter turns,
/// optionally followed by a reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Symmetry {
    rotations: u8,
    reflected: bool,
}

impl Symmetry {
    pub const IDENTITY: Self = Symmetry {
        rotations: 0,
        reflected: false,
    };

    /// All eight symmetries, in the order their images are produced:
    /// each rotation followed by its reflection.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::new(0, false),
        Symmetry::new(0, true),
        Symmetry::new(1, false),
        Symmetry::new(1, true),
        Symmetry::new(2, false),
        Symmetry::new(2, true),
        Symmetry::new(3, false),
        Symmetry::new(3, true),
    ];

    pub const fn new(rotations: u8, reflected: bool) -> Self {
        Self {
            rotations: rotations % 4,
            reflected,
        }
    }

    pub fn apply(&self, mut point: Point) -> Point {
        for _ in 0..self.rotations {
            point = point.rotate();
        }

        if self.reflected {
            point = point.reflect();
        }

        point
    }
}

/// Yields the image of `base` under each of [`Symmetry::ALL`].
///
/// Every image is computed from `base` directly, so no state is carried
/// from one image to the next.
struct SymmetryIterator<'a> {
    base: &'a Polyomino,
    count: usize,
}

impl ExactSizeIterator for SymmetryIterator<'_> {}

impl FusedIterator for SymmetryIterator<'_> {}

impl Iterator for SymmetryIterator<'_> {
    type Item = Polyomino;

    fn next(&mut self) -> Option<Self::Item> {
        let symmetry = Symmetry::ALL.get(self.count)?;
        self.count += 1;
        Some(self.base.transform(*symmetry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = Symmetry::ALL.len() - self.count;
        (left, Some(left))
    }
}

impl Polyomino {
    /// Obtain an iterator yielding the images of `self` under all
    /// symmetries of the square.
    ///
    /// The images are not translated; see
    /// [`minimal_repr`](Polyomino::minimal_repr).
    pub fn all_symmetries(&self) -> impl Iterator<Item = Polyomino> + ExactSizeIterator + '_ {
        SymmetryIterator {
            base: self,
            count: 0,
        }
    }
}

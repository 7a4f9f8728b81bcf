//! Lattice points and the transforms that generate the square's
//! symmetry group.

use std::ops::{Add, Sub};

/// A point on the integer lattice.
///
/// Used both for cell positions and for the corners of unit cells. The
/// derived ordering is lexicographic on `(x, y)`, which is the order
/// canonical forms are compared with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Point { x: 0, y: 0 };

    /// The four orthogonal neighbour offsets, in the order expansions
    /// visit them.
    pub const NEIGHBOURS: [Point; 4] = [
        Point::new(0, 1),
        Point::new(0, -1),
        Point::new(1, 0),
        Point::new(-1, 0),
    ];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Mirror across the y axis.
    pub const fn reflect(self) -> Self {
        Self {
            x: -self.x,
            y: self.y,
        }
    }

    /// Rotate a quarter turn counter-clockwise around the origin.
    pub const fn rotate(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

macro_rules! impl_op_for_point {
    ($trait:ident, $method:ident, $op:tt) => {
        impl_op_for_point!($trait, $method, $op, Point, Point);
        impl_op_for_point!($trait, $method, $op, &Point, Point);
        impl_op_for_point!($trait, $method, $op, Point, &Point);
        impl_op_for_point!($trait, $method, $op, &Point, &Point);
    };
    ($trait:ident, $method:ident, $op:tt, $ltype:ty, $rtype:ty) => {
        impl $trait<$rtype> for $ltype {
            type Output = Point;

            fn $method(self, rhs: $rtype) -> Point {
                Point {
                    x: self.x $op rhs.x,
                    y: self.y $op rhs.y,
                }
            }
        }
    };
}

impl_op_for_point!(Add, add, +);
impl_op_for_point!(Sub, sub, -);

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

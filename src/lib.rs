//! Enumeration of free polyominoes, and the hexomino outline table
//! built from them.


pub mod borders;
pub mod generate;
pub mod point;
pub mod polyomino;
pub mod table;

pub use borders::{hexo_borders, BorderError, Edge, HEXOMINO_SIZE};
pub use generate::{generate, generate_cached, ShapeCache};
pub use point::Point;
pub use polyomino::{Polyomino, Symmetry};

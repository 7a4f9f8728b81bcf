//! Hexomino records and their rendering as a Rust constant table.
//!
//! The rendered table declares `N_HEXOS` and `HEXOS`, and expects the
//! including crate to provide the `Pos` and `__Hexo` types.

use std::fmt::Write;

use crate::{
    borders::{hexo_borders, BorderError, Edge, HEXOMINO_SIZE},
    generate::generate_cached,
    point::Point,
    polyomino::Polyomino,
};

/// A free hexomino in canonical form, together with its outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexoRecord {
    shape: Polyomino,
    borders: Vec<Edge>,
}

impl HexoRecord {
    pub fn new(shape: Polyomino) -> Result<Self, BorderError> {
        let borders = hexo_borders(&shape)?;
        Ok(Self { shape, borders })
    }

    pub fn shape(&self) -> &Polyomino {
        &self.shape
    }

    pub fn borders(&self) -> &[Edge] {
        &self.borders
    }

    pub fn is_straight(&self) -> bool {
        self.shape == Polyomino::straight(HEXOMINO_SIZE)
    }
}

/// Build a record for every free hexomino.
///
/// The straight hexomino is left out unless `include_straight` is set.
pub fn hexo_records(include_straight: bool) -> Result<Vec<HexoRecord>, BorderError> {
    let straight = Polyomino::straight(HEXOMINO_SIZE);

    generate_cached(HEXOMINO_SIZE)
        .iter()
        .filter(|shape| include_straight || **shape != straight)
        .cloned()
        .map(HexoRecord::new)
        .collect()
}

fn pos(p: Point) -> String {
    format!("Pos {{ x: {}, y: {} }}", p.x, p.y)
}

fn hexo_repr(record: &HexoRecord) -> String {
    let tiles = record
        .shape()
        .cells()
        .iter()
        .map(|p| pos(*p))
        .collect::<Vec<_>>()
        .join(", ");

    let borders = record
        .borders()
        .iter()
        .map(|e| format!("({}, {})", pos(e.first()), pos(e.second())))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "__Hexo {{\n            tiles: [{tiles}],\n            borders: &[{borders}],\n        }}"
    )
}

/// Render `records` as Rust source declaring `N_HEXOS` and `HEXOS`.
pub fn render_table(records: &[HexoRecord]) -> String {
    let n_hexos = records.len();
    let hexos = records
        .iter()
        .map(hexo_repr)
        .collect::<Vec<_>>()
        .join(",\n    ");

    let mut out = String::new();

    // Writing into a `String` cannot fail.
    let _ = writeln!(out, "#[cfg(not(test))]");
    let _ = writeln!(out, "pub const N_HEXOS: usize = {n_hexos};");
    let _ = writeln!(out, "#[cfg(not(test))]");
    let _ = writeln!(out, "pub const HEXOS: [__Hexo; {n_hexos}] = [");
    let _ = writeln!(out, "    {hexos}");
    let _ = writeln!(out, "];");
    let _ = writeln!(out);

    out
}

#[cfg(test)]
mod tests {
    use super::{hexo_records, render_table, HexoRecord};
    use crate::{borders::BorderError, polyomino::Polyomino};

    #[test]
    fn straight_is_excluded_by_default() {
        let records = hexo_records(false).unwrap();

        assert_eq!(records.len(), 34);
        assert!(records.iter().all(|r| !r.is_straight()));
    }

    #[test]
    fn straight_can_be_kept() {
        let records = hexo_records(true).unwrap();

        assert_eq!(records.len(), 35);
        assert_eq!(records.iter().filter(|r| r.is_straight()).count(), 1);
    }

    #[test]
    fn record_needs_six_cells() {
        let err = HexoRecord::new(Polyomino::straight(4)).unwrap_err();

        assert_eq!(
            err,
            BorderError::WrongCardinality {
                expected: 6,
                found: 4
            }
        );
    }

    #[test]
    fn render_single_record() {
        let record = HexoRecord::new(Polyomino::straight(6)).unwrap();

        let table = render_table(&[record]);

        let expected = concat!(
            "#[cfg(not(test))]\n",
            "pub const N_HEXOS: usize = 1;\n",
            "#[cfg(not(test))]\n",
            "pub const HEXOS: [__Hexo; 1] = [\n",
            "    __Hexo {\n",
            "            tiles: [Pos { x: 0, y: 0 }, Pos { x: 0, y: 1 }, Pos { x: 0, y: 2 }, ",
            "Pos { x: 0, y: 3 }, Pos { x: 0, y: 4 }, Pos { x: 0, y: 5 }],\n",
            "            borders: &[",
            "(Pos { x: 0, y: 1 }, Pos { x: 0, y: 0 }), (Pos { x: 1, y: 1 }, Pos { x: 1, y: 0 }), ",
            "(Pos { x: 1, y: 0 }, Pos { x: 0, y: 0 }), (Pos { x: 0, y: 2 }, Pos { x: 0, y: 1 }), ",
            "(Pos { x: 1, y: 2 }, Pos { x: 1, y: 1 }), (Pos { x: 0, y: 3 }, Pos { x: 0, y: 2 }), ",
            "(Pos { x: 1, y: 3 }, Pos { x: 1, y: 2 }), (Pos { x: 0, y: 4 }, Pos { x: 0, y: 3 }), ",
            "(Pos { x: 1, y: 4 }, Pos { x: 1, y: 3 }), (Pos { x: 0, y: 5 }, Pos { x: 0, y: 4 }), ",
            "(Pos { x: 1, y: 5 }, Pos { x: 1, y: 4 }), (Pos { x: 0, y: 6 }, Pos { x: 0, y: 5 }), ",
            "(Pos { x: 1, y: 6 }, Pos { x: 0, y: 6 }), (Pos { x: 1, y: 6 }, Pos { x: 1, y: 5 })],\n",
            "        }\n",
            "];\n",
            "\n",
        );

        assert_eq!(table, expected);
    }

    #[test]
    fn render_counts_records() {
        let records = hexo_records(false).unwrap();

        let table = render_table(&records);

        assert!(table.contains("pub const N_HEXOS: usize = 34;"));
        assert!(table.contains("pub const HEXOS: [__Hexo; 34] = ["));
        assert_eq!(table.matches("__Hexo {").count(), 34);
    }
}

//! 5×5 digit glyphs, fixed at compile time.
//!
//! See [`Glyph`] and [`DIGIT_GLYPHS`].

use crate::digit::Digit;

/// Glyph width in cells.
pub const GLYPH_WIDTH: usize = 5;

/// Glyph height in cells.
pub const GLYPH_HEIGHT: usize = 5;

/// A 5×5 on/off pattern, stored row-major (left to right, top to bottom).
///
/// Build glyphs with [`Glyph::from_art`], which checks the art at compile time.
///
/// ```rust
/// use digit_matrix::led2d::glyph::Glyph;
///
/// const PLUS: Glyph = Glyph::from_art([
///     "..#..",
///     "..#..",
///     "#####",
///     "..#..",
///     "..#..",
/// ]);
/// assert!(PLUS.is_lit(2, 0));
/// assert!(!PLUS.is_lit(0, 0));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Glyph {
    cells: [[bool; GLYPH_WIDTH]; GLYPH_HEIGHT],
}

impl Glyph {
    /// Builds a glyph from five rows of five characters: `#` lit, `.` dark.
    ///
    /// Panics (at compile time, when used in a `const`) on any other shape or character.
    #[must_use]
    pub const fn from_art(rows: [&str; GLYPH_HEIGHT]) -> Self {
        let mut cells = [[false; GLYPH_WIDTH]; GLYPH_HEIGHT];
        let mut row = 0;
        while row < GLYPH_HEIGHT {
            let bytes = rows[row].as_bytes();
            assert!(bytes.len() == GLYPH_WIDTH, "glyph row must be 5 cells wide");
            let mut col = 0;
            while col < GLYPH_WIDTH {
                cells[row][col] = match bytes[col] {
                    b'#' => true,
                    b'.' => false,
                    _ => panic!("glyph cells must be '#' or '.'"),
                };
                col += 1;
            }
            row += 1;
        }
        Self { cells }
    }

    /// The glyph for `digit`.
    #[must_use]
    pub fn for_digit(digit: Digit) -> &'static Self {
        &DIGIT_GLYPHS[usize::from(digit.get())]
    }

    /// Whether the cell at `(row, col)` is lit. Out-of-range cells are dark.
    #[must_use]
    pub const fn is_lit(&self, row: usize, col: usize) -> bool {
        row < GLYPH_HEIGHT && col < GLYPH_WIDTH && self.cells[row][col]
    }

    /// The `(row, col)` of every lit cell, in row-major order.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, lit)| **lit)
                .map(move |(col, _)| (row, col))
        })
    }
}

/// Glyphs for the digits 0 through 9, indexed by digit.
pub static DIGIT_GLYPHS: [Glyph; Digit::COUNT as usize] = [
    Glyph::from_art([
        "#####", //
        "#...#", //
        "#...#", //
        "#...#", //
        "#####", //
    ]),
    Glyph::from_art([
        "..#..", //
        ".##..", //
        "..#..", //
        "..#..", //
        ".###.", //
    ]),
    Glyph::from_art([
        "#####", //
        "....#", //
        "#####", //
        "#....", //
        "#####", //
    ]),
    Glyph::from_art([
        "#####", //
        "....#", //
        ".####", //
        "....#", //
        "#####", //
    ]),
    Glyph::from_art([
        "#..#.", //
        "#..#.", //
        "#####", //
        "...#.", //
        "...#.", //
    ]),
    Glyph::from_art([
        "#####", //
        "#....", //
        "#####", //
        "....#", //
        "#####", //
    ]),
    Glyph::from_art([
        "#####", //
        "#....", //
        "#####", //
        "#...#", //
        "#####", //
    ]),
    Glyph::from_art([
        "#####", //
        "....#", //
        "...#.", //
        "..#..", //
        ".#...", //
    ]),
    Glyph::from_art([
        "#####", //
        "#...#", //
        "#####", //
        "#...#", //
        "#####", //
    ]),
    Glyph::from_art([
        "#####", //
        "#...#", //
        "#####", //
        "....#", //
        "#####", //
    ]),
];

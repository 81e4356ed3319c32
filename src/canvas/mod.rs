//! # Braille canvas
//!
//! Each character cell packs a 2×4 grid of dots into one code point of the
//! Unicode braille block:
//!
//! ```text
//!   col 0  col 1
//!   ┌───┬───┐
//!   │ 1 │ 4 │  row 0
//!   │ 2 │ 5 │  row 1
//!   │ 3 │ 6 │  row 2
//!   │ 7 │ 8 │  row 3
//!   └───┴───┘
//! ```
//!
//! Dot `n` sets bit `n - 1` of the offset from U+2800.

mod braille;

pub use braille::{
    braille_char, BrailleCanvas, CellBounds, BRAILLE_BASE, CELL_HEIGHT, CELL_WIDTH, DOT_BITS,
};

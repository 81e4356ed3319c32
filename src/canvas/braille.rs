//! Sparse braille dot canvas with an auto-sizing bounding box

use std::collections::HashMap;

/// First code point of the Unicode braille block (no dots raised)
pub const BRAILLE_BASE: u32 = 0x2800;

/// Dots per cell horizontally
pub const CELL_WIDTH: i32 = 2;

/// Dots per cell vertically
pub const CELL_HEIGHT: i32 = 4;

/// Bit for each dot, indexed by `[row][col]` within a cell
pub const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Inclusive cell-space extent of everything drawn so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl CellBounds {
    pub fn cols(&self) -> usize {
        (i64::from(self.max_col) - i64::from(self.min_col) + 1) as usize
    }

    pub fn rows(&self) -> usize {
        (i64::from(self.max_row) - i64::from(self.min_row) + 1) as usize
    }
}

/// Set of "on" dots at arbitrary signed coordinates.
///
/// Rows grow downward. With `inverse` enabled the y axis is flipped at
/// [`set`](Self::set) time so larger y values end up higher in the output.
#[derive(Debug, Clone, Default)]
pub struct BrailleCanvas {
    /// Dot bits per (col, row) cell
    cells: HashMap<(i32, i32), u8>,
    inverse: bool,
}

impl BrailleCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas whose y axis points up
    pub fn inverted() -> Self {
        Self {
            cells: HashMap::new(),
            inverse: true,
        }
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    #[inline]
    fn locate(&self, x: i32, y: i32) -> ((i32, i32), u8) {
        let y = if self.inverse { -i64::from(y) } else { i64::from(y) };
        let x = i64::from(x);
        let col = x.div_euclid(i64::from(CELL_WIDTH)) as i32;
        let row = y.div_euclid(i64::from(CELL_HEIGHT)) as i32;
        let bit = DOT_BITS[y.rem_euclid(i64::from(CELL_HEIGHT)) as usize]
            [x.rem_euclid(i64::from(CELL_WIDTH)) as usize];
        ((col, row), bit)
    }

    /// Raise the dot at (x, y). Setting a dot twice is a no-op.
    pub fn set(&mut self, x: i32, y: i32) {
        let (cell, bit) = self.locate(x, y);
        *self.cells.entry(cell).or_insert(0) |= bit;
    }

    /// Whether the dot at (x, y) is raised
    pub fn get(&self, x: i32, y: i32) -> bool {
        let (cell, bit) = self.locate(x, y);
        self.cells.get(&cell).is_some_and(|bits| bits & bit != 0)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of distinct raised dots
    pub fn len(&self) -> usize {
        self.cells.values().map(|bits| bits.count_ones() as usize).sum()
    }

    /// Bounding box of touched cells, `None` when nothing is drawn
    pub fn bounds(&self) -> Option<CellBounds> {
        let mut keys = self.cells.keys();
        let &(col, row) = keys.next()?;
        let init = CellBounds {
            min_col: col,
            max_col: col,
            min_row: row,
            max_row: row,
        };
        Some(keys.fold(init, |b, &(col, row)| CellBounds {
            min_col: b.min_col.min(col),
            max_col: b.max_col.max(col),
            min_row: b.min_row.min(row),
            max_row: b.max_row.max(row),
        }))
    }

    /// Lines of braille characters spanning the bounding box, top to bottom
    pub fn rows(&self) -> Vec<String> {
        let Some(bounds) = self.bounds() else {
            return Vec::new();
        };

        (bounds.min_row..=bounds.max_row)
            .map(|row| {
                (bounds.min_col..=bounds.max_col)
                    .map(|col| {
                        let bits = self.cells.get(&(col, row)).copied().unwrap_or(0);
                        braille_char(bits)
                    })
                    .collect()
            })
            .collect()
    }

    /// Render the canvas, each row terminated by a newline
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in self.rows() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

/// Braille character for a dot bit pattern
#[inline]
pub fn braille_char(bits: u8) -> char {
    // U+2800..=U+28FF is fully assigned, so every u8 offset is valid.
    char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANK: char = '\u{2800}';

    #[test]
    fn test_empty_canvas_renders_nothing() {
        let canvas = BrailleCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.bounds(), None);
        assert_eq!(canvas.render(), "");
    }

    #[test]
    fn test_single_dot_at_origin() {
        let mut canvas = BrailleCanvas::new();
        canvas.set(0, 0);
        assert_eq!(canvas.render(), "\u{2801}\n");
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut canvas = BrailleCanvas::new();
        canvas.set(3, 5);
        canvas.set(3, 5);
        assert_eq!(canvas.len(), 1);
        assert!(canvas.get(3, 5));
        assert!(!canvas.get(2, 5));
    }

    #[test]
    fn test_full_cell() {
        let mut canvas = BrailleCanvas::new();
        for y in 0..CELL_HEIGHT {
            for x in 0..CELL_WIDTH {
                canvas.set(x, y);
            }
        }
        assert_eq!(canvas.len(), 8);
        assert_eq!(canvas.render(), "\u{28FF}\n");
    }

    #[test]
    fn test_dot_numbering() {
        // (x, y) -> expected character
        let cases = [
            ((0, 0), '\u{2801}'),
            ((0, 1), '\u{2802}'),
            ((0, 2), '\u{2804}'),
            ((1, 0), '\u{2808}'),
            ((1, 1), '\u{2810}'),
            ((1, 2), '\u{2820}'),
            ((0, 3), '\u{2840}'),
            ((1, 3), '\u{2880}'),
        ];
        for ((x, y), expected) in cases {
            let mut canvas = BrailleCanvas::new();
            canvas.set(x, y);
            assert_eq!(canvas.rows(), vec![expected.to_string()], "dot ({x}, {y})");
        }
    }

    #[test]
    fn test_negative_coordinates_use_floor_cells() {
        let mut canvas = BrailleCanvas::new();
        canvas.set(-1, -1);
        canvas.set(0, 0);
        let bounds = canvas.bounds().unwrap();
        assert_eq!(
            bounds,
            CellBounds {
                min_col: -1,
                max_col: 0,
                min_row: -1,
                max_row: 0,
            }
        );
        // (-1, -1) is the bottom-right dot of cell (-1, -1)
        assert_eq!(
            canvas.rows(),
            vec![format!("\u{2880}{BLANK}"), format!("{BLANK}\u{2801}")]
        );
    }

    #[test]
    fn test_interior_blank_cells_are_kept() {
        let mut canvas = BrailleCanvas::new();
        canvas.set(0, 0);
        canvas.set(6, 8);
        let rows = canvas.rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.chars().count() == 4));
        assert_eq!(rows[1], BLANK.to_string().repeat(4));
    }

    #[test]
    fn test_inverse_puts_larger_y_on_top() {
        let mut canvas = BrailleCanvas::inverted();
        canvas.set(0, 0);
        canvas.set(0, 10);
        assert!(canvas.get(0, 10));
        let rows = canvas.rows();
        // y = 10 maps to row -3, above y = 0 at row 0
        assert_eq!(rows.len(), 4);
        assert_ne!(rows[0], BLANK.to_string());
        assert_eq!(rows[3], "\u{2801}");
    }

    #[test]
    fn test_clear() {
        let mut canvas = BrailleCanvas::new();
        canvas.set(1, 1);
        canvas.clear();
        assert!(canvas.is_empty());
        assert_eq!(canvas.len(), 0);
    }

    #[test]
    fn test_extreme_coordinates() {
        let mut canvas = BrailleCanvas::inverted();
        canvas.set(i32::MIN, i32::MIN);
        assert!(canvas.get(i32::MIN, i32::MIN));
        assert_eq!(canvas.bounds().map(|b| (b.cols(), b.rows())), Some((1, 1)));
    }
}

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// A grid cell: `None` is the blank sentinel, `Some(b'A'..=b'Z')` a placed letter.
pub type Cell = Option<u8>;

/// Square working grid used while words are being placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A blank `size`×`size` grid, or `None` when the cell count overflows `usize`.
    pub fn try_blank(size: usize) -> Option<Self> {
        let cells = size.checked_mul(size)?;
        Some(Self {
            size,
            cells: vec![None; cells],
        })
    }

    #[cfg(test)]
    pub(crate) fn blank(size: usize) -> Self {
        Self::try_blank(size).expect("test grid size must not overflow")
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, letter: u8) {
        debug_assert!(letter.is_ascii_uppercase(), "cell letter must be A-Z");
        let idx = self.index(row, col);
        self.cells[idx] = Some(letter);
    }

    pub fn blank_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub(crate) fn into_cells(self) -> (usize, Vec<Cell>) {
        (self.size, self.cells)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }
}

/// A completely filled grid; every cell holds an uppercase letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    letters: Vec<u8>,
}

impl LetterGrid {
    pub(crate) fn from_letters(size: usize, letters: Vec<u8>) -> Self {
        debug_assert_eq!(letters.len(), size * size);
        Self { size, letters }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.size && col < self.size);
        self.letters[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.letters.chunks(self.size.max(1))
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &letter) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", letter as char)?;
            }
        }
        Ok(())
    }
}

impl Serialize for LetterGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.rows() {
            let letters: Vec<char> = row.iter().map(|&b| b as char).collect();
            seq.serialize_element(&letters)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_grid_is_square_and_empty() {
        let grid = Grid::blank(3);
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.blank_count(), 9);
    }

    #[test]
    fn set_writes_single_cell() {
        let mut grid = Grid::blank(2);
        grid.set(1, 0, b'Q');
        assert_eq!(grid.get(1, 0), Some(b'Q'));
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.blank_count(), 3);
    }

    #[test]
    #[should_panic]
    fn get_outside_bounds_panics() {
        Grid::blank(2).get(2, 0);
    }

    #[test]
    fn letter_grid_displays_space_separated_rows() {
        let grid = LetterGrid::from_letters(2, b"ABCD".to_vec());
        assert_eq!(grid.to_string(), "A B\nC D");
    }

    #[test]
    fn letter_grid_serializes_as_nested_arrays() {
        let grid = LetterGrid::from_letters(2, b"ABCD".to_vec());
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"[["A","B"],["C","D"]]"#);
    }

    #[test]
    fn overflowing_size_yields_no_grid() {
        assert!(Grid::try_blank(1 << (usize::BITS / 2)).is_none());
        assert!(Grid::try_blank(usize::MAX).is_none());
        assert_eq!(Grid::try_blank(4).map(|g| g.blank_count()), Some(16));
    }

    #[test]
    fn letter_grid_rows_preserve_layout() {
        let grid = LetterGrid::from_letters(2, b"WXYZ".to_vec());
        let rows: Vec<&[u8]> = grid.rows().collect();
        assert_eq!(rows, vec![&b"WX"[..], &b"YZ"[..]]);
        assert_eq!(grid.get(1, 0), b'Y');
    }
}

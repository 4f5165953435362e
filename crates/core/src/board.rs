//! Board module - the dense grid view of locked material
//!
//! The board is rebuilt from [`LockedCells`] whenever the session needs to
//! query it, instead of being kept in sync incrementally. Cells are stored in
//! a flat row-major vector.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Negative rows are the spawn area above the visible field.

use crate::locked::LockedCells;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board - `columns` x `rows` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    /// Build a fresh grid holding exactly the locked cells.
    ///
    /// Entries outside the grid are dropped; they can only appear if an
    /// upstream invariant was broken, so each one is logged.
    pub fn rebuild(columns: u8, rows: u8, locked: &LockedCells) -> Self {
        let mut board = Self::new(columns, rows);
        for ((x, y), kind) in locked.iter() {
            if !board.set(x, y, Some(kind)) {
                tracing::warn!(x, y, ?kind, "locked cell outside the board ignored");
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.columns as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some((y as usize) * (self.columns as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.columns
    }

    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and empty
    pub fn is_empty_at(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check whether a set of piece cells fits.
    ///
    /// A cell with a negative row is always accepted (spawn overhang). Any
    /// other cell must be in bounds and empty.
    pub fn is_valid(&self, cells: &[(i16, i16)]) -> bool {
        cells.iter().all(|&(x, y)| y < 0 || self.is_empty_at(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i16) -> bool {
        if y < 0 || y >= self.rows as i16 {
            return false;
        }
        let width = self.columns as usize;
        let start = y as usize * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// Clear every full row, compacting `locked` as it goes.
    ///
    /// Rows are scanned bottom to top. When row `y` is full its entries are
    /// removed and everything above moves down one row immediately; the grid
    /// is refreshed and row `y` is examined again, since it now holds what
    /// was above it. Returns the number of rows cleared.
    pub fn clear_full_rows(&mut self, locked: &mut LockedCells) -> u32 {
        let mut cleared = 0u32;
        let mut y = self.rows as i16 - 1;

        while y >= 0 {
            if self.is_row_full(y) {
                locked.remove_row(y);
                locked.shift_down_above(y);
                *self = Self::rebuild(self.columns, self.rows, locked);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.columns.max(1) as usize)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_rebuild_places_locked_cells() {
        let mut locked = LockedCells::new();
        locked.insert(0, 0, PieceKind::I);
        locked.insert(5, 10, PieceKind::T);

        let board = Board::rebuild(10, 20, &locked);

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_rebuild_ignores_out_of_range_entries() {
        let mut locked = LockedCells::new();
        locked.insert(-1, 3, PieceKind::S);
        locked.insert(3, 25, PieceKind::Z);
        locked.insert(2, -4, PieceKind::L);

        let board = Board::rebuild(10, 20, &locked);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut locked = LockedCells::new();
        for x in 0..10 {
            locked.insert(x, 19, PieceKind::I);
            locked.insert(x, 17, PieceKind::I);
        }
        // Partial rows between and above the full ones.
        locked.insert(0, 18, PieceKind::T);
        locked.insert(4, 16, PieceKind::O);

        let mut board = Board::rebuild(10, 20, &locked);
        assert_eq!(board.clear_full_rows(&mut locked), 2);

        assert_eq!(locked.len(), 2);
        assert_eq!(locked.get(0, 19), Some(PieceKind::T));
        assert_eq!(locked.get(4, 18), Some(PieceKind::O));
        assert_eq!(board, Board::rebuild(10, 20, &locked));
    }
}

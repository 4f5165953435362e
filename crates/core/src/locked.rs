//! Locked-cell map - the authoritative record of settled material
//!
//! The dense [`Board`](crate::board::Board) grid is a view derived from this
//! map. Keys are absolute (col, row) coordinates; rows grow downward.

use std::collections::HashMap;

use crate::types::PieceKind;

/// Sparse map of every locked cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedCells {
    cells: HashMap<(i16, i16), PieceKind>,
}

impl LockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock `kind` at (`col`, `row`), replacing whatever was there.
    pub fn insert(&mut self, col: i16, row: i16, kind: PieceKind) {
        self.cells.insert((col, row), kind);
    }

    pub fn get(&self, col: i16, row: i16) -> Option<PieceKind> {
        self.cells.get(&(col, row)).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over `((col, row), kind)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ((i16, i16), PieceKind)> + '_ {
        self.cells.iter().map(|(&pos, &kind)| (pos, kind))
    }

    /// Remove every entry on `row`, returning how many were removed.
    pub fn remove_row(&mut self, row: i16) -> usize {
        let before = self.cells.len();
        self.cells.retain(|&(_, y), _| y != row);
        before - self.cells.len()
    }

    /// Move every entry strictly above `row` one row down.
    ///
    /// `row` itself must already be empty, otherwise entries from the row
    /// above overwrite it.
    pub fn shift_down_above(&mut self, row: i16) {
        self.cells = std::mem::take(&mut self.cells)
            .into_iter()
            .map(|((x, y), kind)| if y < row { ((x, y + 1), kind) } else { ((x, y), kind) })
            .collect();
    }

    /// Topmost locked row, if any.
    pub fn min_row(&self) -> Option<i16> {
        self.cells.keys().map(|&(_, y)| y).min()
    }
}

//! Piece module - a live instance of a catalog shape
//!
//! A piece is an anchor, a kind and a rotation index. Its board cells are
//! derived on demand by overlaying the active mask at the anchor, shifted by
//! one column left and two rows up so the mask's visual center sits on the
//! anchor.
//!
//! Mutators are unchecked: callers validate the result against a board and
//! undo the move when it does not fit.

use crate::catalog::{self, Mask};
use crate::types::{PieceKind, RotationDirection};

/// Column correction applied to mask coordinates
pub const ANCHOR_COL_OFFSET: i16 = -1;

/// Row correction applied to mask coordinates
pub const ANCHOR_ROW_OFFSET: i16 = -2;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: usize,
    col: i16,
    row: i16,
}

impl Piece {
    /// Create a piece at an explicit anchor, rotation 0.
    pub fn new(kind: PieceKind, col: i16, row: i16) -> Self {
        Self {
            kind,
            rotation: 0,
            col,
            row,
        }
    }

    /// Create a piece at the spawn anchor for a board `columns` wide
    pub fn spawn(kind: PieceKind, columns: u8) -> Self {
        Self::new(kind, spawn_column(columns), 0)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Rotation index, always in `0..rotation_count()`.
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn col(&self) -> i16 {
        self.col
    }

    pub fn row(&self) -> i16 {
        self.row
    }

    pub fn rotation_count(&self) -> usize {
        catalog::rotations(self.kind).len()
    }

    /// Mask for the current rotation state
    pub fn mask(&self) -> Mask {
        let states = catalog::rotations(self.kind);
        states[self.rotation % states.len()]
    }

    pub fn color(&self) -> (u8, u8, u8) {
        catalog::color(self.kind)
    }

    /// Absolute (col, row) board cells covered by the piece
    pub fn occupied_cells(&self) -> [(i16, i16); 4] {
        self.mask().cells().map(|(mx, my)| {
            (
                self.col + mx as i16 + ANCHOR_COL_OFFSET,
                self.row + my as i16 + ANCHOR_ROW_OFFSET,
            )
        })
    }

    pub fn translate(&mut self, d_col: i16, d_row: i16) {
        self.col += d_col;
        self.row += d_row;
    }

    pub fn rotate(&mut self, direction: RotationDirection) {
        let n = self.rotation_count();
        self.rotation = match direction {
            RotationDirection::Clockwise => (self.rotation + 1) % n,
            RotationDirection::CounterClockwise => (self.rotation + n - 1) % n,
        };
    }
}

/// Spawn anchor column for a board `columns` wide
pub fn spawn_column(columns: u8) -> i16 {
    columns as i16 / 2 - 2
}

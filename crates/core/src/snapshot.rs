use crate::board::Board;
use crate::catalog::Mask;
use crate::piece::Piece;
use crate::session::Phase;
use crate::types::PieceKind;

/// Falling piece as seen by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub col: i16,
    pub row: i16,
    pub cells: [(i16, i16); 4],
    pub color: (u8, u8, u8),
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            col: value.col(),
            row: value.row(),
            cells: value.occupied_cells(),
            color: value.color(),
        }
    }
}

/// Next-piece preview: the shape in its spawn orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub mask: Mask,
    pub color: (u8, u8, u8),
}

impl From<Piece> for NextSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            mask: value.mask(),
            color: value.color(),
        }
    }
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Locked cells only; the active piece is not stamped in.
    pub grid: Board,
    pub active: ActiveSnapshot,
    pub next: NextSnapshot,
    pub score: u32,
    pub high_score: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub soft_drop: bool,
    pub phase: Phase,
    pub quit: bool,
}

impl SessionSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// True once no further ticks should be delivered.
    pub fn is_terminal(&self) -> bool {
        self.game_over() || self.quit
    }

    /// Grid with the active piece stamped in (cells above the board skipped).
    pub fn composed_grid(&self) -> Board {
        let mut grid = self.grid.clone();
        if !self.game_over() {
            for &(x, y) in self.active.cells.iter() {
                if y >= 0 {
                    grid.set(x, y, Some(self.active.kind));
                }
            }
        }
        grid
    }
}

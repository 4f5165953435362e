//! Core types module - shared data structures and constants
//!
//! This crate defines the vocabulary shared by the engine, the input layer and
//! the terminal view. Everything here is plain data with no dependencies.
//!
//! # Board Dimensions
//!
//! Reference playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: (`columns / 2 - 2`, 0)
//!
//! Rows above the board are negative; pieces may hang there while falling.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Frames (ticks) per second |
//! | `MAX_FRAME_STEP_MS` | 250 | Longest time step fed to one tick |
//! | `BASE_FALL_MS` | 500 | Automatic fall interval at session start |
//! | `FALL_STEP_MS` | 50 | Interval decrease per speed-up |
//! | `MIN_FALL_MS` | 100 | Fall interval floor |
//! | `SPEED_UP_INTERVAL_MS` | 60000 | Session time between speed-ups |
//! | `SOFT_DROP_DIVISOR` | 4 | Soft drop falls 4x faster |
//! | `SOFT_DROP_RELEASE_TIMEOUT_MS` | 150 | Implicit key-up for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.letter(), "T");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame rate of the tick loop
pub const FPS: u32 = 60;

/// Upper bound on the measured time step of one tick.
///
/// A stalled frame catches up by at most this much instead of jumping.
pub const MAX_FRAME_STEP_MS: u32 = 250;

/// Automatic fall interval when a session starts
pub const BASE_FALL_MS: u32 = 500;

/// How much the fall interval shrinks at every speed-up
pub const FALL_STEP_MS: u32 = 50;

/// The fall interval never drops below this
pub const MIN_FALL_MS: u32 = 100;

/// Session time between two speed-ups (one minute)
pub const SPEED_UP_INTERVAL_MS: u32 = 60_000;

/// Soft drop divides the fall interval by this factor
pub const SOFT_DROP_DIVISOR: u32 = 4;

/// Without key-release events, soft drop stops after this much silence.
pub const SOFT_DROP_RELEASE_TIMEOUT_MS: u32 = 150;

/// Points for clearing N rows in a single lock, indexed by N.
///
/// Anything outside 1..=4 scores nothing.
pub const LINE_CLEAR_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
///
/// Each kind doubles as the identity stored in a locked board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single uppercase letter, shown next to the preview.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked by a piece of that kind
pub type Cell = Option<PieceKind>;

/// Direction of a rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Discrete input commands consumed by one session tick
///
/// Commands are produced by the input layer and applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Step one row down and engage accelerated gravity
    SoftDropStart,
    /// Release accelerated gravity
    SoftDropStop,
    /// Rotate clockwise, with a small horizontal kick if blocked
    Rotate,
    /// Drop to the lowest valid row and lock immediately
    HardDrop,
    /// Stop the session
    Quit,
}

//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every game rule and nothing else. It has **no
//! dependencies** on terminal, input devices or rendering, making it:
//!
//! - **Deterministic**: the same seed and command stream replay the same game
//! - **Testable**: every rule is reachable through [`Session::tick`]
//! - **Portable**: runs headless, in a terminal, or in a benchmark
//!
//! # Module Structure
//!
//! - [`catalog`]: the seven tetromino shapes as ordered 4x4 rotation masks
//! - [`piece`]: a live piece (anchor, kind, rotation) and its occupied cells
//! - [`locked`]: the sparse map of settled cells, the authoritative state
//! - [`board`]: the dense grid rebuilt from locked cells, validity checks and row clearing
//! - [`rng`]: uniform random piece generation
//! - [`scoring`]: line clear table and fall speed progression
//! - [`session`]: the per-tick state machine tying everything together
//! - [`snapshot`]: read-only frame data for the presentation layer
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every kind is equally likely on every draw
//! - **Simple rotation**: rotation walks the catalog states; a blocked
//!   rotation tries horizontal kicks of -1, +1, -2, +2 columns
//! - **Spawn overhang**: cells above the board never collide
//! - **Scoring**: 100 / 300 / 500 / 800 for 1 / 2 / 3 / 4 rows in one lock
//! - **Speed-up**: the fall interval drops by 50ms every minute, down to 100ms
//! - **Loss**: locking any cell above the board, or any locked cell in row 0
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SessionConfig};
//! use blockfall_types::Command;
//!
//! let mut session = Session::new(SessionConfig::default(), 12345).unwrap();
//!
//! let snap = session.tick(16, &[Command::MoveRight, Command::Rotate]);
//! assert!(!snap.is_terminal());
//!
//! let snap = session.tick(16, &[Command::HardDrop]);
//! assert_eq!(snap.grid.filled_count(), 4);
//! assert_eq!(snap.score, 0);
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod locked;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{color, rotations, Mask};
pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use locked::LockedCells;
pub use piece::Piece;
pub use rng::{PieceGenerator, RandomGenerator, SimpleRng};
pub use scoring::line_clear_score;
pub use session::{Phase, Session};
pub use snapshot::{ActiveSnapshot, NextSnapshot, SessionSnapshot};

//! Terminal rendering for the game.
//!
//! Renders into a plain framebuffer of styled cells instead of using a widget
//! toolkit, then flushes only what changed. Board cells are drawn two columns
//! wide so blocks look roughly square.

pub mod fb;
pub mod frame_clock;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frame_clock::FrameClock;
pub use game_view::{AnchorY, FrameRect, GameView, Viewport, TITLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and collects
//! them per tick. Works in terminals without key-release events by timing
//! out the soft drop key.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::{CommandBatch, InputHandler};
pub use map::{game_over_choice, handle_key_press, handle_key_release, should_quit, GameOverChoice};

//! Per-frame command collection for terminal environments.
//!
//! Terminals usually report key presses but not releases. Soft drop needs a
//! release, so when none arrive the handler synthesizes one after a short
//! quiet period on the soft drop key.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_press, handle_key_release, is_soft_drop_key};
use crate::types::{Command, SOFT_DROP_RELEASE_TIMEOUT_MS};

/// Commands gathered for one tick
pub type CommandBatch = ArrayVec<Command, 32>;

/// Collects commands between ticks and tracks the soft drop key.
#[derive(Debug, Clone)]
pub struct InputHandler {
    pending: CommandBatch,
    soft_drop_held: bool,
    since_soft_drop_key_ms: u32,
    /// `None` when the terminal reports real key releases.
    release_timeout_ms: Option<u32>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            pending: CommandBatch::new(),
            soft_drop_held: false,
            since_soft_drop_key_ms: 0,
            release_timeout_ms: Some(SOFT_DROP_RELEASE_TIMEOUT_MS),
        }
    }

    /// Handler for terminals that emit key-release events.
    pub fn with_release_events() -> Self {
        Self {
            release_timeout_ms: None,
            ..Self::new()
        }
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Feed one terminal key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_press(key),
            KeyEventKind::Release => self.handle_release(key),
        }
    }

    fn handle_press(&mut self, key: KeyEvent) {
        if is_soft_drop_key(key.code) {
            self.since_soft_drop_key_ms = 0;
            if self.soft_drop_held {
                // Auto-repeat of a held key; already engaged.
                return;
            }
            self.soft_drop_held = true;
        }
        if let Some(command) = handle_key_press(key) {
            self.push(command);
        }
    }

    fn handle_release(&mut self, key: KeyEvent) {
        if let Some(command) = handle_key_release(key) {
            if self.soft_drop_held {
                self.soft_drop_held = false;
                self.push(command);
            }
        }
    }

    fn push(&mut self, command: Command) {
        // A full batch means the frame stalled; extra input is dropped.
        let _ = self.pending.try_push(command);
    }

    /// Advance time and take the commands for this tick.
    pub fn update(&mut self, elapsed_ms: u32) -> CommandBatch {
        if self.soft_drop_held {
            self.since_soft_drop_key_ms = self.since_soft_drop_key_ms.saturating_add(elapsed_ms);
            if let Some(timeout) = self.release_timeout_ms {
                if self.since_soft_drop_key_ms > timeout {
                    self.soft_drop_held = false;
                    self.push(Command::SoftDropStop);
                }
            }
        }
        std::mem::take(&mut self.pending)
    }

    /// Forget held keys and queued commands (e.g. after a restart).
    pub fn reset(&mut self) {
        self.pending.clear();
        self.soft_drop_held = false;
        self.since_soft_drop_key_ms = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_commands_drain_in_order() {
        let mut input = InputHandler::new();
        input.handle_key(key(KeyCode::Left, KeyEventKind::Press));
        input.handle_key(key(KeyCode::Up, KeyEventKind::Press));
        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press));

        let batch = input.update(16);
        assert_eq!(
            batch.as_slice(),
            &[Command::MoveLeft, Command::Rotate, Command::HardDrop]
        );
        assert!(input.update(16).is_empty());
    }

    #[test]
    fn test_soft_drop_repeat_does_not_restart() {
        let mut input = InputHandler::new();
        input.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        input.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        input.handle_key(key(KeyCode::Down, KeyEventKind::Repeat));

        assert_eq!(input.update(16).as_slice(), &[Command::SoftDropStart]);
        assert!(input.soft_drop_held());
    }

    #[test]
    fn test_soft_drop_times_out_without_release_events() {
        let mut input = InputHandler::new();
        input.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        assert_eq!(input.update(100).as_slice(), &[Command::SoftDropStart]);
        assert!(input.update(50).is_empty());

        assert_eq!(input.update(16).as_slice(), &[Command::SoftDropStop]);
        assert!(!input.soft_drop_held());
    }

    #[test]
    fn test_repeated_press_keeps_soft_drop_alive() {
        let mut input = InputHandler::new();
        input.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        input.update(100);
        input.handle_key(key(KeyCode::Down, KeyEventKind::Repeat));
        assert!(input.update(100).is_empty());
        assert!(input.soft_drop_held());
    }

    #[test]
    fn test_release_event_stops_soft_drop() {
        let mut input = InputHandler::with_release_events();
        input.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        assert_eq!(input.update(1_000).as_slice(), &[Command::SoftDropStart]);

        input.handle_key(key(KeyCode::Down, KeyEventKind::Release));
        assert_eq!(input.update(16).as_slice(), &[Command::SoftDropStop]);

        // A stray release does not produce a second stop.
        input.handle_key(key(KeyCode::Down, KeyEventKind::Release));
        assert!(input.update(16).is_empty());
    }

    #[test]
    fn test_reset_clears_state() {
        let mut input = InputHandler::new();
        input.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        input.reset();
        assert!(!input.soft_drop_held());
        assert!(input.update(16).is_empty());
    }
}

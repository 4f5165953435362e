//! Session module - the game state machine
//!
//! A session owns the locked-cell map, the current and next pieces, the
//! generator and all counters. One call to [`Session::tick`] advances the
//! game by one frame:
//!
//! 1. advance the fall and speed-up timers
//! 2. speed up once per interval
//! 3. apply queued commands against a grid rebuilt from the locked cells
//! 4. apply gravity
//! 5. lock the piece if this tick grounded it, clear rows, score, spawn
//! 6. declare game over when material reaches the top row
//!
//! Invalid moves are reverted silently. Game over is a [`Phase`], not an error.

use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::locked::LockedCells;
use crate::piece::Piece;
use crate::rng::{PieceGenerator, RandomGenerator};
use crate::scoring::{line_clear_score, next_fall_interval_ms, soft_drop_interval_ms};
use crate::snapshot::SessionSnapshot;
use crate::types::{Command, RotationDirection};

/// Horizontal nudges tried, in order, when a rotation does not fit.
pub const WALL_KICK_OFFSETS: [i16; 4] = [-1, 1, -2, 2];

/// Where the session is in a piece's life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A piece is active and not yet locked
    Falling,
    /// This tick's movement or gravity grounded the piece
    Locking,
    /// Terminal
    GameOver,
}

/// A single-player game from first spawn to game over
#[derive(Debug, Clone)]
pub struct Session<G = RandomGenerator> {
    config: SessionConfig,
    locked: LockedCells,
    current: Piece,
    next: Piece,
    generator: G,
    phase: Phase,
    score: u32,
    /// Running maximum of `score`, kept across restarts.
    high_score: u32,
    lines: u32,
    fall_timer_ms: u32,
    level_timer_ms: u32,
    fall_interval_ms: u32,
    soft_drop: bool,
    quit: bool,
}

impl Session<RandomGenerator> {
    /// Create a session with the uniform random generator
    pub fn new(config: SessionConfig, seed: u32) -> Result<Self> {
        Self::with_generator(config, RandomGenerator::new(seed))
    }
}

impl<G: PieceGenerator> Session<G> {
    /// Create a session drawing pieces from `generator`
    pub fn with_generator(config: SessionConfig, mut generator: G) -> Result<Self> {
        config.validate()?;

        let current = Piece::spawn(generator.next_kind(), config.columns);
        let next = Piece::spawn(generator.next_kind(), config.columns);
        tracing::debug!(
            columns = config.columns,
            rows = config.rows,
            current = ?current.kind(),
            next = ?next.kind(),
            "session created"
        );

        Ok(Self {
            config,
            locked: LockedCells::new(),
            current,
            next,
            generator,
            phase: Phase::Falling,
            score: 0,
            high_score: 0,
            lines: 0,
            fall_timer_ms: 0,
            level_timer_ms: 0,
            fall_interval_ms: config.base_fall_ms,
            soft_drop: false,
            quit: false,
        })
    }

    /// Start a new game on the same session, keeping the high score.
    pub fn restart(&mut self) {
        self.locked.clear();
        self.current = Piece::spawn(self.generator.next_kind(), self.config.columns);
        self.next = Piece::spawn(self.generator.next_kind(), self.config.columns);
        self.phase = Phase::Falling;
        self.score = 0;
        self.lines = 0;
        self.fall_timer_ms = 0;
        self.level_timer_ms = 0;
        self.fall_interval_ms = self.config.base_fall_ms;
        self.soft_drop = false;
        self.quit = false;
        tracing::info!(high_score = self.high_score, "session restarted");
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Total rows cleared this game
    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.soft_drop
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn locked(&self) -> &LockedCells {
        &self.locked
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Whether further ticks are ignored
    pub fn is_terminal(&self) -> bool {
        self.game_over() || self.quit
    }

    /// Dense grid of the locked cells, rebuilt on every call
    pub fn grid(&self) -> Board {
        Board::rebuild(self.config.columns, self.config.rows, &self.locked)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid(),
            active: self.current.into(),
            next: self.next.into(),
            score: self.score,
            high_score: self.high_score,
            lines: self.lines,
            fall_interval_ms: self.fall_interval_ms,
            soft_drop: self.soft_drop,
            phase: self.phase,
            quit: self.quit,
        }
    }

    /// Effective gravity interval, accounting for soft drop
    pub fn effective_fall_interval_ms(&self) -> u32 {
        if self.soft_drop {
            soft_drop_interval_ms(self.fall_interval_ms, self.config.soft_drop_divisor)
        } else {
            self.fall_interval_ms
        }
    }

    /// Advance the game by `dt_ms` and apply `commands` in order.
    pub fn tick(&mut self, dt_ms: u32, commands: &[Command]) -> SessionSnapshot {
        if self.is_terminal() {
            return self.snapshot();
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(dt_ms);
        self.level_timer_ms = self.level_timer_ms.saturating_add(dt_ms);

        if self.level_timer_ms > self.config.speed_up_interval_ms {
            self.level_timer_ms = 0;
            self.speed_up();
        }

        let grid = self.grid();
        for &command in commands {
            self.apply_command(command, &grid);
            if self.quit {
                tracing::info!(score = self.score, "quit requested");
                return self.snapshot();
            }
        }

        if self.phase == Phase::Falling {
            self.apply_gravity(&grid);
        }

        if self.phase == Phase::Locking {
            self.lock_current();
        }

        self.snapshot()
    }

    fn speed_up(&mut self) {
        let before = self.fall_interval_ms;
        self.fall_interval_ms = next_fall_interval_ms(
            self.fall_interval_ms,
            self.config.fall_step_ms,
            self.config.min_fall_ms,
        );
        tracing::debug!(before, after = self.fall_interval_ms, "fall speed increased");
    }

    fn apply_command(&mut self, command: Command, grid: &Board) {
        match command {
            Command::SoftDropStop => self.soft_drop = false,
            Command::Quit => self.quit = true,
            // Once grounded this tick, the piece no longer moves.
            _ if self.phase != Phase::Falling => {}
            Command::SoftDropStart => {
                self.soft_drop = true;
                self.try_translate(0, 1, grid);
            }
            Command::MoveLeft => {
                self.try_translate(-1, 0, grid);
            }
            Command::MoveRight => {
                self.try_translate(1, 0, grid);
            }
            Command::Rotate => {
                self.try_rotate(grid);
            }
            Command::HardDrop => {
                let rows = self.hard_drop(grid);
                tracing::trace!(rows, "hard drop");
                self.phase = Phase::Locking;
            }
        }
    }

    fn fits(&self, grid: &Board) -> bool {
        grid.is_valid(&self.current.occupied_cells())
    }

    /// Move the piece, undoing the move if it does not fit.
    fn try_translate(&mut self, d_col: i16, d_row: i16, grid: &Board) -> bool {
        self.current.translate(d_col, d_row);
        if self.fits(grid) {
            return true;
        }
        self.current.translate(-d_col, -d_row);
        false
    }

    /// Rotate clockwise, trying each wall kick before giving up.
    fn try_rotate(&mut self, grid: &Board) -> bool {
        let before = self.current;
        self.current.rotate(RotationDirection::Clockwise);
        if self.fits(grid) {
            return true;
        }

        for dx in WALL_KICK_OFFSETS {
            if self.try_translate(dx, 0, grid) {
                return true;
            }
        }

        self.current = before;
        false
    }

    /// Drop to the lowest row that fits. Returns rows travelled.
    fn hard_drop(&mut self, grid: &Board) -> u32 {
        let mut rows = 0;
        while self.try_translate(0, 1, grid) {
            rows += 1;
        }
        rows
    }

    fn apply_gravity(&mut self, grid: &Board) {
        if self.fall_timer_ms <= self.effective_fall_interval_ms() {
            return;
        }
        self.fall_timer_ms = 0;
        if !self.try_translate(0, 1, grid) {
            self.phase = Phase::Locking;
        }
    }

    /// Write the current piece into the locked map and move on.
    fn lock_current(&mut self) {
        let piece = self.current;
        let mut above_board = false;
        for (x, y) in piece.occupied_cells() {
            if y < 0 {
                above_board = true;
            } else {
                self.locked.insert(x, y, piece.kind());
            }
        }
        tracing::debug!(kind = ?piece.kind(), col = piece.col(), row = piece.row(), "piece locked");

        if above_board {
            self.end_game("piece locked above the board");
            return;
        }

        let mut grid = self.grid();
        let cleared = grid.clear_full_rows(&mut self.locked);
        if cleared > 0 {
            let award = line_clear_score(cleared);
            self.score = self.score.saturating_add(award);
            self.lines = self.lines.saturating_add(cleared);
            tracing::info!(cleared, award, score = self.score, "rows cleared");
        }
        self.high_score = self.high_score.max(self.score);

        self.current = self.next;
        self.next = Piece::spawn(self.generator.next_kind(), self.config.columns);
        self.phase = Phase::Falling;
        tracing::debug!(current = ?self.current.kind(), next = ?self.next.kind(), "piece spawned");

        if self.locked.min_row().is_some_and(|row| row < 1) {
            self.end_game("locked cells reached the top row");
        }
    }

    fn end_game(&mut self, reason: &'static str) {
        self.phase = Phase::GameOver;
        self.soft_drop = false;
        self.high_score = self.high_score.max(self.score);
        tracing::info!(reason, score = self.score, high_score = self.high_score, "game over");
    }
}

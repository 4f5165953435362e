//! Configuration for a game session

use crate::error::{Result, SessionError};
use crate::types::{
    BASE_FALL_MS, BOARD_HEIGHT, BOARD_WIDTH, FALL_STEP_MS, MIN_FALL_MS, SOFT_DROP_DIVISOR,
    SPEED_UP_INTERVAL_MS,
};

/// Smallest supported board edge; a 4x4 mask must fit.
pub const MIN_DIMENSION: u8 = 4;

/// Largest supported board edge.
pub const MAX_DIMENSION: u8 = 64;

/// Board size and timing rules for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub columns: u8,
    pub rows: u8,

    /// Fall interval at session start (ms per automatic step)
    pub base_fall_ms: u32,

    /// Decrease applied at every speed-up
    pub fall_step_ms: u32,

    /// Floor for the fall interval
    pub min_fall_ms: u32,

    /// Session time between speed-ups
    pub speed_up_interval_ms: u32,

    /// Soft drop divides the fall interval by this
    pub soft_drop_divisor: u32,
}

impl SessionConfig {
    /// Reference timing on a `columns` x `rows` board
    pub fn new(columns: u8, rows: u8) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn with_base_fall_ms(mut self, ms: u32) -> Self {
        self.base_fall_ms = ms;
        self
    }

    pub fn with_min_fall_ms(mut self, ms: u32) -> Self {
        self.min_fall_ms = ms;
        self
    }

    pub fn with_fall_step_ms(mut self, ms: u32) -> Self {
        self.fall_step_ms = ms;
        self
    }

    pub fn with_speed_up_interval_ms(mut self, ms: u32) -> Self {
        self.speed_up_interval_ms = ms;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let dims = MIN_DIMENSION..=MAX_DIMENSION;
        if !dims.contains(&self.columns) || !dims.contains(&self.rows) {
            return Err(SessionError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
                min: MIN_DIMENSION,
                max: MAX_DIMENSION,
            });
        }
        if self.min_fall_ms == 0 || self.min_fall_ms > self.base_fall_ms {
            return Err(SessionError::InvalidFallInterval {
                base_ms: self.base_fall_ms,
                min_ms: self.min_fall_ms,
            });
        }
        if self.speed_up_interval_ms == 0 {
            return Err(SessionError::InvalidSpeedUpInterval(self.speed_up_interval_ms));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            columns: BOARD_WIDTH,
            rows: BOARD_HEIGHT,
            base_fall_ms: BASE_FALL_MS,
            fall_step_ms: FALL_STEP_MS,
            min_fall_ms: MIN_FALL_MS,
            speed_up_interval_ms: SPEED_UP_INTERVAL_MS,
            soft_drop_divisor: SOFT_DROP_DIVISOR,
        }
    }
}

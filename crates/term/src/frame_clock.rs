//! Frame pacing for the game loop.
//!
//! Time is passed in by the caller so the schedule can be tested without
//! sleeping.

use std::time::{Duration, Instant};

use crate::types::MAX_FRAME_STEP_MS;

/// Schedules ticks at a fixed rate and measures the time step of each one.
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    max_step_ms: u64,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32, now: Instant) -> Self {
        let interval_ms = (1000 / fps.max(1)).max(1) as u64;
        Self {
            interval: Duration::from_millis(interval_ms),
            max_step_ms: (MAX_FRAME_STEP_MS as u64).max(interval_ms),
            last_tick: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long to wait for input before the next frame.
    ///
    /// While `paused` no tick is ever due: the wait is a full frame and the
    /// schedule restarts from `now`, so resuming does not replay the pause.
    pub fn poll_timeout(&mut self, now: Instant, paused: bool) -> Duration {
        if paused {
            self.last_tick = now;
            return self.interval;
        }
        self.interval.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// The measured step in whole milliseconds, once a tick is due.
    ///
    /// Sub-millisecond remainders carry over to the next tick. Steps longer
    /// than [`MAX_FRAME_STEP_MS`] are clamped and the excess is dropped.
    pub fn tick_due(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return None;
        }

        let elapsed_ms = elapsed.as_millis() as u64;
        if elapsed_ms > self.max_step_ms {
            self.last_tick = now;
            return Some(self.max_step_ms as u32);
        }
        self.last_tick += Duration::from_millis(elapsed_ms);
        Some(elapsed_ms as u32)
    }

    /// Restart the schedule from `now` (e.g. after a restart).
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }
}

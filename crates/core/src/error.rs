//! Error types for session construction

use thiserror::Error;

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised while validating a [`SessionConfig`](crate::config::SessionConfig)
///
/// Gameplay itself never fails; these only guard the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Board dimensions outside the supported range
    #[error("Invalid board dimensions: {columns}x{rows} (columns and rows must be within {min}..={max})")]
    InvalidDimensions {
        columns: u8,
        rows: u8,
        min: u8,
        max: u8,
    },

    /// Fall interval settings that would stall or invert gravity
    #[error("Invalid fall interval: base {base_ms}ms, minimum {min_ms}ms (minimum must be > 0 and <= base)")]
    InvalidFallInterval { base_ms: u32, min_ms: u32 },

    /// Speed-up interval of zero would speed up every tick
    #[error("Invalid speed-up interval: {0}ms")]
    InvalidSpeedUpInterval(u32),
}

//! Volume arithmetic
//!
//! Receiver volume is expressed in dB below reference and moves in 0.5 dB
//! steps. Only the sign is checked locally; range and step alignment are the
//! receiver's call and come back as rejections.

use thiserror::Error;

/// Size of one volume step in dB
pub const STEP_DB: f64 = 0.5;

/// Steps taken by `up`/`down` when no count is given
pub const DEFAULT_POINTS: u32 = 2;

/// Pause between fade increments when no delay is given
pub const DEFAULT_FADE_DELAY_SECS: f64 = 0.5;

/// Direction of a relative adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
        }
    }
}

/// A requested absolute volume that cannot be sent
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VolumeError {
    #[error("volume {0} is not a negative number of dB")]
    NotNegative(f64),

    #[error("volume {0} is too far below reference to send")]
    OutOfRange(f64),

    #[error("fade delay {0} is not a non-negative number of seconds")]
    NegativeDelay(f64),
}

/// Volume after moving `points` steps from `current`
///
/// No clamping: the receiver decides whether the result is in range.
pub fn adjust(current: f64, points: u32, direction: Direction) -> f64 {
    current + direction.sign() * f64::from(points) * STEP_DB
}

/// Accept an absolute target only if it is strictly negative
///
/// The value is returned untouched; step alignment is left to the receiver.
pub fn absolute_target(requested: f64) -> Result<f64, VolumeError> {
    if requested < 0.0 {
        Ok(requested)
    } else {
        Err(VolumeError::NotNegative(requested))
    }
}

/// Arguments for a receiver-side fade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeRequest {
    /// Target truncated towards zero
    pub target_db: i32,
    pub delay_secs: f64,
}

impl FadeRequest {
    /// Build a fade towards `target`, which must be strictly negative
    ///
    /// The truncated target has to fit the receiver's integer volume and the
    /// delay must not be negative.
    pub fn new(target: f64, delay_secs: Option<f64>) -> Result<Self, VolumeError> {
        let target = absolute_target(target)?;
        let truncated = target.trunc();
        if truncated < f64::from(i32::MIN) {
            return Err(VolumeError::OutOfRange(target));
        }

        let delay_secs = delay_secs.unwrap_or(DEFAULT_FADE_DELAY_SECS);
        if delay_secs.is_nan() || delay_secs < 0.0 {
            return Err(VolumeError::NegativeDelay(delay_secs));
        }

        Ok(Self {
            target_db: truncated as i32,
            delay_secs,
        })
    }
}

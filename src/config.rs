//! Validated playback configuration.

use crate::format::CLUSTER_LEN;
use crate::producer::TailPolicy;
use std::path::PathBuf;
use std::time::Duration;

/// Base interval between units at speed 1.
pub const DEFAULT_RATE: Duration = Duration::from_secs(1);

/// Clusters per hex row when none is given.
pub const DEFAULT_WIDTH: usize = 2;

/// Largest accepted hex row width, in clusters.
pub const MAX_WIDTH: usize = 1024;

/// What a unit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One line of text per unit.
    #[default]
    Text,
    /// One row of `width × 8` bytes per unit, as hex and printable text.
    Hex,
}

/// Errors rejecting a configuration before playback starts.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The speed multiplier was zero.
    #[error("speed must be at least 1")]
    ZeroSpeed,

    /// The speed multiplier is so high the interval between units is zero.
    #[error("speed {0} is too high: units would be shown with no delay")]
    SpeedTooHigh(u32),

    /// The hex row width is outside `1..=MAX_WIDTH`.
    #[error("width must be between 1 and {max}, got {0}", max = MAX_WIDTH)]
    Width(usize),
}

impl ConfigError {
    /// Process exit code for a configuration error.
    pub const fn exit_code(&self) -> u8 {
        2
    }
}

/// Everything needed to play a file back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to display.
    pub file: PathBuf,
    /// Interval between units.
    pub rate: Duration,
    /// Clusters per hex row.
    pub width: usize,
    /// Text lines or hex rows.
    pub mode: Mode,
    /// Rendering of a short final hex row.
    pub tail: TailPolicy,
}

impl Config {
    /// Build a configuration, checking every field.
    ///
    /// `speed` divides [`DEFAULT_RATE`]: speed 4 plays four units a second.
    pub fn new(
        file: PathBuf,
        speed: u32,
        width: usize,
        mode: Mode,
        tail: TailPolicy,
    ) -> Result<Self, ConfigError> {
        if speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        let rate = DEFAULT_RATE / speed;
        if rate.is_zero() {
            return Err(ConfigError::SpeedTooHigh(speed));
        }
        if width == 0 || width > MAX_WIDTH {
            return Err(ConfigError::Width(width));
        }
        Ok(Self {
            file,
            rate,
            width,
            mode,
            tail,
        })
    }

    /// Units emitted per second of unpaused playback.
    pub fn units_per_second(&self) -> f64 {
        1.0 / self.rate.as_secs_f64()
    }

    /// Bytes consumed per hex row.
    pub const fn chunk_len(&self) -> usize {
        self.width * CLUSTER_LEN
    }
}

//! Error types shared across the workspace

use thiserror::Error;

/// Widget configuration errors, reported at construction time
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `min` must be strictly less than `max`
    #[error("Invalid value range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: f32, max: f32 },

    /// Quantization step must be positive
    #[error("Invalid step: must be positive, got {0}")]
    InvalidStep(f32),

    /// Track length along the drag axis must be positive
    #[error("Invalid track length: must be positive, got {0}")]
    InvalidTrackLength(f32),

    /// Indicator size must be positive when the indicator is shown
    #[error("Invalid indicator size: must be positive, got {0}")]
    InvalidIndicatorSize(f32),
}

/// Result type for configuration and construction
pub type Result<T> = std::result::Result<T, ConfigError>;

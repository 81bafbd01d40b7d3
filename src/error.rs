//! Error type for the rendering core.
//!
//! The only failure that can occur while tracing is a division by zero in the
//! vector math; everything else is rejected up front when a camera or a render
//! is configured.

use thiserror::Error;

/// Errors raised by the rendering core.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderError {
    /// A zero-length vector was normalized or a value was divided by zero.
    #[error("division by zero while {0}")]
    DivisionByZero(&'static str),

    /// Vertical field of view outside the open interval (0, 180) degrees.
    #[error("vertical field of view must lie in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    /// Non-positive image aspect ratio.
    #[error("aspect ratio must be positive, got {0}")]
    InvalidAspectRatio(f32),

    /// Negative lens aperture.
    #[error("aperture must not be negative, got {0}")]
    InvalidAperture(f32),

    /// Non-positive focus distance.
    #[error("focus distance must be positive, got {0}")]
    InvalidFocusDistance(f32),

    /// Image with a zero dimension.
    #[error("image size must be at least 1x1, got {width}x{height}")]
    InvalidImageSize {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// Zero samples per pixel.
    #[error("at least one sample per pixel is required")]
    InvalidSampleCount,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;

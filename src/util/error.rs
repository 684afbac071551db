//! Error types for blurbrush.

use thiserror::Error;

/// Result alias for blurbrush operations.
pub type Result<T> = std::result::Result<T, BlurBrushError>;

/// Errors that can occur when building or loading pixel buffers.
///
/// Out-of-range radii and off-canvas stamps are not errors: they are
/// clamped and clipped where they occur.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BlurBrushError {
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The byte buffer does not hold exactly `width * height * 4` bytes.
    #[error("buffer size mismatch: expected {expected} bytes, got {got}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// Decoding or encoding an image file failed.
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}

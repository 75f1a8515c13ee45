//! Error types for rt-core operations.
//!
//! Only the fallible entry points return these. The plain accessors follow
//! the canvas contract instead: [`Canvas::pixel_at`](crate::Canvas::pixel_at)
//! panics and [`Canvas::write_pixel`](crate::Canvas::write_pixel) ignores
//! out-of-range writes.
//!
//! # Usage
//!
//! ```rust
//! use rt_core::{Canvas, Error};
//!
//! let err = Canvas::try_new(0, 10).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from canvas construction and checked access.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside the canvas.
    #[error("pixel ({x}, {y}) out of bounds for canvas {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: i64,
        /// Y coordinate that was out of bounds
        y: i64,
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },

    /// Width or height is zero, or the pixel count overflows.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(-1, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("(-1, 50)"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 20, "width must be positive");
        assert_eq!(err.to_string(), "invalid dimensions: 0x20 (width must be positive)");
        assert!(!err.is_bounds_error());
    }
}

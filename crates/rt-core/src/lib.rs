//! # rt-core
//!
//! Core rendering surface for rt-rs.
//!
//! - [`Canvas`] - fixed-size grid of [`Color`] values
//! - [`ppm`] - P3 text serialization with 70-column wrapping
//! - [`Error`] - error type for fallible canvas operations
//!
//! ## Crate Structure
//!
//! ```text
//! rt-math (Tuple4, Color)
//!    ^
//!    |
//!    +-- rt-core (this crate)
//!           ^
//!           +-- rt-io (file output)
//!           +-- rt-cli (projectile demo)
//! ```
//!
//! ## Read/Write Asymmetry
//!
//! Reading outside the canvas is a caller bug and panics. Writing outside
//! the canvas is ignored, so simulations can plot points that leave the
//! frame without special handling.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod canvas;
pub mod error;
pub mod ppm;

pub use canvas::*;
pub use error::*;
pub use rt_math::{Color, Tuple4};

/// Prelude module for convenient imports.
///
/// ```
/// use rt_core::prelude::*;
///
/// let mut canvas = Canvas::new(4, 4);
/// canvas.write_pixel(1, 1, Tuple4::RED);
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::error::{Error, Result};
    pub use rt_math::{Color, Tuple4, EPSILON};
}

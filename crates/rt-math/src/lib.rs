//! # rt-math
//!
//! Tuple algebra for the rt-rs renderer.
//!
//! A single 4-component type, [`Tuple4`], represents points, vectors and
//! colors:
//!
//! - **Point** - `w == 1`, a location in space
//! - **Vector** - `w == 0`, a direction or displacement
//! - **Color** - `(red, green, blue, _)`, the fourth component is ignored
//!
//! # Design
//!
//! Arithmetic runs over all four components, so the homogeneous rules
//! fall out of plain addition and subtraction:
//!
//! ```text
//! point  - point  = vector
//! point  + vector = point
//! vector - vector = vector
//! ```
//!
//! Equality is tolerance based (see [`EPSILON`]), never bit-exact.
//!
//! # Usage
//!
//! ```rust
//! use rt_math::Tuple4;
//!
//! let start = Tuple4::point(0.0, 1.0, 0.0);
//! let velocity = Tuple4::vector(1.0, 1.8, 0.0).normalize() * 11.25;
//!
//! let next = start + velocity;
//! assert!(next.is_point());
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `DVec4` interop
//! - [`approx`] - tolerance comparisons in tests and callers
//!
//! # Used By
//!
//! - `rt-core` - canvas pixels
//! - `rt-cli` - projectile simulation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod float;
mod tuple;

pub use float::*;
pub use tuple::*;

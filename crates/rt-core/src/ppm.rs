//! PPM (P3) text serialization.
//!
//! Layout, byte for byte:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <row 0: R G B R G B ...>
//! ...
//! <row height-1>
//! ```
//!
//! Each channel is `round(component * 255)` clamped to `0..=255`. Pixel
//! lines are wrapped so that none exceeds [`PPM_MAX_LINE_LENGTH`]
//! characters; a wrap happens between values, never inside one, and every
//! row starts on a fresh line. The text ends with a newline.
//!
//! # Usage
//!
//! ```rust
//! use rt_core::{Canvas, Tuple4};
//!
//! let mut canvas = Canvas::new(2, 1);
//! canvas.write_pixel(1, 0, Tuple4::color(0.0, 0.5, 1.0));
//! assert_eq!(canvas.to_ppm(), "P3\n2 1\n255\n0 0 0 0 128 255\n");
//! ```

use crate::Canvas;
use std::fmt::{self, Write};

/// Magic number of the plain-text RGB variant.
pub const PPM_MAGIC: &str = "P3";

/// Maximum channel value written in the header.
pub const PPM_MAX_VALUE: u8 = 255;

/// Longest pixel line allowed in the output.
pub const PPM_MAX_LINE_LENGTH: usize = 70;

/// Converts a color component to a channel value.
///
/// Out-of-range components are clamped, NaN maps to 0.
///
/// ```rust
/// use rt_core::ppm::channel_value;
///
/// assert_eq!(channel_value(1.5), 255);
/// assert_eq!(channel_value(0.5), 128);
/// assert_eq!(channel_value(-0.5), 0);
/// ```
#[inline]
pub fn channel_value(component: f64) -> u8 {
    let scaled = (component * f64::from(PPM_MAX_VALUE)).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, f64::from(PPM_MAX_VALUE)) as u8
}

/// Serializes `canvas` into `out`.
///
/// # Errors
///
/// Only fails if `out` itself fails.
pub fn write_ppm<W: Write>(canvas: &Canvas, out: &mut W) -> fmt::Result {
    writeln!(out, "{}", PPM_MAGIC)?;
    writeln!(out, "{} {}", canvas.width(), canvas.height())?;
    writeln!(out, "{}", PPM_MAX_VALUE)?;

    let mut lines = LineWrapper::new(out);
    for row in canvas.rows() {
        for color in row {
            lines.push(channel_value(color.red()))?;
            lines.push(channel_value(color.green()))?;
            lines.push(channel_value(color.blue()))?;
        }
        lines.finish_line()?;
    }
    Ok(())
}

/// Serializes `canvas` into a new string.
pub fn to_string(canvas: &Canvas) -> String {
    // Worst case "255 " per channel plus header.
    let mut out = String::with_capacity(canvas.pixel_count() * 12 + 32);
    write_ppm(canvas, &mut out).expect("writing to a String cannot fail");
    out
}

/// Accumulates space-separated values and breaks lines at the width limit.
struct LineWrapper<'a, W: Write> {
    out: &'a mut W,
    line: String,
}

impl<'a, W: Write> LineWrapper<'a, W> {
    fn new(out: &'a mut W) -> Self {
        Self {
            out,
            line: String::with_capacity(PPM_MAX_LINE_LENGTH + 1),
        }
    }

    fn push(&mut self, value: u8) -> fmt::Result {
        if !self.line.is_empty() {
            if self.line.len() + 1 + digit_count(value) > PPM_MAX_LINE_LENGTH {
                self.finish_line()?;
            } else {
                self.line.push(' ');
            }
        }
        write!(self.line, "{}", value)
    }

    fn finish_line(&mut self) -> fmt::Result {
        self.out.write_str(&self.line)?;
        self.out.write_char('\n')?;
        self.line.clear();
        Ok(())
    }
}

#[inline]
fn digit_count(value: u8) -> usize {
    match value {
        0..=9 => 1,
        10..=99 => 2,
        _ => 3,
    }
}

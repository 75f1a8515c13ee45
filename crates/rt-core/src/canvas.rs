//! Fixed-size pixel grid.
//!
//! [`Canvas`] stores one [`Color`] per cell in a dense, **row-major**
//! buffer, top row first:
//!
//! ```text
//! index(x, y) = y * width + x
//! ```
//!
//! Coordinates are signed so that callers can hand over positions that
//! fall off the canvas (negative or past the edge). Writes to such cells
//! are dropped; reads panic.
//!
//! # Usage
//!
//! ```rust
//! use rt_core::{Canvas, Tuple4};
//!
//! let mut canvas = Canvas::new(10, 20);
//! canvas.write_pixel(2, 3, Tuple4::RED);
//! assert_eq!(canvas.pixel_at(2, 3), Tuple4::RED);
//!
//! // Off-canvas writes are ignored
//! assert!(!canvas.write_pixel(-1, 3, Tuple4::RED));
//! ```

use crate::{ppm, Error, Result};
use rt_math::{Color, Tuple4};

/// A fixed-size grid of colors, initialized to black.
///
/// The canvas owns its pixel buffer exclusively; its length is always
/// `width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Canvas width in pixels
    width: u32,
    /// Canvas height in pixels
    height: u32,
    /// Row-major pixel buffer
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a black canvas.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero. Use [`try_new`](Self::try_new)
    /// to get an error instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rt_core::{Canvas, Tuple4};
    ///
    /// let canvas = Canvas::new(10, 20);
    /// assert_eq!(canvas.dimensions(), (10, 20));
    /// assert!(canvas.pixels().all(|(_, _, c)| c == Tuple4::BLACK));
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        match Self::try_new(width, height) {
            Ok(canvas) => canvas,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a black canvas, rejecting zero or overflowing dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero or the
    /// pixel buffer would exceed `isize::MAX` bytes.
    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be positive",
            ));
        }
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))?;
        let bytes = count
            .checked_mul(std::mem::size_of::<Color>())
            .filter(|&b| b <= isize::MAX as usize);
        if bytes.is_none() {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "pixel buffer too large",
            ));
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Tuple4::BLACK; count],
        })
    }

    /// Returns the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the canvas dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the row-major pixel buffer.
    #[inline]
    pub fn data(&self) -> &[Color] {
        &self.pixels
    }

    /// Returns `true` if (x, y) lies on the canvas.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some()
    }

    /// Buffer index for (x, y), or `None` when off-canvas.
    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Returns the color at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is off-canvas. Out-of-range reads are caller bugs.
    #[inline]
    pub fn pixel_at(&self, x: i64, y: i64) -> Color {
        match self.index(x, y) {
            Some(i) => self.pixels[i],
            None => panic!("{}", Error::out_of_bounds(x, y, self.width, self.height)),
        }
    }

    /// Returns the color at (x, y), or `None` if off-canvas.
    #[inline]
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Returns the color at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if (x, y) is off-canvas.
    pub fn try_pixel_at(&self, x: i64, y: i64) -> Result<Color> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Stores `color` at (x, y).
    ///
    /// Off-canvas coordinates are ignored without error. Returns `true`
    /// if the pixel was stored.
    #[inline]
    pub fn write_pixel(&mut self, x: i64, y: i64, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Returns one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Color] {
        assert!(y < self.height, "row {} out of bounds for height {}", y, self.height);
        let start = y as usize * self.width as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Iterates over all pixels with their coordinates, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let width = self.width as usize;
        self.pixels.iter().enumerate().map(move |(i, &color)| {
            ((i % width) as u32, (i / width) as u32, color)
        })
    }

    /// Serializes the canvas as PPM (P3) text.
    ///
    /// See [`ppm`] for the exact layout.
    pub fn to_ppm(&self) -> String {
        ppm::to_string(self)
    }
}

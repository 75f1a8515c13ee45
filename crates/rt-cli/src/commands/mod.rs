//! CLI command implementations

pub mod blank;
pub mod cannon;

use anyhow::{Context, Result};
use rt_core::Canvas;
use rt_math::{Color, Tuple4};
use std::path::Path;

/// Save canvas to path
pub fn save_canvas(path: &Path, canvas: &Canvas) -> Result<()> {
    rt_io::write(path, canvas)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Create a canvas, reporting bad dimensions as a CLI error
pub fn new_canvas(width: u32, height: u32) -> Result<Canvas> {
    Canvas::try_new(width, height).context("Cannot create canvas")
}

/// Color from a parsed r,g,b triple
pub fn color_from(rgb: [f64; 3]) -> Color {
    Tuple4::color(rgb[0], rgb[1], rgb[2])
}

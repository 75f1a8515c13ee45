//! # rt-io
//!
//! File output for rt-rs canvases.
//!
//! The in-memory serialization lives in `rt-core`; this crate puts it on
//! disk. The format is chosen from the file extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.ppm`    | PPM P3 text |
//!
//! # Usage
//!
//! ```rust,no_run
//! use rt_core::{Canvas, Tuple4};
//!
//! let mut canvas = Canvas::new(900, 550);
//! canvas.write_pixel(10, 10, Tuple4::RED);
//! rt_io::write("cannon.ppm", &canvas)?;
//! # Ok::<(), rt_io::IoError>(())
//! ```

#![warn(missing_docs)]

pub mod detect;
pub mod error;
pub mod ppm;
pub mod traits;

pub use detect::Format;
pub use error::{IoError, IoResult};
pub use traits::ImageWriter;

use rt_core::Canvas;
use std::path::Path;

/// Writes `canvas` to `path`, picking the format from the extension.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for unknown extensions
/// - [`IoError::Io`] if the file cannot be created or written
pub fn write<P: AsRef<Path>>(path: P, canvas: &Canvas) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);

    match format {
        Format::Ppm => ppm::write(path, canvas),
        Format::Unknown => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }
}

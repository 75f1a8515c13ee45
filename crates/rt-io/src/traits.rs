//! Writer trait for canvas output formats.

use crate::IoResult;
use rt_core::Canvas;
use std::path::Path;

/// Trait for canvas format writers.
///
/// Implement this trait to add support for writing a new image format.
///
/// # Example
///
/// ```rust
/// use rt_core::Canvas;
/// use rt_io::ImageWriter;
/// use rt_io::ppm::PpmWriter;
///
/// let bytes = PpmWriter.write_to_memory(&Canvas::new(1, 1))?;
/// assert_eq!(bytes, b"P3\n1 1\n255\n0 0 0\n");
/// # Ok::<(), rt_io::IoError>(())
/// ```
pub trait ImageWriter {
    /// Writes a canvas to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, canvas: &Canvas) -> IoResult<()>;

    /// Writes a canvas to memory.
    fn write_to_memory(&self, canvas: &Canvas) -> IoResult<Vec<u8>>;
}

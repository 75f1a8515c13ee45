//! PPM (P3) file output.
//!
//! Thin wrapper over [`rt_core::ppm`], which owns the text layout.

use crate::{ImageWriter, IoResult};
use rt_core::Canvas;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes a PPM file, replacing any existing file at `path`.
pub fn write<P: AsRef<Path>>(path: P, canvas: &Canvas) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let bytes = write_to(&mut writer, canvas)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        width = canvas.width(),
        height = canvas.height(),
        bytes,
        "wrote PPM"
    );
    Ok(())
}

/// Writes PPM text into `writer`. Returns the number of bytes written.
pub fn write_to<W: Write>(writer: &mut W, canvas: &Canvas) -> IoResult<usize> {
    let text = canvas.to_ppm();
    writer.write_all(text.as_bytes())?;
    Ok(text.len())
}

/// [`ImageWriter`] for PPM P3.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmWriter;

impl ImageWriter for PpmWriter {
    fn write<P: AsRef<Path>>(&self, path: P, canvas: &Canvas) -> IoResult<()> {
        write(path, canvas)
    }

    fn write_to_memory(&self, canvas: &Canvas) -> IoResult<Vec<u8>> {
        Ok(canvas.to_ppm().into_bytes())
    }
}

//! Format detection from file extensions.

use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain-text PPM (P3).
    Ppm,
    /// Unknown/unsupported format.
    Unknown,
}

impl Format {
    /// Detects format from file extension, case-insensitive.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("ppm") => Format::Ppm,
            _ => Format::Unknown,
        }
    }
}

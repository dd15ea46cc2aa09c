//! Error types for PPM decoding.

use std::path::PathBuf;

/// Errors that can occur while decoding a P6 file.
///
/// Every header defect gets its own variant so the diagnostic names the
/// exact condition that failed.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Input file could not be opened or read
    #[error("unable to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File does not start with the two-byte magic `P6`
    #[error("invalid image format (must be 'P6')")]
    BadMagic,

    /// Width or height is missing, malformed, or too large
    #[error("invalid image size (missing or malformed width/height)")]
    InvalidDimensions,

    /// Width or height is zero
    #[error("invalid image size ({width}x{height}): dimensions must be positive")]
    ZeroDimensions { width: u32, height: u32 },

    /// Max color value is missing or malformed
    #[error("invalid rgb component (missing or malformed max color value)")]
    InvalidMaxColor,

    /// Max color value is not 255; only 8-bit channels are supported
    #[error("unsupported color depth: max color value {found}, expected 255 (8-bit)")]
    UnsupportedDepth { found: u64 },

    /// No whitespace byte between the header and the pixel data
    #[error("malformed header: expected whitespace after max color value")]
    MissingSeparator,

    /// Fewer pixel bytes than the declared dimensions require
    #[error("truncated pixel data: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Pixel buffer does not match the declared dimensions
    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

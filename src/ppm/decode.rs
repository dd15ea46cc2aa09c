//! P6 header and pixel parsing.

use std::path::Path;

use super::{DecodeError, Pixel, PixelImage};

/// Decode a binary PPM (P6) file into a [`PixelImage`].
///
/// The whole file is read up front, so the handle is closed before any
/// parsing happens, on success and failure alike.
pub fn read_ppm(path: &Path) -> Result<PixelImage, DecodeError> {
    let bytes = std::fs::read(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode(&bytes)?;
    log::debug!(
        "decoded {}x{} P6 image from '{}'",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}

/// Decode P6 bytes already in memory.
pub fn decode(bytes: &[u8]) -> Result<PixelImage, DecodeError> {
    // The magic must be the very first two bytes; leading whitespace is
    // not tolerated.
    if bytes.len() < 2 || &bytes[0..2] != b"P6" {
        return Err(DecodeError::BadMagic);
    }
    let mut pos = 2;

    let width = parse_field(bytes, &mut pos).ok_or(DecodeError::InvalidDimensions)?;
    let height = parse_field(bytes, &mut pos).ok_or(DecodeError::InvalidDimensions)?;
    let max_color = parse_field(bytes, &mut pos).ok_or(DecodeError::InvalidMaxColor)?;

    let width = u32::try_from(width).map_err(|_| DecodeError::InvalidDimensions)?;
    let height = u32::try_from(height).map_err(|_| DecodeError::InvalidDimensions)?;
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimensions { width, height });
    }
    if max_color != 255 {
        return Err(DecodeError::UnsupportedDepth { found: max_color });
    }

    // Exactly one whitespace byte separates the header from pixel data.
    match bytes.get(pos) {
        Some(b) if b.is_ascii_whitespace() => pos += 1,
        _ => return Err(DecodeError::MissingSeparator),
    }

    // Validate the byte count directly: width * height * 3 bytes must
    // be present. Trailing bytes beyond that are ignored.
    let data = &bytes[pos..];
    let expected = width as usize * height as usize * 3;
    if data.len() < expected {
        return Err(DecodeError::Truncated {
            expected,
            actual: data.len(),
        });
    }

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for rgb in data[..expected].chunks_exact(3) {
        pixels.push(Pixel {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        });
    }

    PixelImage::new(width, height, pixels)
}

/// Skip whitespace and `#` comment lines, then read one decimal field.
///
/// Returns `None` if no digits follow or the value overflows.
fn parse_field(bytes: &[u8], pos: &mut usize) -> Option<u64> {
    skip_separators(bytes, pos);
    let start = *pos;
    while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
        *pos += 1;
    }
    if *pos == start {
        return None;
    }
    std::str::from_utf8(&bytes[start..*pos]).ok()?.parse().ok()
}

/// Advance past whitespace and comment lines (`#` to end of line).
fn skip_separators(bytes: &[u8], pos: &mut usize) {
    while let Some(&b) = bytes.get(*pos) {
        if b.is_ascii_whitespace() {
            *pos += 1;
        } else if b == b'#' {
            while let Some(&c) = bytes.get(*pos) {
                *pos += 1;
                if c == b'\n' {
                    break;
                }
            }
        } else {
            break;
        }
    }
}

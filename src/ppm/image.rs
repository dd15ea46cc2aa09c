//! In-memory pixel grid produced by the decoder.

use super::DecodeError;

/// One RGB pixel, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A decoded image: `width * height` pixels in row-major order,
/// top-to-bottom, left-to-right.
///
/// The pixel buffer length is verified against the dimensions at
/// construction and never mutated afterward.
#[derive(Debug, Clone)]
pub struct PixelImage {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelImage {
    /// Build an image, verifying the dimensions are positive and the
    /// buffer matches the declared size.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::ZeroDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(DecodeError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}

//! Pixel to glyph mapping.

use super::brightness::luma;
use super::ramp::{GLYPH_RAMP, LEVEL_STEP, RAMP_LEVELS};
use crate::ppm::{Pixel, PixelImage};

/// A glyph grid with the same dimensions and ordering as the pixel
/// image it was mapped from.
#[derive(Debug, Clone)]
pub struct GlyphImage {
    width: u32,
    height: u32,
    glyphs: Vec<char>,
}

impl GlyphImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All glyphs in row-major order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Iterate over rows, each a slice of exactly `width` glyphs.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact: the buffer length is always width * height, so
        // a short final row can never be produced.
        self.glyphs.chunks_exact(self.width as usize)
    }
}

/// Map one pixel to a glyph.
///
/// Brightness is quantized to a ramp level in 0..=10. With `contrast`
/// false, brighter pixels map to denser glyphs; with `contrast` true
/// the ramp direction is inverted. The two modes always pick indices
/// that sum to 10.
///
/// Pure function: no state is read or written besides the arguments.
pub fn map_pixel(pixel: Pixel, contrast: bool) -> char {
    // Clamped lookup: a brightness of exactly 255.0 lands on the last
    // level, and nothing the arithmetic produces can index past it.
    let level = ((luma(pixel) / LEVEL_STEP) as usize).min(RAMP_LEVELS - 1);
    let index = if contrast {
        level
    } else {
        RAMP_LEVELS - 1 - level
    };
    GLYPH_RAMP[index]
}

/// Map every pixel of an image to a glyph, preserving order.
///
/// The mapper runs to completion before the result is handed to the
/// encoder; the returned grid is always fully populated.
pub fn map_image(image: &PixelImage, contrast: bool) -> GlyphImage {
    let glyphs = image
        .pixels()
        .iter()
        .map(|&p| map_pixel(p, contrast))
        .collect();
    GlyphImage {
        width: image.width(),
        height: image.height(),
        glyphs,
    }
}

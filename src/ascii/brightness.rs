//! RGB to brightness conversion using the ITU-R BT.601 luma formula.

use crate::ppm::Pixel;

/// Weighted brightness of one pixel, in [0.0, 255.0].
///
/// The luma formula is: Y = 0.299*R + 0.587*G + 0.114*B
pub fn luma(pixel: Pixel) -> f64 {
    0.299 * f64::from(pixel.r) + 0.587 * f64::from(pixel.g) + 0.114 * f64::from(pixel.b)
}

//! Binary PPM ("P6") decoding.
//!
//! Parses a P6 file into an in-memory pixel grid in three steps:
//!
//! 1. **Magic check** - the file must start with the exact bytes `P6`
//! 2. **Header parsing** - width, height, and max color value, with
//!    `#` comment lines and whitespace skipped between fields
//! 3. **Pixel parsing** - exactly `width * height` RGB triples,
//!    row-major, top-to-bottom, left-to-right
//!
//! Only the 8-bit variant (max color value 255) is supported; any other
//! depth is rejected outright rather than silently misread.

mod decode;
mod error;
mod image;

pub use decode::{decode, read_ppm};
pub use error::DecodeError;
pub use image::{Pixel, PixelImage};

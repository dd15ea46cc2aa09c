//! Brightness to glyph mapping.
//!
//! Converts decoded pixels to ASCII glyphs in two steps:
//!
//! 1. **Luma** - RGB to brightness using the BT.601 weights
//! 2. **Quantization** - brightness to one of the 11 ramp levels
//!
//! The contrast flag selects the ramp direction: in normal mode
//! brighter pixels map to denser glyphs; in contrast mode the mapping
//! is reversed.

mod brightness;
mod mapping;
mod ramp;

pub use brightness::luma;
pub use mapping::{map_image, map_pixel, GlyphImage};
pub use ramp::{GLYPH_RAMP, LEVEL_STEP, RAMP_LEVELS};

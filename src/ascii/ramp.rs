//! The fixed glyph ramp.

/// Glyph ramp ordered from sparsest to densest (11 levels).
pub const GLYPH_RAMP: &[char] = &['`', '.', '-', ':', '|', '+', 'x', '=', 'X', '#', '@'];

/// Number of quantization levels; always the ramp length.
pub const RAMP_LEVELS: usize = GLYPH_RAMP.len();

/// Brightness width of one ramp level: `255 / (RAMP_LEVELS - 1)`.
/// This keeps the quantization in lockstep with the ramp size, so the
/// full brightness range [0, 255] lands exactly on indices 0..=10.
pub const LEVEL_STEP: f64 = 255.0 / (RAMP_LEVELS - 1) as f64;

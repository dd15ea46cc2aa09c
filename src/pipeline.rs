//! The decode -> map -> encode pipeline.

use std::path::Path;

use crate::ascii;
use crate::ppm::{self, DecodeError};
use crate::txt::{self, WriteError};

/// Options threaded through the pipeline, set once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Invert the ramp direction (mode `1` on the command line maps
    /// brighter pixels to denser glyphs).
    pub contrast: bool,
}

/// Top-level pipeline failure: either stage's error, unchanged.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Run the full pipeline: decode `input`, map every pixel to a glyph,
/// write the rendering to `output`.
///
/// Strictly sequential and single-threaded; each stage finishes before
/// the next starts, and the first error aborts the run.
pub fn run(input: &Path, output: &Path, options: RenderOptions) -> Result<(), PipelineError> {
    let pixels = ppm::read_ppm(input)?;
    let glyphs = ascii::map_image(&pixels, options.contrast);
    txt::write_txt(output, &glyphs)?;
    log::info!(
        "rendered '{}' ({}x{}) to '{}'",
        input.display(),
        glyphs.width(),
        glyphs.height(),
        output.display()
    );
    Ok(())
}

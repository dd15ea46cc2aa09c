//! Text encoding of glyph grids.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::ascii::GlyphImage;

/// Errors that can occur while writing the text rendering.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Destination file could not be created
    #[error("unable to create '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing failed partway through
    #[error("failed writing '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write a glyph grid as newline-delimited text rows.
///
/// Truncates any existing file at `path`. Each of the `height` rows is
/// its `width` glyphs followed by a single newline; nothing follows the
/// final row's newline. If writing fails partway, the partial file is
/// removed before the error is returned.
pub fn write_txt(path: &Path, image: &GlyphImage) -> Result<(), WriteError> {
    write_with(path, image, write_rows)
}

fn write_with(
    path: &Path,
    image: &GlyphImage,
    rows: impl FnOnce(File, &GlyphImage) -> std::io::Result<()>,
) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    match rows(file, image) {
        Ok(()) => {
            log::debug!(
                "wrote {} rows of {} glyphs to '{}'",
                image.height(),
                image.width(),
                path.display()
            );
            Ok(())
        }
        Err(source) => {
            // Don't leave a half-written rendering behind.
            let _ = std::fs::remove_file(path);
            Err(WriteError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn write_rows<W: Write>(sink: W, image: &GlyphImage) -> std::io::Result<()> {
    let mut out = BufWriter::new(sink);
    let mut line = String::with_capacity(image.width() as usize + 1);
    for row in image.rows() {
        line.clear();
        line.extend(row);
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::map_image;
    use crate::ppm::{Pixel, PixelImage};

    fn glyph_grid(width: u32, height: u32) -> GlyphImage {
        // Alternating black/white pixels give an unambiguous pattern
        let pixels: Vec<Pixel> = (0..width as usize * height as usize)
            .map(|i| {
                let v = if i % 2 == 0 { 0 } else { 255 };
                Pixel { r: v, g: v, b: v }
            })
            .collect();
        let image = PixelImage::new(width, height, pixels).unwrap();
        map_image(&image, true)
    }

    #[test]
    fn test_writes_one_line_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_txt(&path, &glyph_grid(3, 2)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "`@`\n@`@\n");
    }

    #[test]
    fn test_no_trailing_content_after_final_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_txt(&path, &glyph_grid(4, 1)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 5); // 4 glyphs + newline
        assert_eq!(bytes.last(), Some(&b'\n'));
    }

    #[test]
    fn test_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "previous contents that are much longer").unwrap();

        write_txt(&path, &glyph_grid(1, 1)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "`\n");
    }

    #[test]
    fn test_unwritable_destination() {
        let err = write_txt(Path::new("/nonexistent/dir/out.txt"), &glyph_grid(1, 1)).unwrap_err();
        assert!(matches!(err, WriteError::Create { .. }));
        assert!(format!("{}", err).contains("/nonexistent/dir/out.txt"));
    }

    #[test]
    fn test_failed_write_removes_partial_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        // Rows that fail partway through, leaving bytes already on disk
        let err = write_with(&path, &glyph_grid(3, 2), |mut file, _| {
            file.write_all(b"`@`\n")?;
            file.flush()?;
            Err(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "no space left on device",
            ))
        })
        .unwrap_err();

        assert!(matches!(err, WriteError::Io { .. }));
        assert!(format!("{}", err).contains("no space left on device"));
        assert!(
            !path.exists(),
            "partial output should be removed on a mid-write failure"
        );
    }

    /// A sink whose writes always fail, as a full disk's would.
    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "no space left on device",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "no space left on device",
            ))
        }
    }

    #[test]
    fn test_write_rows_propagates_sink_errors() {
        let err = write_rows(FailingSink, &glyph_grid(2, 2)).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::WriteZero);
    }
}

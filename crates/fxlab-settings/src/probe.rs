//! Image dimension probing.
//!
//! Adding a source image records its pixel size so list views can show it
//! without decoding anything. The probe is injected ([`ImageProbe`]) so
//! tests and headless frontends can swap the decoder out; [`FileProbe`]
//! is the on-disk implementation.

use std::path::Path;

use crate::error::{SettingsError, SettingsResult};

/// Reads the pixel dimensions of an image file.
pub trait ImageProbe {
    /// Returns `(width, height)` for the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Probe`] when the file is missing, not an
    /// image, or in an unsupported format. Callers treat this as
    /// non-fatal.
    fn dimensions(&self, path: &Path) -> SettingsResult<(u32, u32)>;
}

/// Probe backed by the `image` crate's header reader.
///
/// Only the image header is read; the pixel data is never decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileProbe;

impl ImageProbe for FileProbe {
    fn dimensions(&self, path: &Path) -> SettingsResult<(u32, u32)> {
        image::image_dimensions(path).map_err(|e| SettingsError::Probe(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    fn write_test_png(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_fn(width, height, |_x, _y| Rgb([200_u8, 120_u8, 40_u8]));
        img.save(path).unwrap();
    }

    #[test]
    fn reads_dimensions_from_png_header() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("swatch.png");
        write_test_png(&path, 48, 32);

        assert_eq!(FileProbe.dimensions(&path).unwrap(), (48, 32));
    }

    #[test]
    fn missing_file_is_a_probe_error() {
        let tmp = TempDir::new().unwrap();
        let result = FileProbe.dimensions(&tmp.path().join("missing.png"));
        assert!(matches!(result, Err(SettingsError::Probe(_))));
    }

    #[test]
    fn non_image_file_is_a_probe_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "not pixels").unwrap();

        let result = FileProbe.dimensions(&path);
        assert!(matches!(result, Err(SettingsError::Probe(_))));
    }
}

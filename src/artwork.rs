//! Album art decoding.
//!
//! Images are decoded once per track change and kept as a small RGB thumbnail
//! that the UI samples into half-block cells.

use std::path::{Path, PathBuf};

use image::ImageReader;

use crate::error::{Error, Result};

/// Longest edge of the decoded thumbnail, in pixels.
const THUMBNAIL_EDGE: u32 = 96;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    path: PathBuf,
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Artwork {
    /// Decode `path` into a thumbnail, keeping the aspect ratio.
    pub fn load(path: &Path) -> Result<Self> {
        let failure = |reason: String| Error::MetadataDisplay {
            path: path.to_path_buf(),
            reason,
        };

        let image = ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .map_err(|e| failure(e.to_string()))?
            .decode()
            .map_err(|e| failure(e.to_string()))?;

        let thumb = image.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE).to_rgb8();
        let (width, height) = thumb.dimensions();
        if width == 0 || height == 0 {
            return Err(failure("empty image".to_string()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
            pixels: thumb.pixels().map(|p| p.0).collect(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, clamped to the image bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Largest `(cols, rows)` that fits in `max_cols x max_rows` terminal cells
    /// with the image aspect ratio preserved. One cell shows two pixel rows.
    pub fn fit(&self, max_cols: u16, max_rows: u16) -> (u16, u16) {
        if max_cols == 0 || max_rows == 0 {
            return (0, 0);
        }
        let max_px_h = max_rows as f32 * 2.0;
        let scale = (max_cols as f32 / self.width as f32).min(max_px_h / self.height as f32);
        let cols = ((self.width as f32 * scale).floor() as u16).clamp(1, max_cols);
        let rows = ((self.height as f32 * scale / 2.0).floor() as u16).clamp(1, max_rows);
        (cols, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_decodes_and_downscales() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        let mut img = image::RgbImage::new(200, 100);
        for p in img.pixels_mut() {
            *p = image::Rgb([10, 20, 30]);
        }
        img.save(&path).unwrap();

        let art = Artwork::load(&path).unwrap();
        assert_eq!(art.width(), THUMBNAIL_EDGE);
        assert_eq!(art.height(), THUMBNAIL_EDGE / 2);
        assert_eq!(art.pixel(0, 0), [10, 20, 30]);
        assert_eq!(art.pixel(10_000, 10_000), [10, 20, 30]);
        assert_eq!(art.path(), path.as_path());
    }

    #[test]
    fn undecodable_files_report_a_metadata_display_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        assert!(matches!(
            Artwork::load(&path),
            Err(Error::MetadataDisplay { .. })
        ));
        assert!(matches!(
            Artwork::load(&dir.path().join("missing.jpg")),
            Err(Error::MetadataDisplay { .. })
        ));
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        let art = Artwork {
            path: PathBuf::new(),
            width: 40,
            height: 40,
            pixels: vec![[0, 0, 0]; 1600],
        };
        // Square image: twice as many columns as rows.
        assert_eq!(art.fit(100, 10), (20, 10));
        assert_eq!(art.fit(10, 100), (10, 5));
        assert_eq!(art.fit(0, 10), (0, 0));
    }
}

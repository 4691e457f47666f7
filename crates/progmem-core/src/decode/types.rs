//! Core types for image decoding.

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    Io(String),
}

/// A decoded image with RGB pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels (column count).
    pub width: u32,
    /// Image height in pixels (row count).
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    /// Length should be width * height * 3.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build an image from rows of RGB triples.
    ///
    /// An empty slice yields a 0x0 image.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    pub fn from_rows(rows: &[Vec<[u8; 3]>]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == width),
            "All rows must have the same length"
        );
        let width = width as u32;
        let pixels = rows.iter().flatten().flatten().copied().collect();
        Self::new(width, height, pixels)
    }

    /// Create a DecodedImage from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the RGB bytes of row `y` (`width * 3` bytes).
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * 3;
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }

    /// Iterate over rows, each yielding its pixels as RGB triples.
    ///
    /// A zero-width image still yields `height` (empty) rows.
    pub fn rows(&self) -> impl Iterator<Item = Pixels<'_>> {
        (0..self.height).map(move |y| Pixels {
            bytes: self.row(y),
        })
    }

    /// Get the pixel at (`x`, `y`).
    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }
}

/// The pixels of one image row.
#[derive(Debug, Clone, Copy)]
pub struct Pixels<'a> {
    bytes: &'a [u8],
}

impl<'a> Pixels<'a> {
    /// Iterate over the row's pixels left to right.
    pub fn iter(&self) -> impl Iterator<Item = [u8; 3]> + 'a {
        let bytes = self.bytes;
        bytes.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Iterate over non-overlapping adjacent pixel pairs.
    ///
    /// A trailing odd pixel is not yielded; callers must check the width.
    pub fn pairs(&self) -> impl Iterator<Item = ([u8; 3], [u8; 3])> + 'a {
        let bytes = self.bytes;
        bytes
            .chunks_exact(6)
            .map(|c| ([c[0], c[1], c[2]], [c[3], c[4], c[5]]))
    }
}

//! Bitmap decoding through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};

use super::{DecodeError, DecodedImage};

/// Decode an image from bytes, guessing the format from its content.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes
///
/// # Returns
///
/// A `DecodedImage` with RGB pixel data.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized.
/// Returns `DecodeError::CorruptedFile` if the data cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(map_image_error)?;
    log::debug!(
        "decoded {}x{} image ({:?})",
        img.width(),
        img.height(),
        img.color()
    );

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

/// Read and decode the image file at `path`.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, otherwise the
/// same errors as [`decode_image`].
pub fn open_image(path: impl AsRef<Path>) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::Io(format!("{}: {}", path.display(), e)))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    decode_image(&bytes)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}

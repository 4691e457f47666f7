//! Image to C array conversion.
//!
//! Ties together quantization and emission: every image row becomes one
//! line of byte tokens, packed according to the selected [`Mode`].

use std::io::{self, Write};

use thiserror::Error;

use crate::decode::{DecodeError, DecodedImage};
use crate::emit::CArrayWriter;
use crate::quantize::{pack_rgb111_pair, rgb222};
use crate::Mode;

/// Errors that can occur while converting an image.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// RGB111 packs pixels in pairs, so the column count must be even.
    #[error("Image width {width} is odd; rgb111 mode requires an even number of columns")]
    OddWidth { width: u32 },

    /// The input image could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Writing the output failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Convert `image` into a C array declaration written to `out`.
///
/// The image geometry is validated before anything is written, so an
/// error leaves `out` untouched.
///
/// # Errors
///
/// Returns `ConvertError::OddWidth` for an odd-width image in
/// [`Mode::Rgb111`], or `ConvertError::Io` if writing fails.
pub fn convert<W: Write>(image: &DecodedImage, mode: Mode, out: W) -> Result<W, ConvertError> {
    if mode == Mode::Rgb111 && image.width % 2 != 0 {
        return Err(ConvertError::OddWidth { width: image.width });
    }

    let width = mode.output_width(image.width);
    log::debug!(
        "converting {}x{} image as {} ({}x{} bytes)",
        image.width,
        image.height,
        mode,
        width,
        image.height
    );

    let mut writer = CArrayWriter::begin(out, width as usize, image.height as usize)?;
    for row in image.rows() {
        match mode {
            Mode::Rgb222 => writer.write_row(row.iter().map(rgb222))?,
            Mode::Rgb111 => {
                writer.write_row(row.pairs().map(|(even, odd)| pack_rgb111_pair(even, odd)))?
            }
        }
    }

    debug_assert_eq!(writer.rows(), image.height as usize);
    debug_assert_eq!(writer.tokens(), width as usize * image.height as usize);
    Ok(writer.finish()?)
}

/// Convert `image` and return the generated source text.
pub fn convert_to_string(image: &DecodedImage, mode: Mode) -> Result<String, ConvertError> {
    let bytes = convert(image, mode, Vec::new())?;
    // The emitter only writes ASCII.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

//! Progmem Core - Bitmap to firmware array conversion
//!
//! This crate turns decoded images into C array literals that can be
//! compiled into microcontroller firmware, including decoding, per-channel
//! quantization, byte packing and source emission.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub mod convert;
pub mod decode;
pub mod emit;
pub mod quantize;

pub use convert::{convert, convert_to_string, ConvertError};
pub use decode::{decode_image, open_image, DecodeError, DecodedImage};

/// Pixel packing scheme used for the output array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One byte per pixel, 2 bits per channel.
    #[default]
    Rgb222,
    /// One byte per horizontal pixel pair, 1 bit per channel.
    Rgb111,
}

impl Mode {
    /// All modes, in the order they are listed to users.
    pub const ALL: [Mode; 2] = [Mode::Rgb222, Mode::Rgb111];

    /// The name accepted by [`FromStr`] and printed by [`fmt::Display`].
    pub fn name(self) -> &'static str {
        match self {
            Mode::Rgb222 => "rgb222",
            Mode::Rgb111 => "rgb111",
        }
    }

    /// Number of image columns packed into one output byte.
    pub fn pixels_per_byte(self) -> u32 {
        match self {
            Mode::Rgb222 => 1,
            Mode::Rgb111 => 2,
        }
    }

    /// Declared array width for an image with `columns` columns.
    pub fn output_width(self, columns: u32) -> u32 {
        columns / self.pixels_per_byte()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mode '{0}' (expected rgb222 or rgb111)")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Rgb222);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("rgb222".parse::<Mode>(), Ok(Mode::Rgb222));
        assert_eq!("RGB111".parse::<Mode>(), Ok(Mode::Rgb111));
    }

    #[test]
    fn test_mode_from_str_unknown() {
        let err = "rgb565".parse::<Mode>().unwrap_err();
        assert_eq!(err, ParseModeError("rgb565".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown mode 'rgb565' (expected rgb222 or rgb111)"
        );
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn test_output_width() {
        assert_eq!(Mode::Rgb222.output_width(5), 5);
        assert_eq!(Mode::Rgb111.output_width(6), 3);
        assert_eq!(Mode::Rgb111.output_width(0), 0);
    }
}

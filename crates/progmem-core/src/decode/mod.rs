//! Image decoding for the converter.
//!
//! This module provides functionality for:
//! - Decoding BMP, PNG, JPEG and GIF images from bytes (format guessed from content)
//! - Reading an image file from disk
//! - Row and pixel access over the decoded RGB buffer
//!
//! Every decoded image is normalized to 8-bit RGB. Alpha is discarded and
//! grayscale is expanded to three equal channels.
//!
//! # Examples
//!
//! ```ignore
//! use progmem_core::decode::open_image;
//!
//! let image = open_image("logo.bmp").unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod bitmap;
mod types;

pub use bitmap::{decode_image, open_image};
pub use types::{DecodeError, DecodedImage, Pixels};

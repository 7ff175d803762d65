//! rotopix-io - Image decoding for rotopix
//!
//! Decodes raw PPM-style byte streams (textual header followed by raw RGB
//! triplets) into a [`PixelBuffer`](rotopix_core::PixelBuffer).
//!
//! The stream is treated byte-per-character: every byte 0-255 is one
//! character of the header text or one sample of the payload, with no
//! encoding transformation in between.

mod error;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use ppm::{PpmHeader, decode, read_header, read_ppm};

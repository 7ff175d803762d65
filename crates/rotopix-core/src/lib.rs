//! rotopix-core - Basic data structures for the rotopix image rotator
//!
//! This crate provides the fundamental types shared by the decoder, the
//! rotation renderer and the animation loop:
//!
//! - [`PixelBuffer`] / [`PixelBufferMut`] - RGBA image container (immutable / mutable)
//! - [`Error`] / [`Result`] - Core error type
//! - [`color`] - Channel indices and helpers for RGBA quadruplets

pub mod buffer;
pub mod error;

pub use buffer::{CHANNELS, PixelBuffer, PixelBufferMut};
pub use error::{Error, Result};

/// Color channel indices and helper functions for RGBA quadruplets.
///
/// # Pixel format
///
/// Each pixel occupies four consecutive bytes in the order R, G, B, A.
pub mod color {
    /// Red channel (byte 0)
    pub const RED: usize = 0;
    /// Green channel (byte 1)
    pub const GREEN: usize = 1;
    /// Blue channel (byte 2)
    pub const BLUE: usize = 2;
    /// Alpha channel (byte 3)
    pub const ALPHA: usize = 3;

    /// Alpha value of a fully opaque pixel.
    pub const OPAQUE: u8 = 255;

    /// Compose an opaque RGBA quadruplet (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> [u8; 4] {
        [r, g, b, OPAQUE]
    }

    /// Write opaque RGB values into a four-byte pixel slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is shorter than four bytes.
    #[inline]
    pub fn write_rgb(slot: &mut [u8], r: u8, g: u8, b: u8) {
        slot[RED] = r;
        slot[GREEN] = g;
        slot[BLUE] = b;
        slot[ALPHA] = OPAQUE;
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_rgb_is_opaque() {
            assert_eq!(compose_rgb(1, 2, 3), [1, 2, 3, 255]);
        }

        #[test]
        fn test_write_rgb_forces_alpha() {
            let mut slot = [0u8; 4];
            write_rgb(&mut slot, 7, 8, 9);
            assert_eq!(slot, [7, 8, 9, 255]);
        }
    }
}

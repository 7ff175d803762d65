//! rotopix-test - Regression test framework for rotopix
//!
//! Provides [`RegParams`], which numbers every comparison made by a
//! regression test, records failures instead of panicking on the first one,
//! and reports them all at [`RegParams::cleanup`]. Also provides in-memory
//! fixtures so tests never touch the filesystem.
//!
//! # Usage
//!
//! ```ignore
//! use rotopix_test::{RegParams, ppm_bytes, gradient_payload};
//!
//! let mut rp = RegParams::new("ppmio");
//! let data = ppm_bytes("P6", 4, 3, 255, &gradient_payload(4, 3));
//! let pix = rotopix_io::decode(&data).unwrap();
//! rp.compare_values(48.0, pix.data().len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use rotopix_core::PixelBuffer;

/// Build a PPM byte stream: `"{format}\n{width} {height}\n{max_value}\n"`
/// followed by `payload` verbatim.
pub fn ppm_bytes(format: &str, width: u32, height: u32, max_value: u32, payload: &[u8]) -> Vec<u8> {
    let mut data = format!("{format}\n{width} {height}\n{max_value}\n").into_bytes();
    data.extend_from_slice(payload);
    data
}

/// A deterministic RGB payload of `width * height * 3` bytes.
///
/// Byte `i` is `(i * 7 + i / 3) % 256`, so neighbouring pixels differ and
/// the full 0-255 range (including whitespace and `#` byte values) shows up
/// in larger images.
pub fn gradient_payload(width: u32, height: u32) -> Vec<u8> {
    let len = width as usize * height as usize * 3;
    (0..len).map(|i| ((i * 7 + i / 3) % 256) as u8).collect()
}

/// Decode an in-memory fixture, naming it in the error on failure.
pub fn decode_fixture(name: &str, data: &[u8]) -> TestResult<PixelBuffer> {
    rotopix_io::decode(data).map_err(|e| TestError::ImageLoad {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Corner colors of [`corner_buffer`], in row-major order.
pub const CORNER_COLORS: [[u8; 4]; 4] = [
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 0, 255],
];

/// A 2x2 opaque buffer with a distinct color in each corner:
/// red (top-left), green (top-right), blue (bottom-left), yellow (bottom-right).
pub fn corner_buffer() -> TestResult<PixelBuffer> {
    Ok(PixelBuffer::from_rgba(2, 2, CORNER_COLORS.concat())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ppm_bytes_layout() {
        let data = ppm_bytes("P6", 1, 1, 255, &[1, 2, 3]);
        assert_eq!(data, b"P6\n1 1\n255\n\x01\x02\x03");
    }

    #[test]
    fn test_gradient_payload_len() {
        assert_eq!(gradient_payload(5, 4).len(), 60);
    }

    #[test]
    fn test_corner_buffer() {
        let pix = corner_buffer().unwrap();
        assert_eq!(pix.get_rgba(1, 1), Some(CORNER_COLORS[3]));
    }

    #[test]
    fn test_decode_fixture_names_failure() {
        let err = decode_fixture("empty", b"").unwrap_err();
        assert!(err.to_string().contains("'empty'"));
    }
}

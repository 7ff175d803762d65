//! Pixel reads
//!
//! Pixels are addressed either by `(x, y)` or by row-major pixel index.
//! Both forms return `None` outside the buffer.

use super::{CHANNELS, PixelBuffer};

#[inline]
fn quad(data: &[u8], index: usize) -> [u8; 4] {
    let o = index * CHANNELS;
    [data[o], data[o + 1], data[o + 2], data[o + 3]]
}

impl PixelBuffer {
    /// Get the RGBA value at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let index = y as usize * self.width() as usize + x as usize;
        Some(quad(self.data(), index))
    }

    /// Get the RGBA value of the pixel at row-major `index`.
    pub fn pixel(&self, index: usize) -> Option<[u8; 4]> {
        (index < self.pixel_count()).then(|| quad(self.data(), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_rgba_and_pixel() {
        let data = (0..6u8).flat_map(|p| [p, p * 2, p * 3, 255]).collect();
        let buffer = PixelBuffer::from_rgba(3, 2, data).unwrap();

        assert_eq!(buffer.get_rgba(2, 1), Some([5, 10, 15, 255]));
        assert_eq!(buffer.get_rgba(0, 1), buffer.pixel(3));
        assert_eq!(buffer.pixel(5), Some([5, 10, 15, 255]));
    }

    #[test]
    fn test_reads_outside_are_none() {
        let buffer = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buffer.get_rgba(3, 0), None);
        assert_eq!(buffer.get_rgba(0, 2), None);
        assert_eq!(buffer.pixel(6), None);
    }
}

//! PixelBuffer - The RGBA image container
//!
//! # Pixel layout
//!
//! - Pixels are stored row-major, origin at the top-left corner
//! - Each pixel is four bytes: R, G, B, A
//! - The data length is always `width * height * 4`
//!
//! # Ownership model
//!
//! `PixelBuffer` uses `Arc` for cheap cloning (shared, read-only ownership).
//! A decoded source image can therefore be handed to the renderer once and
//! sampled every frame without copying. To build or modify pixel data, use
//! a [`PixelBufferMut`] and convert it with `Into<PixelBuffer>` when done.

mod access;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Internal buffer data
#[derive(Debug, PartialEq, Eq)]
struct BufferData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// RGBA bytes, `width * height * 4` long
    data: Vec<u8>,
}

impl BufferData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }
}

/// Compute the byte length of a `width` x `height` RGBA image.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if either dimension is 0, and
/// [`Error::DimensionOverflow`] if the length does not fit in `usize`.
pub fn byte_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(Error::DimensionOverflow { width, height })
}

/// RGBA pixel buffer
///
/// # Examples
///
/// ```
/// use rotopix_core::PixelBuffer;
///
/// let buffer = PixelBuffer::new(640, 480).unwrap();
/// assert_eq!(buffer.width(), 640);
/// assert_eq!(buffer.data().len(), 640 * 480 * 4);
/// ```
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    inner: Arc<BufferData>,
}

impl PixelBuffer {
    /// Create a new buffer with every byte set to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelBuffer {
            inner: Arc::new(BufferData::zeroed(width, height)?),
        })
    }

    /// Wrap existing RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            inner: Arc::new(BufferData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len() / CHANNELS
    }

    /// Get raw access to the RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the bytes of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let stride = self.inner.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Check if two buffers have the same size and identical bytes.
    pub fn equals(&self, other: &PixelBuffer) -> bool {
        self.sizes_equal(other) && self.inner.data == other.inner.data
    }

    /// Check whether every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.inner
            .data
            .chunks_exact(CHANNELS)
            .all(|px| px[crate::color::ALPHA] == crate::color::OPAQUE)
    }

    /// Create a deep copy of this buffer.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        PixelBuffer {
            inner: Arc::new(BufferData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }
}

/// Mutable pixel buffer
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`PixelBuffer`] using `Into<PixelBuffer>`.
#[derive(Debug)]
pub struct PixelBufferMut {
    inner: BufferData,
}

impl PixelBufferMut {
    /// Create a new zeroed mutable buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(PixelBufferMut {
            inner: BufferData::zeroed(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get mutable raw access to the RGBA bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<PixelBufferMut> for PixelBuffer {
    fn from(buffer: PixelBufferMut) -> Self {
        PixelBuffer {
            inner: Arc::new(buffer.inner),
        }
    }
}

//! Display surfaces
//!
//! A [`DisplaySurface`] is the drawing target of the animation: it has a
//! size that can be changed, accepts whole images at an offset, and shows
//! the matrix readout next to the image.

use rotopix_core::{CHANNELS, PixelBuffer};
use rotopix_transform::MatrixReadout;

/// Default size of a fresh [`MemorySurface`], in pixels
pub const DEFAULT_SURFACE_SIZE: (u32, u32) = (300, 150);

/// Top-left corner of an image drawn on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
}

impl Placement {
    /// Offset that centers `image` on a surface of `surface_size`.
    ///
    /// Computed as `surface/2 - image/2` in floating point and truncated
    /// toward zero, so an image larger than the surface gets a negative
    /// offset.
    pub fn centered(surface_size: (u32, u32), image: &PixelBuffer) -> Self {
        let axis = |surface: u32, image: u32| {
            (f64::from(surface) / 2.0 - f64::from(image) / 2.0).trunc() as i32
        };
        Self {
            x: axis(surface_size.0, image.width()),
            y: axis(surface_size.1, image.height()),
        }
    }
}

/// Drawing target for rendered frames
pub trait DisplaySurface {
    /// Size of the area hosting the surface.
    fn host_size(&self) -> (u32, u32);

    /// Current surface size.
    fn size(&self) -> (u32, u32);

    /// Change the surface size. Existing content is discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Draw `image` with its top-left corner at `placement`, replacing the
    /// covered pixels. Parts outside the surface are clipped.
    fn put_image(&mut self, image: &PixelBuffer, placement: Placement);

    /// Show the transform readout for the current frame.
    fn show_matrix(&mut self, readout: &MatrixReadout);
}

/// In-memory RGBA surface
#[derive(Debug, Clone)]
pub struct MemorySurface {
    host: (u32, u32),
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    readout: Option<MatrixReadout>,
    puts: u64,
}

impl MemorySurface {
    /// Create a surface inside a host area of `host_width` x `host_height`.
    ///
    /// The surface itself starts at [`DEFAULT_SURFACE_SIZE`], transparent.
    pub fn new(host_width: u32, host_height: u32) -> Self {
        let (width, height) = DEFAULT_SURFACE_SIZE;
        Self {
            host: (host_width, host_height),
            width,
            height,
            pixels: vec![0; width as usize * height as usize * CHANNELS],
            readout: None,
            puts: 0,
        }
    }

    /// RGBA value at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[o..o + CHANNELS]);
        Some(px)
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Readout passed to the most recent [`DisplaySurface::show_matrix`].
    pub fn last_readout(&self) -> Option<&MatrixReadout> {
        self.readout.as_ref()
    }

    /// Number of images drawn so far.
    pub fn put_count(&self) -> u64 {
        self.puts
    }
}

impl DisplaySurface for MemorySurface {
    fn host_size(&self) -> (u32, u32) {
        self.host
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(width as usize * height as usize * CHANNELS, 0);
    }

    fn put_image(&mut self, image: &PixelBuffer, placement: Placement) {
        self.puts += 1;

        // Clip the image rectangle against the surface
        let x0 = i64::from(placement.x).max(0);
        let y0 = i64::from(placement.y).max(0);
        let x1 = (i64::from(placement.x) + i64::from(image.width())).min(i64::from(self.width));
        let y1 = (i64::from(placement.y) + i64::from(image.height())).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let span = (x1 - x0) as usize * CHANNELS;
        let src_x = (x0 - i64::from(placement.x)) as usize;
        for y in y0..y1 {
            let src_y = (y - i64::from(placement.y)) as u32;
            let row = &image.row_data(src_y)[src_x * CHANNELS..][..span];
            let o = (y as usize * self.width as usize + x0 as usize) * CHANNELS;
            self.pixels[o..o + span].copy_from_slice(row);
        }
    }

    fn show_matrix(&mut self, readout: &MatrixReadout) {
        self.readout = Some(readout.clone());
    }
}

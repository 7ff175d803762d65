//! Inverse-mapped rotation of a pixel buffer
//!
//! Every destination pixel `(x, y)` is pushed through the composed
//! transform to find the source position it samples from; nothing is
//! splatted forward, so the output has no holes.
//!
//! # Sampling rules
//!
//! - Sample coordinates are floored, never rounded (nearest-neighbor, no
//!   interpolation).
//! - The source index is `(sy - 1) * W + (sx - 1)`. The `-1` bias shifts the
//!   whole image by one pixel up and left and lets column -1 wrap onto the
//!   end of the previous row; both are kept for output compatibility with
//!   existing renders.
//! - Indices outside `[0, W*H)` never read memory; they follow
//!   [`SampleFill`].
//! - Output alpha is always 255.

use crate::matrix::Transform3x3;
use crate::{TransformError, TransformResult};
use rotopix_core::{CHANNELS, PixelBuffer, PixelBufferMut, color};
use tracing::trace;

/// What an out-of-range sample produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleFill {
    /// Opaque black
    #[default]
    Black,
    /// Clamp the source index into the buffer (first or last pixel)
    Clamp,
    /// A fixed opaque color
    Color(u8, u8, u8),
}

/// Options for frame rendering
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Out-of-range sampling policy
    pub fill: SampleFill,
}

impl RenderOptions {
    /// Create options with a specific fill policy
    pub fn with_fill(fill: SampleFill) -> Self {
        Self { fill }
    }
}

/// Per-frame sampling statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Destination pixels written
    pub sampled: usize,
    /// Destination pixels whose source index fell outside the buffer
    pub out_of_range: usize,
}

/// A rendered frame together with the transform that produced it
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    /// The destination buffer, same size as the source
    pub buffer: PixelBuffer,
    /// Destination-to-source transform used for sampling
    pub transform: Transform3x3,
    /// Sampling statistics
    pub stats: FrameStats,
}

/// Build the destination-to-source transform for a rotation by `theta`
/// degrees about `(center_x, center_y)`.
///
/// The result is `T · M · T⁻¹` where `T` translates by `(center_x, center_y)`
/// and `M` rotates by `-theta`: a point is moved so the center sits at the
/// origin, rotated by `-theta`, and moved back. Sampling through the
/// reverse rotation makes the displayed image turn by `+theta`.
///
/// `compose_rotation(0.0, cx, cy)` is the identity, and `(cx, cy)` is a
/// fixed point for every angle.
pub fn compose_rotation(theta: f64, center_x: f64, center_y: f64) -> Transform3x3 {
    let to_center = Transform3x3::translation(center_x, center_y);
    let rotation = Transform3x3::rotation(-theta);
    // Only a non-finite center makes the translation singular.
    let from_center = to_center
        .inverse()
        .unwrap_or_else(|_| Transform3x3::translation(-center_x, -center_y));
    to_center.multiply(&rotation).multiply(&from_center)
}

/// Render `source` rotated by `theta` degrees about its center.
///
/// Uses the default [`SampleFill::Black`] policy.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `theta` is not finite.
pub fn render_frame(source: &PixelBuffer, theta: f64) -> TransformResult<PixelBuffer> {
    render_frame_with(source, theta, &RenderOptions::default()).map(|frame| frame.buffer)
}

/// Render `source` rotated by `theta` degrees about its center, returning
/// the transform and sampling statistics along with the buffer.
///
/// The center is `(W / 2, H / 2)` in real-valued pixel units.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if `theta` is not finite.
#[tracing::instrument(level = "trace", skip(source, options), fields(width = source.width(), height = source.height()))]
pub fn render_frame_with(
    source: &PixelBuffer,
    theta: f64,
    options: &RenderOptions,
) -> TransformResult<RenderedFrame> {
    if !theta.is_finite() {
        return Err(TransformError::InvalidParameters(format!(
            "rotation angle must be finite, got {theta}"
        )));
    }

    let w = source.width();
    let transform = compose_rotation(theta, f64::from(w) / 2.0, f64::from(source.height()) / 2.0);

    let src = source.data();
    let count = source.pixel_count() as i64;
    let w = w as usize;
    let mut dst = PixelBufferMut::new(source.width(), source.height())?;
    let mut stats = FrameStats::default();

    for (p, out) in dst.data_mut().chunks_exact_mut(CHANNELS).enumerate() {
        let (sx, sy) = transform.apply((p % w) as f64, (p / w) as f64);
        // `as` saturates, so wild coordinates stay representable.
        let (sx, sy) = (sx.floor() as i64, sy.floor() as i64);
        let index = sy
            .saturating_sub(1)
            .saturating_mul(w as i64)
            .saturating_add(sx.saturating_sub(1));

        let (r, g, b) = if (0..count).contains(&index) {
            let o = index as usize * CHANNELS;
            (src[o + color::RED], src[o + color::GREEN], src[o + color::BLUE])
        } else {
            stats.out_of_range += 1;
            match options.fill {
                SampleFill::Black => (0, 0, 0),
                SampleFill::Color(r, g, b) => (r, g, b),
                SampleFill::Clamp => {
                    let o = index.clamp(0, count - 1) as usize * CHANNELS;
                    (src[o + color::RED], src[o + color::GREEN], src[o + color::BLUE])
                }
            }
        };
        color::write_rgb(out, r, g, b);
        stats.sampled += 1;
    }

    trace!(
        theta,
        sampled = stats.sampled,
        out_of_range = stats.out_of_range,
        "frame rendered"
    );

    Ok(RenderedFrame {
        buffer: dst.into(),
        transform,
        stats,
    })
}

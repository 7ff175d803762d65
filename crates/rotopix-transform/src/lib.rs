//! rotopix-transform - Rotation rendering for rotopix
//!
//! This crate provides:
//!
//! - [`Transform3x3`]: homogeneous 2D affine matrices (translation, rotation,
//!   composition, inverse)
//! - [`compose_rotation`]: the rotate-about-center transform used per frame
//! - [`render_frame`] / [`render_frame_with`]: nearest-neighbor inverse-mapped
//!   resampling of a source buffer
//! - [`MatrixReadout`]: human-readable rows of a transform

mod error;
pub mod matrix;
pub mod readout;
pub mod rotate;

pub use error::{TransformError, TransformResult};
pub use matrix::Transform3x3;
pub use readout::MatrixReadout;
pub use rotate::{
    FrameStats, RenderOptions, RenderedFrame, SampleFill, compose_rotation, render_frame,
    render_frame_with,
};

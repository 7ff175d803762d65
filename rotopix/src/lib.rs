//! Rotopix - Rotating image viewer for Rust
//!
//! Decodes raw (binary) PPM images and renders them rotated about their
//! center, one frame at a time, by inverse-mapped nearest-neighbor
//! sampling through a composed 3x3 homogeneous transform.
//!
//! - [`io`]: PPM header parsing and decoding into a [`PixelBuffer`]
//! - [`transform`]: matrices, the rotation renderer and the matrix readout
//! - [`anim`]: the frame loop, display surfaces and the file viewer
//!
//! # Example
//!
//! ```
//! use rotopix::anim::{AnimationConfig, Animator};
//!
//! let mut data = b"P6\n2 2\n255\n".to_vec();
//! data.extend_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 0]);
//!
//! let image = rotopix::io::decode(&data).unwrap();
//! assert_eq!((image.width(), image.height()), (2, 2));
//!
//! let mut animator = Animator::new(image, AnimationConfig::default()).unwrap();
//! let first = animator.start().unwrap();
//! assert!(first.buffer.is_opaque());
//! let next = animator.advance(None).unwrap();
//! assert_eq!(animator.state().theta(), 12.0);
//! assert!(next.buffer.sizes_equal(&first.buffer));
//! ```

// Re-export core types (used everywhere)
pub use rotopix_core::*;

// Re-export domain crates as modules
pub use rotopix_anim as anim;
pub use rotopix_io as io;
pub use rotopix_transform as transform;

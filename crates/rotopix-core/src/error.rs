//! Error types for rotopix-core
//!
//! Provides a unified error type for buffer construction.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// rotopix-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Dimensions too large to address in memory
    #[error("image dimensions overflow: {width}x{height}")]
    DimensionOverflow { width: u32, height: u32 },

    /// Raw data length does not match the declared dimensions
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLength { expected: usize, actual: usize },
}

/// Result type alias for rotopix-core operations
pub type Result<T> = std::result::Result<T, Error>;

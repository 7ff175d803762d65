//! I/O error types
//!
//! Provides a unified error type for image decoding. A failed decode never
//! leaves a partially built buffer behind: either the whole image is
//! returned or one of these errors is.

use thiserror::Error;

/// Error type for image decoding.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error while reading the stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header does not provide format, width, height and max value
    #[error("malformed header: {reason} (found {tokens} of 4 tokens)")]
    MalformedHeader { tokens: usize, reason: String },

    /// The stream holds fewer payload bytes than the header declares
    #[error("truncated payload: expected {expected} bytes, got {actual}")]
    TruncatedPayload { expected: usize, actual: usize },

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] rotopix_core::Error),
}

impl IoError {
    pub(crate) fn malformed(tokens: usize, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            tokens,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;

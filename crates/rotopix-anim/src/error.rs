//! Error types for rotopix-anim

use thiserror::Error;

/// Errors that can occur while loading or animating an image
#[derive(Debug, Error)]
pub enum AnimError {
    /// The selected file could not be decoded
    #[error("decode error: {0}")]
    Io(#[from] rotopix_io::IoError),

    /// A frame could not be rendered
    #[error("render error: {0}")]
    Transform(#[from] rotopix_transform::TransformError),

    /// Operation not valid in the current animation phase
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for animation operations
pub type AnimResult<T> = Result<T, AnimError>;

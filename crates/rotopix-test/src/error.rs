//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to decode a fixture image
    #[error("failed to load fixture '{name}': {message}")]
    ImageLoad { name: String, message: String },

    /// Failed to build a fixture buffer
    #[error("fixture error: {0}")]
    Core(#[from] rotopix_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

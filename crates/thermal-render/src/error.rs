//! Error types for thermal rendering.

use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Primary error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Frame shape mismatch: expected {expected} values, got {actual}")]
    FrameShape { expected: usize, actual: usize },

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),
}

//! Error types for brisc-texture

use thiserror::Error;

/// Errors that can occur during texture feature extraction
#[derive(Debug, Error)]
pub enum TextureError {
    /// Direction index outside 1..=4
    #[error("invalid direction: {0} (expected 1..=4)")]
    InvalidDirection(u32),

    /// Pixel offset distance of zero
    #[error("invalid distance: {0} (expected >= 1)")]
    InvalidDistance(u32),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for texture operations
pub type TextureResult<T> = Result<T, TextureError>;

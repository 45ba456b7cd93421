//! Error types for rasterlab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every condition here is a caller-detectable precondition; operations
//! fail fast rather than silently coercing invalid input.

use thiserror::Error;

/// Rasterlab core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Sample buffer length does not match width * height * channels
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Channel count other than 1 (gray) or 3 (RGB)
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u32),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for rasterlab core operations
pub type Result<T> = std::result::Result<T, Error>;

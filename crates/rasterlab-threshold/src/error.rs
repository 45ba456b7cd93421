//! Error types for rasterlab-threshold

use thiserror::Error;

/// Errors that can occur during threshold operations
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterlab_core::Error),

    /// Empty histogram: no pixels to partition
    #[error("empty histogram: no pixels to partition")]
    EmptyHistogram,
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;

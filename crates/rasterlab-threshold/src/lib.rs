//! rasterlab-threshold - Binarization for rasterlab
//!
//! This crate converts grayscale views of raster buffers to two-level
//! images:
//!
//! - **Manual threshold** ([`threshold_to_binary`]): fixed cut at a
//!   caller-chosen intensity
//! - **Otsu's method** ([`compute_otsu_threshold`], [`threshold_otsu`]):
//!   automatic threshold selection maximizing between-class variance

pub mod binarize;
mod error;
pub mod otsu;

pub use binarize::{compute_otsu_threshold, threshold_otsu, threshold_to_binary};
pub use error::{ThresholdError, ThresholdResult};
pub use otsu::otsu_threshold;

//! rasterlab - Pixel-processing core of a raster image editor
//!
//! The interactive shell around this library (windows, menus, dialogs,
//! file decoding) hands each user action to exactly one operation here:
//! it passes in a decoded [`Raster`] and replaces its working buffer
//! with the returned result. Operations never mutate their input, so
//! the shell's undo history can hold cheap shared snapshots.
//!
//! # Overview
//!
//! - Point transforms: negative, log, gamma ([`filter::enhance`])
//! - Smoothing and sharpening: box blur, Gaussian blur, unsharp mask
//!   ([`filter::convolve`], [`filter::enhance`])
//! - Edge detection: Sobel gradient magnitude ([`filter::edge`])
//! - Resampling: nearest-neighbor and bilinear ([`transform::scale`])
//! - Histogram and thresholding: manual and Otsu ([`threshold`])
//!
//! # Example
//!
//! ```
//! use rasterlab::{Channels, Raster};
//! use rasterlab::filter::invert;
//!
//! let image = Raster::new(640, 480, Channels::Rgb).unwrap();
//! let negated = invert(&image);
//! assert!(negated.sizes_equal(&image));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterlab_filter as filter;
pub use rasterlab_threshold as threshold;
pub use rasterlab_transform as transform;

//! rasterlab-core - Basic data structures for image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the rasterlab image processing library:
//!
//! - [`Raster`] / [`RasterMut`] - The image buffer (immutable / mutable)
//! - [`Channels`] - Grayscale or RGB sample layout
//! - [`Histogram`] - 256-bin intensity distribution
//! - [`EditHistory`] - Undo/redo stack of buffer snapshots
//!
//! All processing operations across the workspace take a `Raster` and
//! return a newly allocated `Raster`; inputs are never mutated.

pub mod error;
pub mod history;
pub mod raster;

pub use error::{Error, Result};
pub use history::EditHistory;
pub use raster::{Channels, Histogram, Raster, RasterMut, luma};

//! rasterlab-transform - Geometric resampling for rasterlab
//!
//! Resizes raster buffers by nearest-neighbor sampling or bilinear
//! interpolation, by explicit target size or by scale factor.

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{ScaleMethod, scale, scale_by_sampling, scale_linear, scale_to_size};

//! The raster buffer
//!
//! `Raster` is the common currency between all processing modules: a
//! width x height grid of 8-bit samples with one channel (grayscale) or
//! three interleaved channels (RGB), stored row-major.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership). To
//! modify sample data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`. Every
//! processing operation allocates a fresh output buffer through this
//! pattern and leaves its input untouched, so callers holding snapshots
//! for undo can rely on them never changing underneath.

mod access;
mod convert;
mod histogram;

pub use convert::luma;
pub use histogram::Histogram;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of samples per pixel.
///
/// Only grayscale and RGB layouts are representable; every other
/// channel count is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single-channel grayscale
    Gray = 1,
    /// Three-channel interleaved RGB
    Rgb = 3,
}

impl Channels {
    /// Create `Channels` from a raw sample count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedChannels`] if `count` is not 1 or 3.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            _ => Err(Error::UnsupportedChannels(count)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel
    channels: Channels,
    /// Row-major interleaved samples, length = width * height * channels
    data: Vec<u8>,
}

impl RasterData {
    #[inline]
    fn row_stride(&self) -> usize {
        self.width as usize * self.channels.count() as usize
    }
}

/// Raster - main image container
///
/// An immutable 8-bit image buffer with reference-counted storage, so
/// `clone()` is cheap and shares the underlying samples.
///
/// # Examples
///
/// ```
/// use rasterlab_core::{Channels, Raster};
///
/// let raster = Raster::new(640, 480, Channels::Gray).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the given dimensions and channel layout.
    ///
    /// All samples are initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, channels: Channels) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let len = width as usize * height as usize * channels.count() as usize;
        let inner = RasterData {
            width,
            height,
            channels,
            data: vec![0u8; len],
        };

        Ok(Raster {
            inner: Arc::new(inner),
        })
    }

    /// Create a raster from an existing sample vector.
    ///
    /// The vector must contain exactly `width * height * channels`
    /// samples in row-major interleaved order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero width or height, and
    /// [`Error::LengthMismatch`] if the vector has the wrong length.
    pub fn from_vec(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = width as usize * height as usize * channels.count() as usize;
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }

        let inner = RasterData {
            width,
            height,
            channels,
            data,
        };
        Ok(Raster {
            inner: Arc::new(inner),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get the number of samples in one row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.inner.row_stride()
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        let stride = self.inner.row_stride();
        let start = y as usize * stride;
        &self.inner.data[start..start + stride]
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a new raster with the same dimensions and channel layout.
    ///
    /// The sample data is initialized to zero.
    pub fn create_template(&self) -> Self {
        let inner = RasterData {
            width: self.inner.width,
            height: self.inner.height,
            channels: self.inner.channels,
            data: vec![0u8; self.inner.data.len()],
        };
        Raster {
            inner: Arc::new(inner),
        }
    }

    /// Check if two rasters have the same width, height, and channels.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.channels == other.inner.channels
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via `Arc`, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        let inner = RasterData {
            width: self.inner.width,
            height: self.inner.height,
            channels: self.inner.channels,
            data: self.inner.data.clone(),
        };
        Raster {
            inner: Arc::new(inner),
        }
    }

    /// Try to get mutable access to the sample data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always copies, regardless of the reference count.
    pub fn to_mut(&self) -> RasterMut {
        let inner = RasterData {
            width: self.inner.width,
            height: self.inner.height,
            channels: self.inner.channels,
            data: self.inner.data.clone(),
        };
        RasterMut { inner }
    }
}

/// Mutable raster
///
/// Allows modification of sample data with exclusive access enforced at
/// compile time. Convert back to an immutable [`Raster`] with
/// `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.inner.channels
    }

    /// Get the number of samples in one row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.inner.row_stride()
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the sample data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get mutable access to a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.inner.row_stride();
        let start = y as usize * stride;
        &mut self.inner.data[start..start + stride]
    }

    /// Set every sample to the given value.
    pub fn fill(&mut self, val: u8) {
        self.inner.data.fill(val);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

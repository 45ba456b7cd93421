//! rasterlab-test - Regression test support for rasterlab
//!
//! Provides two things to the workspace's `tests/*_reg.rs` suites:
//!
//! - [`RegParams`]: a small regression harness that counts comparisons,
//!   records failures, and honors the `REGTEST_MODE` environment
//!   variable ("display" runs without failing).
//! - Synthetic image fixtures: deterministic gradients, checkerboards,
//!   and seeded noise. Decoding real image files is outside this
//!   library, so the fixtures are generated in memory and are identical
//!   on every run.
//!
//! # Usage
//!
//! ```
//! use rasterlab_test::{RegParams, gradient_gray};
//!
//! let mut rp = RegParams::new("example");
//! let img = gradient_gray(32, 32);
//! rp.compare_values(32.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::{RegParams, RegTestMode};

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rasterlab_core::{Channels, Raster};

/// A horizontal grayscale ramp from 0 at the left edge to 255 at the
/// right edge.
///
/// # Panics
///
/// Panics if either dimension is 0 (fixtures are test-only code).
pub fn gradient_gray(width: u32, height: u32) -> Raster {
    let span = width.max(2) - 1;
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for _y in 0..height {
        for x in 0..width {
            data.push((x * 255 / span) as u8);
        }
    }
    Raster::from_vec(width, height, Channels::Gray, data).expect("valid fixture dimensions")
}

/// A black/white checkerboard with square tiles of the given size.
///
/// # Panics
///
/// Panics if a dimension or the tile size is 0.
pub fn checkerboard(width: u32, height: u32, tile: u32) -> Raster {
    assert!(tile > 0, "tile size must be > 0");
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let on = (x / tile + y / tile) % 2 == 0;
            data.push(if on { 255 } else { 0 });
        }
    }
    Raster::from_vec(width, height, Channels::Gray, data).expect("valid fixture dimensions")
}

/// A grayscale image of uniform random samples from a seeded generator.
///
/// The same seed always produces the same image, so statistical
/// assertions stay reproducible.
pub fn noise_gray(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width as usize * height as usize)
        .map(|_| rng.random::<u8>())
        .collect();
    Raster::from_vec(width, height, Channels::Gray, data).expect("valid fixture dimensions")
}

/// An RGB image of uniform random samples from a seeded generator.
pub fn noise_rgb(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width as usize * height as usize * 3)
        .map(|_| rng.random::<u8>())
        .collect();
    Raster::from_vec(width, height, Channels::Rgb, data).expect("valid fixture dimensions")
}

//! Convolution operations
//!
//! The generic 2D correlation engine underlying box smoothing, Gaussian
//! smoothing, unsharp masking and edge detection. Channels are
//! processed as independent planes and never mixed.
//!
//! # Border handling
//!
//! Neighborhood samples falling outside the image are taken from the
//! mirror-reflected in-bounds coordinate: position -1 reads position 0,
//! position -2 reads position 1, and symmetrically past the far edge.
//! This keeps output dimensions equal to the input and avoids the edge
//! darkening that zero padding would cause under a normalized kernel.

use crate::{FilterResult, Kernel};
use rasterlab_core::Raster;

/// Mirror an out-of-range coordinate back into `[0, n)`.
///
/// The reflection is re-applied until the coordinate lands in range, so
/// kernels wider than the image stay defined.
#[inline]
pub(crate) fn reflect(mut i: i64, n: i64) -> usize {
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - 1 - i;
        } else {
            return i as usize;
        }
    }
}

/// Correlate one grayscale plane, returning raw floating-point sums.
///
/// Shared by [`convolve`] and the Sobel filter, which must see signed
/// gradient values before any rounding or clamping.
pub(crate) fn correlate_gray(gray: &Raster, kernel: &Kernel) -> Vec<f32> {
    let w = gray.width() as i64;
    let h = gray.height() as i64;
    let k = kernel.size() as i64;
    let half = kernel.half() as i64;
    let kdata = kernel.data();
    let src = gray.data();

    let mut out = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for ky in 0..k {
                let sy = reflect(y + ky - half, h);
                let row = &src[sy * w as usize..(sy + 1) * w as usize];
                for kx in 0..k {
                    let sx = reflect(x + kx - half, w);
                    sum += row[sx] as f32 * kdata[(ky * k + kx) as usize];
                }
            }
            out.push(sum);
        }
    }
    out
}

/// Convolve a raster with a kernel.
///
/// Each output sample is the weighted sum over the kernel-sized
/// neighborhood centered on that pixel, computed one channel plane at a
/// time, rounded to nearest and clamped to [0, 255]. The output has the
/// input's dimensions and channel count.
pub fn convolve(raster: &Raster, kernel: &Kernel) -> FilterResult<Raster> {
    let w = raster.width() as i64;
    let h = raster.height() as i64;
    let c = raster.channels().count() as usize;
    let k = kernel.size() as i64;
    let half = kernel.half() as i64;
    let kdata = kernel.data();
    let src = raster.data();
    let stride = raster.row_stride();

    let out = raster.create_template();
    let mut out_mut = out.try_into_mut().unwrap();
    let dst = out_mut.data_mut();

    for y in 0..h {
        for x in 0..w {
            for ch in 0..c {
                let mut sum = 0.0f32;
                for ky in 0..k {
                    let sy = reflect(y + ky - half, h);
                    let row = &src[sy * stride..(sy + 1) * stride];
                    for kx in 0..k {
                        let sx = reflect(x + kx - half, w);
                        sum += row[sx * c + ch] as f32 * kdata[(ky * k + kx) as usize];
                    }
                }
                dst[(y as usize * stride) + x as usize * c + ch] =
                    sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(out_mut.into())
}

/// Apply box (average) smoothing with a `size x size` uniform kernel.
///
/// # Errors
///
/// Returns [`crate::FilterError::InvalidKernel`] if `size` is even.
pub fn box_blur(raster: &Raster, size: u32) -> FilterResult<Raster> {
    let kernel = Kernel::box_kernel(size)?;
    convolve(raster, &kernel)
}

/// Apply Gaussian smoothing.
///
/// # Errors
///
/// Returns an error if `size` is even or `sigma` is not positive.
pub fn gaussian_blur(raster: &Raster, size: u32, sigma: f32) -> FilterResult<Raster> {
    let kernel = Kernel::gaussian(size, sigma)?;
    convolve(raster, &kernel)
}

//! Point transforms and unsharp masking
//!
//! Per-pixel, context-free mappings expressed as 256-entry tone curves
//! plus the Gaussian-based unsharp mask. Tone curves are applied to
//! each sample independently, so RGB input keeps its channel count and
//! channels never mix.

use crate::convolve::gaussian_blur;
use crate::{FilterError, FilterResult};
use rasterlab_core::Raster;

/// A 256-entry lookup table mapping input samples to output samples.
pub type TrcLut = [u8; 256];

/// Build the photographic negative curve, `out = 255 - in`.
pub fn invert_trc() -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = 255 - i as u8;
    }
    lut
}

/// Build the logarithmic curve, `out = round(c * ln(1 + in))`.
///
/// The constant `c = 255 / ln(256)` pins both endpoints: 0 maps to 0
/// and 255 maps to 255. The curve is monotonic non-decreasing and
/// expands dark tones at the expense of highlights.
pub fn log_trc() -> TrcLut {
    let c = 255.0f32 / 256.0f32.ln();
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let mapped = (c * (1.0 + i as f32).ln()).round();
        *entry = mapped.clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Build a power-law curve, `out = round(255 * (in/255)^gamma)`.
///
/// Gamma below 1 brightens, above 1 darkens; gamma 1 is the identity
/// within rounding.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] unless `gamma` is finite
/// and > 0.
pub fn gamma_trc(gamma: f32) -> FilterResult<TrcLut> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "gamma must be > 0, got {gamma}"
        )));
    }

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f32 / 255.0;
        let mapped = (255.0 * x.powf(gamma)).round();
        *entry = mapped.clamp(0.0, 255.0) as u8;
    }
    Ok(lut)
}

/// Map every sample of a raster through a tone curve.
///
/// The output has the input's dimensions and channel count.
pub fn apply_trc(raster: &Raster, lut: &TrcLut) -> Raster {
    let data = raster.data().iter().map(|&v| lut[v as usize]).collect();
    // Same shape as the input, so construction cannot fail
    Raster::from_vec(raster.width(), raster.height(), raster.channels(), data).unwrap()
}

/// Photographic negative of a raster.
pub fn invert(raster: &Raster) -> Raster {
    apply_trc(raster, &invert_trc())
}

/// Logarithmic intensity transform.
pub fn log_transform(raster: &Raster) -> Raster {
    apply_trc(raster, &log_trc())
}

/// Power-law (gamma) intensity transform.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] unless `gamma` is finite
/// and > 0.
pub fn gamma_transform(raster: &Raster, gamma: f32) -> FilterResult<Raster> {
    Ok(apply_trc(raster, &gamma_trc(gamma)?))
}

/// Sharpen by unsharp masking.
///
/// Computes a Gaussian blur of the input and adds back the high-pass
/// difference: `out = clamp(in + amount * (in - blurred))` per sample
/// per channel. Larger `amount` increases edge contrast; `amount` 0
/// returns an identical copy.
///
/// # Arguments
///
/// * `raster` - Input image (gray or RGB)
/// * `size` - Gaussian kernel size (odd)
/// * `sigma` - Gaussian standard deviation, > 0
/// * `amount` - Fraction of the high-pass signal to add back, >= 0
pub fn unsharp_mask(raster: &Raster, size: u32, sigma: f32, amount: f32) -> FilterResult<Raster> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "amount must be >= 0, got {amount}"
        )));
    }
    if amount == 0.0 {
        return Ok(raster.deep_clone());
    }

    let blurred = gaussian_blur(raster, size, sigma)?;

    let out = raster.create_template();
    let mut out_mut = out.try_into_mut().unwrap();
    let dst = out_mut.data_mut();
    for (i, (&src, &blur)) in raster.data().iter().zip(blurred.data()).enumerate() {
        let sharpened = src as f32 + amount * (src as f32 - blur as f32);
        dst[i] = sharpened.round().clamp(0.0, 255.0) as u8;
    }

    Ok(out_mut.into())
}

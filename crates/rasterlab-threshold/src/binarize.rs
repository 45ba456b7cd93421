//! Binarization
//!
//! Converts the grayscale view of a raster to a two-level image: 255
//! where the intensity reaches the threshold, 0 elsewhere. The output
//! stays in the 8-bit buffer model rather than a packed bit format.

use crate::ThresholdResult;
use crate::otsu::otsu_threshold;
use rasterlab_core::{Channels, Raster};

/// Binarize with a fixed threshold.
///
/// Pixels whose grayscale intensity is `>= threshold` become 255, the
/// rest become 0. The output is always single-channel, regardless of
/// the input's channel count.
pub fn threshold_to_binary(raster: &Raster, threshold: u8) -> ThresholdResult<Raster> {
    let gray = raster.to_gray();
    let data = gray
        .data()
        .iter()
        .map(|&v| if v >= threshold { 255 } else { 0 })
        .collect();
    Ok(Raster::from_vec(
        gray.width(),
        gray.height(),
        Channels::Gray,
        data,
    )?)
}

/// Compute the Otsu threshold of a raster.
///
/// Builds the grayscale histogram and runs the selector over it.
pub fn compute_otsu_threshold(raster: &Raster) -> ThresholdResult<u8> {
    otsu_threshold(&raster.gray_histogram())
}

/// Binarize with an automatically selected threshold.
///
/// Returns the binary image together with the threshold Otsu chose, so
/// a shell can report it to the user.
pub fn threshold_otsu(raster: &Raster) -> ThresholdResult<(Raster, u8)> {
    let threshold = compute_otsu_threshold(raster)?;
    let binary = threshold_to_binary(raster, threshold)?;
    Ok((binary, threshold))
}

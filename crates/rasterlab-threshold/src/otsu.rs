//! Otsu's automatic threshold selection
//!
//! Picks the global threshold that maximizes the between-class variance
//! of the intensity histogram.

use crate::{ThresholdError, ThresholdResult};
use rasterlab_core::Histogram;

/// Select a threshold from a histogram by Otsu's method.
///
/// For every candidate `t` the histogram is split into the classes
/// `[0, t]` and `[t+1, 255]`; the returned threshold maximizes
/// `w0 * w1 * (mu0 - mu1)²`, with ties broken by the smallest `t`.
///
/// A histogram with a single occupied bin has no meaningful split; that
/// bin's intensity is returned directly.
///
/// # Errors
///
/// Returns [`ThresholdError::EmptyHistogram`] if every bin is zero.
pub fn otsu_threshold(hist: &Histogram) -> ThresholdResult<u8> {
    let (lo, hi) = hist.nonzero_range().ok_or(ThresholdError::EmptyHistogram)?;
    if lo == hi {
        // Single-intensity image
        return Ok(lo);
    }

    let total_count = hist.total();
    let total = total_count as f64;
    let sum_all: f64 = hist
        .counts()
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut count0 = 0u64;
    let mut sum0 = 0.0f64;
    let mut best_t = 0u8;
    let mut best_var = -1.0f64;

    for t in 0..256usize {
        count0 += hist[t];
        sum0 += t as f64 * hist[t] as f64;

        let count1 = total_count - count0;
        let var = if count0 == 0 || count1 == 0 {
            0.0
        } else {
            let w0 = count0 as f64 / total;
            let w1 = count1 as f64 / total;
            let mu0 = sum0 / count0 as f64;
            let mu1 = (sum_all - sum0) / count1 as f64;
            w0 * w1 * (mu0 - mu1) * (mu0 - mu1)
        };

        // Strict comparison keeps the smallest t on ties
        if var > best_var {
            best_var = var;
            best_t = t as u8;
        }
    }

    Ok(best_t)
}

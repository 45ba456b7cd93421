//! Histogram generation
//!
//! Computes the 256-bin intensity distribution of a raster's grayscale
//! view. Consumed by the automatic threshold selector and by histogram
//! displays.

use super::{Channels, Raster, convert::luma};

/// A 256-bin intensity histogram.
///
/// Bin `i` counts the pixels of the grayscale view whose intensity is
/// exactly `i`. The sum of all bins equals `width * height` of the
/// raster the histogram was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; 256],
}

impl Histogram {
    /// Create a histogram from raw bin counts.
    pub fn from_counts(counts: [u64; 256]) -> Self {
        Histogram { counts }
    }

    /// Get the bin counts.
    #[inline]
    pub fn counts(&self) -> &[u64; 256] {
        &self.counts
    }

    /// Get the total pixel count (sum of all bins).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Get the lowest and highest occupied intensity.
    ///
    /// Returns `None` if every bin is empty.
    pub fn nonzero_range(&self) -> Option<(u8, u8)> {
        let lo = self.counts.iter().position(|&c| c > 0)?;
        let hi = self.counts.iter().rposition(|&c| c > 0)?;
        Some((lo as u8, hi as u8))
    }
}

impl std::ops::Index<usize> for Histogram {
    type Output = u64;

    #[inline]
    fn index(&self, index: usize) -> &u64 {
        &self.counts[index]
    }
}

impl Raster {
    /// Compute the grayscale histogram of this raster.
    ///
    /// RGB input is reduced with the shared luma rule on the fly; no
    /// intermediate buffer is allocated. Raster construction already
    /// rejects empty dimensions, so this operation cannot fail.
    pub fn gray_histogram(&self) -> Histogram {
        let mut counts = [0u64; 256];
        match self.channels() {
            Channels::Gray => {
                for &v in self.data() {
                    counts[v as usize] += 1;
                }
            }
            Channels::Rgb => {
                for px in self.data().chunks_exact(3) {
                    counts[luma(px[0], px[1], px[2]) as usize] += 1;
                }
            }
        }
        Histogram::from_counts(counts)
    }
}

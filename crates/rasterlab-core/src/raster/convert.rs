//! Grayscale conversion
//!
//! Reduces an RGB raster to a single luma channel. The same rule is
//! used everywhere a grayscale view is needed (histograms, threshold
//! operations, edge detection), so their results agree with each other.

use super::{Channels, Raster};

/// Convert an RGB triple to luma.
///
/// Integer weighted sum `(77*R + 150*G + 29*B) >> 8`. The weights
/// approximate 0.299/0.587/0.114 and sum to 256, so pure white maps to
/// 255 and pure black to 0.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((77 * r as u32 + 150 * g as u32 + 29 * b as u32) >> 8) as u8
}

impl Raster {
    /// Get a single-channel grayscale view of this raster.
    ///
    /// Grayscale input is returned as a shared clone without copying.
    /// RGB input is reduced pixel-by-pixel with [`luma`].
    pub fn to_gray(&self) -> Raster {
        match self.channels() {
            Channels::Gray => self.clone(),
            Channels::Rgb => {
                let w = self.width();
                let h = self.height();
                let mut data = Vec::with_capacity(w as usize * h as usize);
                for px in self.data().chunks_exact(3) {
                    data.push(luma(px[0], px[1], px[2]));
                }
                // Dimensions and length are valid by construction
                Raster::from_vec(w, h, Channels::Gray, data).unwrap()
            }
        }
    }
}

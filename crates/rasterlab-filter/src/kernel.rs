//! Convolution kernels
//!
//! Square, odd-sized weight matrices used by the convolution engine.
//! Smoothing kernels (box, Gaussian) are normalized to sum 1 at
//! construction; the Sobel gradient kernels are fixed and unnormalized.

use crate::{FilterError, FilterResult};

/// A square 2D convolution kernel with odd side length.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Side length (odd)
    size: u32,
    /// Kernel weights (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    fn check_size(size: u32) -> FilterResult<()> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel size must be odd and nonzero, got {size}"
            )));
        }
        Ok(())
    }

    /// Create a kernel from a slice of weights.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `size` is even or zero,
    /// or if `data` does not contain exactly `size * size` weights.
    pub fn from_slice(size: u32, data: &[f32]) -> FilterResult<Self> {
        Self::check_size(size)?;
        let expected = (size * size) as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} weights for a {size}x{size} kernel, got {}",
                data.len()
            )));
        }
        Ok(Kernel {
            size,
            data: data.to_vec(),
        })
    }

    /// Create a box (averaging) kernel.
    ///
    /// All weights are `1 / (size * size)`, so the kernel sums to 1.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        Self::check_size(size)?;
        let n = (size * size) as usize;
        let weight = 1.0 / n as f32;
        Ok(Kernel {
            size,
            data: vec![weight; n],
        })
    }

    /// Create a Gaussian smoothing kernel.
    ///
    /// Weights are `exp(-(dx² + dy²) / (2σ²))` sampled at integer
    /// offsets from the kernel center, then normalized to sum 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for an even size and
    /// [`FilterError::InvalidParameters`] unless `sigma` is finite
    /// and > 0.
    pub fn gaussian(size: u32, sigma: f32) -> FilterResult<Self> {
        Self::check_size(size)?;
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "sigma must be > 0, got {sigma}"
            )));
        }

        let half = (size / 2) as i32;
        let denom = 2.0 * sigma * sigma;
        let mut data = Vec::with_capacity((size * size) as usize);
        for dy in -half..=half {
            for dx in -half..=half {
                let d2 = (dx * dx + dy * dy) as f32;
                data.push((-d2 / denom).exp());
            }
        }

        let mut kernel = Kernel { size, data };
        kernel.normalize();
        Ok(kernel)
    }

    /// The fixed 3x3 Sobel kernel for horizontal gradients.
    pub fn sobel_x() -> Self {
        Kernel {
            size: 3,
            data: vec![-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0],
        }
    }

    /// The fixed 3x3 Sobel kernel for vertical gradients.
    pub fn sobel_y() -> Self {
        Kernel {
            size: 3,
            data: vec![-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0],
        }
    }

    /// Get the side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the distance from the center to the edge, `(size - 1) / 2`.
    #[inline]
    pub fn half(&self) -> u32 {
        self.size / 2
    }

    /// Get the kernel weights.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a weight at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.data[(y * self.size + x) as usize])
    }

    /// Get the sum of all weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Scale the weights so they sum to 1.
    ///
    /// Kernels whose sum is near zero are left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() < 1e-6 {
            return;
        }
        for w in &mut self.data {
            *w /= sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_validation() {
        assert!(Kernel::from_slice(3, &[0.0; 9]).is_ok());
        assert!(Kernel::from_slice(1, &[1.0]).is_ok());
        assert!(Kernel::from_slice(2, &[0.0; 4]).is_err());
        assert!(Kernel::from_slice(0, &[]).is_err());
        assert!(Kernel::from_slice(3, &[0.0; 8]).is_err());
    }

    #[test]
    fn test_box_kernel_sums_to_one() {
        for size in [1, 3, 5, 7, 9, 11] {
            let kernel = Kernel::box_kernel(size).unwrap();
            assert_eq!(kernel.size(), size);
            assert!((kernel.sum() - 1.0).abs() < 1e-5, "size {size}");
        }
        assert!(Kernel::box_kernel(4).is_err());
    }

    #[test]
    fn test_gaussian_kernel() {
        let kernel = Kernel::gaussian(5, 1.0).unwrap();
        assert!((kernel.sum() - 1.0).abs() < 1e-5);

        // The center weight dominates its neighbors
        let center = kernel.get(2, 2).unwrap();
        assert!(center > kernel.get(1, 2).unwrap());
        assert!(center > kernel.get(0, 0).unwrap());

        // Symmetry about the center
        assert_eq!(kernel.get(0, 2), kernel.get(4, 2));
        assert_eq!(kernel.get(2, 0), kernel.get(2, 4));
    }

    #[test]
    fn test_gaussian_invalid_sigma() {
        assert!(Kernel::gaussian(3, 0.0).is_err());
        assert!(Kernel::gaussian(3, -1.0).is_err());
        assert!(Kernel::gaussian(3, f32::NAN).is_err());
        assert!(Kernel::gaussian(4, 1.0).is_err());
    }

    #[test]
    fn test_sobel_kernels() {
        let gx = Kernel::sobel_x();
        let gy = Kernel::sobel_y();
        assert_eq!(gx.size(), 3);
        assert_eq!(gx.sum(), 0.0);
        assert_eq!(gy.sum(), 0.0);
        assert_eq!(gx.get(0, 0), Some(-1.0));
        assert_eq!(gx.get(2, 1), Some(2.0));
        assert_eq!(gy.get(1, 0), Some(-2.0));
        assert_eq!(gy.get(1, 2), Some(2.0));
    }

    #[test]
    fn test_normalize_skips_zero_sum() {
        let mut kernel = Kernel::sobel_x();
        let before = kernel.data().to_vec();
        kernel.normalize();
        assert_eq!(kernel.data(), &before[..]);
    }
}

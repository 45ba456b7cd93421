//! Convolution regression test
//!
//! Covers box and Gaussian smoothing over the standard fixtures:
//! shape preservation, the degenerate size-1 identity, and variance
//! reduction on seeded noise.

use rasterlab_core::Raster;
use rasterlab_filter::{Kernel, box_blur, convolve, gaussian_blur};
use rasterlab_test::{RegParams, gradient_gray, noise_gray};

fn pixel_variance(raster: &Raster) -> f64 {
    let n = raster.data().len() as f64;
    let mean = raster.data().iter().map(|&v| v as f64).sum::<f64>() / n;
    raster
        .data()
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n
}

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    let pixs = noise_gray(64, 64, 11);
    let w = pixs.width();
    let h = pixs.height();

    // --- Test 1: box blur preserves shape ---
    for &size in &[1, 3, 5, 11] {
        let blurred = box_blur(&pixs, size).unwrap_or_else(|e| panic!("box_blur {size}: {e}"));
        rp.compare_values(w as f64, blurred.width() as f64, 0.0);
        rp.compare_values(h as f64, blurred.height() as f64, 0.0);
    }

    // --- Test 2: Gaussian blur preserves shape ---
    for &(size, sigma) in &[(3, 1.0), (5, 1.5), (9, 2.0)] {
        let blurred = gaussian_blur(&pixs, size, sigma).expect("gaussian_blur");
        rp.compare_values(w as f64, blurred.width() as f64, 0.0);
        rp.compare_values(h as f64, blurred.height() as f64, 0.0);
    }

    // --- Test 3: identity kernel reproduces the input ---
    let identity = Kernel::from_slice(3, &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
    let conv = convolve(&pixs, &identity).expect("convolve identity");
    rp.compare_rasters(&pixs, &conv);

    // --- Test 4: size-1 smoothing is the identity ---
    rp.compare_rasters(&pixs, &box_blur(&pixs, 1).unwrap());
    rp.compare_rasters(&pixs, &gaussian_blur(&pixs, 1, 1.0).unwrap());

    // --- Test 5: larger kernels reduce variance on noise ---
    let var0 = pixel_variance(&pixs);
    let mut prev = var0;
    for &size in &[3, 5, 7] {
        let var = pixel_variance(&box_blur(&pixs, size).unwrap());
        let reduced = var < prev;
        rp.compare_values(1.0, if reduced { 1.0 } else { 0.0 }, 0.0);
        eprintln!("  box_blur({size}): variance {prev:.1} -> {var:.1}");
        prev = var;
    }

    // --- Test 6: normalized smoothing keeps a gradient's mean level ---
    let grad = gradient_gray(64, 16);
    let smoothed = gaussian_blur(&grad, 5, 1.2).unwrap();
    let mean = |r: &Raster| r.data().iter().map(|&v| v as f64).sum::<f64>() / r.data().len() as f64;
    rp.compare_values(mean(&grad), mean(&smoothed), 1.0);

    assert!(rp.cleanup(), "convolve regression test failed");
}

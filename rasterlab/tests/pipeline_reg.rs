//! End-to-end pipeline regression test
//!
//! Drives the library the way the interactive shell does: one
//! operation per user action, each replacing the working buffer, with
//! the previous buffer recorded for undo.

use rasterlab::filter::{gaussian_blur, invert, sobel_edge, unsharp_mask};
use rasterlab::threshold::threshold_otsu;
use rasterlab::transform::{ScaleMethod, scale};
use rasterlab::{Channels, EditHistory};
use rasterlab_test::{RegParams, noise_rgb};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // The shell hands us a decoded RGB buffer
    let decoded = noise_rgb(48, 32, 99);
    let mut working = decoded.clone();
    let mut history = EditHistory::new();

    // --- Negative ---
    history.record(working.clone());
    working = invert(&working);
    rp.compare_values(3.0, working.channels().count() as f64, 0.0);

    // --- Gaussian smoothing ---
    history.record(working.clone());
    working = gaussian_blur(&working, 5, 1.2).expect("gaussian_blur");
    rp.compare_values(48.0, working.width() as f64, 0.0);

    // --- Unsharp mask ---
    history.record(working.clone());
    working = unsharp_mask(&working, 5, 1.2, 0.8).expect("unsharp_mask");

    // --- Resize to 150% and back, as the percentage dialog does ---
    history.record(working.clone());
    working = scale(&working, 1.5, 1.5, ScaleMethod::Linear).expect("scale up");
    rp.compare_values(72.0, working.width() as f64, 0.0);
    rp.compare_values(48.0, working.height() as f64, 0.0);

    // --- Undo restores the pre-resize buffer exactly ---
    let before_undo = working.clone();
    working = history.undo(working).expect("undo available");
    rp.compare_values(48.0, working.width() as f64, 0.0);
    let redone = history.redo(working.clone()).expect("redo available");
    rp.compare_rasters(&before_undo, &redone);

    // --- Sobel then Otsu on the grayscale result ---
    let edges = sobel_edge(&working).expect("sobel");
    rp.compare_values(1.0, edges.channels().count() as f64, 0.0);
    let (binary, threshold) = threshold_otsu(&edges).expect("otsu");
    eprintln!("  otsu threshold on edge map: {threshold}");
    let two_level = binary.data().iter().all(|&v| v == 0 || v == 255);
    rp.compare_values(1.0, if two_level { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, binary.channels().count() as f64, 0.0);

    // --- The original decoded buffer was never mutated ---
    let pristine = noise_rgb(48, 32, 99);
    rp.compare_rasters(&pristine, &decoded);
    assert_eq!(decoded.channels(), Channels::Rgb);

    assert!(rp.cleanup(), "pipeline regression test failed");
}

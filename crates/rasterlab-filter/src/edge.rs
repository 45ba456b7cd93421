//! Sobel edge detection
//!
//! Gradient magnitude of the grayscale view, rescaled to the full
//! intensity range.

use crate::convolve::correlate_gray;
use crate::{FilterResult, Kernel};
use rasterlab_core::{Channels, Raster};

/// Detect edges with the Sobel operator.
///
/// RGB input is reduced to grayscale first. The fixed 3x3 gradient
/// kernels are applied with reflected borders, and the per-pixel
/// magnitude `sqrt(gx² + gy²)` is linearly rescaled so the smallest
/// magnitude in the image maps to 0 and the largest to 255. The rescale
/// is part of the operation's contract: it maximizes visible contrast
/// and makes the result independent of absolute gradient strength. A
/// constant image has no gradient anywhere and yields all zeros.
///
/// The output is always single-channel.
pub fn sobel_edge(raster: &Raster) -> FilterResult<Raster> {
    let gray = raster.to_gray();
    let gx = correlate_gray(&gray, &Kernel::sobel_x());
    let gy = correlate_gray(&gray, &Kernel::sobel_y());

    let mag: Vec<f32> = gx
        .iter()
        .zip(&gy)
        .map(|(&x, &y)| (x * x + y * y).sqrt())
        .collect();

    let min = mag.iter().copied().fold(f32::INFINITY, f32::min);
    let max = mag.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let range = max - min;

    let data = if range <= f32::EPSILON {
        vec![0u8; mag.len()]
    } else {
        mag.iter()
            .map(|&m| ((m - min) / range * 255.0).round() as u8)
            .collect()
    };

    Ok(Raster::from_vec(
        gray.width(),
        gray.height(),
        Channels::Gray,
        data,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sobel_constant_image_is_zero() {
        let raster = Raster::from_vec(8, 8, Channels::Gray, vec![200; 64]).unwrap();
        let edges = sobel_edge(&raster).unwrap();
        assert!(edges.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_sobel_vertical_edge() {
        // Left half black, right half white
        let mut data = Vec::new();
        for _y in 0..8u32 {
            for x in 0..8u32 {
                data.push(if x < 4 { 0 } else { 255 });
            }
        }
        let raster = Raster::from_vec(8, 8, Channels::Gray, data).unwrap();
        let edges = sobel_edge(&raster).unwrap();

        assert_eq!(edges.channels(), Channels::Gray);
        // Full-range normalization puts the strongest response at 255
        // on the edge columns and 0 in the flat interior
        assert_eq!(edges.sample_unchecked(3, 4, 0), 255);
        assert_eq!(edges.sample_unchecked(4, 4, 0), 255);
        assert_eq!(edges.sample_unchecked(0, 4, 0), 0);
        assert_eq!(edges.sample_unchecked(7, 4, 0), 0);
    }

    #[test]
    fn test_sobel_horizontal_edge() {
        let mut data = Vec::new();
        for y in 0..8u32 {
            for _x in 0..8u32 {
                data.push(if y < 4 { 0 } else { 255 });
            }
        }
        let raster = Raster::from_vec(8, 8, Channels::Gray, data).unwrap();
        let edges = sobel_edge(&raster).unwrap();

        assert_eq!(edges.sample_unchecked(4, 3, 0), 255);
        assert_eq!(edges.sample_unchecked(4, 4, 0), 255);
        assert_eq!(edges.sample_unchecked(4, 0, 0), 0);
    }

    #[test]
    fn test_sobel_rgb_input_gives_gray_output() {
        let mut data = Vec::new();
        for _y in 0..4u32 {
            for x in 0..4u32 {
                let v = if x < 2 { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v]);
            }
        }
        let raster = Raster::from_vec(4, 4, Channels::Rgb, data).unwrap();
        let edges = sobel_edge(&raster).unwrap();

        assert_eq!(edges.channels(), Channels::Gray);
        assert_eq!(edges.width(), 4);
        assert_eq!(edges.height(), 4);
    }
}

//! Sobel edge detection on the luma channel
//!
//! Edge-weighted sampling needs a per-pixel measure of local contrast. The
//! standard 3x3 Sobel operator on Rec. 601 luma provides it: the gradient
//! magnitude is large across hard edges and ~0 on flat regions.

use crate::raster::Raster;

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Compute the Sobel gradient magnitude for every raster pixel.
///
/// Returns a row-major `width * height` buffer. Boundary pixels, which lack
/// a full 3x3 neighborhood, get strength 0. Computed once per raster; the
/// sampler reads it for every cell.
pub(crate) fn edge_strengths(raster: &Raster) -> Vec<f32> {
    let width = raster.width();
    let height = raster.height();

    let luma: Vec<f32> = (0..height)
        .flat_map(|y| (0..width).map(move |x| raster.rgb(x, y).luma()))
        .collect();

    let mut strengths = vec![0.0f32; width * height];
    if width < 3 || height < 3 {
        return strengths;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;
            for dy in 0..3 {
                for dx in 0..3 {
                    let v = luma[(y + dy - 1) * width + (x + dx - 1)];
                    gx += v * SOBEL_X[dy][dx];
                    gy += v * SOBEL_Y[dy][dx];
                }
            }
            strengths[y * width + x] = (gx * gx + gy * gy).sqrt();
        }
    }

    strengths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_flat_region_has_zero_strength() {
        let pixels = vec![Rgb::new(200, 50, 10); 25];
        let raster = Raster::from_pixels(5, 5, &pixels).unwrap();
        let strengths = edge_strengths(&raster);
        assert!(strengths.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_boundary_pixels_are_zero() {
        // Vertical black/white split: interior pixels near the split have
        // strong gradients, but the frame must stay 0.
        let pixels: Vec<Rgb> = (0..25)
            .map(|i| {
                if i % 5 < 2 {
                    Rgb::new(0, 0, 0)
                } else {
                    Rgb::new(255, 255, 255)
                }
            })
            .collect();
        let raster = Raster::from_pixels(5, 5, &pixels).unwrap();
        let strengths = edge_strengths(&raster);

        for x in 0..5 {
            assert_eq!(strengths[x], 0.0, "top row must be zero");
            assert_eq!(strengths[4 * 5 + x], 0.0, "bottom row must be zero");
        }
        for y in 0..5 {
            assert_eq!(strengths[y * 5], 0.0, "left column must be zero");
            assert_eq!(strengths[y * 5 + 4], 0.0, "right column must be zero");
        }

        // The split between columns 1 and 2 crosses interior pixels
        assert!(strengths[2 * 5 + 2] > 0.0, "edge pixel should have strength");
    }

    #[test]
    fn test_tiny_raster_all_zero() {
        let pixels = vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
        let raster = Raster::from_pixels(2, 1, &pixels).unwrap();
        assert!(edge_strengths(&raster).iter().all(|&s| s == 0.0));
    }
}

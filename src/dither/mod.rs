//! Floyd-Steinberg error diffusion dithering
//!
//! Dithering runs over the full raster before grid sampling (never
//! per-cell). Each pixel is replaced by its nearest palette color and the
//! signed quantization error is pushed onto unprocessed neighbors,
//! simulating intermediate tones with only the palette's colors.
//!
//! # Traversal order
//!
//! Strictly row-major, top-to-bottom, left-to-right. The order is
//! load-bearing: later pixels consume error propagated by earlier ones, so
//! any reordering (serpentine scanning included) changes the output.
//!
//! # Working values
//!
//! Error accumulates directly in the 8-bit working raster: every
//! contribution is clamped to 0..=255 and rounded at the moment it is
//! added. Fractional error below half a channel step is therefore
//! discarded rather than carried — the byte-domain semantics of the
//! interactive editor this engine feeds.

mod kernel;

pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::color::Rgb;
use crate::matcher::{DistanceMetric, Matcher};
use crate::palette::Palette;
use crate::raster::Raster;

/// Dither a raster against a palette with the Floyd-Steinberg kernel.
///
/// Returns a new raster in which every pixel is an exact palette color
/// (alpha is passed through unchanged). Quantization uses the precise
/// (Lab) matching metric.
///
/// An empty palette degenerates to the matcher's sentinel: every pixel
/// becomes the sentinel gray.
pub fn dither(raster: &Raster, palette: &Palette) -> Raster {
    dither_with_kernel(raster, palette, &FLOYD_STEINBERG)
}

/// Error diffusion parameterized by kernel.
pub(crate) fn dither_with_kernel(raster: &Raster, palette: &Palette, kernel: &Kernel) -> Raster {
    let width = raster.width();
    let height = raster.height();
    let mut rgba = raster.rgba().to_vec();

    tracing::debug!(width, height, palette_len = palette.len(), "dithering raster");

    if palette.is_empty() {
        // Matcher policy: the sentinel gray matches everything at distance
        // 0, so the whole output collapses to it and no error survives.
        let sentinel = crate::matcher::fallback_color().rgb;
        for pixel in rgba.chunks_exact_mut(4) {
            pixel[0] = sentinel.r;
            pixel[1] = sentinel.g;
            pixel[2] = sentinel.b;
        }
        return raster.with_rgba(rgba);
    }

    let matcher = Matcher::new(palette, DistanceMetric::Lab);
    let divisor = f32::from(kernel.divisor);

    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) * 4;

            // Current working color: source value plus any error already
            // diffused into this pixel.
            let old = Rgb::new(rgba[i], rgba[i + 1], rgba[i + 2]);
            let Some((index, _)) = matcher.nearest_index(old) else {
                unreachable!("palette checked non-empty above")
            };
            let new = palette.color(index as usize).rgb;

            rgba[i] = new.r;
            rgba[i + 1] = new.g;
            rgba[i + 2] = new.b;

            let error = [
                f32::from(old.r) - f32::from(new.r),
                f32::from(old.g) - f32::from(new.g),
                f32::from(old.b) - f32::from(new.b),
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + i64::from(dx);
                let ny = y as i64 + i64::from(dy);
                // Out-of-raster neighbors are skipped; their share of the
                // error is dropped, not wrapped.
                if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let ni = (ny as usize * width + nx as usize) * 4;
                let factor = f32::from(weight) / divisor;
                for c in 0..3 {
                    let value = f32::from(rgba[ni + c]) + error[c] * factor;
                    rgba[ni + c] = value.clamp(0.0, 255.0).round() as u8;
                }
            }
        }
    }

    raster.with_rgba(rgba)
}

//! Grid sampling: downsampling a raster into cell colors
//!
//! The sampler partitions a raster into `grid_width x grid_height` cells
//! and computes one representative color per cell, either as a plain
//! arithmetic mean or as a Sobel-edge-weighted mean that biases toward
//! high-contrast content (preserving detail a plain average would smear).
//!
//! Cell extents use integer division: `cell_w = raster_w / grid_width`.
//! Raster pixels beyond `grid_width * cell_w` (or the vertical equivalent)
//! are truncated — the sampler never visits them and never pads.

mod sobel;

use thiserror::Error;

use crate::color::Rgb;
use crate::raster::Raster;

pub(crate) use sobel::edge_strengths;

/// Error type for grid geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Requested grid has a zero dimension
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroGrid {
        /// Requested grid width (columns)
        width: usize,
        /// Requested grid height (rows)
        height: usize,
    },
}

/// Configuration for grid sampling.
///
/// # Example
///
/// ```
/// use beadloom::SampleOptions;
///
/// // Plain averaging (default)
/// let plain = SampleOptions::new();
///
/// // Edge-weighted averaging with the default weight
/// let weighted = SampleOptions::new().edge_weighting(true);
/// ```
#[derive(Debug, Clone)]
pub struct SampleOptions {
    /// Weight cell pixels by their Sobel edge strength.
    ///
    /// Default: `false`
    pub edge_weighting: bool,

    /// Edge emphasis factor; each pixel's weight is
    /// `1 + (edge_strength / 255) * edge_weight`.
    ///
    /// Only read when `edge_weighting` is on. Default: `2.0`
    pub edge_weight: f32,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            edge_weighting: false,
            edge_weight: 2.0,
        }
    }
}

impl SampleOptions {
    /// Create sample options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable edge-weighted averaging.
    #[inline]
    pub fn edge_weighting(mut self, enabled: bool) -> Self {
        self.edge_weighting = enabled;
        self
    }

    /// Set the edge emphasis factor.
    #[inline]
    pub fn edge_weight(mut self, weight: f32) -> Self {
        self.edge_weight = weight;
        self
    }
}

/// Downsample a raster into per-cell representative colors.
///
/// Returns `grid_width * grid_height` colors in row-major order. These are
/// pre-match sampled colors; palette matching happens afterwards.
///
/// A cell with no contributing pixels (possible when the grid is larger
/// than the raster, making the integer cell extent 0) yields white.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroGrid`] when either grid dimension is 0.
pub fn sample(
    raster: &Raster,
    grid_width: usize,
    grid_height: usize,
    options: &SampleOptions,
) -> Result<Vec<Rgb>, GeometryError> {
    if grid_width == 0 || grid_height == 0 {
        return Err(GeometryError::ZeroGrid {
            width: grid_width,
            height: grid_height,
        });
    }

    let cell_w = raster.width() / grid_width;
    let cell_h = raster.height() / grid_height;

    let edges = if options.edge_weighting {
        Some(edge_strengths(raster))
    } else {
        None
    };

    tracing::debug!(
        grid_width,
        grid_height,
        cell_w,
        cell_h,
        edge_weighting = options.edge_weighting,
        "sampling raster into grid"
    );

    let mut colors = Vec::with_capacity(grid_width * grid_height);
    for row in 0..grid_height {
        for col in 0..grid_width {
            let start_x = col * cell_w;
            let start_y = row * cell_h;
            let color = match &edges {
                Some(edges) => weighted_cell_average(
                    raster,
                    edges,
                    start_x,
                    start_y,
                    cell_w,
                    cell_h,
                    options.edge_weight,
                ),
                None => cell_average(raster, start_x, start_y, cell_w, cell_h),
            };
            colors.push(color);
        }
    }
    Ok(colors)
}

/// Degenerate-cell fallback: white.
const EMPTY_CELL: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Plain arithmetic mean of the cell's pixels, rounded per channel.
fn cell_average(raster: &Raster, start_x: usize, start_y: usize, w: usize, h: usize) -> Rgb {
    let mut total = [0u64; 3];
    let mut count = 0u64;

    for y in start_y..start_y + h {
        for x in start_x..start_x + w {
            let p = raster.rgb(x, y);
            total[0] += u64::from(p.r);
            total[1] += u64::from(p.g);
            total[2] += u64::from(p.b);
            count += 1;
        }
    }

    if count == 0 {
        return EMPTY_CELL;
    }
    Rgb::new(
        round_div(total[0], count),
        round_div(total[1], count),
        round_div(total[2], count),
    )
}

/// Edge-weighted mean: pixels on high-contrast content count for more.
fn weighted_cell_average(
    raster: &Raster,
    edges: &[f32],
    start_x: usize,
    start_y: usize,
    w: usize,
    h: usize,
    edge_weight: f32,
) -> Rgb {
    let mut total = [0.0f64; 3];
    let mut total_weight = 0.0f64;

    for y in start_y..start_y + h {
        for x in start_x..start_x + w {
            let p = raster.rgb(x, y);
            let strength = edges[y * raster.width() + x];
            let weight = f64::from(1.0 + (strength / 255.0) * edge_weight);
            total[0] += f64::from(p.r) * weight;
            total[1] += f64::from(p.g) * weight;
            total[2] += f64::from(p.b) * weight;
            total_weight += weight;
        }
    }

    if total_weight == 0.0 {
        return EMPTY_CELL;
    }
    Rgb::new(
        (total[0] / total_weight).round() as u8,
        (total[1] / total_weight).round() as u8,
        (total[2] / total_weight).round() as u8,
    )
}

#[inline]
fn round_div(total: u64, count: u64) -> u8 {
    ((total as f64 / count as f64).round()) as u8
}

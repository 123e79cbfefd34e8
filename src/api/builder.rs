//! PatternBuilder -- the primary ergonomic entry point for the crate.
//!
//! [`PatternBuilder`] wraps the conversion pipeline (optional dithering,
//! grid sampling, palette matching) behind fluent configuration.

use serde::{Deserialize, Serialize};

use super::error::PatternError;
use crate::dither;
use crate::grid::{Cell, Grid};
use crate::matcher::{DistanceMetric, Matcher};
use crate::palette::Palette;
use crate::raster::Raster;
use crate::sample::{sample, GeometryError, SampleOptions};

/// Physical bead size, used to derive grid dimensions from raster
/// dimensions when no explicit grid size is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadSize {
    /// Mini beads (2.6 mm)
    Mini,
    /// Regular/midi beads (5 mm, the most common)
    #[default]
    Regular,
    /// Maxi beads (10 mm)
    Maxi,
    /// Mega beads (15 mm)
    Mega,
}

impl BeadSize {
    /// Bead diameter in millimeters.
    pub fn diameter(self) -> f32 {
        match self {
            BeadSize::Mini => 2.6,
            BeadSize::Regular => 5.0,
            BeadSize::Maxi => 10.0,
            BeadSize::Mega => 15.0,
        }
    }
}

/// High-level pattern conversion builder.
///
/// # Design
///
/// - Constructor takes the [`Palette`]; [`build()`](Self::build) rejects an
///   empty one up front (a pattern with no bead colors is never useful, so
///   the matcher's sentinel policy does not silently apply here)
/// - Configuration methods consume and return `self`
/// - [`build()`](Self::build) takes `&self`, so one configured builder is
///   reusable across rasters
///
/// # Example
///
/// ```
/// use beadloom::{BeadBrand, Palette, PatternBuilder, Raster, Rgb};
///
/// let palette = Palette::from_hex(BeadBrand::Hama, &["#ff0000", "#0000ff"]).unwrap();
/// let raster = Raster::from_pixels(4, 4, &[Rgb::new(255, 0, 0); 16]).unwrap();
///
/// let grid = PatternBuilder::new(palette)
///     .grid_size(2, 2)
///     .build(&raster)
///     .unwrap();
///
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.color(0, 0).unwrap().hex, "#ff0000");
/// ```
pub struct PatternBuilder {
    palette: Palette,
    grid_size: Option<(usize, usize)>,
    bead_size: BeadSize,
    dithering: bool,
    sample_options: SampleOptions,
    metric: DistanceMetric,
}

impl PatternBuilder {
    /// Create a builder for the given palette.
    ///
    /// Defaults: grid dimensions derived from [`BeadSize::Regular`],
    /// dithering off, plain averaging, precise (Lab) matching.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            grid_size: None,
            bead_size: BeadSize::default(),
            dithering: false,
            sample_options: SampleOptions::default(),
            metric: DistanceMetric::default(),
        }
    }

    /// Set explicit grid dimensions (columns x rows).
    ///
    /// Takes precedence over [`bead_size`](Self::bead_size) derivation.
    #[inline]
    pub fn grid_size(mut self, width: usize, height: usize) -> Self {
        self.grid_size = Some((width, height));
        self
    }

    /// Derive grid dimensions from the raster size and a physical bead
    /// diameter (one grid cell per bead-diameter of raster).
    #[inline]
    pub fn bead_size(mut self, size: BeadSize) -> Self {
        self.bead_size = size;
        self
    }

    /// Enable or disable Floyd-Steinberg dithering before sampling.
    #[inline]
    pub fn dithering(mut self, enabled: bool) -> Self {
        self.dithering = enabled;
        self
    }

    /// Set the grid sampling options.
    #[inline]
    pub fn sample_options(mut self, options: SampleOptions) -> Self {
        self.sample_options = options;
        self
    }

    /// Set the palette matching metric for the per-cell match step.
    #[inline]
    pub fn metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Grid dimensions for a raster: explicit if set, else derived from
    /// the bead diameter.
    fn grid_dimensions(&self, raster: &Raster) -> Result<(usize, usize), GeometryError> {
        let (width, height) = match self.grid_size {
            Some(size) => size,
            None => {
                let d = self.bead_size.diameter();
                (
                    (raster.width() as f32 / d) as usize,
                    (raster.height() as f32 / d) as usize,
                )
            }
        };
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroGrid { width, height });
        }
        Ok((width, height))
    }

    /// Convert a raster into a finalized pattern grid.
    ///
    /// Pipeline: optional Floyd-Steinberg dithering over the full raster,
    /// grid sampling, then one palette match per cell. The builder is
    /// reusable -- `build()` takes `&self`.
    ///
    /// # Errors
    ///
    /// - [`PatternError::EmptyPalette`] when the palette has no colors
    /// - [`PatternError::Geometry`] when the grid dimensions (explicit or
    ///   derived) have a zero component
    pub fn build(&self, raster: &Raster) -> Result<Grid, PatternError> {
        if self.palette.is_empty() {
            return Err(PatternError::EmptyPalette);
        }

        let (grid_w, grid_h) = self.grid_dimensions(raster)?;

        let dithered;
        let source = if self.dithering {
            tracing::debug!(
                width = raster.width(),
                height = raster.height(),
                "dithering raster before sampling"
            );
            dithered = dither::dither(raster, &self.palette);
            &dithered
        } else {
            raster
        };

        let sampled = sample(source, grid_w, grid_h, &self.sample_options)?;

        let matcher = Matcher::new(&self.palette, self.metric);
        let cells = sampled
            .iter()
            .map(|&color| {
                let Some((index, _)) = matcher.nearest_index(color) else {
                    unreachable!("palette checked non-empty above")
                };
                Cell::new(index, color)
            })
            .collect();

        let grid = Grid::from_parts(grid_h, grid_w, cells, self.palette.clone())?;
        tracing::info!(
            rows = grid.rows(),
            cols = grid.cols(),
            palette_len = self.palette.len(),
            dithering = self.dithering,
            "built pattern grid"
        );
        Ok(grid)
    }
}

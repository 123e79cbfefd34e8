//! Unified error type for the pattern pipeline

use thiserror::Error;

use crate::grid::GridShapeError;
use crate::palette::PaletteError;
use crate::raster::RasterError;
use crate::sample::GeometryError;

/// Unified error type for [`PatternBuilder`](crate::api::PatternBuilder).
///
/// Wraps the crate's boundary errors into a single enum for convenient `?`
/// propagation in application code.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The builder's palette has no colors; a pattern needs at least one
    /// bead color to match against.
    #[error("palette contains no colors")]
    EmptyPalette,

    /// Raster validation error
    #[error("raster error: {0}")]
    Raster(#[from] RasterError),

    /// Grid geometry error
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Palette validation error
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Grid assembly error
    #[error("grid error: {0}")]
    GridShape(#[from] GridShapeError),
}

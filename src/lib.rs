#![allow(clippy::module_inception)]

//! beadloom: palette-matched bead pattern engine
//!
//! This library converts an arbitrary raster image into a grid of discrete
//! colors drawn from a fixed bead palette (Hama, Perler, ...) and lets a
//! caller interactively repaint that grid. It is the numeric and
//! algorithmic core of a bead pattern application: color science, error
//! diffusion, sampling, and editing state. Rendering, file I/O, and UI
//! state belong to the host application.
//!
//! # Quick Start
//!
//! The [`PatternBuilder`] is the primary entry point:
//!
//! ```
//! use beadloom::{BeadBrand, Palette, PatternBuilder, Raster, Rgb};
//!
//! let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff"]).unwrap();
//! let raster = Raster::from_pixels(8, 8, &[Rgb::new(30, 30, 30); 64]).unwrap();
//!
//! let grid = PatternBuilder::new(palette)
//!     .grid_size(4, 4)
//!     .build(&raster)
//!     .unwrap();
//!
//! assert_eq!(grid.color(0, 0).unwrap().hex, "#000000");
//! ```
//!
//! # Editing
//!
//! A finalized [`Grid`] is mutated only through a [`PatternEditor`], which
//! pairs the grid with a bounded undo [`History`]. Checkpointing is
//! explicit: call [`PatternEditor::commit`] after each edit that should be
//! undoable.
//!
//! ```
//! use beadloom::{BeadBrand, Palette, PatternBuilder, PatternEditor, Raster, Rgb};
//!
//! let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff"]).unwrap();
//! let raster = Raster::from_pixels(4, 4, &[Rgb::new(0, 0, 0); 16]).unwrap();
//! let grid = PatternBuilder::new(palette).grid_size(2, 2).build(&raster).unwrap();
//!
//! let mut editor = PatternEditor::new(grid);
//! editor.commit();
//! editor.flood_fill(0, 0, 1);
//! editor.commit();
//! assert!(editor.can_undo());
//! ```
//!
//! # Color Science
//!
//! Two color spaces, two purposes:
//!
//! | Color Space | Key Property | Used For |
//! |-------------|--------------|----------|
//! | **sRGB bytes** | Native encoding of rasters and bead charts | Input/output, raw-channel matching, error diffusion |
//! | **CIE L\*a\*b\*** | Distances track perceived difference | "Precise" palette matching |
//!
//! Palette matching defaults to Euclidean distance in Lab (the CIE76
//! delta-E): perceptually far better than channel-space distance at
//! negligible cost, and cheap enough to run per pixel inside the dithering
//! loop. Error diffusion itself stays in the byte domain — each error
//! contribution is clamped and rounded as it lands, matching the behavior
//! of the interactive editors this engine was built for.
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA raster           (decoded by the host)
//!     |
//!     v
//! [Floyd-Steinberg]     (optional, full raster, palette-aware)
//!     |
//!     v
//! GridSampler           (plain or Sobel-edge-weighted cell averages)
//!     |
//!     v
//! Matcher               (nearest palette color per cell)
//!     |
//!     v
//! Grid                  (cells = matched palette index + sampled color)
//!     |
//!     v
//! PatternEditor         (flood fill, recolor, statistics, undo/redo)
//! ```

pub mod api;
pub mod color;
pub mod dither;
pub mod editor;
pub mod grid;
pub mod history;
pub mod matcher;
pub mod palette;
pub mod raster;
pub mod sample;

#[cfg(test)]
mod domain_tests;

pub use api::{BeadSize, PatternBuilder, PatternError};
pub use color::{Lab, Rgb};
pub use dither::{dither, Kernel, FLOYD_STEINBERG};
pub use editor::{ColorCount, PatternEditor};
pub use grid::{Cell, Grid, GridShapeError};
pub use history::{History, HistorySnapshot, HISTORY_CAPACITY};
pub use matcher::{DistanceMetric, MatchResult, Matcher};
pub use palette::{BeadBrand, BeadColor, Palette, PaletteCatalog, PaletteError, ParseColorError};
pub use raster::{Raster, RasterError};
pub use sample::{sample, GeometryError, SampleOptions};

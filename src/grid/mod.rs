//! Pattern grid: the finalized output of the conversion pipeline
//!
//! A [`Grid`] is a rectangular arrangement of [`Cell`]s plus the palette
//! the cells' matched colors live in. Cells reference palette entries by
//! index — the matched color is shared through the palette, never copied
//! into the cell, so a palette entry can never drift out of sync with the
//! cells that use it.
//!
//! Cell coordinates are positional: the grid stores cells in row-major
//! order and addresses them by `(row, col)`, so a cell's coordinates always
//! equal its position by construction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgb;
use crate::matcher::{DistanceMetric, MatchResult, Matcher};
use crate::palette::{BeadColor, Palette};

/// Error type for grid construction.
///
/// Shape invariants are validated here, once; operations on a built grid
/// assume them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridShapeError {
    /// Requested grid has a zero dimension
    #[error("grid dimensions must be non-zero, got {rows} rows x {cols} cols")]
    ZeroDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Cell vector does not hold exactly rows * cols cells
    #[error("cell count {actual} does not match {rows} rows x {cols} cols = {expected}")]
    CellCountMismatch {
        /// Cells supplied
        actual: usize,
        /// Cells required
        expected: usize,
        /// Row count
        rows: usize,
        /// Column count
        cols: usize,
    },

    /// A cell references a palette index the palette does not have
    #[error("cell at row {row}, col {col} references palette index {index}, but the palette has {palette_len} colors")]
    IndexOutOfRange {
        /// Cell row
        row: usize,
        /// Cell column
        col: usize,
        /// Offending palette index
        index: u16,
        /// Palette size
        palette_len: usize,
    },
}

/// One cell of a pattern grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Index of the matched color in the grid's palette
    pub matched: u16,
    /// The pre-match averaged source color, retained for diagnostics and
    /// re-matching
    pub sampled: Rgb,
}

impl Cell {
    /// Create a cell.
    #[inline]
    pub fn new(matched: u16, sampled: Rgb) -> Self {
        Self { matched, sampled }
    }
}

/// A finalized pattern grid.
///
/// Owns its palette (cloned in, like every independent editing session
/// owns its state) and `rows * cols` cells in row-major order. Mutation
/// goes through [`PatternEditor`](crate::editor::PatternEditor); the grid
/// itself only exposes reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    palette: Palette,
}

impl Grid {
    /// Assemble a grid from parts, validating the shape invariants.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions, a cell count other than `rows * cols`, or
    /// any cell whose `matched` index is outside the palette.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        cells: Vec<Cell>,
        palette: Palette,
    ) -> Result<Self, GridShapeError> {
        if rows == 0 || cols == 0 {
            return Err(GridShapeError::ZeroDimensions { rows, cols });
        }
        let expected = rows * cols;
        if cells.len() != expected {
            return Err(GridShapeError::CellCountMismatch {
                actual: cells.len(),
                expected,
                rows,
                cols,
            });
        }
        for (i, cell) in cells.iter().enumerate() {
            if usize::from(cell.matched) >= palette.len() {
                return Err(GridShapeError::IndexOutOfRange {
                    row: i / cols,
                    col: i % cols,
                    index: cell.matched,
                    palette_len: palette.len(),
                });
            }
        }
        Ok(Self {
            rows,
            cols,
            cells,
            palette,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The palette this grid's matched colors live in.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Flat index of `(row, col)`.
    #[inline]
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// The cell at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Mutable cell access for the editor.
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.rows && col < self.cols {
            let i = self.index(row, col);
            self.cells.get_mut(i)
        } else {
            None
        }
    }

    /// All cells, row-major, for the editor's bulk operations.
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// The matched bead color of the cell at `(row, col)`.
    pub fn color(&self, row: usize, col: usize) -> Option<&BeadColor> {
        self.cell(row, col)
            .map(|c| self.palette.color(usize::from(c.matched)))
    }

    /// Iterate cells with their coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    /// Re-derive the per-cell match diagnostics from the retained sampled
    /// colors.
    ///
    /// Returns one [`MatchResult`] per cell (row-major) computed against
    /// this grid's own palette under `metric`. Because cells keep their
    /// pre-match sampled color, the diagnostics survive any amount of
    /// editing of the matched colors.
    pub fn match_diagnostics(&self, metric: DistanceMetric) -> Vec<MatchResult> {
        let matcher = Matcher::new(&self.palette, metric);
        self.cells
            .iter()
            .map(|cell| matcher.find_closest(cell.sampled))
            .collect()
    }
}

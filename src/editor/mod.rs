//! Pattern editing engine
//!
//! [`PatternEditor`] owns a finalized [`Grid`] for the lifetime of an
//! editing session and applies atomic, fully-completed edits to it:
//! single-cell paints, flood fills, global recolors. Checkpointing is
//! explicit — callers invoke [`commit`](PatternEditor::commit) after each
//! mutation they want undoable, rather than relying on ambient
//! change-notification.
//!
//! Interactive edits are deliberately lenient: out-of-range coordinates or
//! palette indices are silent no-ops instead of errors, so a stray click
//! outside the pattern never interrupts the session.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::history::History;
use crate::palette::BeadColor;

/// Usage count for one bead color, as produced by
/// [`PatternEditor::color_statistics`].
///
/// Statistics serialize as an ordered list of these pairs — never as a
/// native map — so they round-trip losslessly through any persistence
/// encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorCount {
    /// The bead color
    pub color: BeadColor,
    /// Number of cells currently matched to it
    pub count: usize,
}

/// An editing session over one exclusively-owned grid.
///
/// # Example
///
/// ```
/// use beadloom::{BeadBrand, Cell, Grid, Palette, PatternEditor, Rgb};
///
/// let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff"]).unwrap();
/// let cells = vec![Cell::new(0, Rgb::new(0, 0, 0)); 4];
/// let grid = Grid::from_parts(2, 2, cells, palette).unwrap();
///
/// let mut editor = PatternEditor::new(grid);
/// editor.commit(); // baseline for undo
/// editor.set_cell(0, 0, 1);
/// editor.commit();
///
/// assert!(editor.can_undo());
/// editor.undo();
/// assert_eq!(editor.grid().cell(0, 0).unwrap().matched, 0);
/// ```
pub struct PatternEditor {
    grid: Grid,
    history: History,
}

impl PatternEditor {
    /// Start an editing session over `grid`.
    ///
    /// The history starts empty; commit once immediately if the initial
    /// state should be restorable.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            history: History::new(),
        }
    }

    /// The live grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Finish the session, yielding the edited grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Paint a single cell with the palette color at `color`.
    ///
    /// Out-of-range coordinates or palette indices are a silent no-op.
    pub fn set_cell(&mut self, row: usize, col: usize, color: u16) {
        if usize::from(color) >= self.grid.palette().len() {
            return;
        }
        if let Some(cell) = self.grid.cell_mut(row, col) {
            cell.matched = color;
        }
    }

    /// Flood-fill the 4-connected region around `(row, col)` with the
    /// palette color at `color`.
    ///
    /// The region is every cell reachable from the seed through
    /// edge-adjacent cells that still carry the seed's original color.
    /// Filling with the seed's own color is a no-op (there is nothing to
    /// change and no region boundary to find). Out-of-range seeds or
    /// palette indices are silent no-ops.
    ///
    /// Implemented with an explicit queue: recursion depth would otherwise
    /// scale with region size.
    pub fn flood_fill(&mut self, row: usize, col: usize, color: u16) {
        if usize::from(color) >= self.grid.palette().len() {
            return;
        }
        let Some(seed) = self.grid.cell(row, col) else {
            return;
        };
        // Captured before any mutation: the fill matches against the
        // original color even after cells start changing.
        let target = seed.matched;
        if target == color {
            return;
        }

        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let mut visited = vec![false; rows * cols];
        let mut queue = VecDeque::new();
        queue.push_back((row, col));

        while let Some((r, c)) = queue.pop_front() {
            let flat = r * cols + c;
            if visited[flat] {
                continue;
            }
            visited[flat] = true;

            let Some(cell) = self.grid.cell_mut(r, c) else {
                continue;
            };
            if cell.matched != target {
                continue;
            }
            cell.matched = color;

            if r > 0 {
                queue.push_back((r - 1, c));
            }
            if r + 1 < rows {
                queue.push_back((r + 1, c));
            }
            if c > 0 {
                queue.push_back((r, c - 1));
            }
            if c + 1 < cols {
                queue.push_back((r, c + 1));
            }
        }
    }

    /// Replace every cell matched to `old` with `new`, regardless of
    /// position or connectivity.
    ///
    /// An out-of-range `new` index is a silent no-op.
    pub fn replace_color(&mut self, old: u16, new: u16) {
        if usize::from(new) >= self.grid.palette().len() {
            return;
        }
        for cell in self.grid.cells_mut() {
            if cell.matched == old {
                cell.matched = new;
            }
        }
    }

    /// The matched color under `(row, col)` — the eyedropper.
    pub fn pick_color(&self, row: usize, col: usize) -> Option<&BeadColor> {
        self.grid.color(row, col)
    }

    /// Count cells per distinct color currently present.
    ///
    /// Ordered by first encounter in a row-major scan. Sorting (by count,
    /// by code, ...) is a presentation concern left to the caller.
    pub fn color_statistics(&self) -> Vec<ColorCount> {
        let mut counts: Vec<(u16, usize)> = Vec::new();
        for (_, _, cell) in self.grid.cells() {
            match counts.iter_mut().find(|(idx, _)| *idx == cell.matched) {
                Some((_, count)) => *count += 1,
                None => counts.push((cell.matched, 1)),
            }
        }
        counts
            .into_iter()
            .map(|(idx, count)| ColorCount {
                color: self.grid.palette().color(usize::from(idx)).clone(),
                count,
            })
            .collect()
    }

    /// Checkpoint the current grid into the undo history.
    pub fn commit(&mut self) {
        self.history.push(&self.grid);
    }

    /// Restore the previous checkpoint, if any.
    ///
    /// Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.grid = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Re-apply the checkpoint undone last, if any.
    ///
    /// Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.grid = snapshot.clone();
                true
            }
            None => false,
        }
    }

    /// Whether [`undo`](Self::undo) would change anything.
    #[inline]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) would change anything.
    #[inline]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The session's history, for inspection.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }
}

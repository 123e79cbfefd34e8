//! Domain-critical regression tests for beadloom.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards
//! against.

#[cfg(test)]
mod domain_tests {
    use pretty_assertions::assert_eq;

    use crate::api::PatternBuilder;
    use crate::color::{Lab, Rgb};
    use crate::dither::{dither, FLOYD_STEINBERG};
    use crate::editor::PatternEditor;
    use crate::grid::{Cell, Grid};
    use crate::history::{History, HISTORY_CAPACITY};
    use crate::matcher::{DistanceMetric, Matcher};
    use crate::palette::{BeadBrand, BeadColor, Palette};
    use crate::raster::Raster;
    use crate::sample::{sample, SampleOptions};

    // ========================================================================
    // GAP 1: Dithering traversal order is load-bearing
    // ========================================================================

    /// If this breaks, it means: the dithering loop is no longer strictly
    /// row-major top-to-bottom/left-to-right with the standard kernel (e.g.
    /// serpentine scanning crept in, or the clamp-and-round-on-add byte
    /// semantics changed). The expected output is computed by hand:
    ///
    /// A 2x2 raster of uniform 120-grey against black/white. 120 sits just
    /// on the white side of the Lab midpoint (L ~ 50.4), so the first pixel
    /// goes white and pushes -135 of error east (7/16), south (5/16) and
    /// south-east (1/16). The east neighbor lands at 61 -> black, pushing
    /// +61 back down. The south-west pixel accumulates to 89 -> black, and
    /// its +89 error lifts the last pixel to 170 -> white. Any change in
    /// traversal order, kernel weights, or rounding breaks the
    /// checkerboard.
    #[test]
    fn test_traversal_order_forces_known_output() {
        let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff"]).unwrap();
        let raster = Raster::from_pixels(2, 2, &[Rgb::new(120, 120, 120); 4]).unwrap();

        let first = dither(&raster, &palette);
        let second = dither(&raster, &palette);
        assert_eq!(
            first.rgba(),
            second.rgba(),
            "REGRESSION: dithering must be deterministic"
        );

        let white = Rgb::new(255, 255, 255);
        let black = Rgb::new(0, 0, 0);
        assert_eq!(first.rgb(0, 0), white);
        assert_eq!(first.rgb(1, 0), black);
        assert_eq!(first.rgb(0, 1), black);
        assert_eq!(first.rgb(1, 1), white);
    }

    /// If this breaks, it means: the Floyd-Steinberg weights were edited and
    /// no longer conserve the quantization error (7/16 + 3/16 + 5/16 + 1/16
    /// must equal exactly 1).
    #[test]
    fn test_floyd_steinberg_conserves_error() {
        let sum: u32 = FLOYD_STEINBERG
            .entries
            .iter()
            .map(|&(_, _, w)| u32::from(w))
            .sum();
        assert_eq!(u32::from(FLOYD_STEINBERG.divisor), sum);
    }

    // ========================================================================
    // GAP 2: Matching ties resolve by palette order
    // ========================================================================

    /// If this breaks, it means: the matcher's running minimum stopped using
    /// strict less-than (e.g. <=), so a later equidistant palette entry can
    /// steal a match. Legends and statistics would silently reshuffle
    /// between releases.
    #[test]
    fn test_match_ties_resolve_to_lowest_index() {
        let colors = vec![
            BeadColor::new("x", "X", "01", Rgb::new(0, 0, 0), BeadBrand::Hama),
            BeadColor::new("y", "Y", "02", Rgb::new(0, 0, 0), BeadBrand::Hama),
        ];
        let palette = Palette::new(BeadBrand::Hama, colors).unwrap();
        for metric in [DistanceMetric::Lab, DistanceMetric::Rgb] {
            let matcher = Matcher::new(&palette, metric);
            assert_eq!(
                matcher.find_closest(Rgb::new(0, 0, 0)).color.id,
                "x",
                "tie must go to the lowest palette index under {metric:?}"
            );
        }
    }

    /// If this breaks, it means: the Lab conversion picked up hidden state
    /// or non-determinism. Identical inputs must produce bit-identical
    /// outputs call after call — re-matching a saved pattern must
    /// reproduce it exactly.
    #[test]
    fn test_lab_conversion_bit_stable() {
        for rgb in [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(200, 50, 10),
            Rgb::new(1, 2, 3),
        ] {
            let a = Lab::from(rgb);
            let b = Lab::from(rgb);
            assert_eq!((a.l.to_bits(), a.a.to_bits(), a.b.to_bits()),
                       (b.l.to_bits(), b.a.to_bits(), b.b.to_bits()));
        }
    }

    // ========================================================================
    // GAP 3: Flood fill confinement
    // ========================================================================

    /// If this breaks, it means: flood fill leaks across cells that are not
    /// 4-connected to the seed through the seed's original color (e.g.
    /// diagonal adjacency crept in, or the original-color capture moved
    /// after the first mutation).
    #[test]
    fn test_flood_fill_confined_to_component() {
        // Two L-shaped regions of color 0 separated by a wall of 1s:
        //   0 0 1 0
        //   1 0 1 0
        //   1 0 1 1
        //   1 0 0 0
        let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff", "#ff0000"]).unwrap();
        let indices: [u16; 16] = [0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 0, 0];
        let cells: Vec<Cell> = indices
            .iter()
            .map(|&i| Cell::new(i, Rgb::new(0, 0, 0)))
            .collect();
        let grid = Grid::from_parts(4, 4, cells, palette).unwrap();

        let mut editor = PatternEditor::new(grid);
        editor.flood_fill(0, 0, 2);

        let result: Vec<u16> = editor.grid().cells().map(|(_, _, c)| c.matched).collect();
        assert_eq!(
            result,
            [2, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1, 1, 1, 2, 2, 2],
            "right-hand 0-region is not 4-connected to the seed and must survive"
        );
    }

    /// If this breaks, it means: the same-color early-out disappeared and
    /// flood fill now touches (and possibly re-commits) a grid it should
    /// leave byte-for-byte unchanged.
    #[test]
    fn test_flood_fill_same_color_leaves_grid_identical() {
        let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff"]).unwrap();
        let cells: Vec<Cell> = (0..9).map(|i| Cell::new((i % 2) as u16, Rgb::new(i as u8, 0, 0))).collect();
        let grid = Grid::from_parts(3, 3, cells, palette).unwrap();
        let before = grid.clone();

        let mut editor = PatternEditor::new(grid);
        editor.flood_fill(1, 1, before.cell(1, 1).unwrap().matched);
        assert_eq!(*editor.grid(), before);
    }

    // ========================================================================
    // GAP 4: History bounds and aliasing
    // ========================================================================

    /// If this breaks, it means: capacity eviction advanced the cursor (it
    /// must not — removing from the front preserves the cursor's relative
    /// position) or dropped the wrong end of the stack.
    #[test]
    fn test_history_eviction_keeps_newest() {
        let palette = Palette::from_hex(BeadBrand::Hama, &["#000000"]).unwrap();
        let snapshot = |tag: u8| {
            Grid::from_parts(
                1,
                1,
                vec![Cell::new(0, Rgb::new(tag, 0, 0))],
                palette.clone(),
            )
            .unwrap()
        };

        let mut history = History::new();
        for tag in 0..=50u8 {
            history.push(&snapshot(tag));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let current = history.current().unwrap().grid().cell(0, 0).unwrap().sampled.r;
        assert_eq!(current, 50, "cursor must still point at the newest snapshot");
        let oldest = history
            .snapshots()
            .next()
            .unwrap()
            .grid()
            .cell(0, 0)
            .unwrap()
            .sampled
            .r;
        assert_eq!(oldest, 1, "snapshot 0 must have been evicted");
    }

    /// If this breaks, it means: undo/redo returned a snapshot that aliases
    /// the live grid, so editing after an undo corrupts history.
    #[test]
    fn test_undo_redo_round_trip_through_editor() {
        let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff"]).unwrap();
        let cells = vec![Cell::new(0, Rgb::new(0, 0, 0)); 4];
        let grid = Grid::from_parts(2, 2, cells, palette).unwrap();

        let mut editor = PatternEditor::new(grid);
        editor.commit();
        editor.replace_color(0, 1);
        editor.commit();
        let after_edit = editor.grid().clone();

        assert!(editor.undo());
        editor.set_cell(0, 0, 1); // mutate the live grid between undo and redo
        assert!(editor.redo());
        assert_eq!(
            *editor.grid(),
            after_edit,
            "redo must restore the exact pre-undo snapshot, unaffected by interim edits"
        );
    }

    // ========================================================================
    // GAP 5: End-to-end pipeline
    // ========================================================================

    /// If this breaks, it means: some pipeline stage (sampling, matching,
    /// grid assembly) stopped preserving an exact-match solid color. A 4x4
    /// solid red raster against a red/blue palette must produce four cells
    /// of red with distance 0.
    #[test]
    fn test_solid_red_pipeline() {
        let colors = vec![
            BeadColor::new("r", "Red", "01", Rgb::new(255, 0, 0), BeadBrand::Hama),
            BeadColor::new("b", "Blue", "02", Rgb::new(0, 0, 255), BeadBrand::Hama),
        ];
        let palette = Palette::new(BeadBrand::Hama, colors).unwrap();
        let raster = Raster::from_pixels(4, 4, &[Rgb::new(255, 0, 0); 16]).unwrap();

        let grid = PatternBuilder::new(palette)
            .grid_size(2, 2)
            .dithering(false)
            .build(&raster)
            .unwrap();

        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        for (row, col, cell) in grid.cells() {
            assert_eq!(cell.matched, 0, "cell ({row},{col}) must match 'r'");
        }
        for diag in grid.match_diagnostics(DistanceMetric::Lab) {
            assert_eq!(diag.color.id, "r");
            assert_eq!(diag.distance, 0.0);
        }
    }

    /// If this breaks, it means: the sampler's two averaging modes diverged
    /// on flat content. Zero edge strength must make the edge-weighted mean
    /// collapse to the plain mean exactly.
    #[test]
    fn test_sampling_modes_agree_on_flat_regions() {
        let raster = Raster::from_pixels(6, 6, &[Rgb::new(200, 50, 10); 36]).unwrap();
        let plain = sample(&raster, 3, 3, &SampleOptions::new()).unwrap();
        let weighted = sample(&raster, 3, 3, &SampleOptions::new().edge_weighting(true)).unwrap();
        assert_eq!(plain, weighted);
        assert!(plain.iter().all(|&c| c == Rgb::new(200, 50, 10)));
    }

    /// If this breaks, it means: dithering started running per-cell (after
    /// sampling) instead of over the full raster before sampling. The
    /// coarse 2x2 grid over a dithered mid-tone must see averaged mixes,
    /// not pure palette colors, in its sampled values.
    #[test]
    fn test_dithering_runs_before_sampling() {
        let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff"]).unwrap();
        let raster = Raster::from_pixels(16, 16, &[Rgb::new(128, 128, 128); 256]).unwrap();

        let grid = PatternBuilder::new(palette)
            .grid_size(2, 2)
            .dithering(true)
            .build(&raster)
            .unwrap();

        // Each 8x8 cell averages a black/white checkertone; a pure 0 or 255
        // sampled value would mean the error never diffused across the cell.
        for (row, col, cell) in grid.cells() {
            let v = cell.sampled.r;
            assert!(
                v > 0 && v < 255,
                "cell ({row},{col}) sampled {v}; dithering must happen on the raster, \
                 so sampled cell colors are mixes"
            );
        }
    }
}

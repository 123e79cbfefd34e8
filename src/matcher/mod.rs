//! Nearest-palette-color matching
//!
//! [`Matcher`] finds the closest palette entry to a target color under a
//! selectable [`DistanceMetric`]. All palette-side color space conversions
//! happen once at matcher construction, so per-target matching is a plain
//! linear scan — optimal for bead palettes (a few dozen to a few hundred
//! colors).
//!
//! # Tie-breaking
//!
//! The scan keeps a running minimum with a strict less-than comparison, so
//! when several entries are equidistant the one with the lowest palette
//! index wins. Palette order is part of the observable contract.
//!
//! # Empty palettes
//!
//! Matching against an empty palette does not fail: [`Matcher::find_closest`]
//! returns a sentinel gray with distance 0 so interactive callers never
//! crash mid-edit. The sentinel is distinguishable — its
//! [`MatchResult::index`] is `None` and a debug event is traced. Code that
//! must treat a missing palette as an error should use
//! [`Matcher::nearest_index`], which returns `None` instead.

use serde::{Deserialize, Serialize};

use crate::color::{Lab, Rgb};
use crate::palette::{BeadBrand, BeadColor, Palette};

/// Distance metric for palette color matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean distance between CIE L\*a\*b\* conversions of both colors
    /// (the CIE76 delta-E). This is the "precise" mode: perceptually far
    /// better than channel-space distance, though not the full CIEDE2000
    /// weighting.
    #[default]
    Lab,

    /// Euclidean distance on raw sRGB channels. Cheaper and adequate when
    /// the palette is dense or perceptual accuracy does not matter.
    Rgb,
}

/// Outcome of a nearest-color search.
///
/// `distance` is metric-dependent and never negative. `index` is the
/// position of `color` in the searched palette; it is `None` only for the
/// empty-palette sentinel, which callers can use to detect that no real
/// match occurred despite the zero distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The matched palette entry (or the sentinel gray)
    pub color: BeadColor,
    /// Palette position of the match; `None` for the sentinel
    pub index: Option<u16>,
    /// Distance from the target to the match under the chosen metric
    pub distance: f32,
}

/// The fallback color returned when matching against an empty palette.
///
/// Mid-gray, id `"default"` — a neutral value that is visibly "no real
/// bead" without being jarring in a preview.
pub(crate) fn fallback_color() -> BeadColor {
    BeadColor::new("default", "Default", "00", Rgb::new(128, 128, 128), BeadBrand::Hama)
}

/// Nearest-color matcher over a borrowed palette.
///
/// Construction converts every palette entry to Lab once; matching is then
/// a scan with no per-entry conversions.
///
/// # Example
///
/// ```
/// use beadloom::{BeadBrand, DistanceMetric, Matcher, Palette, Rgb};
///
/// let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#ffffff"]).unwrap();
/// let matcher = Matcher::new(&palette, DistanceMetric::Lab);
///
/// let result = matcher.find_closest(Rgb::new(240, 240, 240));
/// assert_eq!(result.color.hex, "#ffffff");
/// ```
pub struct Matcher<'a> {
    palette: &'a Palette,
    labs: Vec<Lab>,
    metric: DistanceMetric,
}

impl<'a> Matcher<'a> {
    /// Create a matcher for the given palette and metric.
    pub fn new(palette: &'a Palette, metric: DistanceMetric) -> Self {
        let labs = palette.iter().map(|c| Lab::from(c.rgb)).collect();
        Self {
            palette,
            labs,
            metric,
        }
    }

    /// The metric this matcher compares with.
    #[inline]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Find the nearest palette entry without allocating.
    ///
    /// Returns `(palette index, distance)`, or `None` when the palette is
    /// empty. This is the form the dithering loop and the pipeline use.
    pub fn nearest_index(&self, target: Rgb) -> Option<(u16, f32)> {
        if self.palette.is_empty() {
            return None;
        }

        let target_lab = match self.metric {
            DistanceMetric::Lab => Some(Lab::from(target)),
            DistanceMetric::Rgb => None,
        };

        let mut best_index = 0usize;
        let mut best_dist_sq = f32::MAX;
        for i in 0..self.palette.len() {
            let dist_sq = match target_lab {
                Some(lab) => lab.distance_squared(self.labs[i]),
                None => target.distance_squared(self.palette.color(i).rgb),
            };
            // Strict less-than: the first entry reaching the minimum wins.
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best_index = i;
            }
        }

        Some((best_index as u16, best_dist_sq.sqrt()))
    }

    /// Find the nearest palette entry to `target`.
    ///
    /// Never fails: an empty palette yields the sentinel gray with distance
    /// 0 (see the module docs for how to detect it).
    pub fn find_closest(&self, target: Rgb) -> MatchResult {
        match self.nearest_index(target) {
            Some((index, distance)) => MatchResult {
                color: self.palette.color(index as usize).clone(),
                index: Some(index),
                distance,
            },
            None => {
                tracing::debug!(color = %target, "matching against an empty palette, returning sentinel");
                MatchResult {
                    color: fallback_color(),
                    index: None,
                    distance: 0.0,
                }
            }
        }
    }

    /// Match a sequence of targets independently.
    pub fn match_all(&self, targets: &[Rgb]) -> Vec<MatchResult> {
        targets.iter().map(|&t| self.find_closest(t)).collect()
    }
}

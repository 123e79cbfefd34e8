//! Bead color and palette types
//!
//! A [`Palette`] is the fixed, finite set of output colors a pattern may
//! use. Order is significant: nearest-color ties resolve to the lowest
//! index, and legends/statistics iterate in palette order.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PaletteError;
use crate::color::Rgb;

/// Bead manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadBrand {
    /// Hama (Malte Haaning Plastic)
    Hama,
    /// Perler
    Perler,
    /// Artkal
    Artkal,
    /// Nabbi
    Nabbi,
}

impl fmt::Display for BeadBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BeadBrand::Hama => "hama",
            BeadBrand::Perler => "perler",
            BeadBrand::Artkal => "artkal",
            BeadBrand::Nabbi => "nabbi",
        };
        f.write_str(name)
    }
}

impl FromStr for BeadBrand {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hama" => Ok(BeadBrand::Hama),
            "perler" => Ok(BeadBrand::Perler),
            "artkal" => Ok(BeadBrand::Artkal),
            "nabbi" => Ok(BeadBrand::Nabbi),
            other => Err(PaletteError::UnknownBrand(other.to_string())),
        }
    }
}

/// One color in a bead palette.
///
/// Immutable once constructed; the `hex` field is derived from `rgb` at
/// construction so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeadColor {
    /// Unique id within a palette, e.g. `"h01"`
    pub id: String,
    /// Display name, e.g. `"White"`
    pub name: String,
    /// Manufacturer catalog code, e.g. `"01"`
    pub code: String,
    /// Channel values from the manufacturer's color chart
    pub rgb: Rgb,
    /// Lowercase `#rrggbb` form of `rgb`
    pub hex: String,
    /// Manufacturer
    pub brand: BeadBrand,
}

impl BeadColor {
    /// Create a bead color; `hex` is derived from `rgb`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        rgb: Rgb,
        brand: BeadBrand,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            rgb,
            hex: rgb.to_hex(),
            brand,
        }
    }
}

/// An ordered bead color palette.
///
/// Construction validates that every [`BeadColor::id`] is unique; the order
/// of `colors` is preserved and significant. An empty palette is permitted
/// (the matcher has a documented fallback for it), so emptiness is a policy
/// question for callers, not a validation failure here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    brand: BeadBrand,
    colors: Vec<BeadColor>,
}

impl Palette {
    /// Create a palette from an ordered list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateId`] if two entries share an id.
    pub fn new(brand: BeadBrand, colors: Vec<BeadColor>) -> Result<Self, PaletteError> {
        let mut seen = HashSet::new();
        for (index, color) in colors.iter().enumerate() {
            if !seen.insert(color.id.as_str()) {
                return Err(PaletteError::DuplicateId {
                    id: color.id.clone(),
                    index,
                });
            }
        }
        Ok(Self { brand, colors })
    }

    /// Create a palette from hex color strings.
    ///
    /// Convenience constructor for tests and quick setups: each entry's id
    /// and name are the lowercase hex digits, the code is the 1-based
    /// position zero-padded to two digits.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for an invalid hex string, or
    /// [`PaletteError::DuplicateId`] for repeated colors.
    ///
    /// # Example
    ///
    /// ```
    /// use beadloom::{BeadBrand, Palette};
    ///
    /// let palette = Palette::from_hex(BeadBrand::Hama, &["#000000", "#FFFFFF"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// assert_eq!(palette.color(1).hex, "#ffffff");
    /// ```
    pub fn from_hex(brand: BeadBrand, hex: &[&str]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let rgb = Rgb::from_str(s)?;
                let id = rgb.to_hex().trim_start_matches('#').to_string();
                Ok(BeadColor::new(
                    id.clone(),
                    id,
                    format!("{:02}", i + 1),
                    rgb,
                    brand,
                ))
            })
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Self::new(brand, colors)
    }

    /// The palette's brand.
    #[inline]
    pub fn brand(&self) -> BeadBrand {
        self.brand
    }

    /// Number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Use [`get`](Self::get) when the index is
    /// not known to be valid.
    #[inline]
    pub fn color(&self, index: usize) -> &BeadColor {
        &self.colors[index]
    }

    /// The color at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&BeadColor> {
        self.colors.get(index)
    }

    /// Position of the color with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.colors.iter().position(|c| c.id == id)
    }

    /// Iterate colors in palette order.
    pub fn iter(&self) -> std::slice::Iter<'_, BeadColor> {
        self.colors.iter()
    }
}

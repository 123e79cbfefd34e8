//! Ordered brand-to-palette catalog
//!
//! Aggregates keyed by brand (like aggregates keyed by color id) must cross
//! persistence boundaries as explicit ordered sequences, never as native
//! map encodings. The catalog is therefore a plain vector of palettes in
//! first-insertion order with linear lookup — brands number in the single
//! digits, so a map would buy nothing.

use serde::{Deserialize, Serialize};

use super::palette::{BeadBrand, Palette};

/// An ordered collection of palettes, one per brand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteCatalog {
    entries: Vec<Palette>,
}

impl PaletteCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a palette, keyed by its brand.
    ///
    /// A palette for a brand already present replaces the old one in place,
    /// preserving the catalog's iteration order. Returns the replaced
    /// palette, if any.
    pub fn insert(&mut self, palette: Palette) -> Option<Palette> {
        match self.entries.iter().position(|p| p.brand() == palette.brand()) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i], palette)),
            None => {
                self.entries.push(palette);
                None
            }
        }
    }

    /// The palette for `brand`, if loaded.
    pub fn get(&self, brand: BeadBrand) -> Option<&Palette> {
        self.entries.iter().find(|p| p.brand() == brand)
    }

    /// Iterate palettes in first-insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Palette> {
        self.entries.iter()
    }

    /// Number of palettes in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no palettes are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

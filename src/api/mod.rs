//! High-level pipeline API
//!
//! [`PatternBuilder`] is the recommended entry point: it runs the full
//! raster-to-grid conversion (optional dithering, sampling, matching)
//! behind a fluent builder, and [`PatternError`] unifies the crate's error
//! types for `?` propagation.

mod builder;
mod error;

pub use builder::{BeadSize, PatternBuilder};
pub use error::PatternError;

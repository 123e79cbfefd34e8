//! Color types and conversions
//!
//! This module provides the two color representations used by the crate:
//!
//! - [`Rgb`]: 8-bit sRGB for input/output, palette definitions, and raw
//!   channel-space distance comparisons
//! - [`Lab`]: CIE L\*a\*b\* for perceptual distance comparisons
//!
//! Conversion is one-way (`Lab::from(Rgb)`); the pipeline never needs to go
//! back from Lab to displayable colors because matched output is always an
//! existing palette entry.

mod lab;
mod rgb;

pub use lab::Lab;
pub use rgb::Rgb;

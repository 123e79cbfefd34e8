//! Decoded raster input type
//!
//! The pipeline consumes images that a collaborator has already decoded:
//! width, height, and tightly-packed RGBA bytes. Decoding file formats is
//! explicitly outside this crate; [`Raster`] only validates the geometry it
//! is handed, because nothing downstream can recover from a malformed
//! buffer.

use thiserror::Error;

use crate::color::Rgb;

/// Error type for raster construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RasterError {
    /// Width or height is zero
    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Byte buffer does not hold exactly width * height RGBA pixels
    #[error("RGBA buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    LengthMismatch {
        /// Bytes supplied
        actual: usize,
        /// Bytes required (`width * height * 4`)
        expected: usize,
        /// Raster width
        width: usize,
        /// Raster height
        height: usize,
    },
}

/// A decoded raster image: dimensions plus row-major RGBA bytes.
///
/// The alpha channel is carried through untouched; every algorithm in this
/// crate reads only the color channels.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl Raster {
    /// Create a raster from decoded RGBA bytes.
    ///
    /// # Errors
    ///
    /// Fails fast on zero dimensions or a buffer whose length is not
    /// `width * height * 4` — both are caller contract violations with no
    /// meaningful recovery inside the algorithms.
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimensions { width, height });
        }
        let expected = width * height * 4;
        if rgba.len() != expected {
            return Err(RasterError::LengthMismatch {
                actual: rgba.len(),
                expected,
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Create a fully-opaque raster from RGB pixels (row-major).
    ///
    /// # Errors
    ///
    /// Same contract as [`new`](Self::new): zero dimensions or a pixel count
    /// other than `width * height` fail fast.
    pub fn from_pixels(width: usize, height: usize, pixels: &[Rgb]) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::ZeroDimensions { width, height });
        }
        if pixels.len() != width * height {
            return Err(RasterError::LengthMismatch {
                actual: pixels.len() * 4,
                expected: width * height * 4,
                width,
                height,
            });
        }
        let mut rgba = Vec::with_capacity(pixels.len() * 4);
        for p in pixels {
            rgba.extend_from_slice(&[p.r, p.g, p.b, 255]);
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The underlying RGBA bytes, row-major, 4 bytes per pixel.
    #[inline]
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub(crate) fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    /// Rebuild a raster with the same dimensions around a transformed
    /// buffer. Internal: the buffer comes from `rgba()` and its length is
    /// never changed by the transforms.
    pub(crate) fn with_rgba(&self, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), self.rgba.len());
        Self {
            width: self.width,
            height: self.height,
            rgba,
        }
    }

    /// The color channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster.
    #[inline]
    pub fn rgb(&self, x: usize, y: usize) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2])
    }
}

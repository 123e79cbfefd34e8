//! CIE L\*a\*b\* color type
//!
//! Lab is a perceptually-oriented color space: Euclidean distances between
//! Lab triples track human-perceived color difference far better than
//! distances between raw sRGB bytes, which is why "precise" palette matching
//! converts both sides to Lab first.

use super::rgb::Rgb;

/// D65 reference white point.
const REF_WHITE: [f32; 3] = [0.95047, 1.0, 1.08883];

/// Threshold of the CIE nonlinear response, (6/29)^3.
const EPSILON: f32 = 0.008856;

/// A color in CIE L\*a\*b\* space (D65 illuminant).
///
/// Produced only by conversion from [`Rgb`]; the pipeline never converts
/// back.
///
/// # Components
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green-red axis, roughly -128.0..=127.0 in practice
/// - `b`: blue-yellow axis, roughly -128.0..=127.0 in practice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Create a Lab color from raw components.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance to another Lab color (the CIE76 delta-E).
    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance in Lab space.
    ///
    /// Use squared distance to avoid a sqrt when only comparing distances.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

/// sRGB gamma decode for one normalized channel.
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// CIE nonlinear response.
#[inline]
fn cie_f(t: f32) -> f32 {
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

impl From<Rgb> for Lab {
    /// Convert an sRGB byte triple to CIE L\*a\*b\*.
    ///
    /// Pipeline: normalize to [0,1], gamma decode, linear-sRGB -> XYZ (D65
    /// matrix), normalize by the reference white, apply the CIE nonlinear
    /// response, assemble L/a/b. Pure and deterministic: identical inputs
    /// produce bit-identical outputs.
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(f32::from(rgb.r) / 255.0);
        let g = srgb_to_linear(f32::from(rgb.g) / 255.0);
        let b = srgb_to_linear(f32::from(rgb.b) / 255.0);

        let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
        let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
        let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

        let fx = cie_f(x / REF_WHITE[0]);
        let fy = cie_f(y / REF_WHITE[1]);
        let fz = cie_f(z / REF_WHITE[2]);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

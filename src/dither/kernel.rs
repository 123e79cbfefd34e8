//! Error diffusion kernel definition
//!
//! A kernel specifies how each pixel's quantization error is distributed to
//! neighboring pixels that have not been processed yet.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: the neighbor at that offset receives
/// `error * weight / divisor`. Entries must only reference pixels the
/// row-major traversal has not visited yet (`dy > 0`, or `dy == 0` with
/// `dx > 0`).
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of the quantization error the kernel propagates.
    ///
    /// Floyd-Steinberg propagates all of it; this is an invariant the tests
    /// pin down, since losing error shifts the average brightness of the
    /// output.
    pub fn propagation(&self) -> f32 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum();
        sum as f32 / f32::from(self.divisor)
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16):
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 east, 3/16 south-west, 5/16 south, 1/16 south-east.
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // east
        (-1, 1, 3), // south-west
        (0, 1, 5),  // south
        (1, 1, 1),  // south-east
    ],
    divisor: 16,
};

//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how quantization error is distributed to
//! neighboring pixels that have not been visited yet.

/// An error diffusion kernel.
///
/// Each entry specifies an offset (dx, dy) and a weight for that neighbor.
/// A neighbor receives `error * weight / divisor`.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Floyd-Steinberg
/// propagates 100%; Atkinson propagates only 6/8 and drops the rest, which
/// gives its higher-contrast look.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (never negative)
    /// - `weight`: numerator over [`Kernel::divisor`]
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of the quantization error this kernel hands on.
    pub fn propagation(&self) -> f32 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        sum as f32 / self.divisor as f32
    }

    /// Deposit `error` from pixel (`x`, `y`) onto its kernel neighbors.
    ///
    /// `working` is a row-major `width * height` buffer. Neighbors that fall
    /// outside the image are skipped; nothing wraps or clamps.
    pub fn spread(
        &self,
        working: &mut [f32],
        width: usize,
        height: usize,
        x: usize,
        y: usize,
        error: f32,
    ) {
        let share = error / self.divisor as f32;
        for &(dx, dy, weight) in self.entries {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if nx < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            working[ny as usize * width + nx as usize] += share * weight as f32;
        }
    }
}

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors, 1/8 each, 75% total (6/8).
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

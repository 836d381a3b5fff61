//! Error diffusion dithering to a binary matrix.
//!
//! # Algorithms
//!
//! - **Ordered** ([`FloydSteinberg`]): classic 4-neighbor kernel, 100% error
//!   propagation, applied directly to the gamma-encoded intensities.
//! - **Extended** ([`Atkinson`]): 6-neighbor kernel, 75% propagation, applied
//!   in linear light.
//!
//! Both threshold at 0.5 (`value > 0.5` becomes 1) and walk the image once,
//! row-major, left to right and top to bottom.
//!
//! # Architecture
//!
//! Both algorithms implement the [`Dither`] trait and share one diffusion
//! loop, [`diffuse`], parameterized by a [`Kernel`]. [`DitherMethod`] is the
//! configuration-level selector.
//!
//! # Example
//!
//! ```
//! use mono_bitmap::dither::{Dither, FloydSteinberg};
//! use mono_bitmap::matrix::IntensityMatrix;
//!
//! let image = IntensityMatrix::from_levels(&[10, 10, 10, 10, 245, 245, 245, 245], 8, 1).unwrap();
//! let result = FloydSteinberg.dither(&image);
//! assert_eq!(result.bits(), &[0, 0, 0, 0, 1, 1, 1, 1]);
//! ```

mod atkinson;
mod floyd_steinberg;
mod kernel;

use std::fmt;
use std::str::FromStr;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG};

use crate::api::error::ConvertError;
use crate::matrix::{BinaryMatrix, IntensityMatrix};

/// Decision threshold shared by every algorithm.
pub const THRESHOLD: f32 = 0.5;

/// Trait for error diffusion dithering algorithms.
///
/// Implementors never mutate the input; they copy it into a working buffer
/// owned by the call.
pub trait Dither {
    /// Dither an intensity matrix to 0/1 decisions of the same shape.
    fn dither(&self, image: &IntensityMatrix) -> BinaryMatrix;
}

/// Dither algorithm selection.
///
/// Parses from the names used on the command line and in config files:
///
/// | Input                                   | Variant      |
/// |-----------------------------------------|--------------|
/// | `floyd`, `floyd-steinberg`, `ordered`   | `Ordered`    |
/// | `atkinson`, `extended`                  | `Extended`   |
///
/// # Example
///
/// ```
/// use mono_bitmap::DitherMethod;
///
/// let method: DitherMethod = "atkinson".parse().unwrap();
/// assert_eq!(method, DitherMethod::Extended);
/// assert!("bayer".parse::<DitherMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DitherMethod {
    /// Floyd-Steinberg error diffusion on the encoded intensities.
    Ordered,

    /// Atkinson error diffusion in linear light.
    Extended,
}

impl DitherMethod {
    /// Run the selected algorithm.
    pub fn dither(self, image: &IntensityMatrix) -> BinaryMatrix {
        match self {
            DitherMethod::Ordered => FloydSteinberg.dither(image),
            DitherMethod::Extended => Atkinson.dither(image),
        }
    }

    /// Canonical name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            DitherMethod::Ordered => "floyd",
            DitherMethod::Extended => "atkinson",
        }
    }
}

impl fmt::Display for DitherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DitherMethod {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floyd" | "floyd-steinberg" | "floyd_steinberg" | "ordered" => {
                Ok(DitherMethod::Ordered)
            }
            "atkinson" | "extended" => Ok(DitherMethod::Extended),
            _ => Err(ConvertError::UnsupportedDitherMethod(s.to_string())),
        }
    }
}

/// Run one error diffusion pass over `working`, in place.
///
/// `working` is exclusively borrowed for the whole pass: each visited pixel
/// is quantized against [`THRESHOLD`] using every error contribution already
/// deposited by earlier pixels, then its own error is spread forward with
/// `kernel`. Visited cells are overwritten with their quantized value.
///
/// Returns one 0/1 decision per pixel, row-major.
pub fn diffuse(working: &mut [f32], width: usize, height: usize, kernel: &Kernel) -> Vec<u8> {
    debug_assert_eq!(working.len(), width * height);
    let mut decisions = Vec::with_capacity(working.len());

    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let old = working[i];
            let new = if old > THRESHOLD { 1.0 } else { 0.0 };
            working[i] = new;
            decisions.push(new as u8);

            kernel.spread(working, width, height, x, y, old - new);
        }
    }

    decisions
}

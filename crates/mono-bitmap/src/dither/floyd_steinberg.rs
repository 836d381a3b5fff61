//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! The ordered error-diffusion path: 100% of the quantization error goes to
//! 4 neighbors, one pixel of lookahead on the current row.

use tracing::debug;

use crate::matrix::{BinaryMatrix, IntensityMatrix};

use super::{diffuse, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Runs directly on the intensities as given (no linearization), which is
/// how the classic 8-bit image-library conversion to 1-bit behaves.
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &IntensityMatrix) -> BinaryMatrix {
        let (width, height) = (image.width(), image.height());
        debug!(width, height, "Applying Floyd-Steinberg dithering");

        let mut working = image.working_copy();
        let decisions = diffuse(&mut working, width, height, &FLOYD_STEINBERG);
        BinaryMatrix::from_decisions(decisions, width, height)
    }
}

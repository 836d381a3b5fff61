//! Atkinson error diffusion dithering algorithm.
//!
//! The extended error-diffusion path. Only 6/8 of the quantization error is
//! passed on; the remaining 2/8 is dropped, which is what gives Atkinson its
//! crisp, higher-contrast look on 1-bit panels.

use tracing::debug;

use crate::color::to_linear;
use crate::matrix::{BinaryMatrix, IntensityMatrix};

use super::{diffuse, Dither, ATKINSON};

/// Atkinson error diffusion dithering in linear light.
///
/// # Algorithm
///
/// The input intensities are gamma-decoded with [`to_linear`] into a working
/// buffer, which is then dithered in place:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives 1/8 of the error, for a total of 6/8 = 75%.
///
/// Because the decision at each pixel is taken when it is visited, it sees
/// every contribution from pixels earlier in row-major order and none from
/// later ones. The output needs no conversion back to sRGB: 0 and 1 are
/// fixed points of the transfer function.
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, image: &IntensityMatrix) -> BinaryMatrix {
        let (width, height) = (image.width(), image.height());
        debug!(width, height, "Applying Atkinson dithering in linear light");

        let mut working: Vec<f32> = image.samples().iter().map(|&v| to_linear(v)).collect();
        let decisions = diffuse(&mut working, width, height, &ATKINSON);
        BinaryMatrix::from_decisions(decisions, width, height)
    }
}

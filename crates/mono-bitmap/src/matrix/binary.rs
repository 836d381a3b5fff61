//! Binary matrix, the output of every dithering pass.

use crate::api::error::{check_sample_count, ConvertError};

/// A row-major grid of 0/1 dither decisions.
///
/// `1` means the pixel is on (white), `0` means off (black). Which of those
/// ends up as a set bit in the packed bitmap is decided by
/// [`Polarity`](crate::pack::Polarity), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMatrix {
    bits: Vec<u8>,
    width: usize,
    height: usize,
}

impl BinaryMatrix {
    /// Wrap a row-major buffer of decisions. Any non-zero value counts as on.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or when `bits.len() != width * height`.
    ///
    /// # Example
    /// ```
    /// use mono_bitmap::matrix::BinaryMatrix;
    ///
    /// let matrix = BinaryMatrix::from_bits(vec![0, 255, 1, 0], 2, 2).unwrap();
    /// assert_eq!(matrix.bits(), &[0, 1, 1, 0]);
    /// ```
    pub fn from_bits(bits: Vec<u8>, width: usize, height: usize) -> Result<Self, ConvertError> {
        check_sample_count(bits.len(), width, height)?;
        Ok(Self::from_decisions(
            bits.into_iter().map(|b| u8::from(b != 0)).collect(),
            width,
            height,
        ))
    }

    /// Wrap decisions produced by a dithering pass (already 0/1, already sized).
    pub(crate) fn from_decisions(bits: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            bits.len(),
            width * height,
            "bits length ({}) must match width * height ({}x{})",
            bits.len(),
            width,
            height,
        );
        Self {
            bits,
            width,
            height,
        }
    }

    /// Matrix width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Matrix height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Decision at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.bits[y * self.width + x]
    }

    /// One row of decisions.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        &self.bits[y * self.width..(y + 1) * self.width]
    }

    /// All decisions, row-major.
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of on (white) pixels.
    pub fn count_on(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }
}

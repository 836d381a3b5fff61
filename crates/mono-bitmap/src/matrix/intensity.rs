//! Normalized intensity matrix, the input to every dithering pass.

use crate::api::error::{check_sample_count, ConvertError};

/// A row-major grid of intensity samples normalized to 0.0..=1.0.
///
/// Dithering never mutates an `IntensityMatrix`; each pass copies the samples
/// into its own working buffer first.
///
/// # Example
///
/// ```
/// use mono_bitmap::matrix::IntensityMatrix;
///
/// let matrix = IntensityMatrix::from_levels(&[0, 255], 2, 1).unwrap();
/// assert_eq!(matrix.get(0, 0), 0.0);
/// assert_eq!(matrix.get(1, 0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityMatrix {
    samples: Vec<f32>,
    width: usize,
    height: usize,
}

impl IntensityMatrix {
    /// Wrap normalized samples.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or when `samples.len() != width * height`.
    pub fn new(samples: Vec<f32>, width: usize, height: usize) -> Result<Self, ConvertError> {
        check_sample_count(samples.len(), width, height)?;
        Ok(Self {
            samples,
            width,
            height,
        })
    }

    /// Build a matrix from 8-bit gray levels, dividing each by 255.
    ///
    /// # Errors
    ///
    /// Same conditions as [`IntensityMatrix::new`].
    pub fn from_levels(levels: &[u8], width: usize, height: usize) -> Result<Self, ConvertError> {
        check_sample_count(levels.len(), width, height)?;
        Ok(Self {
            samples: levels.iter().map(|&v| v as f32 / 255.0).collect(),
            width,
            height,
        })
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

    /// Sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.samples[y * self.width + x]
    }

    /// All samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Copy the samples into a fresh working buffer for one dithering pass.
    pub(crate) fn working_copy(&self) -> Vec<f32> {
        self.samples.clone()
    }
}

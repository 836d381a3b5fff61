//! Image sources supplied by the decoding collaborator.

use crate::api::error::{check_sample_count, ConvertError};
use crate::color::LumaWeights;

/// A single pixel sample as delivered by an [`ImageSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// 8-bit gray level
    Gray(u8),
    /// 8-bit gamma-encoded `[R, G, B]`
    Rgb([u8; 3]),
}

impl Sample {
    /// Collapse the sample to a gray level, reducing RGB with `weights`.
    #[inline]
    pub fn to_gray(self, weights: LumaWeights) -> u8 {
        match self {
            Sample::Gray(v) => v,
            Sample::Rgb(rgb) => weights.luma(rgb),
        }
    }
}

/// Read access to a decoded raster image.
///
/// The conversion core never decodes or resizes; it only asks for the image
/// dimensions and per-pixel samples. `sample` is only called with
/// `x < width()` and `y < height()`.
pub trait ImageSource {
    /// Image width in pixels.
    fn width(&self) -> usize;

    /// Image height in pixels.
    fn height(&self) -> usize;

    /// Sample at column `x`, row `y`.
    fn sample(&self, x: usize, y: usize) -> Sample;
}

/// Reduce any image source to a row-major plane of 8-bit gray levels.
///
/// # Errors
///
/// Returns [`ConvertError::InvalidDimension`] if the source is empty in
/// either direction.
pub fn gray_levels<S: ImageSource + ?Sized>(
    source: &S,
    weights: LumaWeights,
) -> Result<Vec<u8>, ConvertError> {
    let (width, height) = (source.width(), source.height());
    crate::api::error::check_dimensions(width, height)?;

    let mut levels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            levels.push(source.sample(x, y).to_gray(weights));
        }
    }
    Ok(levels)
}

/// In-memory 8-bit grayscale image.
///
/// # Example
///
/// ```
/// use mono_bitmap::matrix::{GrayBuffer, ImageSource, Sample};
///
/// let image = GrayBuffer::new(vec![0, 255, 255, 0], 2, 2).unwrap();
/// assert_eq!(image.sample(1, 0), Sample::Gray(255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayBuffer {
    /// Wrap a row-major gray plane.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or when `data.len() != width * height`.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self, ConvertError> {
        check_sample_count(data.len(), width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Raw gray levels, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl ImageSource for GrayBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn sample(&self, x: usize, y: usize) -> Sample {
        Sample::Gray(self.data[y * self.width + x])
    }
}

/// In-memory 8-bit RGB image, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl RgbBuffer {
    /// Wrap a row-major `[R, G, B, R, G, B, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Fails on zero dimensions or when `data.len() != width * height * 3`.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Result<Self, ConvertError> {
        crate::api::error::check_dimensions(width, height)?;
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(ConvertError::SampleCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Raw interleaved channels, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl ImageSource for RgbBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn sample(&self, x: usize, y: usize) -> Sample {
        let i = (y * self.width + x) * 3;
        Sample::Rgb([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

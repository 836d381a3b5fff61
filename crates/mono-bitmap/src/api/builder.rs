//! Converter builder, the primary entry point for the crate.
//!
//! [`Converter`] wires gray reduction, tone adjustment, dithering, packing
//! and emission into one reusable pipeline.

use tracing::debug;

use crate::color::LumaWeights;
use crate::dither::DitherMethod;
use crate::emit::{render, ImageDescriptor, Template};
use crate::matrix::{gray_levels, BinaryMatrix, ImageSource, IntensityMatrix};
use crate::pack::{pack, PackedBitmap, Polarity};
use crate::preprocess::{adjust_levels, ToneOptions};

use super::error::ConvertError;

/// Everything one conversion produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Per-pixel decisions before polarity is applied (1 = white).
    pub binary: BinaryMatrix,
    /// Packed bytes as they appear in the emitted array.
    pub bitmap: PackedBitmap,
    /// Rendered C source text.
    pub text: String,
    /// Samples that left 0..=255 during tone adjustment.
    pub clamped: usize,
}

/// High-level image to LVGL C source converter.
///
/// Configuration methods consume and return `self`; [`convert()`](Self::convert)
/// takes `&self`, so one converter can be reused for many images.
///
/// # Example
///
/// ```
/// use mono_bitmap::matrix::GrayBuffer;
/// use mono_bitmap::{Converter, DitherMethod, Polarity, Template};
///
/// let image = GrayBuffer::new(vec![0, 0, 0, 0, 255, 255, 255, 255], 8, 1).unwrap();
/// let converter = Converter::new(DitherMethod::Ordered, Polarity::Direct, Template::Macro);
///
/// let result = converter.convert(&image, "strip").unwrap();
/// assert_eq!(result.bitmap.bytes(), &[0x0F]);
/// assert!(result.text.contains("static const uint8_t strip_map[]"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    method: DitherMethod,
    polarity: Polarity,
    template: Template,
    tone: ToneOptions,
    weights: LumaWeights,
}

impl Converter {
    /// Create a converter with neutral tone and BT.601 luma weights.
    pub fn new(method: DitherMethod, polarity: Polarity, template: Template) -> Self {
        Self {
            method,
            polarity,
            template,
            tone: ToneOptions::default(),
            weights: LumaWeights::default(),
        }
    }

    /// Set brightness offset, clamped to -1..=1.
    #[inline]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.tone = self.tone.brightness(brightness);
        self
    }

    /// Set contrast amount, clamped to -1..=1.
    #[inline]
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.tone = self.tone.contrast(contrast);
        self
    }

    /// Replace all tone options at once.
    #[inline]
    pub fn tone(mut self, tone: ToneOptions) -> Self {
        self.tone = tone;
        self
    }

    /// Set the weights used to reduce RGB samples to gray.
    #[inline]
    pub fn luma_weights(mut self, weights: LumaWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Selected dither method.
    #[inline]
    pub fn method(&self) -> DitherMethod {
        self.method
    }

    /// Selected output polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Selected emission template.
    #[inline]
    pub fn template(&self) -> Template {
        self.template
    }

    /// Run the full pipeline on `source`, emitting arrays named after `name`.
    ///
    /// 1. Reduce to 8-bit gray levels
    /// 2. Apply brightness and contrast
    /// 3. Normalize and dither
    /// 4. Pack MSB-first through the polarity
    /// 5. Render the template
    ///
    /// # Errors
    ///
    /// - [`ConvertError::InvalidDimension`] for an empty source
    /// - [`ConvertError::InvalidName`] if `name` is not a C identifier
    pub fn convert<S: ImageSource + ?Sized>(
        &self,
        source: &S,
        name: &str,
    ) -> Result<Conversion, ConvertError> {
        let (width, height) = (source.width(), source.height());
        debug!(
            width,
            height,
            method = %self.method,
            polarity = %self.polarity,
            template = %self.template,
            "Starting conversion"
        );

        let levels = gray_levels(source, self.weights)?;
        let adjusted = adjust_levels(&levels, &self.tone);
        let intensity = IntensityMatrix::from_levels(&adjusted.levels, width, height)?;
        let binary = self.method.dither(&intensity);
        let bitmap = pack(&binary, self.polarity);
        let descriptor = ImageDescriptor::new(name, &bitmap, self.template)?;
        let text = render(&descriptor);

        debug!(
            white = binary.count_on(),
            clamped = adjusted.clamped,
            packed = bitmap.len(),
            "Conversion complete"
        );

        Ok(Conversion {
            binary,
            bitmap,
            text,
            clamped: adjusted.clamped,
        })
    }
}

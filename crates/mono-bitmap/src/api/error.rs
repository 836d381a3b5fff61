//! Unified error type for the mono-bitmap public API.
//!
//! Every fallible operation in the crate reports a [`ConvertError`]. All
//! variants are caller-input problems: the conversion is a pure transform, so
//! nothing here is transient and nothing is worth retrying. Out-of-range
//! samples are never reported; they are clamped where they occur.

use thiserror::Error;

/// Errors surfaced by the conversion pipeline.
///
/// # Example
///
/// ```
/// use mono_bitmap::{ConvertError, Template};
///
/// let err = "png".parse::<Template>().unwrap_err();
/// assert_eq!(err, ConvertError::UnsupportedTemplate("png".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("Sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("Unsupported template: {0}")]
    UnsupportedTemplate(String),

    #[error("Unsupported dither method: {0}")]
    UnsupportedDitherMethod(String),

    #[error("Unsupported polarity: {0}")]
    UnsupportedPolarity(String),

    #[error("Invalid symbol name: {0:?}")]
    InvalidName(String),
}

/// Reject zero-sized images before any buffer is allocated.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimension { width, height });
    }
    Ok(())
}

/// Reject buffers whose length disagrees with the declared dimensions.
pub(crate) fn check_sample_count(
    actual: usize,
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    check_dimensions(width, height)?;
    let expected = width * height;
    if actual != expected {
        return Err(ConvertError::SampleCountMismatch { expected, actual });
    }
    Ok(())
}

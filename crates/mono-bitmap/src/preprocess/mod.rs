//! Tone preprocessing ahead of dithering.
//!
//! Brightness and contrast operate on 8-bit gray levels (0..=255), before the
//! levels are normalized into an [`IntensityMatrix`](crate::matrix::IntensityMatrix).
//! The adjusted values are clamped to 0..=255 and truncated, so the dithering
//! input is always representable.

mod options;
mod tone;

pub use options::ToneOptions;
pub use tone::{adjust_levels, ToneAdjustment};

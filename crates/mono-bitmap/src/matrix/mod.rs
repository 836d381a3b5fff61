//! Pixel matrices flowing through the pipeline.
//!
//! - [`ImageSource`]: what the image-loading collaborator hands in (gray or
//!   RGB samples behind an accessor), with [`GrayBuffer`] and [`RgbBuffer`]
//!   as ready-made in-memory implementations.
//! - [`IntensityMatrix`]: normalized 0.0..=1.0 samples, the dithering input.
//! - [`BinaryMatrix`]: 0/1 decisions, the dithering output. 1 means the pixel
//!   is on (white), 0 means off (black).
//!
//! All matrices are row-major and reject zero dimensions at construction.

mod binary;
mod intensity;
mod source;

pub use binary::BinaryMatrix;
pub use intensity::IntensityMatrix;
pub use source::{gray_levels, GrayBuffer, ImageSource, RgbBuffer, Sample};

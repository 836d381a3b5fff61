//! mono-bitmap: 1-bit LVGL image conversion
//!
//! This library turns grayscale or RGB raster images into 1-bit bitmaps and
//! emits them as C source that LVGL can compile straight into firmware.
//!
//! # Quick Start
//!
//! The [`Converter`] builder is the primary entry point:
//!
//! ```
//! use mono_bitmap::matrix::GrayBuffer;
//! use mono_bitmap::{Converter, DitherMethod, Polarity, Template};
//!
//! let image = GrayBuffer::new(vec![128; 16 * 4], 16, 4).unwrap();
//! let converter = Converter::new(DitherMethod::Extended, Polarity::Inverted, Template::Descriptor)
//!     .brightness(0.1);
//!
//! let result = converter.convert(&image, "badge").unwrap();
//! assert_eq!(result.bitmap.len(), 2 * 4);
//! assert!(result.text.contains(".data_size = 16,"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! ImageSource             (gray or RGB samples)
//!     |
//!     v
//! gray levels             (LumaWeights, rounded to u8)
//!     |
//!     v
//! tone adjustment         (brightness, then contrast, clamp once)
//!     |
//!     v
//! IntensityMatrix         (level / 255)
//!     |
//!     v
//! BinaryMatrix            (Floyd-Steinberg, or Atkinson in linear light)
//!     |
//!     v
//! PackedBitmap            (MSB first, rows padded to whole bytes, Polarity)
//!     |
//!     v
//! C source                (Template::Macro or Template::Descriptor)
//! ```
//!
//! # Dithering Methods
//!
//! - [`DitherMethod::Ordered`]: Floyd-Steinberg on the encoded intensities,
//!   100% error propagation
//! - [`DitherMethod::Extended`]: Atkinson on linearized intensities, 75%
//!   error propagation for a crisper, higher-contrast look
//!
//! Both quantize with a strict `> 0.5` threshold and scan rows left to right.

pub mod api;
pub mod color;
pub mod dither;
pub mod emit;
pub mod matrix;
pub mod pack;
pub mod preprocess;


pub use api::{Conversion, ConvertError, Converter};
pub use color::LumaWeights;
pub use dither::DitherMethod;
pub use emit::Template;
pub use pack::{PackedBitmap, Polarity};
pub use preprocess::{adjust_levels, ToneAdjustment, ToneOptions};

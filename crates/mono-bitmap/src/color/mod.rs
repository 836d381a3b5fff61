//! Color conversion utilities
//!
//! Two concerns live here:
//!
//! - **sRGB transfer function**: [`to_linear`] and [`to_srgb`] move a single
//!   normalized sample between gamma-encoded sRGB and linear light.
//! - **Luma reduction**: [`LumaWeights`] collapses an RGB sample into one
//!   8-bit gray level before any dithering happens.
//!
//! # Example
//!
//! ```
//! use mono_bitmap::color::{to_linear, to_srgb, LumaWeights};
//!
//! let gray = LumaWeights::BT601.luma([255, 255, 255]);
//! assert_eq!(gray, 255);
//!
//! let linear = to_linear(0.5);
//! assert!((to_srgb(linear) - 0.5).abs() < 1e-3);
//! ```

mod luma;
mod srgb;

pub use luma::LumaWeights;
pub use srgb::{to_linear, to_srgb};

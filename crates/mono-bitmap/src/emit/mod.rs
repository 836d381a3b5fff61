//! C source emission for LVGL.
//!
//! The emitter takes a [`PackedBitmap`](crate::pack::PackedBitmap), wraps it
//! in an [`ImageDescriptor`] and renders it through one of two fixed
//! [`Template`]s:
//!
//! | Template     | Hex case | Line layout        | `data_size`      | LVGL color format        |
//! |--------------|----------|--------------------|------------------|--------------------------|
//! | `Macro`      | `0xFF`   | one packed row     | packed length    | `LV_IMG_CF_ALPHA_1BIT`   |
//! | `Descriptor` | `0xff`   | 32 values          | packed length + 8| `LV_IMG_CF_INDEXED_1BIT` |
//!
//! In both templates the array symbol is the base name plus `_map`.

mod descriptor;
mod render;
mod template;

pub use descriptor::{ImageDescriptor, ARRAY_SUFFIX};
pub use render::{render, CSource};
pub use template::Template;

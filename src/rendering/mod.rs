pub mod png_source;
pub mod preview;

pub use png_source::{decode_png, load_png, DecodedImage};
pub use preview::{encode_preview, write_preview};

//! Emission template selection.

use std::fmt;
use std::str::FromStr;

use crate::api::error::ConvertError;

/// The two C layouts the emitter can produce.
///
/// # Example
///
/// ```
/// use mono_bitmap::Template;
///
/// assert_eq!("descriptor".parse::<Template>().unwrap(), Template::Descriptor);
/// assert_eq!(Template::Descriptor.data_size(2550), 2558);
/// assert_eq!(Template::Macro.data_size(2550), 2550);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// `#define` width/height constants, a `static const uint8_t` array with
    /// one packed row per line, and an `LV_IMG_CF_ALPHA_1BIT` descriptor.
    Macro,

    /// LVGL include preamble, an array prefixed by the 2-entry color index
    /// table, 32 bytes per line, and an `LV_IMG_CF_INDEXED_1BIT` descriptor.
    Descriptor,
}

impl Template {
    /// Color index table prepended to the pixel data by [`Template::Descriptor`].
    ///
    /// Index 0 is opaque white, index 1 opaque black, each as `B, G, R, A`.
    pub const COLOR_INDEX_HEADER: [u8; 8] = [0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0xff];

    /// Bytes this template adds in front of the packed pixel data.
    #[inline]
    pub fn header_len(self) -> usize {
        match self {
            Template::Macro => 0,
            Template::Descriptor => Self::COLOR_INDEX_HEADER.len(),
        }
    }

    /// The `data_size` reported for a bitmap of `packed_len` bytes.
    #[inline]
    pub fn data_size(self, packed_len: usize) -> usize {
        packed_len + self.header_len()
    }

    /// Hex literals per output line, or `None` for one packed row per line.
    #[inline]
    pub fn values_per_line(self) -> Option<usize> {
        match self {
            Template::Macro => None,
            Template::Descriptor => Some(32),
        }
    }

    /// Canonical name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Template::Macro => "macro",
            Template::Descriptor => "descriptor",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "macro" | "alpha" => Ok(Template::Macro),
            "descriptor" | "indexed" => Ok(Template::Descriptor),
            _ => Err(ConvertError::UnsupportedTemplate(s.to_string())),
        }
    }
}

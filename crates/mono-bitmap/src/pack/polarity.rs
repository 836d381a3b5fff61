//! Mapping from dither decisions to stored bits.

use std::fmt;
use std::str::FromStr;

use crate::api::error::ConvertError;

/// Which dither decision is stored as a set bit.
///
/// The two LVGL layouts disagree: an alpha mask marks the visible (white)
/// pixels, while an indexed image whose palette has white at index 0 and
/// black at index 1 marks the ink.
///
/// # Example
///
/// ```
/// use mono_bitmap::Polarity;
///
/// assert_eq!(Polarity::Direct.bit(1), 1);
/// assert_eq!(Polarity::Inverted.bit(1), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// White (1) is stored as 1, black as 0.
    Direct,

    /// Ink (black, 0) is stored as 1, white as 0.
    Inverted,
}

impl Polarity {
    /// Stored bit for a 0/1 decision.
    #[inline]
    pub fn bit(self, decision: u8) -> u8 {
        match self {
            Polarity::Direct => decision & 1,
            Polarity::Inverted => (decision & 1) ^ 1,
        }
    }

    /// Canonical name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Polarity::Direct => "direct",
            Polarity::Inverted => "inverted",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarity {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" | "white" => Ok(Polarity::Direct),
            "inverted" | "ink" => Ok(Polarity::Inverted),
            _ => Err(ConvertError::UnsupportedPolarity(s.to_string())),
        }
    }
}

//! RGB to grayscale reduction.

/// Channel weights used to reduce an RGB sample to a single gray level.
///
/// The weights are applied to gamma-encoded 8-bit channels and the result is
/// rounded and clamped to 0..=255, matching how common image libraries build
/// an 8-bit luminance plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaWeights {
    /// Red weight
    pub r: f32,
    /// Green weight
    pub g: f32,
    /// Blue weight
    pub b: f32,
}

impl LumaWeights {
    /// ITU-R BT.601 weights (0.299, 0.587, 0.114).
    pub const BT601: Self = Self {
        r: 0.299,
        g: 0.587,
        b: 0.114,
    };

    /// ITU-R BT.709 weights (0.2126, 0.7152, 0.0722).
    pub const BT709: Self = Self {
        r: 0.2126,
        g: 0.7152,
        b: 0.0722,
    };

    /// Create custom weights.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Reduce an `[R, G, B]` sample to an 8-bit gray level.
    ///
    /// # Example
    /// ```
    /// use mono_bitmap::color::LumaWeights;
    /// assert_eq!(LumaWeights::BT601.luma([0, 0, 0]), 0);
    /// assert_eq!(LumaWeights::BT601.luma([255, 0, 0]), 76);
    /// ```
    #[inline]
    pub fn luma(&self, rgb: [u8; 3]) -> u8 {
        let y = self.r * rgb[0] as f32 + self.g * rgb[1] as f32 + self.b * rgb[2] as f32;
        y.round().clamp(0.0, 255.0) as u8
    }
}

impl Default for LumaWeights {
    fn default() -> Self {
        Self::BT601
    }
}

//! Tone adjustment options.

/// Brightness and contrast applied to 8-bit gray levels before dithering.
///
/// Both values live in -1.0..=1.0; setters clamp into that range. Zero for
/// both means the gray levels pass through untouched.
///
/// # Example
///
/// ```
/// use mono_bitmap::ToneOptions;
///
/// let options = ToneOptions::new().brightness(0.1).contrast(0.25);
/// assert_eq!(options.brightness, 0.1);
///
/// // Out-of-range values are clamped
/// let options = ToneOptions::new().contrast(3.0);
/// assert_eq!(options.contrast, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToneOptions {
    /// Additive brightness, scaled by 255.
    ///
    /// - 0.0 = no change
    /// - 1.0 = every level pushed to white
    /// - -1.0 = every level pushed to black
    pub brightness: f32,

    /// Contrast around the midpoint 128.
    ///
    /// - 0.0 = no change
    /// - positive = steeper curve
    /// - -1.0 = everything collapses to 128
    pub contrast: f32,
}

impl ToneOptions {
    /// Create options with no adjustment.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set brightness (clamped to -1.0..=1.0).
    #[inline]
    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness.clamp(-1.0, 1.0);
        self
    }

    /// Set contrast (clamped to -1.0..=1.0).
    #[inline]
    pub fn contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast.clamp(-1.0, 1.0);
        self
    }

    /// Whether these options leave the image untouched.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.brightness == 0.0 && self.contrast == 0.0
    }

    /// Standard contrast factor: `259 * (c*255 + 255) / (255 * (259 - c*255))`.
    ///
    /// At `contrast = 0.0` the factor is 1.0.
    pub fn contrast_factor(&self) -> f32 {
        let c = self.contrast * 255.0;
        (259.0 * (c + 255.0)) / (255.0 * (259.0 - c))
    }
}

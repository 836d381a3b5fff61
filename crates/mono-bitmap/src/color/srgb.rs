//! sRGB transfer function (IEC 61966-2-1).
//!
//! Error diffusion in the Atkinson path runs on linear-light values so the
//! quantization error represents a physical intensity difference. These
//! functions are pure and elementwise; callers pass samples normalized to
//! 0.0..=1.0.

/// Decode a gamma-encoded sRGB sample (0.0..=1.0) to linear light.
#[inline]
pub fn to_linear(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light sample (0.0..=1.0) back to sRGB.
#[inline]
pub fn to_srgb(linear: f32) -> f32 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1000 evenly spaced samples must survive the round trip within 1e-3.
    #[test]
    fn test_round_trip_accuracy() {
        let mut max_error = 0.0f32;

        for i in 0..1000 {
            let x = i as f32 / 999.0;
            let back = to_srgb(to_linear(x));
            let error = (back - x).abs();
            max_error = max_error.max(error);

            assert!(
                error < 1e-3,
                "Round-trip error too large for {x}: got {back}, error {error}"
            );
        }

        println!("Max round-trip error: {max_error}");
    }

    #[test]
    fn test_boundaries() {
        assert!(to_linear(0.0).abs() < 1e-6);
        assert!((to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(to_srgb(0.0).abs() < 1e-6);
        assert!((to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    /// Known values from the IEC 61966-2-1 formula.
    #[test]
    fn test_known_gamma_values() {
        // ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
        assert!(
            (to_linear(0.5) - 0.214).abs() < 0.001,
            "sRGB 0.5 -> linear expected ~0.214, got {}",
            to_linear(0.5)
        );

        // 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
        assert!(
            (to_srgb(0.5) - 0.735).abs() < 0.001,
            "linear 0.5 -> sRGB expected ~0.735, got {}",
            to_srgb(0.5)
        );
    }

    #[test]
    fn test_linear_segment() {
        // Below the knee both directions are a plain scale by 12.92
        assert!((to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
        assert!((to_srgb(0.003) - 0.003 * 12.92).abs() < 1e-7);
    }

    #[test]
    fn test_monotonicity() {
        let mut prev_linear = to_linear(0.0);
        let mut prev_srgb = to_srgb(0.0);
        for i in 1..=1000 {
            let x = i as f32 / 1000.0;

            let linear = to_linear(x);
            assert!(linear >= prev_linear, "to_linear not monotonic at {x}");
            prev_linear = linear;

            let srgb = to_srgb(x);
            assert!(srgb >= prev_srgb, "to_srgb not monotonic at {x}");
            prev_srgb = srgb;
        }
    }

    #[test]
    fn test_linear_is_darker_than_encoded() {
        // Gamma decoding pulls mid-tones down, encoding pushes them up
        for i in 1..10 {
            let x = i as f32 / 10.0;
            assert!(to_linear(x) < x);
            assert!(to_srgb(x) > x);
        }
    }
}

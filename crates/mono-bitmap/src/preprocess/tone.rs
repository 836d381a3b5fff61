//! Brightness and contrast remap on 8-bit gray levels.

use tracing::debug;

use super::options::ToneOptions;

/// Result of a tone adjustment pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneAdjustment {
    /// Adjusted gray levels, same length and order as the input.
    pub levels: Vec<u8>,
    /// How many samples left 0..=255 before clamping.
    pub clamped: usize,
}

/// Apply brightness then contrast, clamp once, truncate back to 8 bits.
///
/// For each level `v`:
///
/// ```text
/// v = v + brightness * 255                       (if brightness != 0)
/// v = factor * (v - 128) + 128                   (if contrast != 0)
/// out = trunc(clamp(v, 0, 255))
/// ```
///
/// Out-of-range values are corrected by clamping and counted in
/// [`ToneAdjustment::clamped`]; they are never an error.
///
/// # Example
///
/// ```
/// use mono_bitmap::{adjust_levels, ToneOptions};
///
/// let result = adjust_levels(&[0, 0, 0], &ToneOptions::new().brightness(1.0));
/// assert_eq!(result.levels, vec![255, 255, 255]);
/// ```
pub fn adjust_levels(levels: &[u8], options: &ToneOptions) -> ToneAdjustment {
    if options.is_identity() {
        return ToneAdjustment {
            levels: levels.to_vec(),
            clamped: 0,
        };
    }

    let offset = options.brightness * 255.0;
    let factor = options.contrast_factor();
    let mut clamped = 0;

    let adjusted = levels
        .iter()
        .map(|&level| {
            let mut v = level as f32;
            if options.brightness != 0.0 {
                v += offset;
            }
            if options.contrast != 0.0 {
                v = factor * (v - 128.0) + 128.0;
            }
            if !(0.0..=255.0).contains(&v) {
                clamped += 1;
            }
            v.clamp(0.0, 255.0) as u8
        })
        .collect();

    debug!(
        brightness = options.brightness,
        contrast = options.contrast,
        clamped,
        "Applied tone adjustment"
    );

    ToneAdjustment {
        levels: adjusted,
        clamped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passthrough() {
        let levels: Vec<u8> = (0..=255).collect();
        let result = adjust_levels(&levels, &ToneOptions::new());
        assert_eq!(result.levels, levels);
        assert_eq!(result.clamped, 0);
    }

    #[test]
    fn test_full_brightness_saturates_black() {
        let result = adjust_levels(&[0; 16], &ToneOptions::new().brightness(1.0));
        assert!(result.levels.iter().all(|&v| v == 255));
        assert_eq!(result.clamped, 0, "0 + 255 lands exactly on the limit");
    }

    #[test]
    fn test_brightness_clamps_and_counts() {
        let result = adjust_levels(&[10, 200, 250], &ToneOptions::new().brightness(0.2));
        // 0.2 * 255 = 51
        assert_eq!(result.levels, vec![61, 251, 255]);
        assert_eq!(result.clamped, 1);
    }

    #[test]
    fn test_negative_brightness_clamps_to_black() {
        let result = adjust_levels(&[0, 100, 255], &ToneOptions::new().brightness(-1.0));
        assert_eq!(result.levels, vec![0, 0, 0]);
        assert_eq!(result.clamped, 2);
    }

    #[test]
    fn test_min_contrast_collapses_to_midpoint() {
        let result = adjust_levels(&[0, 64, 200, 255], &ToneOptions::new().contrast(-1.0));
        assert!(result.levels.iter().all(|&v| v == 128));
    }

    #[test]
    fn test_contrast_keeps_midpoint_fixed() {
        for c in [-0.5, -0.1, 0.1, 0.5, 0.9] {
            let result = adjust_levels(&[128], &ToneOptions::new().contrast(c));
            assert_eq!(result.levels, vec![128], "contrast {c} moved the midpoint");
        }
    }

    #[test]
    fn test_contrast_spreads_levels() {
        let result = adjust_levels(&[100, 156], &ToneOptions::new().contrast(0.5));
        assert!(result.levels[0] < 100);
        assert!(result.levels[1] > 156);
    }

    #[test]
    fn test_brightness_applies_before_contrast() {
        // Brightness first moves 128 off the midpoint, then contrast amplifies it
        let opts = ToneOptions::new().brightness(0.1).contrast(0.5);
        let result = adjust_levels(&[128], &opts);
        let offset = 0.1f32 * 255.0;
        let expected = (opts.contrast_factor() * offset + 128.0).clamp(0.0, 255.0) as u8;
        assert_eq!(result.levels, vec![expected]);
    }
}

use crate::config::CloudConfig;
use crate::hsl::{self, Hsl};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Encoding {
    pub size: f32,
    pub color: Hsl,
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// `t` must be in `[0.0, 1.0]`.
pub fn encode(t: f32, config: &CloudConfig) -> Encoding {
    let palette = &config.palette;

    Encoding {
        size: lerp(config.min_size, config.max_size, t),
        color: hsl::lerp(palette.cold(), palette.hot(), t),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::config::Palette;

    use super::*;

    #[test]
    fn zero_is_small_and_cold() {
        let e = encode(0.0, &CloudConfig::default());

        assert_eq!(e.size, 0.25);
        assert_eq!(e.color, Hsl::new(220.0, 0.9, 0.55));
    }

    #[test]
    fn one_is_large_and_hot() {
        let e = encode(1.0, &CloudConfig::default());

        assert_eq!(e.size, 1.0);
        assert_eq!(e.color, Hsl::new(0.0, 0.9, 0.55));
    }

    #[test]
    fn midpoint() {
        let e = encode(0.5, &CloudConfig::default());

        assert!((e.size - 0.625).abs() < 1e-6);
        assert!((e.color.h - 110.0).abs() < 1e-4);
    }

    #[test]
    fn legacy_palette_ramps_toward_magenta() {
        let config = CloudConfig {
            palette: Palette::LEGACY,
            ..CloudConfig::default()
        };

        assert_eq!(encode(0.0, &config).color, Hsl::new(220.0, 0.8, 0.6));
        assert_eq!(encode(1.0, &config).color, Hsl::new(330.0, 0.8, 0.6));
    }

    proptest! {
        #[test]
        fn monotonic_in_t(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let config = CloudConfig::default();
            let (el, eh) = (encode(lo, &config), encode(hi, &config));

            prop_assert!(el.size <= eh.size);
            // Heat rises as hue falls from 220 toward 0.
            prop_assert!(el.color.h >= eh.color.h);
        }

        #[test]
        fn pure(t in 0.0f32..=1.0) {
            let config = CloudConfig::default();
            prop_assert_eq!(encode(t, &config), encode(t, &config));
        }
    }
}

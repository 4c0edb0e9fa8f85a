use serde::{Deserialize, Serialize};

use crate::hsl::Hsl;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z).length()
    }

    /// Rotation about the vertical axis, right-handed.
    pub fn rotate_y(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    pub fn rotate_x(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }
}

/// One entry of the external input contract. `weight` must be finite and
/// non-negative; see [`sanitize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub weight: f32,
}

impl Keyword {
    pub fn new(word: impl Into<String>, weight: f32) -> Self {
        Self {
            word: word.into(),
            weight,
        }
    }
}

/// Envelope returned by the analysis service: `{ "keywords": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordResponse {
    pub keywords: Vec<Keyword>,
}

/// Position on the sphere surface assigned to a slot. Fixed for a given count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPoint {
    pub position: Vec3,
}

/// Frozen per-keyword render data. Produced by the orchestrator, consumed by
/// the projection renderer. `current_position` and `highlighted` change every
/// tick; everything else is fixed until the keyword set changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub word: String,
    pub weight: f32,
    pub size: f32,
    pub color: Hsl,
    pub base_position: LayoutPoint,
    pub current_position: Vec3,
    pub highlighted: bool,
    pub(crate) hover_scale: f32,
}

impl RenderItem {
    pub fn scale(&self) -> f32 {
        if self.highlighted {
            self.hover_scale
        } else {
            1.0
        }
    }

    pub fn display_size(&self) -> f32 {
        self.size * self.scale()
    }
}

/// Brings caller input in line with the engine's precondition: weights are
/// clamped into `[0, f32::MAX]` (NaN becomes 0), words are trimmed, and
/// entries with an empty word are dropped.
pub fn sanitize(keywords: impl IntoIterator<Item = Keyword>) -> Vec<Keyword> {
    keywords
        .into_iter()
        .filter_map(|k| {
            let word = k.word.trim();

            if word.is_empty() {
                return None;
            }

            let weight = if k.weight.is_nan() {
                0.0
            } else {
                k.weight.clamp(0.0, f32::MAX)
            };

            Some(Keyword::new(word, weight))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.distance(b) < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn rotate_y_quarter_turn() {
        assert_close(Vec3::new(1.0, 2.0, 0.0).rotate_y(FRAC_PI_2), Vec3::new(0.0, 2.0, -1.0));
    }

    #[test]
    fn rotate_x_quarter_turn() {
        assert_close(Vec3::new(3.0, 1.0, 0.0).rotate_x(FRAC_PI_2), Vec3::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(0.3, -1.2, 2.0);

        for i in 0..16 {
            let angle = i as f32 * 0.4;
            assert!((v.rotate_y(angle).length() - v.length()).abs() < 1e-5);
            assert!((v.rotate_x(angle).length() - v.length()).abs() < 1e-5);
        }
    }

    #[test]
    fn sanitize_clamps_bad_weights() {
        let cleaned = sanitize([
            Keyword::new("nan", f32::NAN),
            Keyword::new("neg", -3.0),
            Keyword::new("inf", f32::INFINITY),
            Keyword::new("ok", 2.5),
        ]);

        let weights: Vec<f32> = cleaned.iter().map(|k| k.weight).collect();
        assert_eq!(weights, vec![0.0, 0.0, f32::MAX, 2.5]);
    }

    #[test]
    fn sanitize_trims_and_drops_empty_words() {
        let cleaned = sanitize([
            Keyword::new("  rust ", 1.0),
            Keyword::new("   ", 4.0),
            Keyword::new("", 2.0),
        ]);

        assert_eq!(cleaned, vec![Keyword::new("rust", 1.0)]);
    }

    #[test]
    fn sanitize_keeps_duplicates_in_order() {
        let cleaned = sanitize([Keyword::new("a", 1.0), Keyword::new("a", 2.0)]);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[1].weight, 2.0);
    }

    #[test]
    fn keyword_list_parses_from_json() {
        let parsed: Vec<Keyword> =
            serde_json::from_str(r#"[{"word":"a","weight":1},{"word":"b","weight":5.5}]"#)
                .unwrap();

        assert_eq!(parsed, vec![Keyword::new("a", 1.0), Keyword::new("b", 5.5)]);
    }

    #[test]
    fn response_envelope_parses_from_json() {
        let parsed: KeywordResponse =
            serde_json::from_str(r#"{"keywords":[{"word":"x","weight":0.25}]}"#).unwrap();

        assert_eq!(parsed.keywords, vec![Keyword::new("x", 0.25)]);
    }
}

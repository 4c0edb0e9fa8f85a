/// Linear map from the observed weight range onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    min: f32,
    max: f32,
}

impl Normalizer {
    /// An empty sequence yields the degenerate range, same as all-equal input.
    pub fn new(weights: impl IntoIterator<Item = f32>) -> Self {
        let (min, max) = weights
            .into_iter()
            .fold(None, |range: Option<(f32, f32)>, w| match range {
                None => Some((w, w)),
                Some((lo, hi)) => Some((lo.min(w), hi.max(w))),
            })
            .unwrap_or((0.0, 0.0));

        Self { min, max }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Midpoint for a degenerate range; otherwise clamped to `[0, 1]`.
    pub fn apply(&self, weight: f32) -> f32 {
        if self.is_degenerate() {
            return 0.5;
        }

        ((weight - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

pub fn normalize(weights: &[f32]) -> impl Fn(f32) -> f32 + use<> {
    let normalizer = Normalizer::new(weights.iter().copied());
    move |w| normalizer.apply(w)
}

use std::iter;

use crate::features::{FEATURE_COUNT, Features};

/// Weight vector of the linear heuristic, one weight per feature in
/// [`Features`] order: rows cleared, holes, bumpiness, aggregate height.
///
/// A placement's score is the dot product of its feature vector and these
/// weights; higher is better. A well-performing vector rewards cleared rows
/// and penalizes the other three, but nothing here enforces signs; that is
/// the trainer's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights([f32; FEATURE_COUNT]);

impl Weights {
    #[must_use]
    pub const fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn values(&self) -> &[f32; FEATURE_COUNT] {
        &self.0
    }

    #[must_use]
    pub fn values_mut(&mut self) -> &mut [f32; FEATURE_COUNT] {
        &mut self.0
    }

    /// Scores a feature vector: `Σ featureᵢ · weightᵢ`.
    #[must_use]
    pub fn score(&self, features: &Features) -> f32 {
        iter::zip(features.as_array(), self.0).map(|(f, w)| f * w).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_the_dot_product() {
        let weights = Weights::new([0.5, -1.0, -0.25, -0.125]);
        let features = Features {
            rows_cleared: 2,
            holes: 1,
            bumpiness: 4,
            aggregate_height: 8,
        };
        let score = weights.score(&features);
        assert!((score - (1.0 - 1.0 - 1.0 - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn zero_weights_score_zero() {
        let weights = Weights::new([0.0; FEATURE_COUNT]);
        let features = Features {
            rows_cleared: 4,
            holes: 7,
            bumpiness: 3,
            aggregate_height: 55,
        };
        assert_eq!(weights.score(&features), 0.0);
    }
}

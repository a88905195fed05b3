//! Genetic operators on weight vectors.

use rand::Rng;
use tetrevo_evaluator::{FEATURE_COUNT, Weights};

/// Lower bound of every weight.
pub const MIN_WEIGHT: f32 = -1.0;
/// Upper bound of every weight.
pub const MAX_WEIGHT: f32 = 1.0;
/// Scale of a single mutation step.
pub const MUTATION_STEP: f32 = 0.005;

/// Draws a random initial weight vector.
///
/// The rows-cleared weight starts non-negative and the three penalty weights
/// start non-positive, the expected shape of a good vector. This is an
/// initialization bias only; crossover and mutation are free to move any
/// weight anywhere in [[`MIN_WEIGHT`], [`MAX_WEIGHT`]].
pub fn random<R>(rng: &mut R) -> Weights
where
    R: Rng + ?Sized,
{
    let mut values = [0.0; FEATURE_COUNT];
    for (i, value) in values.iter_mut().enumerate() {
        let magnitude = rng.random::<f32>();
        *value = if i == 0 { magnitude } else { -magnitude };
    }
    Weights::new(values)
}

/// Uniform crossover: two complementary children from two parents.
///
/// For each feature a fair coin decides which parent the first child inherits
/// that weight from; the second child takes the other parent's. Children are
/// always exact recombinations; no weight is ever interpolated.
pub fn uniform_crossover<R>(p1: &Weights, p2: &Weights, rng: &mut R) -> (Weights, Weights)
where
    R: Rng + ?Sized,
{
    let mut a = [0.0; FEATURE_COUNT];
    let mut b = [0.0; FEATURE_COUNT];
    for i in 0..FEATURE_COUNT {
        if rng.random_bool(0.5) {
            a[i] = p1.values()[i];
            b[i] = p2.values()[i];
        } else {
            a[i] = p2.values()[i];
            b[i] = p1.values()[i];
        }
    }
    (Weights::new(a), Weights::new(b))
}

/// Mutates a weight vector in place.
///
/// Each weight is, with probability `rate`, shifted by a uniformly random
/// step of magnitude at most [`MUTATION_STEP`] in a random direction and then
/// clamped back into [[`MIN_WEIGHT`], [`MAX_WEIGHT`]].
pub fn mutate<R>(weights: &mut Weights, rate: f32, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for w in weights.values_mut() {
        if rng.random::<f32>() < rate {
            *w = (*w + perturbation(rng)).clamp(MIN_WEIGHT, MAX_WEIGHT);
        }
    }
}

/// Draws `±MUTATION_STEP · U(0, 1)`, resampling until nonzero.
fn perturbation<R>(rng: &mut R) -> f32
where
    R: Rng + ?Sized,
{
    loop {
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let amount = sign * MUTATION_STEP * rng.random::<f32>();
        if amount != 0.0 {
            return amount;
        }
    }
}

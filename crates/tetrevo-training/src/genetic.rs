//! Individuals, populations, and the generation cycle.

use std::{cmp::Ordering, thread};

use rand::Rng;
use tetrevo_engine::Game;
use tetrevo_evaluator::{Weights, play_game};

use crate::weights;

/// Tolerance used when ranking individuals by fitness.
pub const FITNESS_EPSILON: f32 = 1e-4;

/// Descending-fitness sort key with an epsilon tolerance.
///
/// Fitnesses within `epsilon` of each other compare equal; ties keep whatever
/// order the (stable) sort saw them in: arbitrary, but consistent within a
/// single sort call.
#[must_use]
pub fn fitness_ordering(a: f32, b: f32, epsilon: f32) -> Ordering {
    if (a - b).abs() < epsilon {
        Ordering::Equal
    } else if a > b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// One candidate solution: a weight vector, its latest fitness, and the
/// private game it is measured on.
///
/// The game is owned exclusively by this individual, piece stream included,
/// which is what makes parallel fitness evaluation and reproducible runs
/// compatible.
#[derive(Debug, Clone)]
pub struct Individual {
    weights: Weights,
    fitness: f32,
    game: Game,
}

impl Individual {
    fn new<R>(weights: Weights, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            weights,
            fitness: 0.0,
            game: Game::new(rng.random()),
        }
    }

    #[must_use]
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Fitness from the most recent evaluation: rows cleared summed over the
    /// evaluation's games. Overwritten every generation.
    #[must_use]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    /// Plays `games` independent games to termination and sums their cleared
    /// rows. The game is reset between playthroughs; its piece stream keeps
    /// running, so every playthrough sees a fresh sequence.
    #[expect(clippy::cast_precision_loss)]
    fn evaluate(&mut self, games: usize) {
        let mut total = 0;
        for _ in 0..games {
            total += play_game(&mut self.game, &self.weights);
            self.game.reset();
        }
        self.fitness = total as f32;
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("population size must be even and at least 4")]
pub struct PopulationSizeError;

/// A fixed-size collection of individuals evaluated together.
///
/// The size is set at construction and preserved by every generation cycle.
/// It must be even (selection keeps exactly half) and at least 4 (the
/// surviving half must still form breeding pairs).
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a population of `count` random individuals.
    pub fn random<R>(count: usize, rng: &mut R) -> Result<Self, PopulationSizeError>
    where
        R: Rng + ?Sized,
    {
        if count < 4 || count % 2 != 0 {
            return Err(PopulationSizeError);
        }
        let individuals = (0..count)
            .map(|_| Individual::new(weights::random(rng), rng))
            .collect();
        Ok(Self { individuals })
    }

    /// All individuals, best first after [`Self::evaluate_fitness`].
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Evaluates every individual and ranks the population.
    ///
    /// Individuals run on separate threads (each exclusively owns its game)
    /// and are then stable-sorted by descending fitness.
    pub fn evaluate_fitness(&mut self, games_per_individual: usize) {
        thread::scope(|s| {
            for ind in &mut self.individuals {
                s.spawn(move || ind.evaluate(games_per_individual));
            }
        });

        self.individuals
            .sort_by(|a, b| fitness_ordering(a.fitness, b.fitness, FITNESS_EPSILON));
    }

    /// The best individual of the latest evaluation.
    #[must_use]
    pub fn best(&self) -> &Individual {
        self.individuals
            .iter()
            .min_by(|a, b| fitness_ordering(a.fitness, b.fitness, FITNESS_EPSILON))
            .unwrap()
    }
}

/// Breeds the next generation from an evaluated population.
#[derive(Debug, Clone)]
pub struct Evolver {
    /// Per-weight probability that a child's weight is mutated.
    pub mutation_rate: f32,
}

impl Evolver {
    /// Produces the next generation.
    ///
    /// The top half of the (descending-sorted) population survives into
    /// breeding; sequential pairs of survivors produce complementary children
    /// via uniform crossover until the population size is restored, and every
    /// child is then subjected to mutation. Survivors themselves are
    /// discarded; the next generation is children only.
    ///
    /// # Panics
    ///
    /// Panics if the population has not been evaluated (it must be sorted by
    /// descending fitness).
    #[must_use]
    pub fn evolve<R>(&self, population: &Population, rng: &mut R) -> Population
    where
        R: Rng + ?Sized,
    {
        let individuals = &population.individuals;
        assert!(
            individuals.is_sorted_by(|a, b| a.fitness >= b.fitness - FITNESS_EPSILON),
            "population must be evaluated before evolving",
        );

        let survivors = &individuals[..individuals.len() / 2];
        let mut next = Vec::with_capacity(individuals.len());
        'breeding: loop {
            for pair in survivors.chunks_exact(2) {
                let (mut a, mut b) =
                    weights::uniform_crossover(pair[0].weights(), pair[1].weights(), rng);
                weights::mutate(&mut a, self.mutation_rate, rng);
                weights::mutate(&mut b, self.mutation_rate, rng);
                for child in [a, b] {
                    next.push(Individual::new(child, rng));
                    if next.len() == individuals.len() {
                        break 'breeding;
                    }
                }
            }
        }

        Population { individuals: next }
    }
}

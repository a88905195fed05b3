//! Offline tuning of the heuristic weight vector with a genetic algorithm.
//!
//! A population of [`genetic::Individual`]s, each a weight vector plus its
//! own private game, is evaluated by playing complete games and scoring
//! total rows cleared. Each generation the better half breeds the next
//! population through uniform crossover and small uniform mutation:
//!
//! 1. **Fitness** - every individual plays N independent games; fitness is
//!    the summed rows cleared, which amortizes the variance of any single
//!    piece sequence.
//! 2. **Selection** - rank by descending fitness, keep the top half.
//! 3. **Crossover** - sequential survivor pairs produce children that inherit
//!    each weight from one parent or the other by a fair coin flip.
//! 4. **Mutation** - each child weight is perturbed with a small probability
//!    and clamped back into range.
//!
//! The driver loop (evaluate, report, evolve, for a fixed generation count)
//! belongs to the caller; see the `train` command of the CLI. There is no
//! convergence criterion and nothing is persisted; the run's product is its
//! report stream.
//!
//! Randomness is always passed in explicitly, so runs are reproducible from a
//! seed; fitness evaluation runs individuals on separate threads, which is
//! sound because each individual exclusively owns its game state and its own
//! piece stream.

pub mod genetic;
pub mod weights;

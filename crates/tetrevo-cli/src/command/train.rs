use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use tetrevo_engine::Seed;
use tetrevo_evaluator::FEATURE_COUNT;
use tetrevo_stats::DescriptiveStats;
use tetrevo_training::genetic::{Evolver, Individual, Population};

const POPULATION_COUNT: usize = 100;
const GENERATIONS: usize = 20;
const MUTATION_RATE: f32 = 0.01;
const GAMES_PER_INDIVIDUAL: usize = 15;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TrainArg {
    /// Seed for the whole training run; drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<Seed>,
}

pub(crate) fn run(arg: &TrainArg) -> anyhow::Result<()> {
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("training run seed: {seed}");

    let mut rng = Pcg32::from_seed(seed.to_bytes());
    let mut population = Population::random(POPULATION_COUNT, &mut rng)?;
    let evolver = Evolver {
        mutation_rate: MUTATION_RATE,
    };

    for generation in 0..GENERATIONS {
        population.evaluate_fitness(GAMES_PER_INDIVIDUAL);

        let best = population.best();
        println!(
            "generation {generation}: best {:.4?} fitness {:.0}",
            best.weights().values(),
            best.fitness(),
        );
        report_stats(&population);

        if generation + 1 < GENERATIONS {
            population = evolver.evolve(&population, &mut rng);
        }
    }

    eprintln!("final population, best individuals:");
    for (i, ind) in population.individuals().iter().take(5).enumerate() {
        eprintln!(
            "  {i}: {:.4?} => {:.0}",
            ind.weights().values(),
            ind.fitness(),
        );
    }

    Ok(())
}

fn report_stats(population: &Population) {
    let fitness =
        DescriptiveStats::new(population.individuals().iter().map(Individual::fitness)).unwrap();
    eprintln!(
        "  fitness: min {:.0} max {:.0} mean {:.1} stddev {:.1}",
        fitness.min, fitness.max, fitness.mean, fitness.std_dev,
    );

    let weight_means: Vec<f32> = (0..FEATURE_COUNT)
        .map(|i| {
            let values = population
                .individuals()
                .iter()
                .map(|ind| ind.weights().values()[i]);
            DescriptiveStats::new(values).unwrap().mean
        })
        .collect();
    eprintln!("  weight means: {weight_means:.3?}");
}

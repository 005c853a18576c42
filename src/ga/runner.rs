//! Evolutionary loop execution.
//!
//! [`EvolutionRunner`] orchestrates the complete evolutionary process:
//! initialization → ranking → termination check → selection → crossover →
//! mutation → repeat.

use super::config::EvolutionConfig;
use super::operators::{BitFlipMutation, Crossover, Mutation, SinglePointCrossover};
use super::population::Populate;
use super::selection::{SelectPair, Selection};
use super::types::{ensure_comparable, Fitness, Genome, Population, Score};
use crate::error::{EvolveError, Result};
use crate::random::{create_rng, create_rng_from_entropy};
use log::{debug, error, info};
use rand::Rng;

/// Number of top genomes copied unchanged into every next generation.
pub const ELITE_COUNT: usize = 2;

/// The strategies that define one evolutionary search.
///
/// Built from a population source and a fitness function; selection,
/// crossover, and mutation default to [`Selection::Roulette`],
/// [`SinglePointCrossover`], and [`BitFlipMutation::default`] and can be
/// swapped independently.
///
/// # Usage
///
/// ```
/// use u_evolve::ga::{Evolution, Genome, RandomPopulation, Selection};
///
/// let evolution = Evolution::new(RandomPopulation::new(10, 8), |g: &Genome| g.count_ones())
///     .with_selection(Selection::Tournament(3));
/// ```
#[derive(Debug, Clone)]
pub struct Evolution<P, F, S = Selection, C = SinglePointCrossover, M = BitFlipMutation> {
    populate: P,
    fitness: F,
    selection: S,
    crossover: C,
    mutation: M,
}

impl<P, F> Evolution<P, F> {
    /// Creates an evolution with the default selection, crossover, and
    /// mutation strategies.
    pub fn new(populate: P, fitness: F) -> Self {
        Self {
            populate,
            fitness,
            selection: Selection::default(),
            crossover: SinglePointCrossover,
            mutation: BitFlipMutation::default(),
        }
    }
}

impl<P, F, S, C, M> Evolution<P, F, S, C, M> {
    /// Replaces the selection strategy.
    pub fn with_selection<S2>(self, selection: S2) -> Evolution<P, F, S2, C, M> {
        Evolution {
            populate: self.populate,
            fitness: self.fitness,
            selection,
            crossover: self.crossover,
            mutation: self.mutation,
        }
    }

    /// Replaces the crossover strategy.
    pub fn with_crossover<C2>(self, crossover: C2) -> Evolution<P, F, S, C2, M> {
        Evolution {
            populate: self.populate,
            fitness: self.fitness,
            selection: self.selection,
            crossover,
            mutation: self.mutation,
        }
    }

    /// Replaces the mutation strategy.
    pub fn with_mutation<M2>(self, mutation: M2) -> Evolution<P, F, S, C, M2> {
        Evolution {
            populate: self.populate,
            fitness: self.fitness,
            selection: self.selection,
            crossover: self.crossover,
            mutation,
        }
    }

    /// The fitness function of this evolution.
    pub fn fitness(&self) -> &F {
        &self.fitness
    }
}

/// Result of an evolution run.
///
/// Contains the final population ranked best first, along with statistics
/// about the evolutionary process.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<S> {
    /// The final population, sorted by descending score.
    pub population: Population,

    /// Number of generations bred before termination.
    ///
    /// Never exceeds the configured generation limit.
    pub generations: usize,

    /// Score of `population[0]`.
    pub best_score: S,

    /// Whether the run stopped because `best_score` reached the fitness limit.
    pub reached_fitness_limit: bool,

    /// Best score after each ranking, starting with the initial population.
    ///
    /// Has `generations + 1` entries.
    pub fitness_history: Vec<f64>,
}

impl<S> EvolutionResult<S> {
    /// The best genome of the final population.
    pub fn best(&self) -> &Genome {
        &self.population[0]
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_evolve::ga::{Evolution, EvolutionConfig, EvolutionRunner, Genome, RandomPopulation};
///
/// let evolution = Evolution::new(RandomPopulation::new(10, 8), |g: &Genome| g.count_ones());
/// let config = EvolutionConfig::new(8).with_generation_limit(200).with_seed(42);
/// let result = EvolutionRunner::run(&evolution, &config).unwrap();
/// assert!(result.generations <= 200);
/// assert_eq!(result.population.len(), 10);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs the evolution with an RNG built from `config.seed`.
    ///
    /// Without a seed the RNG is seeded from OS entropy, so results differ
    /// between runs.
    pub fn run<P, F, S, C, M>(
        evolution: &Evolution<P, F, S, C, M>,
        config: &EvolutionConfig<F::Score>,
    ) -> Result<EvolutionResult<F::Score>>
    where
        P: Populate,
        F: Fitness,
        S: SelectPair,
        C: Crossover,
        M: Mutation,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng_from_entropy(),
        };
        Self::run_with_rng(evolution, config, &mut rng)
    }

    /// Runs the evolution drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored. Two runs with identically seeded RNGs and
    /// identical strategies return identical results.
    ///
    /// # Errors
    ///
    /// - [`EvolveError::InvalidArgument`] if the configuration is invalid,
    ///   the initial population has fewer than [`ELITE_COUNT`] genomes, or a
    ///   genome scores a non-comparable value such as NaN
    /// - [`EvolveError::LengthMismatch`] if initial genomes differ in length
    /// - [`EvolveError::EmptyInput`] if initial genomes have no bits
    /// - any error returned by a strategy, unchanged
    pub fn run_with_rng<P, F, S, C, M, R>(
        evolution: &Evolution<P, F, S, C, M>,
        config: &EvolutionConfig<F::Score>,
        rng: &mut R,
    ) -> Result<EvolutionResult<F::Score>>
    where
        P: Populate,
        F: Fitness,
        S: SelectPair,
        C: Crossover,
        M: Mutation,
        R: Rng,
    {
        config.validate()?;

        // 1. Initialize population
        let mut population = evolution.populate.populate(rng)?;
        validate_population(&population)?;
        let population_size = population.len();

        let mut fitness_history = Vec::new();
        let mut generation = 0usize;

        // 2. Evolutionary loop
        loop {
            // Rank (descending, stable)
            let scores = rank_population(&mut population, &evolution.fitness)?;
            let best_score = *scores
                .first()
                .ok_or(EvolveError::EmptyInput("population"))?;
            fitness_history.push(best_score.to_f64());

            debug!(
                "generation {generation}: best score {best_score:?}, population {}",
                population.len()
            );

            // Termination check
            let reached_fitness_limit = best_score >= config.fitness_limit;
            if reached_fitness_limit || generation == config.generation_limit {
                if reached_fitness_limit {
                    info!("fitness limit reached at generation {generation}: {best_score:?}");
                } else {
                    info!("generation limit {generation} reached: best score {best_score:?}");
                }
                return Ok(EvolutionResult {
                    population,
                    generations: generation,
                    best_score,
                    reached_fitness_limit,
                    fitness_history,
                });
            }

            // Breed
            population = breed(evolution, &population, &scores, population_size, rng)
                .inspect_err(|e| {
                    error!("evolution aborted at generation {generation}: {e}");
                })?;
            generation += 1;
        }
    }
}

/// Sorts `population` by descending score and returns the scores in the
/// new order.
///
/// The sort is stable: genomes with equal scores keep their relative order.
/// Each genome is evaluated exactly once.
///
/// Returns [`EvolveError::InvalidArgument`] if any score does not compare
/// with itself (NaN); `population` is left unchanged in that case.
pub fn rank_population<F: Fitness>(
    population: &mut Population,
    fitness: &F,
) -> Result<Vec<F::Score>> {
    let scores: Vec<F::Score> = population.iter().map(|g| fitness.evaluate(g)).collect();
    ensure_comparable(&scores)?;

    let mut scored: Vec<(F::Score, Genome)> =
        scores.into_iter().zip(population.drain(..)).collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut scores = Vec::with_capacity(scored.len());
    for (score, genome) in scored {
        scores.push(score);
        population.push(genome);
    }
    Ok(scores)
}

/// Checks that the initial population can be bred.
fn validate_population(population: &[Genome]) -> Result<()> {
    if population.len() < ELITE_COUNT {
        return Err(EvolveError::invalid(format!(
            "population size must be at least {ELITE_COUNT}, got {}",
            population.len()
        )));
    }

    let expected = population[0].len();
    if expected == 0 {
        return Err(EvolveError::EmptyInput("genome"));
    }
    if let Some(bad) = population.iter().find(|g| g.len() != expected) {
        return Err(EvolveError::LengthMismatch {
            expected,
            actual: bad.len(),
        });
    }
    Ok(())
}

/// Builds the next generation from a ranked population and its scores.
///
/// The top [`ELITE_COUNT`] genomes are copied unchanged, then offspring
/// pairs are appended until the generation has `target_size` genomes.
/// When the last pair would overshoot (odd `target_size`), its second
/// offspring is discarded.
fn breed<P, F, S, C, M, R>(
    evolution: &Evolution<P, F, S, C, M>,
    ranked: &[Genome],
    scores: &[F::Score],
    target_size: usize,
    rng: &mut R,
) -> Result<Population>
where
    F: Fitness,
    S: SelectPair,
    C: Crossover,
    M: Mutation,
    R: Rng,
{
    let mut next_gen: Population = Vec::with_capacity(target_size);
    next_gen.extend(ranked.iter().take(ELITE_COUNT).cloned());

    while next_gen.len() < target_size {
        let (p1, p2) = evolution.selection.select_scored(ranked, scores, rng)?;
        let (c1, c2) = evolution.crossover.crossover(p1, p2, rng)?;
        let c1 = evolution.mutation.mutate(c1, rng)?;
        let c2 = evolution.mutation.mutate(c2, rng)?;

        next_gen.push(c1);
        if next_gen.len() < target_size {
            next_gen.push(c2);
        }
    }

    Ok(next_gen)
}

// ============================================================================
// Tests
// ============================================================================

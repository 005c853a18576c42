//! Initial population sources.
//!
//! The runner asks a [`Populate`] implementation for the first generation
//! exactly once per run.

use super::types::{Genome, Population};
use crate::error::{EvolveError, Result};
use rand::Rng;

/// Produces the initial population of a run.
pub trait Populate {
    /// Creates the first generation.
    fn populate<R: Rng>(&self, rng: &mut R) -> Result<Population>;
}

/// Creates one genome of `length` uniformly random bits.
///
/// Returns [`EvolveError::InvalidArgument`] if `length` is zero.
pub fn generate_genome<R: Rng>(length: usize, rng: &mut R) -> Result<Genome> {
    if length == 0 {
        return Err(EvolveError::invalid("genome_length must be at least 1"));
    }
    Ok((0..length).map(|_| rng.random_bool(0.5)).collect())
}

/// Creates `size` random genomes of `genome_length` bits each.
///
/// Returns [`EvolveError::InvalidArgument`] if either argument is zero.
pub fn generate_population<R: Rng>(
    size: usize,
    genome_length: usize,
    rng: &mut R,
) -> Result<Population> {
    if size == 0 {
        return Err(EvolveError::invalid("population size must be at least 1"));
    }
    (0..size)
        .map(|_| generate_genome(genome_length, rng))
        .collect()
}

/// Random population of a fixed size and genome length.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::{Populate, RandomPopulation};
/// use u_evolve::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let population = RandomPopulation::new(10, 5).populate(&mut rng).unwrap();
/// assert_eq!(population.len(), 10);
/// assert!(population.iter().all(|g| g.len() == 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPopulation {
    /// Number of genomes.
    pub size: usize,
    /// Bits per genome.
    pub genome_length: usize,
}

impl RandomPopulation {
    /// Creates a generator for `size` genomes of `genome_length` bits.
    pub fn new(size: usize, genome_length: usize) -> Self {
        Self {
            size,
            genome_length,
        }
    }
}

impl Populate for RandomPopulation {
    fn populate<R: Rng>(&self, rng: &mut R) -> Result<Population> {
        generate_population(self.size, self.genome_length, rng)
    }
}

/// A caller-supplied starting population, returned as-is.
///
/// Useful for seeding known solutions or for reproducing a run from a
/// recorded population. Consumes no randomness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPopulation(pub Population);

impl Populate for FixedPopulation {
    fn populate<R: Rng>(&self, _rng: &mut R) -> Result<Population> {
        Ok(self.0.clone())
    }
}

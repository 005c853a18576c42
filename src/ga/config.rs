//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds the parameters that bound the evolutionary loop.

use super::types::Score;
use crate::error::{EvolveError, Result};

/// Configuration for an evolution run.
///
/// The score type `S` matches the [`Fitness`](super::Fitness) used by the
/// run, so the fitness limit is compared without conversion.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::new(740u32);
/// assert_eq!(config.fitness_limit, 740);
/// assert_eq!(config.generation_limit, 100);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::new(1.0f64)
///     .with_generation_limit(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig<S> {
    /// Stop as soon as the best genome scores at least this much.
    pub fitness_limit: S,

    /// Maximum number of generations to breed.
    ///
    /// The run ends after this many breeding passes even if
    /// `fitness_limit` was never reached.
    pub generation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Ignored by
    /// [`EvolutionRunner::run_with_rng`](super::EvolutionRunner::run_with_rng).
    pub seed: Option<u64>,
}

impl<S: Score> EvolutionConfig<S> {
    /// Default generation limit.
    pub const DEFAULT_GENERATION_LIMIT: usize = 100;

    /// Creates a configuration with the given fitness limit and defaults
    /// for everything else.
    pub fn new(fitness_limit: S) -> Self {
        Self {
            fitness_limit,
            generation_limit: Self::DEFAULT_GENERATION_LIMIT,
            seed: None,
        }
    }

    /// Sets the fitness limit.
    pub fn with_fitness_limit(mut self, limit: S) -> Self {
        self.fitness_limit = limit;
        self
    }

    /// Sets the generation limit.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`EvolveError::InvalidArgument`] if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.generation_limit == 0 {
            return Err(EvolveError::invalid("generation_limit must be at least 1"));
        }
        // NaN never compares, so the limit could never be reached
        if self.fitness_limit.partial_cmp(&self.fitness_limit).is_none() {
            return Err(EvolveError::invalid("fitness_limit must be comparable"));
        }
        Ok(())
    }
}

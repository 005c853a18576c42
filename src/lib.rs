//! Generic evolutionary search over bit-string genomes.
//!
//! Given a way to generate candidate solutions, score them, and recombine
//! them, the engine iteratively improves a population toward a target
//! fitness:
//!
//! - **Genetic Algorithm ([`ga`])**: generation-bounded evolutionary loop
//!   with elitism and pluggable population, selection, crossover, and
//!   mutation strategies.
//! - **Randomness ([`random`])**: seedable RNG construction; every
//!   strategy draws from an RNG passed in explicitly, so seeded runs are
//!   reproducible.
//! - **Errors ([`error`])**: the shared [`EvolveError`] taxonomy.
//!
//! # Architecture
//!
//! The crate contains no domain-specific concepts. Knapsack selection,
//! feature selection, or any other 0/1 decision problem is defined by the
//! consumer through a fitness function.
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::{Evolution, EvolutionConfig, EvolutionRunner, Genome, RandomPopulation};
//!
//! let values = [500u32, 150, 60, 40, 30];
//! let weights = [2200u32, 160, 350, 333, 192];
//!
//! let fitness = move |g: &Genome| {
//!     let (w, v) = g
//!         .selected()
//!         .fold((0, 0), |(w, v), i| (w + weights[i], v + values[i]));
//!     if w > 3000 { 0 } else { v }
//! };
//!
//! let evolution = Evolution::new(RandomPopulation::new(10, values.len()), fitness);
//! let config = EvolutionConfig::new(740).with_seed(42);
//! let result = EvolutionRunner::run(&evolution, &config).unwrap();
//! assert!(result.best_score <= 740);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{EvolveError, Result};

//! Bit-string genetic algorithm.
//!
//! A generic evolutionary search over fixed-length bit vectors. Users
//! describe their problem with a [`Populate`] source and a [`Fitness`]
//! function; selection, crossover, and mutation are pluggable strategies
//! with sensible defaults.
//!
//! # Core Traits
//!
//! - [`Populate`]: creates the initial population
//! - [`Fitness`]: scores a genome (any `Fn(&Genome) -> S` works)
//! - [`SelectPair`]: chooses breeding pairs
//! - [`Crossover`]: recombines two parents into two offspring
//! - [`Mutation`]: perturbs one genome
//!
//! # Key Types
//!
//! - [`Genome`]: fixed-length bit vector
//! - [`Evolution`]: the strategies of one search
//! - [`EvolutionConfig`]: fitness limit, generation limit, seed
//! - [`EvolutionRunner`]: executes the evolutionary loop
//! - [`EvolutionResult`]: ranked final population with statistics
//!
//! # Loop
//!
//! Each generation the population is ranked by descending score. The run
//! stops when the best score reaches the fitness limit or the generation
//! limit is hit. Otherwise the best [`ELITE_COUNT`] genomes are copied into
//! the next generation and the rest is filled with mutated offspring of
//! selected pairs. The population size never changes.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::EvolutionConfig;
pub use operators::{
    bit_flip_mutation, single_point_crossover, BitFlipMutation, Crossover, Mutation,
    SinglePointCrossover,
};
pub use population::{
    generate_genome, generate_population, FixedPopulation, Populate, RandomPopulation,
};
pub use runner::{rank_population, Evolution, EvolutionResult, EvolutionRunner, ELITE_COUNT};
pub use selection::{SelectPair, Selection};
pub use types::{Fitness, Genome, Population, Score};

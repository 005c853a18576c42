//! Bit-string genetic operators.
//!
//! Crossover and mutation operators for [`Genome`] bit vectors. Both take
//! ownership of their inputs and return newly owned genomes.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap tails after a random cut point — O(n)
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: flip random bits with a fixed probability — O(flips)

use super::types::Genome;
use crate::error::{EvolveError, Result};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Recombines two parents into two offspring.
pub trait Crossover {
    /// Produces two offspring from `a` and `b`.
    fn crossover<R: Rng>(&self, a: Genome, b: Genome, rng: &mut R) -> Result<(Genome, Genome)>;
}

/// Single-point crossover (the default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SinglePointCrossover;

impl Crossover for SinglePointCrossover {
    fn crossover<R: Rng>(&self, a: Genome, b: Genome, rng: &mut R) -> Result<(Genome, Genome)> {
        single_point_crossover(a, b, rng)
    }
}

/// Single-point crossover for bit strings.
///
/// Picks a cut point `p` uniformly from `[1, n - 1]` and returns
/// `(a[..p] ++ b[p..], b[..p] ++ a[p..])`. Because `p` is never `0` or `n`,
/// each offspring inherits at least one bit from each parent.
///
/// Genomes shorter than 2 bits have no cut point and are returned unchanged.
///
/// Returns [`EvolveError::LengthMismatch`] if the parents differ in length.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn single_point_crossover<R: Rng>(
    a: Genome,
    b: Genome,
    rng: &mut R,
) -> Result<(Genome, Genome)> {
    let n = a.len();
    if b.len() != n {
        return Err(EvolveError::LengthMismatch {
            expected: n,
            actual: b.len(),
        });
    }

    if n < 2 {
        return Ok((a, b));
    }

    let p = rng.random_range(1..n);
    Ok(cut_and_splice(&a, &b, p))
}

/// Builds both offspring for cut point `p`.
fn cut_and_splice(a: &Genome, b: &Genome, p: usize) -> (Genome, Genome) {
    let (a_head, a_tail) = a.bits().split_at(p);
    let (b_head, b_tail) = b.bits().split_at(p);

    let child1 = a_head.iter().chain(b_tail).copied().collect();
    let child2 = b_head.iter().chain(a_tail).copied().collect();

    (child1, child2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Perturbs a single genome.
pub trait Mutation {
    /// Returns the mutated genome.
    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Result<Genome>;
}

/// Bit-flip mutation parameters.
///
/// The default performs one trial with probability 0.5.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::BitFlipMutation;
///
/// let m = BitFlipMutation::default();
/// assert_eq!(m.flips, 1);
/// assert!((m.probability - 0.5).abs() < 1e-12);
///
/// let m = BitFlipMutation::new(3, 0.2);
/// assert_eq!(m.flips, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitFlipMutation {
    /// Number of independent trials.
    pub flips: usize,
    /// Chance that a trial flips its chosen bit (0.0–1.0).
    pub probability: f64,
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self {
            flips: 1,
            probability: 0.5,
        }
    }
}

impl BitFlipMutation {
    /// Creates a mutation with `flips` trials at `probability` each.
    pub fn new(flips: usize, probability: f64) -> Self {
        Self { flips, probability }
    }
}

impl Mutation for BitFlipMutation {
    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Result<Genome> {
        bit_flip_mutation(genome, self.flips, self.probability, rng)
    }
}

/// Bit-flip mutation.
///
/// Runs `flips` independent trials. Each trial picks a uniformly random
/// index and flips that bit with probability `probability`. The same index
/// may be picked by several trials, so two flips can cancel out.
///
/// Returns [`EvolveError::EmptyInput`] for an empty genome and
/// [`EvolveError::InvalidArgument`] if `probability` is not in `[0, 1]`.
///
/// # Complexity
/// O(flips)
pub fn bit_flip_mutation<R: Rng>(
    mut genome: Genome,
    flips: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Genome> {
    if genome.is_empty() {
        return Err(EvolveError::EmptyInput("genome"));
    }
    if !(0.0..=1.0).contains(&probability) {
        return Err(EvolveError::invalid(format!(
            "mutation probability must be in [0, 1], got {probability}"
        )));
    }

    let n = genome.len();
    for _ in 0..flips {
        let idx = rng.random_range(0..n);
        if rng.random_bool(probability) {
            genome.flip(idx);
        }
    }
    Ok(genome)
}

// ============================================================================
// Tests
// ============================================================================

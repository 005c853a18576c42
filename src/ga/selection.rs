//! Selection strategies.
//!
//! Selection picks the two parents of each offspring pair. Different
//! strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{ensure_comparable, Fitness, Genome, Score};
use crate::error::{EvolveError, Result};
use rand::Rng;

/// Chooses a breeding pair from a population.
///
/// Implementors provide [`select_scored`](SelectPair::select_scored), which
/// works on precomputed scores. The runner calls it with the scores it
/// already holds from ranking, so a generation evaluates each genome once.
pub trait SelectPair {
    /// Picks two parents, with replacement, given `scores[i]` for
    /// `population[i]`.
    ///
    /// The two parents may be the same genome.
    fn select_scored<S: Score, R: Rng>(
        &self,
        population: &[Genome],
        scores: &[S],
        rng: &mut R,
    ) -> Result<(Genome, Genome)>;

    /// Scores `population` with `fitness`, then picks two parents.
    fn select_pair<F: Fitness, R: Rng>(
        &self,
        population: &[Genome],
        fitness: &F,
        rng: &mut R,
    ) -> Result<(Genome, Genome)> {
        let scores: Vec<F::Score> = population.iter().map(|g| fitness.evaluate(g)).collect();
        self.select_scored(population, &scores, rng)
    }
}

/// Built-in selection strategies.
///
/// All strategies assume **maximization** (higher score = better).
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Selection;
///
/// // Fitness-proportionate (the default)
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Roulette);
///
/// // Tournament with size 3
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Probability of selection is the genome's score divided by the sum of
    /// all scores. Scores must be non-negative. If every score is zero the
    /// choice is uniform.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    Roulette,

    /// Tournament selection: draw `k` genomes uniformly, keep the best.
    ///
    /// Higher `k` = stronger selection pressure. `k = 0` behaves as `k = 1`.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Linear rank selection.
    ///
    /// The best genome gets weight `n`, the worst gets weight `1`,
    /// independent of the raw score values. Avoids the scaling problems of
    /// roulette selection and accepts negative scores.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per pair (sort)
    Rank,
}

impl SelectPair for Selection {
    fn select_scored<S: Score, R: Rng>(
        &self,
        population: &[Genome],
        scores: &[S],
        rng: &mut R,
    ) -> Result<(Genome, Genome)> {
        if population.is_empty() {
            return Err(EvolveError::EmptyInput("population"));
        }
        if scores.len() != population.len() {
            return Err(EvolveError::LengthMismatch {
                expected: population.len(),
                actual: scores.len(),
            });
        }
        ensure_comparable(scores)?;

        let (i, j) = match self {
            Selection::Roulette => {
                let weights = roulette_weights(scores)?;
                (roulette(&weights, rng), roulette(&weights, rng))
            }
            Selection::Tournament(k) => (tournament(scores, *k, rng), tournament(scores, *k, rng)),
            Selection::Rank => {
                let order = rank_order(scores);
                (rank(&order, rng), rank(&order, rng))
            }
        };

        Ok((population[i].clone(), population[j].clone()))
    }
}

/// Converts scores to roulette weights, rejecting negative or non-finite ones.
///
/// If the weights sum past `f64::MAX` they are divided by the largest one,
/// which keeps every ratio and makes the sum at most `n`.
fn roulette_weights<S: Score>(scores: &[S]) -> Result<Vec<f64>> {
    let mut weights = scores
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let w = s.to_f64();
            if !w.is_finite() || w < 0.0 {
                Err(EvolveError::invalid(format!(
                    "roulette selection needs non-negative finite scores, genome {i} scored {w}"
                )))
            } else {
                Ok(w)
            }
        })
        .collect::<Result<Vec<f64>>>()?;

    let total: f64 = weights.iter().sum();
    if !total.is_finite() {
        let max = weights.iter().copied().fold(0.0, f64::max);
        for w in &mut weights {
            *w /= max;
        }
    }
    Ok(weights)
}

/// Roulette wheel draw over non-negative weights with a finite sum.
///
/// Falls back to a uniform draw when all weights are zero.
fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let n = weights.len();
    if n == 1 {
        return 0;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last genome with a non-zero weight
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1)
}

/// Tournament selection: pick k random genomes, return the best.
fn tournament<S: Score, R: Rng>(scores: &[S], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = scores.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if scores[idx] > scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Population indices sorted best first (stable).
///
/// Scores must already have passed [`ensure_comparable`].
fn rank_order<S: Score>(scores: &[S]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// Linear ranking draw: rank 0 (best) has weight n, rank n-1 has weight 1.
fn rank<R: Rng>(order: &[usize], rng: &mut R) -> usize {
    let n = order.len();
    if n == 1 {
        return order[0];
    }

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &idx) in order.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1]
}

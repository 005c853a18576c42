//! Core types for the evolution engine.
//!
//! [`Genome`] is the solution representation, [`Score`] the comparable
//! quality measure, and [`Fitness`] the contract between the generic engine
//! and domain-specific scoring code.

use crate::error::{EvolveError, Result};
use std::fmt;

/// A fixed-length bit vector representing one candidate solution.
///
/// Genomes are plain values: operators consume them and return new ones,
/// so no genome is ever shared between two generations.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Genome;
///
/// let genome = Genome::from_bits(&[0, 1, 1, 0]).unwrap();
/// assert_eq!(genome.len(), 4);
/// assert_eq!(genome.count_ones(), 2);
/// assert_eq!(genome.to_string(), "0110");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

/// An ordered collection of genomes. After ranking, index 0 is the best.
pub type Population = Vec<Genome>;

impl Genome {
    /// Creates a genome from boolean bits.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Creates a genome from `0`/`1` values.
    ///
    /// Returns [`EvolveError::InvalidArgument`] if any value is not 0 or 1.
    pub fn from_bits(values: &[u8]) -> Result<Self> {
        let bits = values
            .iter()
            .enumerate()
            .map(|(i, &v)| match v {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(EvolveError::invalid(format!(
                    "bit {i} has value {other}, expected 0 or 1"
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        Ok(Self { bits })
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the genome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Toggles the bit at `index`. Out-of-range indices are ignored.
    pub fn flip(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// The bits as a slice.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Indices of the set bits, in ascending order.
    ///
    /// For a selection problem these are the chosen decision variables.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }
}

impl From<Vec<bool>> for Genome {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl FromIterator<bool> for Genome {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Marker trait for score values.
///
/// Scores must be comparable and cheaply copyable.
/// Higher scores are considered better (maximization).
///
/// Built-in implementations exist for the common integer and float types.
pub trait Score: PartialOrd + Copy + Send + Sync + fmt::Debug + 'static {
    /// Converts the score to `f64` for selection weights and statistics.
    fn to_f64(self) -> f64;
}

macro_rules! impl_score {
    ($($t:ty),*) => {
        $(
            impl Score for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_score!(u32, u64, usize, i32, i64, f32, f64);

/// Rejects scores that do not compare with themselves, such as NaN.
///
/// Ranking and tournaments need a total order over the scores they see.
pub(crate) fn ensure_comparable<S: Score>(scores: &[S]) -> Result<()> {
    match scores.iter().position(|s| s.partial_cmp(s).is_none()) {
        Some(i) => Err(EvolveError::invalid(format!(
            "genome {i} has a non-comparable score {:?}",
            scores[i]
        ))),
        None => Ok(()),
    }
}

/// Scores a genome.
///
/// Implementations must be pure: calling `evaluate` repeatedly on the same
/// genome returns the same score and has no side effects. Any closure
/// `Fn(&Genome) -> S` with `S: Score` implements this trait.
///
/// Fitness-proportionate selection uses [`Score::to_f64`] as a weight, so
/// scores fed to it must be non-negative.
///
/// # Implementing
///
/// ```ignore
/// struct OneMax;
///
/// impl Fitness for OneMax {
///     type Score = usize;
///     fn evaluate(&self, genome: &Genome) -> usize { genome.count_ones() }
/// }
/// ```
pub trait Fitness {
    /// The score type. Must implement [`Score`].
    type Score: Score;

    /// Evaluates a genome and returns its score.
    fn evaluate(&self, genome: &Genome) -> Self::Score;
}

impl<F, S> Fitness for F
where
    F: Fn(&Genome) -> S,
    S: Score,
{
    type Score = S;

    fn evaluate(&self, genome: &Genome) -> S {
        self(genome)
    }
}

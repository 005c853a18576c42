//! Seedable random number generation.
//!
//! All randomness in the crate flows through an RNG handle passed
//! explicitly by the caller. This module only builds such handles.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a 64-bit seed.
///
/// Two generators created from the same seed produce the same stream.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG seeded from the operating system's entropy source.
pub fn create_rng_from_entropy() -> StdRng {
    StdRng::from_os_rng()
}

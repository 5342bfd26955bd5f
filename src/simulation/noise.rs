//! Per-instance random sources.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

/// Builds a generator-owned RNG, seeded deterministically when `seed` is set
/// and from OS entropy otherwise.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Draws one standard normal value.
#[inline]
pub(crate) fn standard_normal(rng: &mut StdRng) -> f64 {
    StandardNormal.sample(rng)
}

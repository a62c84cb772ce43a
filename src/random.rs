//! Seeded RNG construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// All runners and the steady-state controller obtain their RNG through
/// this function so that a fixed seed reproduces a run exactly.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

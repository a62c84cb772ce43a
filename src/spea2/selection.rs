//! Mating selection over assigned fitness.

use super::types::AuxScores;
use rand::Rng;

/// Tournament selection over [`AuxScores::fitness`] (lower wins).
///
/// Picks `k` members at random with replacement and returns the index of
/// the best. `k = 2` is the standard SPEA2 environmental-to-mating
/// pressure; larger `k` selects harder.
///
/// # Panics
///
/// Panics if `aux` is empty.
pub fn tournament<R: Rng>(aux: &[AuxScores], k: usize, rng: &mut R) -> usize {
    assert!(!aux.is_empty(), "cannot select from an empty archive");

    let k = k.max(1);
    let n = aux.len();

    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if aux[idx].fitness < aux[best].fitness {
            best = idx;
        }
    }
    best
}

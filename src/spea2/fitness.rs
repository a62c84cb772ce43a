//! SPEA2 strength/density fitness assignment.
//!
//! Combines dominance counts ("strength"), dominance-weighted raw
//! fitness, and a k-th-nearest-neighbor density penalty into one scalar
//! per individual. **Lower final fitness is better** throughout this
//! crate — the inverse of the usual convention, so every comparison over
//! [`AuxScores::fitness`] sorts ascending.

use super::density::{self, DistanceScratch};
use super::types::{AuxScores, MultiObjective};
use crate::objective::Dominance;
use rand::Rng;

/// Assigns [`AuxScores`] to every individual in the population.
///
/// 1. `strength[i]` — how many individuals `i` dominates (how many it
///    beats, not how many beat it).
/// 2. `raw[i]` — sum of `strength[j]` over every `j` dominating `i`;
///    non-dominated individuals get 0, the best possible value.
/// 3. `density[i]` — `1 / (2 + d_k)` with `d_k` the distance to the k-th
///    nearest neighbor (`k` defaults to `floor(sqrt(n))`).
/// 4. `fitness[i] = raw[i] + density[i]`.
///
/// Since density never reaches 1, all non-dominated individuals sort
/// strictly before all dominated ones, and among equal raw fitness the
/// more crowded individual (larger density) sorts worse.
///
/// # Panics
///
/// Panics if `individuals` is empty or any individual is unevaluated.
pub fn assign<I: MultiObjective, R: Rng>(
    individuals: &[I],
    k: Option<usize>,
    normalize: bool,
    scratch: &mut DistanceScratch,
    rng: &mut R,
) -> Vec<AuxScores> {
    let n = individuals.len();
    assert!(n > 0, "cannot assign fitness to an empty population");

    let mut strength = vec![0usize; n];
    let mut dominators: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match individuals[i]
                .objectives()
                .dominance(individuals[j].objectives())
            {
                Dominance::Left => {
                    strength[i] += 1;
                    dominators[j].push(i);
                }
                Dominance::Right => {
                    strength[j] += 1;
                    dominators[i].push(j);
                }
                Dominance::Neither => {}
            }
        }
    }

    density::pairwise_squared_distances(individuals, normalize, scratch);
    let k = k.unwrap_or_else(|| density::default_k(n));

    (0..n)
        .map(|i| {
            let raw: f64 = dominators[i].iter().map(|&j| strength[j] as f64).sum();
            let dens = density::density(scratch, i, k, rng);
            AuxScores {
                strength: strength[i],
                raw,
                density: dens,
                fitness: raw + dens,
            }
        })
        .collect()
}

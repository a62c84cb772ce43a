//! Archive construction and truncation.
//!
//! Each generation the archive is rebuilt from scratch out of the pooled
//! population: the non-dominated front first, padded with the best
//! dominated individuals when the front is short, or pruned by iterative
//! nearest-neighbor removal when the front overflows the archive.

use super::density::{pairwise_squared_distances_of, DistanceScratch};
use super::front::partition;
use super::types::{AuxScores, MultiObjective};
use crate::objective::ObjectiveVector;

/// Builds the new archive, returning the indices of its members in
/// `population`.
///
/// - Front fits exactly: the archive is the front.
/// - Front is short: the remainder is padded with dominated individuals
///   in ascending [`AuxScores::fitness`] order.
/// - Front overflows: members are removed one at a time — always the one
///   whose distance to its closest surviving neighbor is smallest, with
///   ties broken by the second-closest, third-closest, … distances
///   lexicographically — until the front fits. Removal is strictly
///   sequential; every removal changes the distance structure seen by
///   the next one.
///
/// The returned index list always has exactly `archive_size` entries and
/// never contains a dominated individual while a non-dominated one was
/// excluded.
///
/// # Panics
///
/// Panics when `archive_size` is zero or not smaller than the population
/// — configurations rejected by `validate()` before any generation runs,
/// so hitting this is a caller bug — or when `aux` does not match
/// `population` in length.
pub fn build<I: MultiObjective>(
    population: &[I],
    aux: &[AuxScores],
    archive_size: usize,
    normalize: bool,
    scratch: &mut DistanceScratch,
) -> Vec<usize> {
    assert!(archive_size > 0, "archive_size must be positive");
    assert!(
        archive_size < population.len(),
        "archive_size {} must be smaller than the population size {}",
        archive_size,
        population.len()
    );
    assert_eq!(
        aux.len(),
        population.len(),
        "auxiliary scores do not match the population"
    );

    let part = partition(population);

    if part.front.len() > archive_size {
        return truncate(population, &part.front, archive_size, normalize, scratch);
    }

    let mut archive = part.front;
    if archive.len() < archive_size {
        let mut rest = part.dominated;
        rest.sort_by(|&a, &b| {
            aux[a]
                .fitness
                .partial_cmp(&aux[b].fitness)
                .expect("fitness values are never NaN")
                .then(a.cmp(&b))
        });
        archive.extend(rest.into_iter().take(archive_size - archive.len()));
    }
    archive
}

/// Prunes an overfull front down to `archive_size` by iterative
/// closest-pair removal.
///
/// Maintains one sorted neighbor-distance list per member and patches the
/// lists after each removal instead of recomputing them.
fn truncate<I: MultiObjective>(
    population: &[I],
    front: &[usize],
    archive_size: usize,
    normalize: bool,
    scratch: &mut DistanceScratch,
) -> Vec<usize> {
    let vectors: Vec<&ObjectiveVector> = front
        .iter()
        .map(|&i| population[i].objectives())
        .collect();
    pairwise_squared_distances_of(&vectors, normalize, scratch);

    let f = front.len();
    let mut alive = vec![true; f];
    let mut lists: Vec<Vec<(f64, usize)>> = (0..f)
        .map(|i| {
            let mut list: Vec<(f64, usize)> = (0..f)
                .filter(|&j| j != i)
                .map(|j| (scratch.squared(i, j), j))
                .collect();
            list.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .expect("distances are never NaN")
                    .then(a.1.cmp(&b.1))
            });
            list
        })
        .collect();

    let mut remaining = f;
    while remaining > archive_size {
        let mut victim = usize::MAX;
        for i in 0..f {
            if !alive[i] {
                continue;
            }
            if victim == usize::MAX || lex_less(&lists[i], &lists[victim]) {
                victim = i;
            }
        }

        alive[victim] = false;
        lists[victim].clear();
        remaining -= 1;
        for (i, list) in lists.iter_mut().enumerate() {
            if alive[i] {
                list.retain(|&(_, j)| j != victim);
            }
        }
    }

    front
        .iter()
        .enumerate()
        .filter(|&(i, _)| alive[i])
        .map(|(_, &idx)| idx)
        .collect()
}

/// Lexicographic comparison of sorted distance sequences; a full tie is
/// not "less", so the earliest-scanned member wins it deterministically.
fn lex_less(a: &[(f64, usize)], b: &[(f64, usize)]) -> bool {
    for (&(da, _), &(db, _)) in a.iter().zip(b.iter()) {
        if da < db {
            return true;
        }
        if da > db {
            return false;
        }
    }
    false
}

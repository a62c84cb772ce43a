//! k-th-nearest-neighbor density estimation in objective space.
//!
//! Density is the tie-breaking term of SPEA2 fitness: crowded individuals
//! (small distance to their k-th nearest neighbor) receive a larger
//! penalty. Distances come from a full pairwise squared-distance matrix
//! held in a caller-owned [`DistanceScratch`], and the k-th smallest
//! neighbor distance is extracted with Hoare-partition quickselect in
//! expected O(n) per query instead of sorting each row.

use super::types::MultiObjective;
use crate::objective::ObjectiveVector;
use rand::Rng;

/// Caller-owned scratch buffers for distance computations.
///
/// Sized to the largest population seen and grown on demand, so a single
/// scratch can be reused across generations without reallocating. There
/// is no shared static state; every caller passes its own scratch.
#[derive(Debug, Default)]
pub struct DistanceScratch {
    sq: Vec<f64>,
    work: Vec<f64>,
    ranges: Vec<f64>,
    n: usize,
}

impl DistanceScratch {
    /// Creates an empty scratch; buffers grow on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of individuals covered by the current matrix.
    pub fn len(&self) -> usize {
        self.n
    }

    /// True before any matrix has been computed.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Squared distance between individuals `i` and `j` from the most
    /// recent [`pairwise_squared_distances`] call.
    pub fn squared(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "distance index out of range");
        self.sq[i * self.n + j]
    }

    fn reset(&mut self, n: usize) {
        self.n = n;
        self.sq.clear();
        self.sq.resize(n * n, 0.0);
    }

    /// Copies row `target` minus the self-distance into the work buffer.
    fn neighbor_row(&mut self, target: usize) -> &mut [f64] {
        self.work.clear();
        for j in 0..self.n {
            if j != target {
                let d = self.sq[target * self.n + j];
                self.work.push(d);
            }
        }
        &mut self.work
    }
}

/// Default neighbor count: `floor(sqrt(population_size))`.
///
/// The population excludes self and `k` counts from 1, so `k = 1` is the
/// nearest neighbor. Queries clamp `k` into the valid `1..=n-1` range.
pub fn default_k(population_size: usize) -> usize {
    (population_size as f64).sqrt().floor() as usize
}

/// Fills `scratch` with the symmetric pairwise squared-distance matrix of
/// the population's objective vectors.
///
/// When `normalize` is set, each objective's difference is divided by the
/// (max − min) range observed across the population before squaring, so
/// objectives on different scales contribute equally. Objectives with
/// zero observed range contribute nothing (common before the population
/// spreads out).
///
/// # Panics
///
/// Panics if `individuals` is empty or any individual is unevaluated.
pub fn pairwise_squared_distances<I: MultiObjective>(
    individuals: &[I],
    normalize: bool,
    scratch: &mut DistanceScratch,
) {
    let vectors: Vec<&ObjectiveVector> =
        individuals.iter().map(|ind| ind.objectives()).collect();
    pairwise_squared_distances_of(&vectors, normalize, scratch);
}

/// As [`pairwise_squared_distances`], over borrowed objective vectors.
pub fn pairwise_squared_distances_of(
    vectors: &[&ObjectiveVector],
    normalize: bool,
    scratch: &mut DistanceScratch,
) {
    let n = vectors.len();
    assert!(n > 0, "cannot compute distances for an empty population");
    assert!(
        vectors.iter().all(|v| v.is_evaluated()),
        "cannot compute distances over unevaluated individuals"
    );

    let m = vectors[0].len();
    debug_assert!(
        vectors.iter().all(|v| v.len() == m),
        "all objective vectors must have the same length"
    );

    scratch.reset(n);
    scratch.ranges.clear();

    if normalize {
        for obj in 0..m {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for v in vectors {
                let x = v.values()[obj];
                min = min.min(x);
                max = max.max(x);
            }
            scratch.ranges.push(max - min);
        }
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let mut d2 = 0.0;
            for obj in 0..m {
                let mut diff = vectors[i].values()[obj] - vectors[j].values()[obj];
                if normalize {
                    let range = scratch.ranges[obj];
                    if range > 0.0 {
                        diff /= range;
                    } else {
                        diff = 0.0;
                    }
                }
                d2 += diff * diff;
            }
            scratch.sq[i * n + j] = d2;
            scratch.sq[j * n + i] = d2;
        }
    }
}

/// Distance from `target` to its k-th nearest neighbor.
///
/// Reads the matrix computed by the last
/// [`pairwise_squared_distances`] call. `k` counts from 1 and is clamped
/// to the `1..=n-1` neighbor range; a population of one has no neighbors
/// and yields 0. The returned value is a distance (square root), not a
/// squared distance.
pub fn kth_nearest_distance<R: Rng>(
    scratch: &mut DistanceScratch,
    target: usize,
    k: usize,
    rng: &mut R,
) -> f64 {
    let n = scratch.len();
    assert!(target < n, "target {target} out of range for population of {n}");
    if n == 1 {
        return 0.0;
    }

    let k = k.clamp(1, n - 1);
    let row = scratch.neighbor_row(target);
    select_kth(row, k - 1, rng).sqrt()
}

/// Density penalty for `target`: `1 / (2 + kth_nearest_distance)`.
///
/// Strictly within (0, 0.5]: bounded away from infinity even at zero
/// distance, and strictly below 1 — the smallest possible strength
/// increment — so density only ever breaks ties between individuals of
/// equal raw fitness.
pub fn density<R: Rng>(
    scratch: &mut DistanceScratch,
    target: usize,
    k: usize,
    rng: &mut R,
) -> f64 {
    1.0 / (2.0 + kth_nearest_distance(scratch, target, k, rng))
}

/// Returns the k-th smallest value (0-based `k`) of `data`.
///
/// Hoare partition around a randomized pivot, recursing into the side
/// containing `k` only; expected O(n). The slice is reordered in place.
fn select_kth<R: Rng>(data: &mut [f64], k: usize, rng: &mut R) -> f64 {
    debug_assert!(k < data.len());
    if data.len() == 1 {
        return data[0];
    }

    let split = hoare_partition(data, rng);
    if k <= split {
        select_kth(&mut data[..=split], k, rng)
    } else {
        select_kth(&mut data[split + 1..], k - (split + 1), rng)
    }
}

/// Partitions `data` around a randomly chosen pivot value.
///
/// Returns `split` such that `data[..=split]` holds values ≤ pivot and
/// `data[split+1..]` values ≥ pivot, with both sides non-empty — so the
/// caller always makes progress.
fn hoare_partition<R: Rng>(data: &mut [f64], rng: &mut R) -> usize {
    let len = data.len();
    data.swap(0, rng.random_range(0..len));
    let pivot = data[0];

    let mut i = 0;
    let mut j = len - 1;
    loop {
        while data[i] < pivot {
            i += 1;
        }
        while data[j] > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

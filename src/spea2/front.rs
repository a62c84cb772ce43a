//! Pareto front partitioning.

use super::types::MultiObjective;
use crate::objective::Dominance;

/// Result of splitting a population into its non-dominated front and the
/// dominated remainder.
///
/// Both sides hold indices into the input slice. The order within each
/// side is deterministic for a given input order but is not guaranteed to
/// match it.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Indices of mutually non-dominated individuals.
    pub front: Vec<usize>,
    /// Indices of individuals dominated by at least one other.
    pub dominated: Vec<usize>,
}

/// Partitions `individuals` into the Pareto front and the remainder.
///
/// Single pass over the population: each candidate is scanned against the
/// current front. A candidate dominated by any front member drops out
/// immediately; a candidate that dominates front members evicts **all**
/// of them (the scan continues past the first eviction) before joining
/// the front itself.
///
/// # Complexity
///
/// O(m · n²) worst case for n individuals and m objectives, like any
/// pairwise dominance pass, but candidates dominated early exit their
/// scan at the first dominating front member.
///
/// # Panics
///
/// Panics if `individuals` is empty or any individual is unevaluated.
pub fn partition<I: MultiObjective>(individuals: &[I]) -> Partition {
    assert!(
        !individuals.is_empty(),
        "cannot partition an empty population"
    );

    let mut front: Vec<usize> = vec![0];
    let mut dominated: Vec<usize> = Vec::new();

    for i in 1..individuals.len() {
        let candidate = individuals[i].objectives();
        let mut is_dominated = false;

        let mut j = 0;
        while j < front.len() {
            match individuals[front[j]].objectives().dominance(candidate) {
                Dominance::Left => {
                    // A front member beats the candidate. By
                    // transitivity the candidate cannot also dominate
                    // anyone still in the front, so stop scanning.
                    is_dominated = true;
                    break;
                }
                Dominance::Right => {
                    // Candidate evicts this front member and keeps
                    // scanning: it may dominate several.
                    dominated.push(front.swap_remove(j));
                }
                Dominance::Neither => j += 1,
            }
        }

        if is_dominated {
            dominated.push(i);
        } else {
            front.push(i);
        }
    }

    Partition { front, dominated }
}

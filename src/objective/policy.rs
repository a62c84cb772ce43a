//! Better-than semantics over objective vectors.

use super::vector::{Direction, Dominance, ObjectiveVector};

/// Selects how two evaluated individuals are compared.
///
/// Steady-state replacement and any other "is the challenger strictly
/// better" decision go through [`prefers`](ComparisonPolicy::prefers)
/// with the policy the run was configured with. The SPEA2 core uses a
/// third ordering, the scalar
/// [`AuxScores::fitness`](crate::spea2::AuxScores) value (lower better),
/// which lives with the scores it orders rather than here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonPolicy {
    /// Pareto dominance: strictly better means dominating.
    #[default]
    Dominance,
    /// Single-objective better-than on objective 0, direction aware.
    Scalar,
}

impl ComparisonPolicy {
    /// True when `a` is strictly better than `b` under this policy.
    ///
    /// # Panics
    ///
    /// Panics on unevaluated vectors or mismatched layouts, as all
    /// objective comparisons do.
    pub fn prefers(&self, a: &ObjectiveVector, b: &ObjectiveVector) -> bool {
        match self {
            ComparisonPolicy::Dominance => a.dominance(b) == Dominance::Left,
            ComparisonPolicy::Scalar => {
                // Runs the layout checks before objective 0 is read.
                let _ = a.dominance(b);
                match a.layout().directions()[0] {
                    Direction::Maximize => a.values()[0] > b.values()[0],
                    Direction::Minimize => a.values()[0] < b.values()[0],
                }
            }
        }
    }
}

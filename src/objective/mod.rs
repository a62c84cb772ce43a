//! Objective-space primitives.
//!
//! Every individual in this crate carries an [`ObjectiveVector`]: an
//! immutable tuple of per-objective scores tied to an [`ObjectiveLayout`]
//! that records, per objective, whether higher or lower values win.
//! Pareto dominance is the three-way [`Dominance`] comparison; the
//! [`ComparisonPolicy`] enum selects between dominance-based and scalar
//! better-than semantics where a single policy value has to stand in for
//! both single- and multi-objective runs.

mod policy;
mod vector;

pub use policy::ComparisonPolicy;
pub use vector::{Direction, Dominance, ObjectiveLayout, ObjectiveVector};

//! Core trait definitions for the SPEA2 selection core.
//!
//! [`MultiObjective`] is the contract between the selection machinery and
//! whatever genome representation the caller uses; [`Spea2Problem`] adds
//! the initialization/evaluation/variation seam consumed by the
//! generational runner.

use crate::objective::ObjectiveVector;
use rand::Rng;

/// A candidate solution carrying its evaluated objective vector.
///
/// Individuals own exactly one [`ObjectiveVector`]; the framework calls
/// [`Spea2Problem::evaluate`] (or receives completed evaluations in the
/// steady-state controller) and stores the result via
/// [`set_objectives`](MultiObjective::set_objectives). Genome content is
/// opaque to this crate.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<f64>,
///     scores: ObjectiveVector,
/// }
///
/// impl MultiObjective for MySolution {
///     fn objectives(&self) -> &ObjectiveVector { &self.scores }
///     fn set_objectives(&mut self, scores: ObjectiveVector) { self.scores = scores; }
/// }
/// ```
pub trait MultiObjective: Clone + Send + Sync {
    /// The current objective vector.
    ///
    /// Returns the [`ObjectiveVector::unevaluated`] placeholder until the
    /// individual has been evaluated; selection code panics on it rather
    /// than comparing garbage.
    fn objectives(&self) -> &ObjectiveVector;

    /// Stores evaluation results. Called by the framework.
    fn set_objectives(&mut self, scores: ObjectiveVector);
}

/// Per-generation auxiliary selection scores.
///
/// Produced by [`assign`](crate::spea2::assign) for one population,
/// parallel to it by index, read by the archive builder and mating
/// selection, then discarded. Individuals never carry these fields.
///
/// `fitness` is **lower-is-better**: non-dominated individuals have
/// `raw == 0` and therefore `fitness < 1`, while every dominated
/// individual has `fitness >= 1`. The density term only breaks ties
/// among individuals with equal raw fitness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuxScores {
    /// Number of individuals this one Pareto-dominates.
    pub strength: usize,
    /// Sum of the strengths of this individual's dominators.
    pub raw: f64,
    /// Crowding penalty `1 / (2 + kth_nearest_distance)`, in (0, 0.5].
    pub density: f64,
    /// `raw + density`; lower is better.
    pub fitness: f64,
}

impl AuxScores {
    /// True when no individual in the population dominates this one.
    pub fn is_nondominated(&self) -> bool {
        self.raw == 0.0
    }
}

/// Defines a SPEA2 optimization problem for the generational runner.
///
/// Covers initialization, evaluation, and variation. Evaluation returns
/// raw per-objective scores; the runner applies the configured objective
/// layout (including non-finite clamping) before anything compares them.
///
/// # Thread Safety
///
/// `Spea2Problem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon.
pub trait Spea2Problem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: MultiObjective;

    /// Creates a random individual for population initialization.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual, returning one raw score per objective.
    ///
    /// This is typically the most expensive operation; the runner may
    /// call it in parallel across the population.
    fn evaluate(&self, individual: &Self::Individual) -> Vec<f64>;

    /// Produces one or two offspring by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place. The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called once per generation with the freshly rebuilt archive.
    ///
    /// Useful for logging or external communication. Default: no-op.
    fn on_generation(&self, _generation: usize, _archive: &[Self::Individual]) {}
}

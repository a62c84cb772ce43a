//! Core trait definitions for steady-state evolution.
//!
//! [`SteadyStateProblem`] is the seam to the external breeding pipeline,
//! deselection policy, and genome identity; [`Evaluator`] decouples the
//! controller from fitness evaluation through a non-blocking completion
//! queue so the same controller drives both synchronous and asynchronous
//! deployments.

use crate::spea2::MultiObjective;
use rand::Rng;
use std::collections::VecDeque;

/// Defines a steady-state evolution problem.
///
/// The controller never inspects genomes: creation, breeding, victim
/// deselection, and genome identity are all supplied here.
pub trait SteadyStateProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: MultiObjective;

    /// Creates a fresh (not bred) individual while the subpopulation is
    /// bootstrapping towards capacity.
    fn fresh_individual<R: Rng>(&self, subpopulation: usize, rng: &mut R) -> Self::Individual;

    /// Breeds one new individual from the members of a full
    /// subpopulation.
    fn breed<R: Rng>(
        &self,
        members: &[Self::Individual],
        subpopulation: usize,
        rng: &mut R,
    ) -> Self::Individual;

    /// Picks the index of the member a new individual may replace.
    ///
    /// The default deselects uniformly at random; tournament-style
    /// policies plug in here.
    fn deselect<R: Rng>(
        &self,
        members: &[Self::Individual],
        _subpopulation: usize,
        rng: &mut R,
    ) -> usize {
        rng.random_range(0..members.len())
    }

    /// Hash of an individual's genome, used to bucket duplicate checks.
    ///
    /// Only consulted when duplicate retries are configured.
    fn genome_hash(&self, individual: &Self::Individual) -> u64;

    /// Genome equality, used to confirm hash-bucket candidates.
    fn genome_eq(&self, a: &Self::Individual, b: &Self::Individual) -> bool;

    /// True when an individual is good enough to stop the run (only
    /// consulted when `quit_on_ideal` is configured).
    fn is_ideal(&self, _individual: &Self::Individual) -> bool {
        false
    }

    /// Called when a generation's worth of evaluations has completed.
    fn on_generation(&self, _generation: usize, _subpopulations: &[Vec<Self::Individual>]) {}
}

/// An individual submitted for evaluation, tagged with its origin
/// subpopulation.
#[derive(Debug)]
pub struct EvalJob<I> {
    /// The individual to evaluate.
    pub individual: I,
    /// Index of the subpopulation it was bred for.
    pub subpopulation: usize,
}

/// A completed evaluation.
#[derive(Debug)]
pub struct EvalDone<I> {
    /// The evaluated individual.
    pub individual: I,
    /// Raw per-objective scores; the controller applies the configured
    /// objective layout (and non-finite clamping) on integration.
    pub scores: Vec<f64>,
    /// Origin subpopulation, echoed from the job.
    pub subpopulation: usize,
}

/// Non-blocking evaluation transport.
///
/// `submit` is fire-and-forget; `poll` returns a completion if one is
/// ready and `None` immediately otherwise — it must never block. The
/// controller tolerates zero, one, or many pending completions per poll
/// cycle, so an implementation may batch, reorder, or delay completions
/// freely as long as every submitted job eventually comes back.
pub trait Evaluator<I>: Send {
    /// Accepts a job for evaluation.
    fn submit(&mut self, job: EvalJob<I>);

    /// Returns the next completed evaluation, if any.
    fn poll(&mut self) -> Option<EvalDone<I>>;
}

/// Synchronous [`Evaluator`]: evaluates on submit, completions drain in
/// FIFO order on the next poll.
///
/// This is the canonical blocking-evaluation mode; asynchronous
/// deployments implement [`Evaluator`] over their own transport instead.
pub struct SyncEvaluator<I, F> {
    evaluate: F,
    ready: VecDeque<EvalDone<I>>,
}

impl<I, F> SyncEvaluator<I, F>
where
    F: FnMut(&I) -> Vec<f64>,
{
    /// Wraps an evaluation function.
    pub fn new(evaluate: F) -> Self {
        Self {
            evaluate,
            ready: VecDeque::new(),
        }
    }
}

impl<I, F> Evaluator<I> for SyncEvaluator<I, F>
where
    I: Send,
    F: FnMut(&I) -> Vec<f64> + Send,
{
    fn submit(&mut self, job: EvalJob<I>) {
        let scores = (self.evaluate)(&job.individual);
        self.ready.push_back(EvalDone {
            individual: job.individual,
            scores,
            subpopulation: job.subpopulation,
        });
    }

    fn poll(&mut self) -> Option<EvalDone<I>> {
        self.ready.pop_front()
    }
}

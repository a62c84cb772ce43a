//! SPEA2 generational loop execution.
//!
//! [`Spea2Runner`] orchestrates the complete cycle:
//! initialization → evaluation → fitness assignment → archive rebuild →
//! mating selection → variation → repeat.

use super::archive;
use super::config::Spea2Config;
use super::density::DistanceScratch;
use super::fitness;
use super::selection;
use super::types::{AuxScores, MultiObjective, Spea2Problem};
use crate::objective::ObjectiveLayout;
use crate::random::create_rng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a SPEA2 optimization run.
#[derive(Debug, Clone)]
pub struct Spea2Result<I: MultiObjective> {
    /// The final archive: the run's non-dominated reservoir.
    pub archive: Vec<I>,

    /// Auxiliary scores of the final archive members, in archive order.
    pub archive_scores: Vec<AuxScores>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Size of the pooled non-dominated front at each generation.
    pub front_size_history: Vec<usize>,
}

/// Executes the SPEA2 evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = Spea2Config::new(ObjectiveLayout::minimize(2)).with_seed(42);
/// let result = Spea2Runner::run(&problem, &config);
/// println!("front size: {}", result.archive.len());
/// ```
pub struct Spea2Runner;

impl Spea2Runner {
    /// Runs the optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`Spea2Config::validate`] first to get a descriptive error).
    pub fn run<P: Spea2Problem>(problem: &P, config: &Spea2Config) -> Spea2Result<P::Individual> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// When the flag flips to `true` the loop stops at the next
    /// generation boundary and returns the archive built so far.
    pub fn run_with_cancel<P: Spea2Problem>(
        problem: &P,
        config: &Spea2Config,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Spea2Result<P::Individual> {
        config.validate().expect("invalid Spea2Config");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Initialize and evaluate the starting population.
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, &config.objectives, config.parallel);

        let mut archive: Vec<P::Individual> = Vec::new();
        let mut archive_scores: Vec<AuxScores> = Vec::new();
        let mut scratch = DistanceScratch::new();
        let mut front_size_history = Vec::with_capacity(config.max_generations);
        let mut generations = 0usize;
        let mut cancelled = false;

        // 2. Generational loop over the pooled population ∪ archive.
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut pool = population.clone();
            pool.extend(archive.iter().cloned());

            let aux = fitness::assign(
                &pool,
                config.k,
                config.normalize_distances,
                &mut scratch,
                &mut rng,
            );
            front_size_history.push(aux.iter().filter(|s| s.is_nondominated()).count());

            let members = archive::build(
                &pool,
                &aux,
                config.archive_size,
                config.normalize_distances,
                &mut scratch,
            );
            archive = members.iter().map(|&i| pool[i].clone()).collect();
            archive_scores = members.iter().map(|&i| aux[i]).collect();

            generations = gen + 1;
            problem.on_generation(generations, &archive);

            if generations == config.max_generations {
                break;
            }

            // 3. Breed the next population from the archive.
            let mut next: Vec<P::Individual> = Vec::with_capacity(config.population_size);
            while next.len() < config.population_size {
                let p1 = selection::tournament(&archive_scores, config.tournament_size, &mut rng);
                let p2 = selection::tournament(&archive_scores, config.tournament_size, &mut rng);

                let children = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    problem.crossover(&archive[p1], &archive[p2], &mut rng)
                } else {
                    vec![archive[p1].clone()]
                };

                for mut child in children {
                    if next.len() >= config.population_size {
                        break;
                    }
                    if rng.random_range(0.0..1.0) < config.mutation_rate {
                        problem.mutate(&mut child, &mut rng);
                    }
                    next.push(child);
                }
            }

            evaluate_population(problem, &mut next, &config.objectives, config.parallel);
            population = next;
        }

        Spea2Result {
            archive,
            archive_scores,
            generations,
            cancelled,
            front_size_history,
        }
    }
}

/// Evaluates all individuals, storing objective vectors built (and
/// clamped) through the configured layout.
fn evaluate_population<P: Spea2Problem>(
    problem: &P,
    population: &mut [P::Individual],
    layout: &ObjectiveLayout,
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            population.par_iter_mut().for_each(|ind| {
                let scores = problem.evaluate(ind);
                ind.set_objectives(layout.scores(scores));
            });
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let scores = problem.evaluate(ind);
        ind.set_objectives(layout.scores(scores));
    }
}

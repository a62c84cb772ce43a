//! Steady-state controller configuration.

use crate::error::ConfigError;
use crate::objective::{ComparisonPolicy, ObjectiveLayout};

/// Configuration for [`SteadyStateController`](super::SteadyStateController).
///
/// # Builder Pattern
///
/// ```
/// use moea::objective::ObjectiveLayout;
/// use moea::steady_state::SteadyStateConfig;
///
/// let config = SteadyStateConfig::new(ObjectiveLayout::maximize(2), vec![50, 50])
///     .with_replacement_probability(0.25)
///     .with_num_duplicate_retries(3)
///     .with_max_evaluations(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SteadyStateConfig {
    /// Objective count and per-objective optimization directions.
    pub objectives: ObjectiveLayout,

    /// Capacity of each subpopulation. Their sum is the generation size:
    /// that many completed evaluations advance the generation counter by
    /// one.
    pub subpopulation_capacities: Vec<usize>,

    /// Probability of replacing the deselected victim even when the new
    /// individual is not strictly better (0.0–1.0).
    ///
    /// 1.0 always replaces (pure steady-state churn); 0.0 replaces only
    /// on strict improvement (elitist-only).
    pub replacement_probability: f64,

    /// How many times breeding retries after producing a duplicate.
    ///
    /// 0 disables duplicate detection entirely: the genome hash is never
    /// consulted and the first product is accepted unconditionally.
    /// After the retry budget the last product is accepted even if it is
    /// a duplicate.
    pub num_duplicate_retries: usize,

    /// Stop after this many completed evaluations (0 = no limit).
    pub max_evaluations: usize,

    /// Stop after this many generations (0 = no limit).
    pub max_generations: usize,

    /// Stop as soon as an evaluated individual satisfies
    /// [`is_ideal`](super::SteadyStateProblem::is_ideal).
    pub quit_on_ideal: bool,

    /// How "strictly better than the victim" is decided during
    /// replacement.
    pub comparison: ComparisonPolicy,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl SteadyStateConfig {
    /// Creates a configuration with default parameters for the given
    /// objective layout and subpopulation capacities.
    pub fn new(objectives: ObjectiveLayout, subpopulation_capacities: Vec<usize>) -> Self {
        Self {
            objectives,
            subpopulation_capacities,
            replacement_probability: 1.0,
            num_duplicate_retries: 0,
            max_evaluations: 0,
            max_generations: 100,
            quit_on_ideal: false,
            comparison: ComparisonPolicy::default(),
            seed: None,
        }
    }

    /// Sets the replacement probability.
    pub fn with_replacement_probability(mut self, p: f64) -> Self {
        self.replacement_probability = p;
        self
    }

    /// Sets the duplicate retry budget (0 disables duplicate checks).
    pub fn with_num_duplicate_retries(mut self, retries: usize) -> Self {
        self.num_duplicate_retries = retries;
        self
    }

    /// Sets the evaluation budget (0 = no limit).
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the generation budget (0 = no limit).
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables termination on an ideal individual.
    pub fn with_quit_on_ideal(mut self, quit: bool) -> Self {
        self.quit_on_ideal = quit;
        self
    }

    /// Sets the replacement comparison policy.
    pub fn with_comparison(mut self, policy: ComparisonPolicy) -> Self {
        self.comparison = policy;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sum of all subpopulation capacities.
    pub fn generation_size(&self) -> usize {
        self.subpopulation_capacities.iter().sum()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.objectives.is_empty() {
            return Err(ConfigError::NoObjectives);
        }
        if self.subpopulation_capacities.is_empty() {
            return Err(ConfigError::NoSubpopulations);
        }
        for (index, &cap) in self.subpopulation_capacities.iter().enumerate() {
            if cap == 0 {
                return Err(ConfigError::EmptySubpopulation { index });
            }
        }
        if !(0.0..=1.0).contains(&self.replacement_probability)
            || self.replacement_probability.is_nan()
        {
            return Err(ConfigError::InvalidReplacementProbability(
                self.replacement_probability,
            ));
        }
        if self.max_evaluations == 0 && self.max_generations == 0 {
            return Err(ConfigError::NoBudget);
        }
        Ok(())
    }
}

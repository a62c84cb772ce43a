//! SPEA2 configuration.
//!
//! [`Spea2Config`] holds all parameters that control the generational
//! selection/archive cycle.

use crate::error::ConfigError;
use crate::objective::ObjectiveLayout;

/// Configuration for the SPEA2 generational runner and archive core.
///
/// # Builder Pattern
///
/// ```
/// use moea::objective::ObjectiveLayout;
/// use moea::spea2::Spea2Config;
///
/// let config = Spea2Config::new(ObjectiveLayout::minimize(2))
///     .with_population_size(120)
///     .with_archive_size(40)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Spea2Config {
    /// Objective count and per-objective optimization directions.
    pub objectives: ObjectiveLayout,

    /// Number of individuals bred each generation.
    pub population_size: usize,

    /// Archive capacity. Must be positive and strictly smaller than
    /// `population_size`; violations are fatal at setup, never clamped.
    pub archive_size: usize,

    /// Number of generations before termination.
    pub max_generations: usize,

    /// Density neighbor count override.
    ///
    /// `None` uses `floor(sqrt(pool_size))`, recomputed per generation.
    pub k: Option<usize>,

    /// Whether density distances are normalized per objective by the
    /// range observed across the comparison set.
    pub normalize_distances: bool,

    /// Tournament size for mating selection from the archive.
    pub tournament_size: usize,

    /// Probability of applying crossover to a selected pair (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect when the crate is built with the `parallel`
    /// feature; selection and archive computation stay single-threaded
    /// either way.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Spea2Config {
    /// Creates a configuration with default parameters for the given
    /// objective layout.
    pub fn new(objectives: ObjectiveLayout) -> Self {
        Self {
            objectives,
            population_size: 100,
            archive_size: 50,
            max_generations: 250,
            k: None,
            normalize_distances: true,
            tournament_size: 2,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            parallel: true,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the archive capacity.
    pub fn with_archive_size(mut self, n: usize) -> Self {
        self.archive_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Overrides the density neighbor count.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    /// Enables or disables per-objective distance normalization.
    pub fn with_normalize_distances(mut self, normalize: bool) -> Self {
        self.normalize_distances = normalize;
        self
    }

    /// Sets the mating tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Runners call this before any evaluation; errors here are fatal
    /// and identify the offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.objectives.is_empty() {
            return Err(ConfigError::NoObjectives);
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.archive_size == 0 {
            return Err(ConfigError::ZeroArchive);
        }
        if self.archive_size >= self.population_size {
            return Err(ConfigError::ArchiveTooLarge {
                archive_size: self.archive_size,
                population_size: self.population_size,
            });
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.k == Some(0) {
            return Err(ConfigError::ZeroNeighborCount);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::ZeroTournament);
        }
        Ok(())
    }
}

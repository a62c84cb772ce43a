//! Configuration-error taxonomy.
//!
//! Every configuration type exposes `validate() -> Result<(), ConfigError>`
//! and runners call it before any evaluation happens. Parameter problems
//! are fatal at setup time and are never silently corrected; the one
//! sanctioned correction — clamping non-finite objective scores — lives
//! in [`crate::objective`] and logs a warning instead.

/// Fatal configuration errors, reported before a run starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("objective layout must contain at least one objective")]
    NoObjectives,

    #[error("population_size must be at least 2 (got {0})")]
    PopulationTooSmall(usize),

    #[error("archive_size must be positive")]
    ZeroArchive,

    #[error("archive_size ({archive_size}) must be smaller than population_size ({population_size})")]
    ArchiveTooLarge {
        archive_size: usize,
        population_size: usize,
    },

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("density neighbor count k must be at least 1")]
    ZeroNeighborCount,

    #[error("tournament_size must be at least 1")]
    ZeroTournament,

    #[error("at least one subpopulation is required")]
    NoSubpopulations,

    #[error("subpopulation {index} has zero capacity")]
    EmptySubpopulation { index: usize },

    #[error("replacement_probability must be within [0, 1] (got {0})")]
    InvalidReplacementProbability(f64),

    #[error("either an evaluation budget or a generation budget is required")]
    NoBudget,
}

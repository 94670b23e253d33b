//! Error types.
//!
//! [`ConfigError`] covers everything detected before a run starts.
//! [`GaError`] adds the failures that can only surface while the engine is
//! running or when a caller edits chromosome genes directly.

use thiserror::Error;

/// Invalid engine configuration, reported before any generation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("population_size must be positive")]
    ZeroPopulation,

    #[error("chromosome_length must be positive")]
    ZeroChromosomeLength,

    #[error("crossover_rate must lie in [0, 1], got {0}")]
    CrossoverRate(f64),

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    MutationRate(f64),

    #[error("tournament_size must be positive when set")]
    ZeroTournamentSize,

    #[error("domain bounds inverted: min {min} > max {max}")]
    InvertedBounds { min: f64, max: f64 },

    #[error("integer domain bounds inverted: min {min} > max {max}")]
    InvertedIntegerBounds { min: i64, max: i64 },

    #[error("domain bounds must be finite, got [{min}, {max}]")]
    NonFiniteBounds { min: f64, max: f64 },

    #[error("a fitness function is required")]
    MissingFitness,
}

/// Errors raised by the engine and by checked gene access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("gene index {index} out of range for length {len}")]
    GeneIndex { index: usize, len: usize },

    #[error("gene {index} lies outside the chromosome domain")]
    GeneOutOfDomain { index: usize },

    #[error("infeasibility handler changed gene count: expected {expected}, got {actual}")]
    InvalidRepair { expected: usize, actual: usize },

    #[error("infeasibility handler changed the chromosome domain")]
    RepairDomainMismatch,
}

pub type Result<T> = std::result::Result<T, GaError>;

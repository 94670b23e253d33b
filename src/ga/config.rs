//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Domain bounds live with the chromosome type (see
//! [`IntegerDomain`](super::IntegerDomain) and
//! [`RealDomain`](super::RealDomain)) and are passed to the engine builder.

use super::operators::CrossoverMethod;
use super::replacement::Replacement;
use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Builder methods store values as given; out-of-range values are reported
/// by [`validate`](GaConfig::validate), never corrected.
///
/// # Defaults
///
/// ```
/// use soft_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use soft_ga::ga::{CrossoverMethod, GaConfig, Replacement, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament)
///     .with_crossover(CrossoverMethod::TwoPoint)
///     .with_replacement(Replacement::Elitism)
///     .with_mutation_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in the population. Must be positive.
    pub population_size: usize,

    /// Number of genes per chromosome. Must be positive.
    pub chromosome_length: usize,

    /// Number of generations to run. Zero runs nothing.
    pub generations: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the offspring copy their parents.
    pub crossover_rate: f64,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Crossover operator.
    pub crossover: CrossoverMethod,

    /// How offspring replace the population.
    pub replacement: Replacement,

    /// Tournament size override.
    ///
    /// `None` derives `max(2, population_size / 10)`.
    pub tournament_size: Option<usize>,

    /// Emit a progress line every `report_interval` generations.
    ///
    /// The last generation is always reported. Set to 0 to disable.
    pub report_interval: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            chromosome_length: 10,
            generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            selection: Selection::default(),
            crossover: CrossoverMethod::default(),
            replacement: Replacement::default(),
            tournament_size: None,
            report_interval: 10,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, method: CrossoverMethod) -> Self {
        self.crossover = method;
        self
    }

    /// Sets the replacement strategy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Overrides the derived tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = Some(k);
        self
    }

    /// Sets the progress reporting interval (0 to disable).
    pub fn with_report_interval(mut self, every: usize) -> Self {
        self.report_interval = every;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tournament size used by [`Selection::Tournament`].
    pub fn effective_tournament_size(&self) -> usize {
        self.tournament_size
            .unwrap_or_else(|| (self.population_size / 10).max(2))
    }

    /// Validates the configuration.
    ///
    /// Returns the first problem found. NaN rates are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        if self.chromosome_length == 0 {
            return Err(ConfigError::ZeroChromosomeLength);
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::CrossoverRate(self.crossover_rate));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if self.tournament_size == Some(0) {
            return Err(ConfigError::ZeroTournamentSize);
        }
        Ok(())
    }
}

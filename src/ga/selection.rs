//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Both strategies **maximize**: higher fitness is favored.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::types::Individual;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use soft_ga::ga::{BinaryChromosome, Individual, Selection};
/// use rand::SeedableRng;
///
/// let mut pop = vec![
///     BinaryChromosome::from_genes(vec![false]),
///     BinaryChromosome::from_genes(vec![true]),
/// ];
/// pop[0].set_fitness(0.0);
/// pop[1].set_fitness(1.0);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let idx = Selection::Tournament.select(&pop, 2, &mut rng);
/// assert!(idx < pop.len());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Fitness-proportionate selection over raw fitness values.
    ///
    /// Only meaningful when fitness is non-negative. A member scoring
    /// `+inf` takes the whole wheel; a population whose total fitness is
    /// not positive always yields its last member.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    RouletteWheel,

    /// Sample `k` individuals uniformly with replacement, keep the fittest.
    ///
    /// The engine uses `k = max(2, population_size / 10)` unless
    /// [`GaConfig::tournament_size`](super::GaConfig::tournament_size) is set.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament,
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// `tournament_size` is only read by [`Selection::Tournament`].
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(
        &self,
        population: &[I],
        tournament_size: usize,
        rng: &mut R,
    ) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::RouletteWheel => roulette_wheel(population, rng),
            Selection::Tournament => tournament(population, tournament_size, rng),
        }
    }
}

/// Roulette wheel selection on raw fitness.
///
/// Draws `u` uniformly in `[0, total]` and returns the first index whose
/// cumulative fitness reaches `u`. The first `+inf` member wins outright.
/// Finite scores whose sum overflows are scaled by `1 / n` first. Falls back
/// to the last index when the total is not a positive finite number or the
/// walk runs out.
fn roulette_wheel<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let last = population.len() - 1;
    if let Some(i) = population
        .iter()
        .position(|ind| ind.fitness() == f64::INFINITY)
    {
        return i;
    }

    let mut scale = 1.0;
    let mut total: f64 = population.iter().map(Individual::fitness).sum();
    if total == f64::INFINITY {
        scale = 1.0 / population.len() as f64;
        total = population.iter().map(|ind| ind.fitness() * scale).sum();
    }

    if !(total > 0.0 && total.is_finite()) {
        log::trace!("roulette fallback: total fitness {total}");
        return last;
    }

    let threshold = rng.random_range(0.0..=total);
    let mut cumulative = 0.0;
    for (i, ind) in population.iter().enumerate() {
        cumulative += ind.fitness() * scale;
        if cumulative >= threshold {
            return i;
        }
    }

    log::trace!("roulette fallback: walk ended below {threshold}");
    last
}

/// Tournament selection: sample k indices with replacement, return the
/// fittest. Ties keep the earliest sample.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

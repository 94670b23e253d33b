//! GA evolutionary loop execution.
//!
//! [`GaEngine`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repair →
//! replacement → repeat.

use super::config::GaConfig;
use super::types::{Chromosome, FitnessFunction, InfeasibilityHandler, Individual};
use crate::error::{ConfigError, GaError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<C: Chromosome> {
    /// Best individual of the last evaluated generation.
    ///
    /// `None` when no generation ran.
    pub best: Option<C>,

    /// Fitness of [`best`](GaResult::best).
    pub best_fitness: Option<f64>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of each evaluated generation, in order.
    pub fitness_history: Vec<f64>,
}

/// Collects the engine's collaborators before validation.
///
/// Obtained from [`GaEngine::builder`].
pub struct GaEngineBuilder<C: Chromosome> {
    config: GaConfig,
    domain: C::Domain,
    fitness: Option<Box<dyn FitnessFunction<C>>>,
    handler: Option<Box<dyn InfeasibilityHandler<C>>>,
}

impl<C: Chromosome> GaEngineBuilder<C> {
    /// Sets the fitness function. Required.
    pub fn fitness<F>(mut self, fitness: F) -> Self
    where
        F: FitnessFunction<C> + 'static,
    {
        self.fitness = Some(Box::new(fitness));
        self
    }

    /// Sets a repair function applied to every mutated offspring.
    pub fn infeasibility_handler<H>(mut self, handler: H) -> Self
    where
        H: InfeasibilityHandler<C> + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Validates the configuration and creates the engine.
    ///
    /// The random generator is seeded here, from
    /// [`GaConfig::seed`] or from a fresh random seed.
    pub fn build(self) -> std::result::Result<GaEngine<C>, ConfigError> {
        self.config.validate()?;
        let fitness = self.fitness.ok_or(ConfigError::MissingFitness)?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        log::debug!(
            "building {:?} GA: population {}, length {}, seed {seed}",
            C::REPRESENTATION,
            self.config.population_size,
            self.config.chromosome_length,
        );

        Ok(GaEngine {
            config: self.config,
            domain: self.domain,
            fitness,
            handler: self.handler,
            rng: StdRng::seed_from_u64(seed),
            population: Vec::new(),
            best: None,
            generation: 0,
        })
    }
}

/// Executes the GA evolutionary loop.
///
/// The engine owns its configuration, its random generator, the current
/// population and a snapshot of the best individual. Every stochastic
/// decision draws from the one generator, so a fixed
/// [`seed`](GaConfig::seed) reproduces a run exactly.
///
/// # Usage
///
/// ```
/// use soft_ga::ga::{BinaryChromosome, BinaryDomain, GaConfig, GaEngine};
///
/// let config = GaConfig::default()
///     .with_chromosome_length(16)
///     .with_generations(20)
///     .with_seed(42);
/// let mut engine = GaEngine::builder(config, BinaryDomain)
///     .fitness(|c: &BinaryChromosome| c.count_ones() as f64)
///     .build()
///     .unwrap();
///
/// let result = engine.run().unwrap();
/// assert!(result.best_fitness.unwrap() >= 8.0);
/// ```
pub struct GaEngine<C: Chromosome> {
    config: GaConfig,
    domain: C::Domain,
    fitness: Box<dyn FitnessFunction<C>>,
    handler: Option<Box<dyn InfeasibilityHandler<C>>>,
    rng: StdRng,
    population: Vec<C>,
    best: Option<C>,
    generation: usize,
}

impl<C: Chromosome> GaEngine<C> {
    /// Starts building an engine for chromosomes in `domain`.
    pub fn builder(config: GaConfig, domain: C::Domain) -> GaEngineBuilder<C> {
        GaEngineBuilder {
            config,
            domain,
            fitness: None,
            handler: None,
        }
    }

    /// Runs the configured number of generations on a fresh population.
    ///
    /// # Errors
    /// Fails only when the infeasibility handler breaks its contract.
    pub fn run(&mut self) -> Result<GaResult<C>> {
        self.initialize();

        let mut fitness_history = Vec::with_capacity(self.config.generations);
        for _ in 0..self.config.generations {
            fitness_history.push(self.step()?);
        }

        log::debug!(
            "GA finished after {} generations, best fitness {:?}",
            self.generation,
            self.best_fitness()
        );

        Ok(GaResult {
            best: self.best.clone(),
            best_fitness: self.best_fitness(),
            generations: self.generation,
            fitness_history,
        })
    }

    /// Replaces the population with random chromosomes and forgets the
    /// best snapshot.
    pub fn initialize(&mut self) {
        let length = self.config.chromosome_length;
        self.population = (0..self.config.population_size)
            .map(|_| C::random(length, &self.domain, &mut self.rng))
            .collect();
        self.best = None;
        self.generation = 0;
    }

    /// Runs one generation: evaluate, seed, reproduce, replace.
    ///
    /// Returns the best fitness of the evaluated population. Initializes the
    /// population first if that has not happened yet.
    ///
    /// # Errors
    /// [`GaError::InvalidRepair`] or [`GaError::RepairDomainMismatch`] when
    /// the infeasibility handler changes gene count or domain. The
    /// population is left as it was before reproduction.
    pub fn step(&mut self) -> Result<f64> {
        if self.population.is_empty() {
            self.initialize();
        }

        let best_fitness = self.evaluate();

        let n = self.config.population_size;
        let mut offspring: Vec<C> = Vec::with_capacity(n + 1);
        if self.config.replacement.seeds_elite() {
            if let Some(best) = &self.best {
                offspring.push(best.clone());
            }
        }

        let k = self.config.effective_tournament_size();
        while offspring.len() < n {
            let p1 = self.config.selection.select(&self.population, k, &mut self.rng);
            let p2 = self.config.selection.select(&self.population, k, &mut self.rng);

            let (a, b) = self.population[p1].crossover(
                &self.population[p2],
                self.config.crossover,
                self.config.crossover_rate,
                &mut self.rng,
            );

            for mut child in [a, b] {
                child.mutate(self.config.mutation_rate, &mut self.rng);
                if let Some(handler) = &self.handler {
                    child = repair(handler.as_ref(), child)?;
                }
                offspring.push(child);
            }
        }

        let current = std::mem::take(&mut self.population);
        self.population = self.config.replacement.replace(current, offspring, n);

        self.report(best_fitness);
        self.generation += 1;
        Ok(best_fitness)
    }

    /// Scores every individual and snapshots the fittest.
    fn evaluate(&mut self) -> f64 {
        for ind in self.population.iter_mut() {
            let f = self.fitness.evaluate(ind);
            ind.set_fitness(f);
        }

        let best = find_best(&self.population).cloned();
        let best_fitness = best.as_ref().map_or(f64::NEG_INFINITY, |b| b.fitness());
        self.best = best;
        best_fitness
    }

    fn report(&self, best_fitness: f64) {
        let every = self.config.report_interval;
        if every == 0 {
            return;
        }
        let last = self.generation + 1 == self.config.generations;
        if self.generation % every == 0 || last {
            log::info!(
                "Generation {}: Best Fitness = {:.2}",
                self.generation,
                best_fitness
            );
        }
    }

    /// Best individual of the most recently evaluated generation.
    ///
    /// This is an independent copy; the population may already have moved on.
    pub fn best_individual(&self) -> Option<&C> {
        self.best.as_ref()
    }

    /// Fitness of [`best_individual`](GaEngine::best_individual).
    pub fn best_fitness(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.fitness())
    }

    /// The current population.
    ///
    /// After [`step`](GaEngine::step) this is the next generation, whose
    /// fitness values are stale until the following evaluation.
    pub fn population(&self) -> &[C] {
        &self.population
    }

    /// Number of generations completed since the last initialization.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn domain(&self) -> &C::Domain {
        &self.domain
    }
}

/// Passes an offspring through the handler and checks the handler's contract.
fn repair<C: Chromosome>(handler: &dyn InfeasibilityHandler<C>, child: C) -> Result<C> {
    let expected = child.len();
    let domain = child.domain().clone();

    let repaired = handler.handle(child);
    if repaired.len() != expected {
        return Err(GaError::InvalidRepair {
            expected,
            actual: repaired.len(),
        });
    }
    if repaired.domain() != &domain {
        return Err(GaError::RepairDomainMismatch);
    }
    Ok(repaired)
}

/// Find the individual with the highest fitness. Ties keep the first.
///
/// NaN scores never win against a comparable score; an all-NaN population
/// yields its first member.
fn find_best<I: Individual>(population: &[I]) -> Option<&I> {
    population.iter().fold(None, |best: Option<&I>, ind| match best {
        Some(b) if b.fitness().is_nan() && !ind.fitness().is_nan() => Some(ind),
        Some(b) if ind.fitness() > b.fitness() => Some(ind),
        Some(b) => Some(b),
        None => Some(ind),
    })
}

// ============================================================================
// Tests
// ============================================================================

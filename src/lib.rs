//! Configurable genetic algorithm engine.
//!
//! Evolves a fixed-size population of chromosomes through evaluation,
//! selection, crossover, mutation, optional repair and replacement, driven
//! by a caller-supplied fitness function.
//!
//! - **Representations**: binary, bounded integer and bounded real genes,
//!   all behind the [`ga::Chromosome`] trait.
//! - **Strategies**: roulette-wheel or tournament selection; one-point,
//!   two-point or uniform crossover; generational, elitist or steady-state
//!   replacement.
//! - **Reproducibility**: one seedable generator, owned by the engine, feeds
//!   every random decision.
//!
//! Higher fitness is better. The engine applies no scaling.
//!
//! Progress is reported through the [`log`] facade; install any logger
//! (e.g. `env_logger`) to see it.

pub mod error;
pub mod ga;

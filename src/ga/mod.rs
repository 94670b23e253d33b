//! Genetic Algorithm engine.
//!
//! Callers pick a chromosome type, which fixes the gene representation,
//! give its domain to [`GaEngine::builder`], and plug in a fitness function
//! and optionally an infeasibility handler.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying a fitness score
//! - [`Chromosome`]: Gene container with random init, mutation and crossover
//! - [`FitnessFunction`] / [`InfeasibilityHandler`]: caller-supplied scoring
//!   and repair
//!
//! # Representations
//!
//! - [`BinaryChromosome`]: bit genes, flip mutation
//! - [`IntegerChromosome`]: integers in `[min, max]`, resampling mutation
//! - [`RealChromosome`]: reals in `[min, max]`, bounded-step mutation
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaEngine`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result
//! - [`Selection`], [`CrossoverMethod`], [`Replacement`]: pluggable strategies
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod chromosome;
mod config;
pub mod operators;
mod replacement;
mod runner;
mod selection;
mod types;

pub use chromosome::{
    BinaryChromosome, BinaryDomain, IntegerChromosome, IntegerDomain, RealChromosome, RealDomain,
    Representation, REAL_MUTATION_SPAN,
};
pub use config::GaConfig;
pub use operators::CrossoverMethod;
pub use replacement::Replacement;
pub use runner::{GaEngine, GaEngineBuilder, GaResult};
pub use selection::Selection;
pub use types::{Chromosome, FitnessFunction, InfeasibilityHandler, Individual};

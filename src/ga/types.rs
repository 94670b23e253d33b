//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`Chromosome`] define what the engine can do with a
//! candidate solution. [`FitnessFunction`] and [`InfeasibilityHandler`] are
//! the two seams through which callers plug in their problem.

use super::chromosome::Representation;
use super::operators::CrossoverMethod;
use rand::Rng;
use std::fmt;

/// A candidate solution carrying a fitness score.
///
/// Fitness is assigned by the engine once per generation. Higher is better.
/// It is bookkeeping, not identity: two individuals with the same genes
/// compare equal whatever their fitness.
pub trait Individual {
    /// Returns the most recently assigned fitness.
    ///
    /// Freshly produced offspring report `f64::NEG_INFINITY` until evaluated.
    fn fitness(&self) -> f64;

    /// Stores a fitness score. Called by the engine after evaluation.
    fn set_fitness(&mut self, fitness: f64);
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A fixed-length gene sequence in one representation's domain.
///
/// Implemented by [`BinaryChromosome`](super::BinaryChromosome),
/// [`IntegerChromosome`](super::IntegerChromosome) and
/// [`RealChromosome`](super::RealChromosome). The set is closed.
///
/// `Clone` is the deep copy: a clone shares nothing with its source.
///
/// # Crossover typing
///
/// [`crossover`](Chromosome::crossover) takes its peer as `&Self`, so
/// recombining an integer chromosome with a real one does not compile.
pub trait Chromosome:
    Individual + Clone + PartialEq + fmt::Debug + fmt::Display + sealed::Sealed
{
    /// The value type of a single gene.
    type Gene: Copy + PartialEq + fmt::Debug;

    /// Domain parameters shared by every chromosome of a population.
    type Domain: Clone + PartialEq + fmt::Debug;

    /// Which representation this type is.
    const REPRESENTATION: Representation;

    /// Creates a chromosome of `length` genes drawn uniformly from `domain`.
    fn random<R: Rng>(length: usize, domain: &Self::Domain, rng: &mut R) -> Self;

    /// The gene sequence.
    fn genes(&self) -> &[Self::Gene];

    /// The domain every gene lies in.
    fn domain(&self) -> &Self::Domain;

    /// Number of genes. Fixed at creation.
    fn len(&self) -> usize {
        self.genes().len()
    }

    fn is_empty(&self) -> bool {
        self.genes().is_empty()
    }

    /// Perturbs each gene independently with probability `mutation_rate`.
    fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R);

    /// Recombines `self` and `other` into two offspring.
    ///
    /// With probability `crossover_rate` the genes are recombined using
    /// `method`; otherwise the offspring are copies of `self` and `other`,
    /// in that order. Offspring are unevaluated.
    ///
    /// # Panics
    /// Panics if the parents differ in length or domain.
    fn crossover<R: Rng>(
        &self,
        other: &Self,
        method: CrossoverMethod,
        crossover_rate: f64,
        rng: &mut R,
    ) -> (Self, Self);
}

/// Scores a chromosome. Higher is better; no sign convention is imposed.
///
/// Implemented for every `Fn(&C) -> f64`.
pub trait FitnessFunction<C> {
    fn evaluate(&self, chromosome: &C) -> f64;
}

impl<C, F> FitnessFunction<C> for F
where
    F: Fn(&C) -> f64,
{
    fn evaluate(&self, chromosome: &C) -> f64 {
        self(chromosome)
    }
}

/// Repairs an offspring so that it satisfies domain constraints.
///
/// The handler receives ownership of a freshly mutated offspring and returns
/// its replacement. The replacement must keep the gene count and the domain;
/// the engine rejects anything else with
/// [`GaError::InvalidRepair`](crate::error::GaError::InvalidRepair) or
/// [`GaError::RepairDomainMismatch`](crate::error::GaError::RepairDomainMismatch).
///
/// Implemented for every `Fn(C) -> C`.
pub trait InfeasibilityHandler<C> {
    fn handle(&self, chromosome: C) -> C;
}

impl<C, F> InfeasibilityHandler<C> for F
where
    F: Fn(C) -> C,
{
    fn handle(&self, chromosome: C) -> C {
        self(chromosome)
    }
}

//! Binary, integer and real chromosomes.
//!
//! Each representation owns its gene vector, its domain and its fitness.
//! Gene values can only be set through checked constructors and setters, so
//! every chromosome stays inside its domain for its whole lifetime.

use super::operators::{mutate_each, CrossoverMethod};
use super::types::{sealed, Chromosome, Individual};
use crate::error::{ConfigError, GaError, Result};
use rand::Rng;
use std::fmt;

/// Relative width of the real-valued mutation step: offsets are drawn from
/// `±REAL_MUTATION_SPAN · (max - min)`.
pub const REAL_MUTATION_SPAN: f64 = 0.05;

/// The kind of gene encoding a chromosome type uses.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Binary,
    Integer,
    Real,
}

// ============================================================================
// Domains
// ============================================================================

/// Domain of a binary chromosome. Every `bool` is valid.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryDomain;

/// Inclusive integer range `[min, max]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerDomain {
    min: i64,
    max: i64,
}

impl IntegerDomain {
    /// Creates a domain, rejecting `min > max`.
    pub fn new(min: i64, max: i64) -> std::result::Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedIntegerBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for IntegerDomain {
    /// `[0, 10]`.
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}

/// Closed real range `[min, max]`.
///
/// Random initialization samples `[min, max)`; mutation clamps into
/// `[min, max]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealDomain {
    min: f64,
    max: f64,
}

impl RealDomain {
    /// Creates a domain, rejecting non-finite bounds and `min > max`.
    pub fn new(min: f64, max: f64) -> std::result::Result<Self, ConfigError> {
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(ConfigError::NonFiniteBounds { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for RealDomain {
    /// `[0.0, 10.0]`.
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
        }
    }
}

// ============================================================================
// Binary
// ============================================================================

/// Chromosome of boolean genes.
///
/// Mutation flips a bit.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct BinaryChromosome {
    genes: Vec<bool>,
    domain: BinaryDomain,
    fitness: f64,
}

impl BinaryChromosome {
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self {
            genes,
            domain: BinaryDomain,
            fitness: f64::NEG_INFINITY,
        }
    }

    pub fn gene(&self, index: usize) -> Option<bool> {
        self.genes.get(index).copied()
    }

    pub fn set_gene(&mut self, index: usize, value: bool) -> Result<()> {
        let len = self.genes.len();
        let slot = self
            .genes
            .get_mut(index)
            .ok_or(GaError::GeneIndex { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Number of `true` genes.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    fn offspring(&self, genes: Vec<bool>) -> Self {
        Self::from_genes(genes)
    }
}

impl PartialEq for BinaryChromosome {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

impl Individual for BinaryChromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl sealed::Sealed for BinaryChromosome {}

impl Chromosome for BinaryChromosome {
    type Gene = bool;
    type Domain = BinaryDomain;
    const REPRESENTATION: Representation = Representation::Binary;

    fn random<R: Rng>(length: usize, _domain: &BinaryDomain, rng: &mut R) -> Self {
        Self::from_genes((0..length).map(|_| rng.random_bool(0.5)).collect())
    }

    fn genes(&self) -> &[bool] {
        &self.genes
    }

    fn domain(&self) -> &BinaryDomain {
        &self.domain
    }

    fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) {
        mutate_each(&mut self.genes, mutation_rate, rng, |g, _| *g = !*g);
    }

    fn crossover<R: Rng>(
        &self,
        other: &Self,
        method: CrossoverMethod,
        crossover_rate: f64,
        rng: &mut R,
    ) -> (Self, Self) {
        let (a, b) = method.recombine(&self.genes, &other.genes, crossover_rate, rng);
        (self.offspring(a), self.offspring(b))
    }
}

impl fmt::Display for BinaryChromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}

// ============================================================================
// Integer
// ============================================================================

/// Chromosome of integer genes in an inclusive range.
///
/// Mutation resamples a gene uniformly from the domain.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct IntegerChromosome {
    genes: Vec<i64>,
    domain: IntegerDomain,
    fitness: f64,
}

impl IntegerChromosome {
    /// Builds a chromosome from explicit genes.
    ///
    /// Fails with [`GaError::GeneOutOfDomain`] naming the first offending
    /// gene.
    pub fn from_genes(genes: Vec<i64>, domain: IntegerDomain) -> Result<Self> {
        if let Some(index) = genes.iter().position(|&g| !domain.contains(g)) {
            return Err(GaError::GeneOutOfDomain { index });
        }
        Ok(Self {
            genes,
            domain,
            fitness: f64::NEG_INFINITY,
        })
    }

    pub fn gene(&self, index: usize) -> Option<i64> {
        self.genes.get(index).copied()
    }

    pub fn set_gene(&mut self, index: usize, value: i64) -> Result<()> {
        let len = self.genes.len();
        if index >= len {
            return Err(GaError::GeneIndex { index, len });
        }
        if !self.domain.contains(value) {
            return Err(GaError::GeneOutOfDomain { index });
        }
        self.genes[index] = value;
        Ok(())
    }

    fn offspring(&self, genes: Vec<i64>) -> Self {
        Self {
            genes,
            domain: self.domain,
            fitness: f64::NEG_INFINITY,
        }
    }
}

impl PartialEq for IntegerChromosome {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes && self.domain == other.domain
    }
}

impl Individual for IntegerChromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl sealed::Sealed for IntegerChromosome {}

impl Chromosome for IntegerChromosome {
    type Gene = i64;
    type Domain = IntegerDomain;
    const REPRESENTATION: Representation = Representation::Integer;

    fn random<R: Rng>(length: usize, domain: &IntegerDomain, rng: &mut R) -> Self {
        let genes = (0..length)
            .map(|_| rng.random_range(domain.min..=domain.max))
            .collect();
        Self {
            genes,
            domain: *domain,
            fitness: f64::NEG_INFINITY,
        }
    }

    fn genes(&self) -> &[i64] {
        &self.genes
    }

    fn domain(&self) -> &IntegerDomain {
        &self.domain
    }

    fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) {
        let IntegerDomain { min, max } = self.domain;
        mutate_each(&mut self.genes, mutation_rate, rng, |g, rng| {
            *g = rng.random_range(min..=max);
        });
    }

    fn crossover<R: Rng>(
        &self,
        other: &Self,
        method: CrossoverMethod,
        crossover_rate: f64,
        rng: &mut R,
    ) -> (Self, Self) {
        assert_eq!(self.domain, other.domain, "parents must share a domain");
        let (a, b) = method.recombine(&self.genes, &other.genes, crossover_rate, rng);
        (self.offspring(a), self.offspring(b))
    }
}

impl fmt::Display for IntegerChromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}

// ============================================================================
// Real
// ============================================================================

/// Chromosome of real genes in a closed range.
///
/// Mutation adds a uniform offset of at most 5% of the domain width and
/// clamps the result back into the domain.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct RealChromosome {
    genes: Vec<f64>,
    domain: RealDomain,
    fitness: f64,
}

impl RealChromosome {
    /// Builds a chromosome from explicit genes.
    ///
    /// Fails with [`GaError::GeneOutOfDomain`] naming the first gene that is
    /// outside the domain or NaN.
    pub fn from_genes(genes: Vec<f64>, domain: RealDomain) -> Result<Self> {
        if let Some(index) = genes.iter().position(|&g| !domain.contains(g)) {
            return Err(GaError::GeneOutOfDomain { index });
        }
        Ok(Self {
            genes,
            domain,
            fitness: f64::NEG_INFINITY,
        })
    }

    pub fn gene(&self, index: usize) -> Option<f64> {
        self.genes.get(index).copied()
    }

    pub fn set_gene(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.genes.len();
        if index >= len {
            return Err(GaError::GeneIndex { index, len });
        }
        if !self.domain.contains(value) {
            return Err(GaError::GeneOutOfDomain { index });
        }
        self.genes[index] = value;
        Ok(())
    }

    fn offspring(&self, genes: Vec<f64>) -> Self {
        Self {
            genes,
            domain: self.domain,
            fitness: f64::NEG_INFINITY,
        }
    }
}

impl PartialEq for RealChromosome {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes && self.domain == other.domain
    }
}

impl Individual for RealChromosome {
    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

impl sealed::Sealed for RealChromosome {}

impl Chromosome for RealChromosome {
    type Gene = f64;
    type Domain = RealDomain;
    const REPRESENTATION: Representation = Representation::Real;

    fn random<R: Rng>(length: usize, domain: &RealDomain, rng: &mut R) -> Self {
        let RealDomain { min, max } = *domain;
        let genes = (0..length)
            .map(|_| {
                if min < max {
                    rng.random_range(min..max)
                } else {
                    min
                }
            })
            .collect();
        Self {
            genes,
            domain: *domain,
            fitness: f64::NEG_INFINITY,
        }
    }

    fn genes(&self) -> &[f64] {
        &self.genes
    }

    fn domain(&self) -> &RealDomain {
        &self.domain
    }

    fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) {
        let RealDomain { min, max } = self.domain;
        let half = REAL_MUTATION_SPAN * (max - min);
        mutate_each(&mut self.genes, mutation_rate, rng, |g, rng| {
            let offset = rng.random_range(-half..=half);
            *g = (*g + offset).clamp(min, max);
        });
    }

    fn crossover<R: Rng>(
        &self,
        other: &Self,
        method: CrossoverMethod,
        crossover_rate: f64,
        rng: &mut R,
    ) -> (Self, Self) {
        assert_eq!(self.domain, other.domain, "parents must share a domain");
        let (a, b) = method.recombine(&self.genes, &other.genes, crossover_rate, rng);
        (self.offspring(a), self.offspring(b))
    }
}

impl fmt::Display for RealChromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, g) in self.genes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{g:.2}")?;
        }
        f.write_str("]")
    }
}
